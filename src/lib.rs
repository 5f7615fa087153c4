//! Mean, median and mode calculator.
//!
//! The [engine] works on validated input from [input::NumberList] and hands
//! back a result plus an optional trace; [report] turns that into text or
//! JSON and [cli] wires both to the command line.

pub mod cli;
pub mod engine;
pub mod error;
pub mod input;
pub mod report;
