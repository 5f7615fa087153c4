//! Mean, median and mode over a non-empty sequence of numbers.
//!
//! Every function takes a `verbose` flag. When set, the returned
//! [Computation] carries a [Trace] of intermediate values; the result is the
//! same either way.

mod mean;
mod median;
mod mode;
mod trace;

pub use mean::compute_mean;
pub use median::compute_median;
pub use mode::{compute_mode, Modality, Mode};
pub use trace::{format_list, Computation, Trace, TraceStep};
