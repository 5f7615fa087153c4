use std::io;
use std::process::ExitCode;

use clap::Parser;

use stats::cli::{execute, Cli};

fn main() -> ExitCode {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let status = execute(&cli, &mut io::stdout().lock(), &mut io::stderr().lock());
    status.into()
}
