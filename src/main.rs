use clap::Parser;
use std::process::ExitCode;

use svg2gds::{init_logging, run, Cli};

fn main() -> ExitCode {
    let args = Cli::parse().into_convert_args();

    if let Err(e) = init_logging() {
        eprintln!("warning: {e:#}");
    }

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
