//! CLI entry point of `scount`.

use std::process::ExitCode;

use clap::Parser;
use scount::app::{self, ExitStatus};
use scount::args::Args;
use scount::logging;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            return ExitStatus::InvalidArgument.into();
        }
    };
    logging::init(args.verbose);
    app::run(&args).into()
}
