use std::process::ExitCode;

use bialert_app::report::report;
use bialert_app::{logging, run};

fn main() -> ExitCode {
    let log = match logging::init() {
        Ok(log) => log,
        Err(err) => {
            eprintln!("failed to initialize logging: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Starting BiAlert manager");

    match run(&log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}
