//! Provides the main entry point to the program.
use ::log::error;
use human_panic::{metadata, setup_panic};
use seaborne::cli::run_cli;
use seaborne::log::is_logger_initialised;

fn main() {
    setup_panic!(metadata!().support("Open an issue with the backtrace and the dataset you used."));

    if let Err(err) = run_cli() {
        if is_logger_initialised() {
            error!("{err:?}");
        } else {
            eprintln!("Error: {err:?}");
        }

        // Terminate program, signalling an error
        std::process::exit(1);
    }
}
