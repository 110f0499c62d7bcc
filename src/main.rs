//! madlab CLI entry point
//!
//! Parses arguments, dispatches to the command, prints errors to stderr and
//! exits with the error's status. All logic lives in the `cli` module.

use madlab::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("madlab: {}", e);
        std::process::exit(e.exit_code());
    }
}
