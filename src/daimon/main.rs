//! # Daimon CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and turns its outcome into an exit code.
//! Everything it calls into is documented in the library crate.

mod cli;

use daimon::error::DaimonError;

fn main() {
    if let Err(e) = cli::run() {
        match e {
            // clap has already rendered a complete usage message
            DaimonError::Argument(usage) => eprint!("{}", usage),
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}
