//! docgate entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments (via cli::run)
//! 2. Dispatches to the selected command
//! 3. Prints errors to stderr
//! 4. Exits with non-zero on failure
//!
//! All startup logic lives in the cli module.

use docgate::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
