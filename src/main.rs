#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    match figures::run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("figures: {e}");
            ExitCode::from(figures::cli::exit::EXIT_USAGE)
        }
    }
}
