#![forbid(unsafe_code)]

pub mod classes;
pub mod cli;
pub mod format;
pub mod normalize;
pub mod numeric;
pub mod orchestrator;
pub mod output;

pub use classes::merge::merge_classes;
pub use format::address::trim_address;
pub use format::currency::format_usd;
pub use format::number::{format_number, format_number_with};
pub use format::percent::{format_percent, format_percent_with};
pub use format::scale::format_scale;
pub use numeric::input::NumericInput;

/// Run the figures CLI. Returns exit code (0, 1, or 2).
pub fn run() -> Result<u8, Box<dyn std::error::Error>> {
    use std::io::{self, Write};

    let args = match cli::args::Args::parse() {
        Ok(args) => args,
        Err(err) => {
            err.print()?;
            return Ok(if err.use_stderr() {
                cli::exit::EXIT_USAGE
            } else {
                0
            });
        }
    };

    let result = orchestrator::run(&args)?;

    let mut stdout = io::stdout();
    stdout.write_all(result.output.as_bytes())?;
    stdout.flush()?;

    Ok(cli::exit::exit_code(result.outcome))
}
