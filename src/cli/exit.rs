//! Exit codes.

/// Result of one formatter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input parsed and was formatted.
    Formatted,
    /// The input did not parse; the documented fallback was printed.
    Fallback,
}

/// Output mode chosen by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Exit code for usage and I/O errors.
pub const EXIT_USAGE: u8 = 2;

/// Exit code for a given outcome. Both outcomes print to stdout.
pub fn exit_code(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Formatted => 0,
        Outcome::Fallback => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code(Outcome::Formatted), 0);
        assert_eq!(exit_code(Outcome::Fallback), 1);
        assert_eq!(EXIT_USAGE, 2);
    }
}
