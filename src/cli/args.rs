use clap::{Parser, Subcommand};

use crate::format::address::DEFAULT_PREFIX_LEN;
use crate::format::fixed::MAX_FRACTION_DIGITS;
use crate::format::number::{DEFAULT_MAX_PRECISION, DEFAULT_MIN_PRECISION};
use crate::format::percent::{DEFAULT_FALLBACK, DEFAULT_PRECISION};

/// CLI argument parsing & validation.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "figures",
    version,
    about = "Render numbers the way dashboards show them: grouped, in dollars, scaled, or as percentages."
)]
pub struct Args {
    /// Emit JSON output (single object).
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub operation: Operation,
}

/// One formatter invocation. A missing `VALUE` is formatted as a missing input.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Operation {
    /// Grouped decimal: 1234.5 -> 1,234.5
    Number {
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: Option<String>,

        /// Minimum fraction digits (0-100).
        #[arg(
            long,
            value_name = "N",
            default_value_t = DEFAULT_MIN_PRECISION,
            value_parser = parse_precision
        )]
        min: usize,

        /// Maximum fraction digits (0-100).
        #[arg(
            long,
            value_name = "N",
            default_value_t = DEFAULT_MAX_PRECISION,
            value_parser = parse_precision
        )]
        max: usize,
    },

    /// US dollars: 1234.5 -> $1,234.50
    Usd {
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Magnitude abbreviation: 123456 -> 123.5K
    Scale {
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: Option<String>,

        /// Prefix with a dollar sign.
        #[arg(long)]
        usd: bool,
    },

    /// Percentage: 0.1234 -> 0.12%
    Percent {
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: Option<String>,

        /// Fraction digits to round to (0-100).
        #[arg(
            long,
            value_name = "N",
            default_value_t = DEFAULT_PRECISION,
            value_parser = parse_precision
        )]
        precision: usize,

        /// Text printed for zero or invalid input.
        #[arg(
            long,
            value_name = "TEXT",
            default_value = DEFAULT_FALLBACK,
            allow_hyphen_values = true
        )]
        fallback: String,
    },

    /// Merge utility class lists, later classes winning.
    Classes {
        #[arg(value_name = "CLASS", allow_hyphen_values = true)]
        classes: Vec<String>,
    },

    /// Shorten a long address: 0x71C7656EC7ab88b0...976F -> 0x71C7656EC7...976F
    Address {
        #[arg(value_name = "ADDRESS")]
        address: String,

        /// Characters kept from the start.
        #[arg(long, value_name = "N", default_value_t = DEFAULT_PREFIX_LEN)]
        prefix: usize,
    },
}

impl Args {
    pub fn new(operation: Operation, json: bool) -> Self {
        Self { json, operation }
    }

    pub fn parse() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn parse_from_iter<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}

fn parse_precision(raw: &str) -> Result<usize, String> {
    let value = raw
        .parse::<usize>()
        .map_err(|_| "precision must be a whole number".to_string())?;
    if value > MAX_FRACTION_DIGITS {
        return Err(format!("precision must be <= {MAX_FRACTION_DIGITS}"));
    }
    Ok(value)
}
