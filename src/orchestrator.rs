//! Operation dispatch: args → formatter → rendered output.

use std::error::Error;

use crate::classes::merge::merge_classes;
use crate::cli::args::{Args, Operation};
use crate::cli::exit::{Outcome, OutputMode};
use crate::format::address::trim_address;
use crate::format::currency::format_usd;
use crate::format::number::format_number_with;
use crate::format::percent::format_percent_with;
use crate::format::scale::format_scale;
use crate::numeric::input::NumericInput;
use crate::output::human::render_human;
use crate::output::json::render_json;

/// One formatted value together with what produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub operation: &'static str,
    pub input: Option<String>,
    pub output: String,
    pub outcome: Outcome,
}

pub struct PipelineResult {
    pub outcome: Outcome,
    pub output: String,
}

/// Format and render for the requested output mode.
pub fn run(args: &Args) -> Result<PipelineResult, Box<dyn Error>> {
    let formatted = format(&args.operation);
    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let output = match mode {
        OutputMode::Human => render_human(&formatted),
        OutputMode::Json => render_json(&formatted)?,
    };
    Ok(PipelineResult {
        outcome: formatted.outcome,
        output,
    })
}

/// Run the formatter an operation names.
pub fn format(operation: &Operation) -> Formatted {
    match operation {
        Operation::Number { value, min, max } => numeric(
            "number",
            value,
            format_number_with(value.as_deref(), *min, *max),
        ),
        Operation::Usd { value } => numeric("usd", value, format_usd(value.as_deref())),
        Operation::Scale { value, usd } => {
            numeric("scale", value, format_scale(value.as_deref(), *usd))
        }
        Operation::Percent {
            value,
            precision,
            fallback,
        } => numeric(
            "percent",
            value,
            format_percent_with(value.as_deref(), *precision, fallback),
        ),
        Operation::Classes { classes } => Formatted {
            operation: "classes",
            input: Some(classes.join(" ")),
            output: merge_classes(classes),
            outcome: Outcome::Formatted,
        },
        Operation::Address { address, prefix } => Formatted {
            operation: "address",
            input: Some(address.clone()),
            output: trim_address(address, *prefix),
            outcome: Outcome::Formatted,
        },
    }
}

fn numeric(operation: &'static str, value: &Option<String>, output: String) -> Formatted {
    let outcome = match NumericInput::from(value.as_deref()).parse() {
        Some(_) => Outcome::Formatted,
        None => Outcome::Fallback,
    };
    Formatted {
        operation,
        input: value.clone(),
        output,
        outcome,
    }
}
