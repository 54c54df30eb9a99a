// JSON output schema assembly

use serde::Serialize;

use crate::cli::exit::Outcome;
use crate::orchestrator::Formatted;

pub const SCHEMA_VERSION: &str = "figures.v0";

#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    pub version: &'static str,
    pub operation: &'static str,
    pub input: Option<&'a str>,
    pub output: &'a str,
    pub valid: bool,
}

impl<'a> JsonOutput<'a> {
    pub fn new(formatted: &'a Formatted) -> Self {
        Self {
            version: SCHEMA_VERSION,
            operation: formatted.operation,
            input: formatted.input.as_deref(),
            output: &formatted.output,
            valid: formatted.outcome == Outcome::Formatted,
        }
    }
}

/// Render a single JSON object followed by a newline.
pub fn render_json(formatted: &Formatted) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string(&JsonOutput::new(formatted))?;
    out.push('\n');
    Ok(out)
}
