use crate::orchestrator::Formatted;

/// Human output is the formatted text on its own line.
pub fn render_human(formatted: &Formatted) -> String {
    let mut out = String::with_capacity(formatted.output.len() + 1);
    out.push_str(&formatted.output);
    out.push('\n');
    out
}
