//! Help listing rendering, separate from printing so callers and tests
//! can work with the text directly.

use crate::parser::ArgDef;

/// Render the listing: one row per definition in registration order, with
/// the space-joined aliases, description, default (or `<none>`), and a
/// required/optional marker.
pub(crate) fn render(program_name: &str, defs: &[ArgDef]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Usage: {program_name} [options]\n"));
    out.push_str("\nOptions:\n");

    let rows: Vec<(String, String)> = defs
        .iter()
        .map(|def| (def.aliases.join(" "), format_row_help(def)))
        .collect();
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    for (left, help) in rows {
        out.push_str(&format!("  {left:width$}  {help}\n"));
    }
    out
}

fn format_row_help(def: &ArgDef) -> String {
    let default = if def.default_text.is_empty() {
        "<none>"
    } else {
        def.default_text.as_str()
    };
    let marker = if def.satisfied.is_some() {
        "<required>"
    } else {
        "<optional>"
    };
    if def.description.is_empty() {
        format!("[default: {default}] {marker}")
    } else {
        format!("{} [default: {default}] {marker}", def.description.trim())
    }
}
