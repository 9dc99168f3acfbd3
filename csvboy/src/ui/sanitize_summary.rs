// csvboy/src/ui/sanitize_summary.rs
//! Renders a [`SanitizeSummary`] for the terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use csvboy_core::{CharFinding, SanitizeSummary};

/// Writes a human-readable summary of a run.
pub fn print_summary<W: Write>(summary: &SanitizeSummary, writer: &mut W, supports_color: bool) -> io::Result<()> {
    let header = "--- Sanitization Summary ---";
    if supports_color {
        writeln!(writer, "{}", header.yellow().bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    writeln!(
        writer,
        "Mode: {}  Rows: {}  Cells: {}  Cells changed: {}",
        summary.mode, summary.rows, summary.cells, summary.cells_changed
    )?;
    if summary.bom.any() {
        writeln!(writer, "Byte-order mark removed from: {}", bom_location(summary))?;
    }

    if summary.findings.is_empty() {
        writeln!(writer, "No non-portable characters found.")?;
    } else {
        for finding in &summary.findings {
            let label = format!("{} {}", finding.code_point, display_char(finding.character));
            let action = describe_action(finding);
            if supports_color {
                writeln!(writer, "  {} x{} {}", label.magenta(), finding.occurrences.cyan(), action)?;
            } else {
                writeln!(writer, "  {} x{} {}", label, finding.occurrences, action)?;
            }
        }
    }

    writeln!(writer, "{}", "-".repeat(header.len()))
}

fn bom_location(summary: &SanitizeSummary) -> &'static str {
    match (summary.bom.head, summary.bom.tail) {
        (true, true) => "first and last cell",
        (true, false) => "first cell",
        _ => "last cell",
    }
}

/// Control characters are shown escaped so they cannot garble the terminal.
fn display_char(ch: char) -> String {
    if ch == csvboy_core::INVALID_SEQUENCE {
        "(invalid UTF-8)".to_string()
    } else if ch.is_control() || ch == csvboy_core::BOM {
        format!("{:?}", ch)
    } else {
        format!("'{}'", ch)
    }
}

fn describe_action(finding: &CharFinding) -> String {
    match finding.substitution.as_deref() {
        None => "kept".to_string(),
        Some("") => "removed".to_string(),
        Some(text) => format!("-> {:?}", text),
    }
}
