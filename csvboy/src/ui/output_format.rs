// csvboy/src/ui/output_format.rs
//! Formatting helpers for user-facing status messages.
//!
//! Messages are colored only when the destination supports it; the caller
//! decides by passing `supports_color`.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Prints an informational message.
pub fn print_info_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", message.cyan())
    } else {
        writeln!(writer, "{}", message)
    }
}

/// Prints a success message.
pub fn print_success_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", message.green())
    } else {
        writeln!(writer, "{}", message)
    }
}

/// Prints a warning, prefixed with `Warning:`.
pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), message.yellow())
    } else {
        writeln!(writer, "Warning: {}", message)
    }
}
