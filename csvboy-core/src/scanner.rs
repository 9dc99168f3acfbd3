// csvboy-core/src/scanner.rs
//! Detection of characters outside the portable printable set.
//!
//! License: MIT OR APACHE 2.0

/// Returns `true` for printable 7-bit ASCII (`' '..='~'`) and the ASCII
/// whitespace controls `\t`, `\n`, `\r`, `\x0B` and `\x0C`.
pub fn is_portable(ch: char) -> bool {
    matches!(ch, ' '..='~' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Distinct non-portable characters in `cell`, in order of first appearance.
pub fn offending_chars(cell: &str) -> Vec<char> {
    let mut found = Vec::new();
    collect_offenders(cell, &mut found);
    found
}

/// Distinct non-portable characters across every cell of `row`, in order of
/// first appearance.
pub fn row_offenders<S: AsRef<str>>(row: &[S]) -> Vec<char> {
    let mut found = Vec::new();
    for cell in row {
        collect_offenders(cell.as_ref(), &mut found);
    }
    found
}

fn collect_offenders(cell: &str, found: &mut Vec<char>) {
    for ch in cell.chars().filter(|&c| !is_portable(c)) {
        if !found.contains(&ch) {
            found.push(ch);
        }
    }
}
