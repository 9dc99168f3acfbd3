// csvboy-core/src/rewriter.rs
//! Mode-dependent rewrite of non-portable characters.
//!
//! Offending characters are collected for a whole row, and the substitution
//! for each one is applied to every cell of that row. Classification depends
//! only on the character value, so this row-wide broadcast produces the same
//! cells as a cell-by-cell rewrite would.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;

use crate::mode::Policy;
use crate::scanner::row_offenders;
use crate::summary::SanitizeSummary;
use crate::table::{Cell, Row, Table};

type Substitutions<'p> = HashMap<char, Option<&'p str>>;

/// Rewrites every row of `table` according to `policy`.
pub fn rewrite_table(table: Table, policy: &Policy, summary: &mut SanitizeSummary) -> Table {
    table
        .into_rows()
        .into_iter()
        .map(|row| rewrite_row(row, policy, summary))
        .collect::<Vec<_>>()
        .into()
}

/// Rewrites one row. The returned row always has the same number of cells.
pub fn rewrite_row(row: Row, policy: &Policy, summary: &mut SanitizeSummary) -> Row {
    let offenders = row_offenders(&row);
    if offenders.is_empty() {
        return row;
    }

    let substitutions: Substitutions<'_> = offenders
        .into_iter()
        .map(|ch| (ch, policy.substitute(ch)))
        .collect();

    row.into_iter()
        .map(|cell| rewrite_cell(cell, &substitutions, summary))
        .collect()
}

fn rewrite_cell(cell: Cell, substitutions: &Substitutions<'_>, summary: &mut SanitizeSummary) -> Cell {
    if !cell.chars().any(|c| substitutions.contains_key(&c)) {
        return cell;
    }

    let mut out = String::with_capacity(cell.len());
    for ch in cell.chars() {
        match substitutions.get(&ch) {
            Some(&substitution) => {
                summary.record(ch, substitution);
                match substitution {
                    Some(text) => out.push_str(text),
                    None => out.push(ch),
                }
            }
            None => out.push(ch),
        }
    }

    if out != cell {
        summary.cells_changed += 1;
    }
    out
}
