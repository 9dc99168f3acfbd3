// csvboy-core/src/bom.rs
//! Byte-order-mark removal at the table boundaries.
//!
//! Only two cells are inspected: the first cell of the first row (head) and
//! the last cell of the last row (tail). For a single-row table both checks
//! run against the same row; for a single-cell table, against the same cell.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::Serialize;

use crate::table::{Cell, Table};

/// The zero-width no-break space used as a UTF-8 byte-order mark.
pub const BOM: char = '\u{FEFF}';

/// Which boundary cells had a byte-order mark removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BomReport {
    pub head: bool,
    pub tail: bool,
}

impl BomReport {
    pub fn any(&self) -> bool {
        self.head || self.tail
    }
}

/// Removes every BOM from the head cell and the tail cell of `table`.
pub fn strip_bom(table: Table) -> (Table, BomReport) {
    let mut rows = table.into_rows();

    let head = rows
        .first_mut()
        .and_then(|row| row.first_mut())
        .is_some_and(strip_cell);
    let tail = rows
        .last_mut()
        .and_then(|row| row.last_mut())
        .is_some_and(strip_cell);

    if head || tail {
        debug!("Stripped byte-order mark (head: {}, tail: {}).", head, tail);
    }
    (Table::new(rows), BomReport { head, tail })
}

fn strip_cell(cell: &mut Cell) -> bool {
    if !cell.contains(BOM) {
        return false;
    }
    cell.retain(|c| c != BOM);
    true
}
