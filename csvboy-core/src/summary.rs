// csvboy-core/src/summary.rs
//! Reporting structures describing what a sanitization run found and changed.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;
use std::collections::HashMap;

use crate::bom::BomReport;
use crate::errors::{CsvboyError, Result};
use crate::mode::Mode;

/// One distinct offending character and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharFinding {
    pub character: char,
    /// Code point in `U+XXXX` notation.
    pub code_point: String,
    pub occurrences: usize,
    /// The text written in its place, or `None` if it was kept.
    pub substitution: Option<String>,
}

impl CharFinding {
    fn new(character: char, substitution: Option<&str>) -> Self {
        Self {
            character,
            code_point: format!("U+{:04X}", character as u32),
            occurrences: 0,
            substitution: substitution.map(str::to_string),
        }
    }
}

/// Aggregate result of sanitizing (or scanning) one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizeSummary {
    pub mode: Mode,
    pub rows: usize,
    pub cells: usize,
    /// Cells whose text was changed by the character pass.
    pub cells_changed: usize,
    pub bom: BomReport,
    /// Findings in order of first appearance.
    pub findings: Vec<CharFinding>,
    #[serde(skip)]
    index: HashMap<char, usize>,
}

impl SanitizeSummary {
    pub fn new(mode: Mode, rows: usize, cells: usize, bom: BomReport) -> Self {
        Self {
            mode,
            rows,
            cells,
            cells_changed: 0,
            bom,
            findings: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Counts one occurrence of `ch`, replaced by `substitution`.
    pub fn record(&mut self, ch: char, substitution: Option<&str>) {
        let slot = match self.index.get(&ch) {
            Some(&slot) => slot,
            None => {
                self.findings.push(CharFinding::new(ch, substitution));
                self.index.insert(ch, self.findings.len() - 1);
                self.findings.len() - 1
            }
        };
        self.findings[slot].occurrences += 1;
    }

    pub fn finding(&self, ch: char) -> Option<&CharFinding> {
        self.index.get(&ch).map(|&slot| &self.findings[slot])
    }

    /// Total offending occurrences across all findings.
    pub fn total_occurrences(&self) -> usize {
        self.findings.iter().map(|f| f.occurrences).sum()
    }

    /// True when the output differs from the input.
    pub fn changed(&self) -> bool {
        self.cells_changed > 0 || self.bom.any()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CsvboyError::Serialization(e.to_string()))
    }
}
