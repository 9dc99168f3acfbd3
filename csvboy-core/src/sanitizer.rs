// csvboy-core/src/sanitizer.rs
//! The sanitization pipeline over an in-memory table.
//!
//! Each phase takes a [`Table`] by value and hands a new one to the next:
//! boundary BOM removal, then the per-row character rewrite. Reading and
//! writing files is left to [`crate::headless`].
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};

use crate::bom::strip_bom;
use crate::config::SanitizeConfig;
use crate::mode::{Mode, Policy};
use crate::rewriter::rewrite_table;
use crate::summary::SanitizeSummary;
use crate::table::Table;

/// Applies one [`Policy`] to whole tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitizer {
    policy: Policy,
}

impl Sanitizer {
    pub fn new(mode: Mode, replacement: &str) -> Self {
        Self {
            policy: Policy::new(mode, replacement),
        }
    }

    pub fn from_config(config: &SanitizeConfig) -> Self {
        Self {
            policy: config.policy(),
        }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn mode(&self) -> Mode {
        self.policy.mode()
    }

    /// Strips boundary BOMs and rewrites offending characters.
    ///
    /// The returned table has exactly as many rows as `table`, and each row
    /// as many cells as before.
    pub fn sanitize(&self, table: Table) -> (Table, SanitizeSummary) {
        let rows = table.len();
        let cells = table.cell_count();
        debug!("Sanitizing {} rows / {} cells in {} mode.", rows, cells, self.mode());

        let (table, bom) = strip_bom(table);
        let mut summary = SanitizeSummary::new(self.mode(), rows, cells, bom);
        let table = rewrite_table(table, &self.policy, &mut summary);

        info!(
            "Sanitization finished: {} distinct offending characters, {} cells changed.",
            summary.findings.len(),
            summary.cells_changed
        );
        (table, summary)
    }

    /// Reports what [`Sanitizer::sanitize`] would do without keeping its output.
    pub fn analyze(&self, table: &Table) -> SanitizeSummary {
        self.sanitize(table.clone()).1
    }
}
