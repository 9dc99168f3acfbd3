// csvboy-core/src/lib.rs
//! # csvboy Core Library
//!
//! `csvboy-core` provides the platform-independent logic for sanitizing CSV
//! exports before they reach strict downstream parsers. It reads a table of
//! cells, removes a byte-order mark at the file boundaries, and rewrites every
//! character outside the portable printable-ASCII set according to a
//! [`Mode`]:
//!
//! * `ascii`: transliterate to the closest ASCII spelling (`é` -> `e`).
//! * `replace`: substitute a fixed string (default `_`).
//! * `utf8`: keep valid text, drop characters that were not valid UTF-8 in
//!   the source.
//!
//! ## Modules
//!
//! * `table`: the in-memory `Table` and the CSV reader/writer.
//! * `scanner`: classification of portable characters.
//! * `bom`: byte-order-mark removal at the head and tail cells.
//! * `mode`: the `Mode` enum and the per-character `Policy` built from it.
//! * `rewriter`: the row-wide substitution pass.
//! * `sanitizer`: the `Sanitizer` tying the phases together.
//! * `summary`: reporting of what was found and changed.
//! * `config`: `SanitizeConfig`, loadable from YAML.
//! * `paths`: output directory and file name resolution.
//! * `headless`: one-call helpers for files and strings.
//!
//! ## Usage Example
//!
//! ```rust
//! use csvboy_core::{sanitize_str, Mode, SanitizeConfig};
//!
//! let config = SanitizeConfig::new(Mode::Ascii);
//! let (output, summary) = sanitize_str("\u{FEFF}name\nJosé\n", &config).unwrap();
//! assert_eq!(output, "name\nJose\n");
//! assert_eq!(summary.cells_changed, 1);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`CsvboyError`]. A missing output directory is
//! not an error as long as a fallback directory exists; it is reported
//! through [`OutputFallback`] instead.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod bom;
pub mod config;
pub mod errors;
pub mod headless;
pub mod mode;
pub mod paths;
pub mod rewriter;
pub mod sanitizer;
pub mod scanner;
pub mod summary;
pub mod table;

pub use bom::{strip_bom, BomReport, BOM};
pub use config::SanitizeConfig;
pub use errors::{CsvboyError, Result};
pub use headless::{sanitize_file, sanitize_str, scan_file, SanitizedFile};
pub use mode::{Mode, Policy, DEFAULT_REPLACEMENT};
pub use paths::{resolve_output, sanitized_file_name, OutputFallback, OutputTarget};
pub use rewriter::{rewrite_row, rewrite_table};
pub use sanitizer::Sanitizer;
pub use scanner::{is_portable, offending_chars, row_offenders};
pub use summary::{CharFinding, SanitizeSummary};
pub use table::{parse_table, read_table, write_table, LineTerminator, Row, Table, INVALID_SEQUENCE};
