// File: csvboy-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers that run the whole read / sanitize / write sequence
//! in one call, for callers that do not need the individual phases.

use log::info;
use std::path::{Path, PathBuf};

use crate::config::SanitizeConfig;
use crate::paths::{resolve_output, OutputFallback};
use crate::sanitizer::Sanitizer;
use crate::summary::SanitizeSummary;
use crate::table::{parse_table, read_table, table_to_string, write_table_to_path};
use crate::errors::Result;

/// Result of sanitizing a file on disk.
#[derive(Debug, Clone)]
pub struct SanitizedFile {
    pub output_path: PathBuf,
    /// Set when the output went to a fallback directory.
    pub fallback: Option<OutputFallback>,
    pub summary: SanitizeSummary,
}

/// Reads `input`, sanitizes it and writes `<stem>_sanitized<.ext>`.
///
/// The output location is resolved before the input is read. The input file
/// is never written.
pub fn sanitize_file(input: &Path, config: &SanitizeConfig) -> Result<SanitizedFile> {
    config.validate()?;
    let target = resolve_output(input, config.out_dir.as_deref())?;

    let table = read_table(input)?;
    let (table, summary) = Sanitizer::from_config(config).sanitize(table);
    write_table_to_path(&target.path, &table, config.line_terminator)?;

    info!("Sanitized output written to {}", target.path.display());
    Ok(SanitizedFile {
        output_path: target.path,
        fallback: target.fallback,
        summary,
    })
}

/// Reads and analyzes `input` without writing anything.
pub fn scan_file(input: &Path, config: &SanitizeConfig) -> Result<SanitizeSummary> {
    config.validate()?;
    let table = read_table(input)?;
    Ok(Sanitizer::from_config(config).analyze(&table))
}

/// Sanitizes CSV text held in memory.
pub fn sanitize_str(content: &str, config: &SanitizeConfig) -> Result<(String, SanitizeSummary)> {
    config.validate()?;
    let table = parse_table(content.as_bytes())?;
    let (table, summary) = Sanitizer::from_config(config).sanitize(table);
    Ok((table_to_string(&table, config.line_terminator)?, summary))
}
