//! errors.rs - Custom error types for the csvboy-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `csvboy-core` library.
///
/// Marked `#[non_exhaustive]` so new failure kinds can be added without
/// breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CsvboyError {
    #[error("Input file '{}' does not exist or is unreadable: {source}", .path.display())]
    MissingInputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input path '{}' does not name a file", .0.display())]
    InvalidInputPath(PathBuf),

    #[error("No usable output directory: '{}' is unavailable and no fallback directory exists", .0.display())]
    OutputDirectoryUnavailable(PathBuf),

    #[error("Invalid mode '{0}': expected one of ascii, utf8, replace")]
    InvalidMode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to serialize sanitization summary: {0}")]
    Serialization(String),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, CsvboyError>;
