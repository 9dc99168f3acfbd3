// csvboy-core/src/paths.rs
//! Output location resolution.
//!
//! The output directory is the requested one if it exists, else the input
//! file's directory if that exists, else a fallback in the user's home (the
//! desktop directory, then the home directory itself). Falling back is not an
//! error; it is reported through [`OutputFallback`] so the caller can tell
//! the user.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::{CsvboyError, Result};

/// Suffix inserted between the input file's stem and its extension.
pub const SANITIZED_SUFFIX: &str = "_sanitized";

/// Why the output did not land where it was expected to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFallback {
    /// The directory passed by the caller does not exist.
    RequestedDirMissing { requested: PathBuf, used: PathBuf },
    /// The input file's directory does not exist.
    InputDirMissing { input_dir: PathBuf, used: PathBuf },
}

impl fmt::Display for OutputFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFallback::RequestedDirMissing { requested, used } => write!(
                f,
                "output directory '{}' does not exist, writing to '{}' instead",
                requested.display(),
                used.display()
            ),
            OutputFallback::InputDirMissing { input_dir, used } => write!(
                f,
                "input directory '{}' is not usable, writing to '{}' instead",
                input_dir.display(),
                used.display()
            ),
        }
    }
}

/// Where the sanitized file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub path: PathBuf,
    pub fallback: Option<OutputFallback>,
}

/// `data.csv` -> `data_sanitized.csv`; `archive.tar.gz` -> `archive.tar_sanitized.gz`.
pub fn sanitized_file_name(input: &Path) -> Result<OsString> {
    let stem = input
        .file_stem()
        .ok_or_else(|| CsvboyError::InvalidInputPath(input.to_path_buf()))?;

    let mut name = stem.to_os_string();
    name.push(SANITIZED_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    Ok(name)
}

/// The directory containing `input`; `.` when the path has no directory part.
pub fn input_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// The well-known user directory used when nothing better is available.
pub fn fallback_dir() -> Option<PathBuf> {
    dirs::desktop_dir()
        .filter(|d| d.is_dir())
        .or_else(|| dirs::home_dir().filter(|d| d.is_dir()))
}

/// Resolves the output directory using the user's fallback directory.
pub fn resolve_output_dir(input: &Path, requested: Option<&Path>) -> Result<(PathBuf, Option<OutputFallback>)> {
    resolve_output_dir_with(input, requested, fallback_dir)
}

/// Resolves the output directory, asking `fallback` only when needed.
pub fn resolve_output_dir_with<F>(
    input: &Path,
    requested: Option<&Path>,
    fallback: F,
) -> Result<(PathBuf, Option<OutputFallback>)>
where
    F: FnOnce() -> Option<PathBuf>,
{
    let (candidate, from_request) = match requested {
        Some(dir) => (dir.to_path_buf(), true),
        None => (input_dir(input), false),
    };

    if candidate.is_dir() {
        debug!("Output directory: {}", candidate.display());
        return Ok((candidate, None));
    }

    let used = fallback().ok_or_else(|| CsvboyError::OutputDirectoryUnavailable(candidate.clone()))?;
    let reason = if from_request {
        OutputFallback::RequestedDirMissing { requested: candidate, used: used.clone() }
    } else {
        OutputFallback::InputDirMissing { input_dir: candidate, used: used.clone() }
    };
    warn!("{}", reason);
    Ok((used, Some(reason)))
}

/// Full output path for `input`.
pub fn resolve_output(input: &Path, requested: Option<&Path>) -> Result<OutputTarget> {
    let name = sanitized_file_name(input)?;
    let (dir, fallback) = resolve_output_dir(input, requested)?;
    Ok(OutputTarget { path: dir.join(name), fallback })
}
