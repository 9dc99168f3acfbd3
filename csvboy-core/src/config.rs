//! Configuration management for `csvboy-core`.
//!
//! A [`SanitizeConfig`] carries everything a run needs besides the input
//! path. It can be built in code, loaded from a YAML file, and then
//! overridden field by field from the command line.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{CsvboyError, Result};
use crate::mode::{Mode, Policy, DEFAULT_REPLACEMENT};
use crate::scanner::offending_chars;
use crate::table::LineTerminator;

/// Settings for one sanitization run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SanitizeConfig {
    /// Substitution policy.
    pub mode: Mode,
    /// Text written in place of offending characters in `replace` mode.
    pub replacement: String,
    /// Output directory. Defaults to the input file's directory.
    pub out_dir: Option<PathBuf>,
    /// Row terminator for the output file.
    pub line_terminator: LineTerminator,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
            out_dir: None,
            line_terminator: LineTerminator::default(),
        }
    }
}

impl SanitizeConfig {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }

    /// Loads settings from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading settings from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)
            .map_err(|e| CsvboyError::Config(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded settings: {:?}", config);
        Ok(config)
    }

    /// Parses settings from a YAML document and validates them.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: SanitizeConfig =
            serde_yml::from_str(text).map_err(|e| CsvboyError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the settings for problems.
    ///
    /// A replacement containing non-portable characters is allowed but
    /// reported: a second run over the output would rewrite it again.
    pub fn validate(&self) -> Result<()> {
        if self.mode == Mode::Replace {
            let offenders = offending_chars(&self.replacement);
            if !offenders.is_empty() {
                warn!(
                    "Replacement {:?} contains non-portable characters {:?}; output will not be stable under re-sanitization.",
                    self.replacement, offenders
                );
            }
        }
        if let Some(dir) = &self.out_dir {
            if dir.as_os_str().is_empty() {
                return Err(CsvboyError::Config("`out_dir` must not be empty".to_string()));
            }
        }
        Ok(())
    }

    /// Resolves the per-character policy for this run.
    pub fn policy(&self) -> Policy {
        Policy::new(self.mode, &self.replacement)
    }
}
