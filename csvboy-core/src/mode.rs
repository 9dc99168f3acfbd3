// csvboy-core/src/mode.rs
//! Substitution modes and the per-character policy derived from them.
//!
//! A [`Mode`] is what the user selects. A [`Policy`] is built from it once per
//! run and answers, for a single offending character, what should stand in
//! its place.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CsvboyError;
use crate::table::INVALID_SEQUENCE;

/// Replacement used by [`Mode::Replace`] when none is configured.
pub const DEFAULT_REPLACEMENT: &str = "_";

/// The substitution policy selected for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Transliterate offending characters to their closest ASCII spelling.
    Ascii,
    /// Keep valid text as-is and drop characters that failed UTF-8 decoding.
    #[default]
    #[serde(alias = "utf-8")]
    Utf8,
    /// Replace offending characters with a fixed string.
    Replace,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Ascii => "ascii",
            Mode::Utf8 => "utf8",
            Mode::Replace => "replace",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CsvboyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Ok(Mode::Ascii),
            "utf8" | "utf-8" => Ok(Mode::Utf8),
            "replace" => Ok(Mode::Replace),
            _ => Err(CsvboyError::InvalidMode(s.to_string())),
        }
    }
}

/// What to do with an offending character, resolved once from a [`Mode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    Transliterate,
    DropInvalid,
    Replace(String),
}

impl Policy {
    pub fn new(mode: Mode, replacement: &str) -> Self {
        match mode {
            Mode::Ascii => Policy::Transliterate,
            Mode::Utf8 => Policy::DropInvalid,
            Mode::Replace => Policy::Replace(replacement.to_string()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Policy::Transliterate => Mode::Ascii,
            Policy::DropInvalid => Mode::Utf8,
            Policy::Replace(_) => Mode::Replace,
        }
    }

    /// Returns the text that replaces `ch`, or `None` if `ch` stays in place.
    ///
    /// An empty string deletes the character.
    pub fn substitute(&self, ch: char) -> Option<&str> {
        match self {
            Policy::Transliterate => Some(deunicode::deunicode_char(ch).unwrap_or("")),
            Policy::Replace(replacement) => Some(replacement.as_str()),
            Policy::DropInvalid => is_undecodable(ch).then_some(""),
        }
    }
}

/// The reader marks byte sequences that were not valid UTF-8 with
/// [`INVALID_SEQUENCE`], so that marker is the only character that fails
/// validation.
pub fn is_undecodable(ch: char) -> bool {
    ch == INVALID_SEQUENCE
}
