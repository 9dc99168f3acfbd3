// csvboy/src/cli.rs
//! This file defines the command-line interface (CLI) for the csvboy application.
//! License: MIT OR Apache-2.0

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use csvboy_core::Mode;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "csvboy",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip byte-order marks and non-portable characters from a CSV file",
    long_about = "csvboy reads a CSV file, removes any UTF-8 byte-order mark at the start or end of the data, and rewrites characters outside printable ASCII. The result is written to a new '<name>_sanitized<.ext>' file; the input is never modified.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Path to the CSV file to sanitize.
    #[arg(long = "dataPath", short = 'd', visible_alias = "data-path", value_name = "FILE")]
    pub data_path: PathBuf,

    /// Text written in place of offending characters in `replace` mode.
    #[arg(
        long = "replacementCharacter",
        short = 'r',
        visible_alias = "replacement-character",
        value_name = "STRING",
        help = "Replacement for offending characters in 'replace' mode [default: _]"
    )]
    pub replacement_character: Option<String>,

    /// Directory for the sanitized file (defaults to the input's directory).
    #[arg(long = "outPath", short = 'o', visible_alias = "out-path", value_name = "DIR")]
    pub out_path: Option<PathBuf>,

    /// How offending characters are handled.
    #[arg(long, short = 'm', value_enum, help = "Substitution mode [default: utf8]")]
    pub mode: Option<ModeChoice>,

    /// Path to a YAML settings file.
    #[arg(long = "config", value_name = "FILE", env = "CSVBOY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Terminate output rows with CRLF instead of LF.
    #[arg(long)]
    pub crlf: bool,

    /// Report what would change without writing the sanitized file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write the sanitization summary as JSON to this file.
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Do not print the sanitization summary.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Suppress informational messages and logging.
    #[arg(long, short = 'q', conflicts_with = "debug")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// Command-line names for [`Mode`].
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ModeChoice {
    /// Transliterate to the closest ASCII spelling.
    Ascii,
    /// Keep valid text; drop bytes that were not valid UTF-8.
    #[value(alias = "utf-8")]
    Utf8,
    /// Replace with the replacement string.
    Replace,
}

impl From<ModeChoice> for Mode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Ascii => Mode::Ascii,
            ModeChoice::Utf8 => Mode::Utf8,
            ModeChoice::Replace => Mode::Replace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from(["csvboy", "-d", "in.csv", "-m", "replace", "-r", "#", "-o", "out"]).unwrap();
        assert_eq!(cli.data_path, PathBuf::from("in.csv"));
        assert_eq!(cli.mode, Some(ModeChoice::Replace));
        assert_eq!(cli.replacement_character.as_deref(), Some("#"));
        assert_eq!(cli.out_path, Some(PathBuf::from("out")));
    }

    #[test]
    fn camel_case_and_kebab_case_long_flags() {
        let camel = Cli::try_parse_from(["csvboy", "--dataPath", "a.csv", "--outPath", "o"]).unwrap();
        let kebab = Cli::try_parse_from(["csvboy", "--data-path", "a.csv", "--out-path", "o"]).unwrap();
        assert_eq!(camel.data_path, kebab.data_path);
        assert_eq!(camel.out_path, kebab.out_path);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["csvboy", "-d", "a.csv", "-m", "latin1"]).is_err());
    }

    #[test]
    fn data_path_is_required() {
        assert!(Cli::try_parse_from(["csvboy", "-m", "ascii"]).is_err());
    }

    #[test]
    fn utf_dash_8_alias() {
        let cli = Cli::try_parse_from(["csvboy", "-d", "a.csv", "--mode", "utf-8"]).unwrap();
        assert_eq!(cli.mode.map(Mode::from), Some(Mode::Utf8));
    }
}
