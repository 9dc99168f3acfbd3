//! Sanitize command implementation: builds the run configuration, drives the
//! core pipeline and reports the outcome.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csvboy_core::{
    sanitize_file, scan_file, LineTerminator, Mode, SanitizeConfig, SanitizeSummary,
};

use crate::cli::Cli;
use crate::ui::output_format;
use crate::ui::sanitize_summary;

/// Options for the ergonomic `run_sanitize_opts` API.
#[derive(Debug, Clone)]
pub struct SanitizeOptions {
    pub input: PathBuf,
    pub config: SanitizeConfig,
    pub dry_run: bool,
    pub report: Option<PathBuf>,
    pub no_summary: bool,
    pub quiet: bool,
}

impl SanitizeOptions {
    /// Merges the settings file (if any) with command-line flags.
    /// Flags win over the file; the file wins over built-in defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => SanitizeConfig::load_from_file(path)
                .with_context(|| format!("Failed to load settings from '{}'", path.display()))?,
            None => SanitizeConfig::default(),
        };

        if let Some(mode) = cli.mode {
            config.mode = Mode::from(mode);
        }
        if let Some(replacement) = &cli.replacement_character {
            config.replacement = replacement.clone();
        }
        if let Some(out_path) = &cli.out_path {
            config.out_dir = Some(out_path.clone());
        }
        if cli.crlf {
            config.line_terminator = LineTerminator::Crlf;
        }
        debug!("Effective settings: {:?}", config);

        Ok(Self {
            input: cli.data_path.clone(),
            config,
            dry_run: cli.dry_run,
            report: cli.report.clone(),
            no_summary: cli.no_summary,
            quiet: cli.quiet,
        })
    }
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// The main operation runner for the csvboy CLI.
pub fn run_sanitize_opts(opts: &SanitizeOptions) -> Result<()> {
    info!("Starting csvboy operation on {}.", opts.input.display());

    let summary = if opts.dry_run {
        let summary = scan_file(&opts.input, &opts.config)
            .with_context(|| format!("Failed to scan '{}'", opts.input.display()))?;
        if !opts.quiet {
            info_msg("Dry run: no file was written.");
        }
        summary
    } else {
        let result = sanitize_file(&opts.input, &opts.config)
            .with_context(|| format!("Failed to sanitize '{}'", opts.input.display()))?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let supports_color = stdout.is_terminal();
        if let Some(fallback) = &result.fallback {
            output_format::print_warn_message(&mut out, &fallback.to_string(), supports_color)?;
        }
        output_format::print_success_message(
            &mut out,
            &format!("check out the sanitized file at {}", result.output_path.display()),
            supports_color,
        )?;
        out.flush()?;
        result.summary
    };

    if let Some(report) = &opts.report {
        write_report(&summary, report)?;
    }
    handle_summary(&summary, opts)?;

    info!("csvboy operation completed.");
    Ok(())
}

fn write_report(summary: &SanitizeSummary, path: &Path) -> Result<()> {
    let json = summary.to_json_pretty()?;
    fs::write(path, json).with_context(|| format!("Failed to write report to '{}'", path.display()))?;
    debug!("Report written to {}", path.display());
    Ok(())
}

fn handle_summary(summary: &SanitizeSummary, opts: &SanitizeOptions) -> Result<()> {
    if !opts.no_summary && !opts.quiet {
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        sanitize_summary::print_summary(summary, &mut stderr.lock(), supports_color)?;
    }
    Ok(())
}
