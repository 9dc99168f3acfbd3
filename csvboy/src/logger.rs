// csvboy/src/logger.rs
//! Logging setup for the csvboy binary.
//!
//! Logs go to stderr through `env_logger`. `RUST_LOG` is honored; an explicit
//! level from the command line overrides it for the csvboy crates.

use env_logger::{Builder, Env};
use log::LevelFilter;

const CRATES: [&str; 2] = ["csvboy", "csvboy_core"];

/// Initializes the global logger. Calling it more than once is harmless.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = match level_override {
        // `--quiet` must win over whatever RUST_LOG says.
        Some(LevelFilter::Off) => {
            let mut builder = Builder::new();
            builder.filter_level(LevelFilter::Off);
            builder
        }
        Some(level) => {
            let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
            for krate in CRATES {
                builder.filter_module(krate, level);
            }
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };

    builder.format_timestamp(None);
    let _ = builder.try_init();
}

/// Maps the `--quiet` / `--debug` flags to a level override.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
