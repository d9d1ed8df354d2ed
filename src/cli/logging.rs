//! Stderr logger behind the `log` facade

use std::env;
use std::fmt;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when neither `--verbose` nor `--quiet` is given
pub const LOG_ENV_VAR: &str = "CSS_OUTPATH_LOG";

/// Output verbosity, ordered from least to most verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Errors and warnings
    Normal,
    /// Everything, down to per-path traces
    Verbose,
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl Verbosity {
    /// Parse "quiet", "normal" or "verbose" (case-insensitive)
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log mode: {s}")),
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Error,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Trace,
        }
    }
}

/// Pick the verbosity: flags first, then the environment value, then `Normal`.
///
/// An unrecognized environment value is ignored.
pub fn resolve_verbosity(verbose: bool, quiet: bool, env_value: Option<&str>) -> Verbosity {
    if verbose {
        Verbosity::Verbose
    } else if quiet {
        Verbosity::Quiet
    } else {
        env_value
            .and_then(|value| Verbosity::parse(value).ok())
            .unwrap_or(Verbosity::Normal)
    }
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger and return the verbosity it was set to.
///
/// Calling this more than once keeps the first logger but still updates the level.
pub fn init_logger(verbose: bool, quiet: bool) -> Verbosity {
    let env_value = env::var(LOG_ENV_VAR).ok();
    let verbosity = resolve_verbosity(verbose, quiet, env_value.as_deref());

    let _ = log::set_logger(&LOGGER);
    log::set_max_level(verbosity.level_filter());
    verbosity
}
