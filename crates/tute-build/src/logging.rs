//! Logger setup.
//!
//! Logging is configured once from a [`LogConfig`] value built at startup.
//! Records from the configured logger name are printed as bare messages on
//! stdout; anything else gets a `LEVEL:target:` prefix.

use std::io::Write;

use env_logger::{Builder, Target};
use log::{LevelFilter, Record, SetLoggerError};

/// How much to log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Debug,
    Info,
    Error,
}

impl Verbosity {
    /// `verbose` selects debug output and wins over `quiet`, which keeps
    /// errors only.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Verbosity::Debug
        } else if quiet {
            Verbosity::Error
        } else {
            Verbosity::Info
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Error => LevelFilter::Error,
        }
    }
}

/// Pick the verbosity for the given flags.
pub fn set_log_level(verbose: bool, quiet: bool) -> Verbosity {
    Verbosity::from_flags(verbose, quiet)
}

/// A logger configuration for the target `name` at the default verbosity.
pub fn setup_logger(name: &str) -> LogConfig {
    LogConfig::new(Verbosity::Info).named(name)
}

/// Logger configuration, installed once with [`LogConfig::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub verbosity: Verbosity,
    /// Target whose records are printed without a prefix.
    pub name: Option<String>,
}

impl LogConfig {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Format one record the way the installed logger prints it.
    pub fn render(&self, record: &Record<'_>) -> String {
        let bare = match &self.name {
            Some(name) => {
                let target = record.target();
                target == name || target.starts_with(&format!("{name}::"))
            }
            None => false,
        };
        if bare {
            record.args().to_string()
        } else {
            format!("{}:{}:{}", record.level(), record.target(), record.args())
        }
    }

    /// An `env_logger` builder for this configuration.
    pub fn builder(&self) -> Builder {
        let mut builder = Builder::new();
        let config = self.clone();
        builder
            .target(Target::Stdout)
            .filter_level(self.verbosity.level_filter())
            .format(move |buf, record| writeln!(buf, "{}", config.render(record)));
        builder
    }

    /// Install as the global logger.
    ///
    /// Fails if a logger is already installed, so repeated setup never
    /// duplicates output.
    pub fn init(&self) -> Result<(), SetLoggerError> {
        self.builder().try_init()
    }
}
