//! # Logger
//!
//! Installs the global `tracing` subscriber for native builds of the shell
//! (the desktop app and tooling). Browser builds log through Dioxus' console
//! logger instead.
//!
//! Output goes to the console (compact, pretty or JSON) and optionally to a
//! rolling file written by a non-blocking worker. Filtering starts from the
//! configured level, can be narrowed with [`LoggerBuilder::env_filter`], and
//! `RUST_LOG` still applies when no explicit filter is given.
//!
//! ## Example
//!
//! ```rust
//! # use pcx_logger::{LevelFilter, LogFormat, Logger};
//! let _logger = Logger::builder("pcx-desktop")
//!     .level(LevelFilter::DEBUG)
//!     .format(LogFormat::Compact)
//!     .init()
//!     .unwrap();
//!
//! tracing::info!(tenant = "public", "Shell started");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Console line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
struct FileSink {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

/// Configures and installs the global subscriber.
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    env_filter: Option<String>,
    console: Option<LogFormat>,
    file: Option<FileSink>,
}

impl LoggerBuilder {
    /// Minimum level emitted when no filter directive says otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Programmatic filter directives, e.g. `pcx_gating=debug,reqwest=warn`.
    ///
    /// Replaces `RUST_LOG`. Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Sets the console format; console output is on by default.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.console = Some(format);
        self
    }

    /// Turns console output off. Useful when only a file sink is wanted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn without_console(mut self) -> Self {
        self.console = None;
        self
    }

    /// Also writes logs to rolling files named `<name>.<date>.log` inside `dir`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn file(mut self, dir: impl Into<PathBuf>) -> Self {
        self.file = Some(FileSink {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// Rotation and retention for the file sink. No effect without [`LoggerBuilder::file`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn rotation(mut self, rotation: Rotation, max_files: usize) -> Self {
        if let Some(sink) = self.file.as_mut() {
            sink.rotation = rotation;
            sink.max_files = max_files;
        }
        self
    }

    /// Writes the file sink as JSON lines. No effect without [`LoggerBuilder::file`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn json_file(mut self) -> Self {
        if let Some(sink) = self.file.as_mut() {
            sink.json = true;
        }
        self
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the whole program: it owns the
    /// file worker that flushes buffered lines.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero retained
    ///   files, no enabled output, or a malformed filter.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory
    ///   cannot be used.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.build_filter()?;

        let mut layers = Vec::new();

        if let Some(format) = self.console {
            let console = layer().with_target(true);
            layers.push(match format {
                LogFormat::Compact => console.compact().boxed(),
                LogFormat::Pretty => console.pretty().boxed(),
                LogFormat::Json => console.json().boxed(),
            });
        }

        let guard = match &self.file {
            Some(sink) => {
                fs::create_dir_all(&sink.dir).map_err(|source| LoggerError::Io {
                    source,
                    context: Some(format!("creating {}", sink.dir.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(sink.rotation.clone())
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(sink.max_files)
                    .build(&sink.dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if sink.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        tracing::debug!(logger = %self.name, "Logging initialized");
        Ok(Logger { name: self.name, guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "logger name cannot be empty".into(),
                context: None,
            });
        }
        if self.console.is_none() && self.file.is_none() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no output enabled; keep the console or add a file sink".into(),
                context: None,
            });
        }
        if self.file.as_ref().is_some_and(|sink| sink.max_files == 0) {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: Some(self.name.clone().into()),
            });
        }
        Ok(())
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            Some(directives) => {
                builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("invalid filter '{directives}': {e}").into(),
                    context: None,
                })
            },
            None => Ok(builder.from_env_lossy()),
        }
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    name: String,
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring a subscriber; `name` prefixes rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            level: LevelFilter::INFO,
            env_filter: None,
            console: Some(LogFormat::default()),
            file: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a file worker is attached.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!(logger = %self.name, "Flushing log files");
        }
    }
}
