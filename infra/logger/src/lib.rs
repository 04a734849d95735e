//! # Logger
//!
//! Shared logging setup for every `LinkHub` binary. One builder wires up
//! console and file output, daily rotation, non-blocking writers, and
//! environment-based filtering, then installs the global tracing
//! subscriber. On the `wasm32` target the console layer writes to the
//! browser console and file logging is unavailable.
//!
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"myapp=debug,hyper=info"`), in addition to `RUST_LOG`.
//! * Development builds announce themselves once the subscriber is
//!   installed. Call [`LoggerBuilder::startup_notice`] with `false`
//!   before [`LoggerBuilder::init`] to keep startup quiet.
//!
//! ## Example
//!
//! ```rust
//! # use lhub_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
#[cfg(not(target_arch = "wasm32"))]
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
#[cfg(not(target_arch = "wasm32"))]
use tracing_appender::non_blocking::WorkerGuard;
#[cfg(not(target_arch = "wasm32"))]
use tracing_appender::rolling::RollingFileAppender;
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
#[cfg(target_arch = "wasm32")]
use tracing_wasm::{ConsoleConfig, WASMLayer, WASMLayerConfigBuilder};

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_MAX_FILES: usize = 10;
#[cfg(not(target_arch = "wasm32"))]
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    startup_notice: bool,
    #[cfg(not(target_arch = "wasm32"))]
    path: Option<PathBuf>,
    #[cfg(not(target_arch = "wasm32"))]
    rotation: Rotation,
    #[cfg(not(target_arch = "wasm32"))]
    max_files: usize,
    #[cfg(not(target_arch = "wasm32"))]
    json: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            startup_notice: true,
            #[cfg(not(target_arch = "wasm32"))]
            path: None,
            #[cfg(not(target_arch = "wasm32"))]
            rotation: Rotation::DAILY,
            #[cfg(not(target_arch = "wasm32"))]
            max_files: DEFAULT_MAX_FILES,
            #[cfg(not(target_arch = "wasm32"))]
            json: false,
        }
    }
}

impl LoggerConfig {
    fn validate(&self) -> Result<(), LoggerError> {
        #[cfg(not(target_arch = "wasm32"))]
        if self.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be at least one".into(),
                context: None,
            });
        }

        Ok(())
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
#[derive(Debug)]
pub struct NoSink;
#[derive(Debug)]
pub struct FileSink;

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for NoSink {}
impl Sealed for FileSink {}

/// Builder for the global tracing subscriber.
///
/// The type parameters track what has been configured so far: a name is
/// required before [`init`](LoggerBuilder::init) becomes available, and the
/// file-only knobs only appear after [`path`](LoggerBuilder::path) is set.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = NoSink> {
    config: LoggerConfig,
    name: N,
    file_state: std::marker::PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Names the logger. The name becomes the rolling-file prefix on native targets.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder {
            name: Named(name.into()),
            config: self.config,
            file_state: std::marker::PhantomData,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LoggerBuilder<Named, FileSink> {
    /// Caps how many rotated log files are kept on disk.
    #[must_use = "Finish configuring and call `init()` to install the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// Chooses when the log file rolls over.
    #[must_use = "Finish configuring and call `init()` to install the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Switches the file layer to JSON output.
    #[must_use = "Finish configuring and call `init()` to install the logger."]
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    /// Sets the least severe level that will be emitted.
    #[must_use = "Finish configuring and call `init()` to install the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Installs a programmatic filter string (e.g. `myapp=debug,hyper=info`).
    ///
    /// `RUST_LOG` still takes precedence at startup. The string is parsed in
    /// [`LoggerBuilder::init`], which fails on an invalid filter.
    #[must_use = "Finish configuring and call `init()` to install the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Toggles the console layer.
    #[must_use = "Finish configuring and call `init()` to install the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Controls the development-build startup notice.
    ///
    /// The notice is enabled by default and emitted right after the subscriber
    /// is installed, but only in builds with debug assertions. Pass `false`
    /// before [`LoggerBuilder::init`] to suppress it.
    #[must_use = "Finish configuring and call `init()` to install the logger."]
    pub const fn startup_notice(mut self, enabled: bool) -> Self {
        self.config.startup_notice = enabled;
        self
    }

    /// Enables file logging into the given directory.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<Named, FileSink> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, name: self.name, file_state: std::marker::PhantomData }
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. On native targets it owns the non-blocking worker
    /// guard; keep it alive for the lifetime of the program or buffered log
    /// lines are lost.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        if self.name.0.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name must not be blank".into(),
                context: None,
            });
        }
        self.config.validate()?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            #[cfg(target_arch = "wasm32")]
            layers.push(
                WASMLayer::new(
                    WASMLayerConfigBuilder::new()
                        .set_report_logs_in_timings(false)
                        .set_console_config(ConsoleConfig::ReportWithoutConsoleColor)
                        .build(),
                )
                .boxed(),
            );

            #[cfg(not(target_arch = "wasm32"))]
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        #[cfg(not(target_arch = "wasm32"))]
        let guard = if let Some(path) = self.config.path {
            fs::create_dir_all(&path).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create path: {}", path.display()).into()),
            })?;

            let appender = RollingFileAppender::builder()
                .rotation(self.config.rotation)
                .filename_prefix(&self.name.0)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.config.max_files)
                .build(path)?;

            let (writer, worker) = tracing_appender::non_blocking(appender);

            let file_layer = layer().with_writer(writer).with_ansi(false);

            let sink =
                if self.config.json { file_layer.json().boxed() } else { file_layer.boxed() };

            layers.push(sink);
            Some(worker)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "All outputs disabled; enable the console or a file path".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        if self.config.startup_notice && cfg!(debug_assertions) {
            tracing::info!("Running a development build; build with --release before deploying");
        }

        Ok(Logger {
            #[cfg(not(target_arch = "wasm32"))]
            guard,
        })
    }
}

/// Handle to the installed logging system.
///
/// Owns the background worker guard on native targets, so it should live
/// until the application shuts down.
#[must_use = "Keep this handle alive; dropping it stops the background log writers."]
#[derive(Debug)]
pub struct Logger {
    #[cfg(not(target_arch = "wasm32"))]
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Entry point: returns a fresh [`LoggerBuilder`].
    ///
    /// Call [`name`](LoggerBuilder::name) first; the name identifies the binary
    /// in log output and prefixes rolling log files (`my-app.2023-10-27.log`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use lhub_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("my-app")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "Finish configuring and call `init()` to install the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            config: LoggerConfig::default(),
            name: Unnamed,
            file_state: std::marker::PhantomData,
        }
    }

    /// Best-effort synchronization point before shutdown.
    ///
    /// Pending lines are flushed automatically when the handle drops; calling
    /// this first just makes the cut-off explicit.
    pub fn flush(&self) {
        tracing::debug!("Flush requested");
    }

    /// Returns a reference to the underlying worker guard, if present.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Shutting down logging, flushing remaining buffers...");
        }
    }
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_builder_defaults() {
        let builder = Logger::builder().name("unit-app").env_filter("lhub=debug");
        assert!(builder.config.console, "console defaults to on");
        assert!(builder.config.startup_notice, "startup notice defaults to on");
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("lhub=debug"));
        assert!(builder.config.path.is_none(), "no file sink unless a path is set");
        assert_eq!(builder.config.max_files, DEFAULT_MAX_FILES);
    }

    #[test]
    #[serial]
    fn test_startup_notice_disabled_before_init() {
        let builder = Logger::builder().name("unit-app").startup_notice(false);
        assert!(!builder.config.startup_notice);
    }

    #[test]
    #[serial]
    fn test_builder_records_settings() -> Result<(), LoggerError> {
        let tmp_dir = tempdir().map_err(|e| LoggerError::Internal {
            message: e.to_string().into(),
            context: Some("Failed to create temp dir".into()),
        })?;
        let log_dir = tmp_dir.path().join("logs");
        let builder = Logger::builder()
            .name("unit-app")
            .console(true)
            .env_filter("lhub=info")
            .path(log_dir.clone())
            .max_files(5)
            .level(LevelFilter::DEBUG);

        assert!(builder.config.console);
        assert_eq!(builder.config.level, LevelFilter::DEBUG);
        assert_eq!(builder.config.max_files, 5);
        assert_eq!(builder.config.env_filter.as_deref(), Some("lhub=info"));
        assert_eq!(builder.config.path.as_deref(), Some(log_dir.as_path()));

        Ok(())
    }

    #[test]
    #[serial]
    fn test_file_sink_writes_logs() -> Result<(), LoggerError> {
        let tmp_dir = tempdir().map_err(|e| LoggerError::Internal {
            message: e.to_string().into(),
            context: Some("Failed to create temp dir".into()),
        })?;
        let log_dir = tmp_dir.path().join("logs");

        let logger =
            Logger::builder().name("unit-app").path(&log_dir).level(LevelFilter::INFO).init()?;

        tracing::info!("file sink smoke line");
        // Give the background worker a moment, then flush explicitly.
        std::thread::sleep(Duration::from_millis(20));
        logger.flush();

        assert!(log_dir.exists(), "init should create the log directory");

        let entries = fs::read_dir(&log_dir).map_err(|e| LoggerError::Internal {
            message: e.to_string().into(),
            context: Some(format!("Failed to read log directory {}", log_dir.display()).into()),
        })?;

        let has_log = entries
            .flatten()
            .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));

        assert!(has_log, "a rolling log file should appear under the directory");
        Ok(())
    }
}
