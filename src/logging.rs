//! Logging setup
//!
//! Diagnostics go to stderr by default. The full-screen mode owns the
//! terminal, so `--log-file` sends them to a file instead through a
//! non-blocking writer.
//!
//! `RUST_LOG` takes precedence over the configured level.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Logging options from the command line
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Minimum level (error, warn, info, debug, trace) or a full filter
    pub level: &'a str,
    /// Write to this file instead of stderr
    pub file: Option<&'a Path>,
}

impl LoggingConfig<'_> {
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level))
    }

    /// Install the global subscriber
    ///
    /// Keep the returned guard alive until exit so buffered file output is
    /// flushed.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file name is unusable or a subscriber is
    /// already installed.
    pub fn init(&self) -> Result<Option<WorkerGuard>> {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_target(false);

        match self.file {
            Some(path) => {
                let directory = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."));
                let file_name = path
                    .file_name()
                    .with_context(|| format!("log file {} has no file name", path.display()))?;

                let appender = tracing_appender::rolling::never(directory, file_name);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                builder
                    .with_writer(writer)
                    .with_ansi(false)
                    .try_init()
                    .map_err(|e| anyhow::anyhow!(e))
                    .context("failed to install logger")?;
                Ok(Some(guard))
            }
            None => {
                builder
                    .with_writer(std::io::stderr)
                    .try_init()
                    .map_err(|e| anyhow::anyhow!(e))
                    .context("failed to install logger")?;
                Ok(None)
            }
        }
    }
}
