//! File logging bootstrap for the board engine.
//!
//! Logging is initialized at most once per process; later calls succeed
//! without effect and keep the first configuration.

use camino::{Utf8Path, Utf8PathBuf};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;
use thiserror::Error;

const LOG_FILE_BASENAME: &str = "hestia";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Errors returned while starting file logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("failed to create log directory {path}: {source}")]
    CreateDirectory {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The logger backend rejected the configuration.
    #[error("failed to start file logging: {0}")]
    Start(#[from] flexi_logger::FlexiLoggerError),
}

/// Starts rotating file logging once for the whole process.
///
/// `level` follows the `log` level names (`trace` through `error`). The
/// directory is created when missing. Repeat calls return `Ok(())` without
/// touching the active configuration.
///
/// # Errors
///
/// Returns [`LoggingError`] when the directory cannot be created, the level
/// is not a valid level specification, or the logger backend fails to start.
pub fn init(level: &str, log_dir: &Utf8Path) -> Result<(), LoggingError> {
    LOGGER.get_or_try_init(|| {
        std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDirectory {
            path: log_dir.to_owned(),
            source,
        })?;

        let handle = Logger::try_with_str(level)?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir.as_std_path())
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .start()?;
        Ok::<LoggerHandle, LoggingError>(handle)
    })?;
    Ok(())
}

/// Returns the default log level for the current build mode.
#[must_use]
pub const fn default_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}
