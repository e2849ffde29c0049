// -- std imports
use std::{env, io, path::PathBuf, sync::OnceLock};

// -- crate imports
use anyhow::{Context, Result};
use tracing::warn;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*, registry::Registry};

/// Global guard that keeps the non-blocking file writer alive.
///
/// The guard is stored in a [`OnceLock`] so the background worker thread used by the non-blocking
/// logger is not dropped prematurely, which would otherwise cause log records to be lost.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Name of the log file created when file logging is enabled.
const LOG_FILE_NAME: &str = "lsapps.log";

/// Environment variable holding the log filter directives (`RUST_LOG` syntax).
const LOG_FILTER_ENV: &str = "LSAPPS_LOG";

/// Environment variable that enables logging to [`LOG_FILE_NAME`] when set.
const LOG_FILE_ENV: &str = "LSAPPS_LOG_FILE";

/// Default log level. Stdout carries the listing, so normal runs should stay silent on stderr.
const LOG_LEVEL: LevelFilter = LevelFilter::WARN;

/// Returns the path to the log file, inside the XDG data home (`~/.local/share/lsapps`).
///
/// # Errors
/// - [`anyhow::Error`] if the XDG data directory cannot be used or created.
pub fn log_filepath() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("lsapps")
        .place_data_file(LOG_FILE_NAME)
        .with_context(|| "Could not determine log file path")
}

/// Builds a non-blocking file writer for tracing logs.
///
/// The associated [`WorkerGuard`] is stored in [`LOG_GUARD`] to ensure the background worker
/// thread lives for the entire lifetime of the process.
///
/// # Errors
/// - [`anyhow::Error`] if the log file path cannot be determined.
fn build_file_writer() -> Result<NonBlocking> {
    let path = log_filepath()?;

    let dir = path
        .parent()
        .context("Could not determine log file directory")?;
    let file_name = path
        .file_name()
        .context("Could not determine log file name")?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // Keep guard alive for entire process
    let _ = LOG_GUARD.set(guard);

    Ok(file_writer)
}

/// Initializes global tracing on stderr, plus a log file when `LSAPPS_LOG_FILE` is set.
///
/// Nothing is ever logged to stdout.
///
/// # Errors
/// - [`anyhow::Error`] if the global tracing subscriber cannot be installed.
pub fn init_tracing() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LOG_LEVEL.into())
        .with_env_var(LOG_FILTER_ENV)
        .from_env_lossy();

    #[cfg(debug_assertions)]
    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_filter(env_filter.clone());

    #[cfg(not(debug_assertions))]
    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(env_filter.clone());

    if env::var_os(LOG_FILE_ENV).is_none() {
        tracing::subscriber::set_global_default(Registry::default().with(stderr_layer))?;
        return Ok(());
    }

    match build_file_writer() {
        Ok(writer) => {
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_target(false)
                .with_filter(env_filter);

            let subscriber = Registry::default().with(stderr_layer).with(file_layer);
            tracing::subscriber::set_global_default(subscriber)?;
        }
        Err(e) => {
            let subscriber = Registry::default().with(stderr_layer);
            tracing::subscriber::set_global_default(subscriber)?;

            warn!(
                "File logging could not be initialized. Falling back to stderr only: {:#}",
                e
            );
        }
    }

    Ok(())
}
