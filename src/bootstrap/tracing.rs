//! Tracing configuration for clipshelf
//!
//! Stdout carries the stdio protocol in watch mode, so logs go to stderr and,
//! when a log directory is available, to `clipshelf.log` through a
//! non-blocking writer.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

use super::config::Settings;

const LOG_FILE_NAME: &str = "clipshelf.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// A configured level applies to every target. Without one, debug builds
/// log at debug and release builds at info. The X11 clipboard backend
/// stays at warn.
pub fn build_filter_directives(is_dev: bool, level: Option<&str>) -> Vec<String> {
    let level = level.unwrap_or(if is_dev { "debug" } else { "info" });

    vec![
        level.to_string(),
        format!("cs_platform={level}"),
        format!("cs_infra={level}"),
        "x11rb=warn".to_string(),
        "clipboard_rs=warn".to_string(),
    ]
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the directives built from the settings.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(settings: &Settings) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), settings.log_level.as_deref());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match settings.log_dir.as_deref().map(build_file_writer) {
        Some(Ok(writer)) => Some(writer),
        Some(Err(err)) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err:#}");
            None
        }
        None => None,
    };

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    let subscriber = registry().with(env_filter).with(stderr_layer);

    if let Some(layer) = file_layer {
        subscriber.with(layer).try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    if LOG_GUARD.set(guard).is_err() {
        anyhow::bail!("file log writer already initialized");
    }

    Ok(non_blocking)
}
