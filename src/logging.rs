//! Tracing configuration and log routing.
//!
//! Both services log to stdout using a compact formatter and append to a log file. The file is
//! taken from [`Config::log_file`] when set, otherwise `logs/<service>.log`. The file writer is
//! non-blocking so request handlers never wait on disk.
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Directory holding per-service log files when no explicit path is configured.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Configure tracing subscribers for stdout and file logging.
///
/// - Respects `RUST_LOG` for filtering (defaults to `info`).
/// - `log_file` overrides the default `logs/<service>.log` target.
/// - Uses a global guard to keep the non‑blocking writer alive for the process lifetime.
pub fn init_tracing(service: &str, log_file: Option<&Path>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_target(false).compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer);

    let path = resolve_log_path(service, log_file);
    if let Some(writer) = configure_file_writer(&path) {
        let file_layer = fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_ansi(false)
            .compact();

        registry.with(file_layer).init();
    } else {
        registry.init();
    }
    tracing::debug!(service, log_file = %path.display(), "Tracing initialized");
}

/// Pick the log file for `service`: the configured path, or `logs/<service>.log`.
pub fn resolve_log_path(service: &str, configured: Option<&Path>) -> PathBuf {
    match configured {
        Some(path) => path.to_path_buf(),
        None => Path::new(DEFAULT_LOG_DIR).join(format!("{service}.log")),
    }
}

/// Emit the effective configuration once a subscriber is installed.
pub fn log_config(config: &Config) {
    tracing::debug!(
        doc_server_port = ?config.doc_server_port,
        ner_server_port = ?config.ner_server_port,
        min_sentence_chars = config.min_sentence_chars,
        min_person_chars = config.min_person_chars,
        max_upload_bytes = config.max_upload_bytes,
        log_file = ?config.log_file,
        "Loaded configuration"
    );
}

/// Build a non‑blocking appending writer for `path`.
///
/// Returns `None` when the parent directory cannot be created or the path has no file name.
fn configure_file_writer(path: &Path) -> Option<NonBlocking> {
    let Some(file_name) = path.file_name() else {
        eprintln!("Log path {} has no file name", path.display());
        return None;
    };
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    if let Err(err) = std::fs::create_dir_all(dir) {
        eprintln!("Failed to create log directory {}: {err}", dir.display());
        return None;
    }
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = LOG_GUARD.set(guard);
    Some(non_blocking)
}
