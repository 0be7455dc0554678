use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Sets up the global subscriber: compact output on stderr and, with
/// `log_file`, JSON lines appended to that file.
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("library={level}")));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(path) = log_file else {
        subscriber.try_init()?;
        return Ok(());
    };

    let file_layer = fmt::layer()
        .with_writer(open_log_file(&path)?)
        .with_ansi(false)
        .json();

    subscriber.with(file_layer).try_init()?;
    Ok(())
}

fn open_log_file(path: &Path) -> Result<RollingFileAppender> {
    let (dir, file) = split_log_path(path);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file.to_string_lossy())
        .build(dir)
        .with_context(|| format!("cannot open log file {}", path.display()))
}

fn split_log_path(path: &Path) -> (&Path, &OsStr) {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file = path.file_name().unwrap_or(OsStr::new("library.log"));
    (dir, file)
}
