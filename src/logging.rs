use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "JUMPBAR_LOG";
pub const LOG_FILE: &str = "jumpbar.log";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Sends traces to `<dir>/jumpbar.log`. The terminal belongs to the UI, so
/// nothing is written to stdout or stderr. Keep the guard alive until exit.
pub fn init(dir: &Path) -> Option<WorkerGuard> {
    std::fs::create_dir_all(dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_env_filter())
        .with(layer)
        .try_init()
        .ok()?;

    Some(guard)
}

/// `JUMPBAR_LOG` wins over `RUST_LOG`; without either only warnings are kept.
fn build_env_filter() -> EnvFilter {
    if let Some(filter) = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
    {
        return filter;
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(DEFAULT_DIRECTIVE)
}
