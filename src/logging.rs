//! File logging setup
//!
//! The terminal itself belongs to the TUI, so log output goes to
//! daily-rotated files under the data directory instead of stdout.
//! Filter with the RUST_LOG environment variable, e.g. `RUST_LOG=deck=debug`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config;

/// Initialize the file subscriber. Logging is best-effort: if the logs
/// directory cannot be created the shell runs without it.
pub fn init() {
    let Some(logs_dir) = config::logs_dir() else {
        return;
    };
    if std::fs::create_dir_all(&logs_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::daily(logs_dir, "deck.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).init();
}
