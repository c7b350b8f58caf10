//! Diagnostic sink setup.
//!
//! Everything the interpreter wants to keep out of the user's face (full
//! detail of unexpected handler failures, script abort context) goes through
//! `tracing` into a log file. Levels come from the `[logging]` section of the
//! configuration, with per-module overrides; the `RUST_LOG` environment
//! variable takes precedence over both.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::{Arc, Once};

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Compact time format: YYYY-MM-DD HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the diagnostic sink, appending to `log_file`.
///
/// Call once at startup. Safe to call multiple times (only the first call
/// takes effect). Returns an error only when the log file cannot be opened.
pub fn init_with_config(log_file: &Path, config: &LoggingConfig) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    INIT.call_once(|| {
        // RUST_LOG env var takes precedence over config
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            let mut filter_str = config.default.clone();
            for (module, level) in &config.modules {
                filter_str.push_str(&format!(",{module}={level}"));
            }
            EnvFilter::new(&filter_str)
        };

        let file_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_ansi(false)
            .with_writer(Arc::new(file))
            .with_filter(filter);

        tracing_subscriber::registry().with(file_layer).init();
    });
    Ok(())
}
