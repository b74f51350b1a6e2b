//! File-based logging initialization

use std::fs;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directory log files are written to
const LOG_DIR: &str = "logs";

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation
/// - Structured output with targets and line numbers
/// - Non-blocking writes to prevent UI lag
/// - Panic hook integration for crash logging
///
/// Logs are written to `logs/dashboard.log`. The filter is taken from
/// `RUST_LOG` when set, defaulting to info for this crate.
pub fn init() {
    // Create logs directory if it doesn't exist
    if let Err(e) = fs::create_dir_all(LOG_DIR) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return;
    }

    // Create file appender with daily rotation
    let file_appender = tracing_appender::rolling::daily(LOG_DIR, "dashboard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Configure log filter from environment
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dashboard=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(log_dir = LOG_DIR, "Logging initialized");

    setup_panic_hook();

    // Keep the writer guard alive for the lifetime of the program
    std::mem::forget(guard);
}

/// Set up panic hook to log panics with full context
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        tracing::error!(location = %location, "PANIC: {}", panic_info);

        default_panic(panic_info);
    }));
}
