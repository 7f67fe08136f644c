//! Observability setup.
//!
//! Initializes the tracing subscriber for the server binary.

use std::env;

/// True when `LOG_FORMAT` selects the JSON formatter.
///
/// Matching is case-insensitive; anything other than `json` keeps the
/// plain formatter.
pub fn json_output_selected() -> bool {
    env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Initialize tracing from environment configuration.
///
/// `RUST_LOG` controls the log level (default: info) and
/// `LOG_FORMAT=json` switches to JSON output for log collectors.
/// Logs go to stderr without ANSI colors.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if json_output_selected() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init();
    }
}
