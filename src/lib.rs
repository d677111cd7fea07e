pub mod app;
pub mod config;
mod error;
pub mod resend;
pub mod templ_manager;
pub mod web;

// re-export
pub use app::{serve, App, AppState};
pub use error::{Error, Result};
pub use resend::ResendClient;

use tracing_subscriber::EnvFilter;

/// Console-friendly tracing used during development.
/// Defaults to DEBUG level for this crate, can be overridden with `RUST_LOG`.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,flexo_waitlist=debug")),
        )
        .init();
}

/// Tracing used in production: compact output without ANSI colors, INFO level by default.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
