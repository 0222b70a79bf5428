//! Tracing subscriber setup
//!
//! The terminal belongs to the UI, so all logging goes to a file. The same
//! subscriber configuration is used by the binary and by tests.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber writing to `log_file_path`.
///
/// Filtering follows `RUST_LOG`, with DEBUG as the default level.
pub fn init_global(log_file_path: &Path) -> std::io::Result<()> {
    let log_file = File::create(log_file_path)?;
    build_subscriber(log_file).init();
    Ok(())
}

/// Build a subscriber that writes plain-text events to `log_file`
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::DEBUG.into())
        .from_env_lossy()
        // ureq logs every connection at debug level
        .add_directive("ureq=info".parse().expect("static directive"))
        .add_directive("rustls=info".parse().expect("static directive"));

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
