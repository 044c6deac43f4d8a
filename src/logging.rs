//! Logging setup.
//!
//! Events go to stderr through `tracing-subscriber`. The level defaults to
//! `info` for this crate and `warn` for the HTTP client, and can be overridden
//! with `RUST_LOG` (e.g. `RUST_LOG=top_issues=debug` to see each page request).

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub const DEFAULT_FILTER: &str = "top_issues=info,reqwest=warn";

/// Installs the global subscriber. Call once, before the pipeline starts.
pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
