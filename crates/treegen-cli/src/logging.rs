//! Diagnostic tracing for the CLI.
//!
//! Status lines go to stdout and are printed by the builder. This module only
//! covers `RUST_LOG` diagnostics, which go to stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr subscriber before any tree file is read.
///
/// `RUST_LOG` selects what is shown (`warn` when unset). At
/// `treegen_core=debug` every skipped diagram line and every directory
/// decision is logged; `info` adds the created/skipped summary per build.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
