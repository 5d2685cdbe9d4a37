//! Tracing setup for the `fileops` binary.
//!
//! The library itself only emits events; whoever embeds it decides where
//! they go. Tests install scoped subscribers instead of calling this.

use std::env;
use std::sync::Once;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Install a global stderr subscriber. `RUST_LOG` wins over `level` when set.
/// Later calls are no-ops.
pub fn init_tracing(level: &str) {
    INIT.call_once(|| {
        let filter = if env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(format!("fileops={}", level)).unwrap_or_else(|_| {
                eprintln!("Invalid log level '{}', defaulting to info", level);
                EnvFilter::new("fileops=info")
            })
        };

        // try_init: an embedding application may already own the global slot.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init();
    });
}
