//! Lispy - a small S-expression interpreter.
//!
//! This crate is the outer shell around [`lispy_eval`]: argument handling,
//! diagnostics for malformed input, the interactive loop and the file runner.
//! The binary in `main.rs` is a thin dispatcher over these pieces.

pub mod config;
pub mod diagnostics;
pub mod repl;
pub mod session;

use std::sync::Once;

pub use config::{parse_args, Command, Config, ConfigError};
pub use session::{Session, SessionError};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so ordinary runs pay no cost.
/// Output is a hierarchical tree on stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
