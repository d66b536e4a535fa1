//! Log subscriber installation.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `filter` takes `EnvFilter` directives (`cinder_lexer=trace`); without it
/// `RUST_LOG` is consulted, and with neither no subscriber is installed.
/// `tree` switches from flat lines to an indented span tree. Logs go to
/// stderr so they never mix with command output.
///
/// Safe to call multiple times; only the first call has any effect.
pub fn init_tracing(filter: Option<&str>, tree: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = match filter {
            Some(directives) => EnvFilter::new(directives),
            None if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
            None => return,
        };

        if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
