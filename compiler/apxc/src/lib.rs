//! Driver for the vendor-prefix expander.
//!
//! A [`Session`] owns everything one compilation needs: the shared
//! interner, the rule catalog, the [`ExpandConfig`] and a diagnostic queue.
//! The host builds its style sheet against the session's interner and hands
//! it to [`Session::run`].
//!
//! ```text
//! let interner = SharedInterner::new();
//! let mut session = Session::with_builtin_rules(interner.clone(), ExpandConfig::from_env()?)?;
//! let sheet: StyleSheet = host_parse(&interner, source);
//! match session.run(&mut sheet) {
//!     Ok(stats) => emit(&sheet),
//!     Err(_) => report(session.take_diagnostics()),
//! }
//! ```

use std::sync::Once;

mod config;
mod session;

pub use config::{ConfigError, ExpandConfig, Mode, ERROR_LIMIT_VAR, MODE_VAR};
pub use session::Session;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber, once per process, when `RUST_LOG` is set.
///
/// Pass spans nest, so output goes through a hierarchical layer:
///
/// ```text
/// RUST_LOG=apx_expand=debug   # pass summaries
/// RUST_LOG=apx_expand=trace   # one event per expanded declaration
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
