//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize tracing for binaries and tests that embed the resolver.
///
/// Reads the `PROFILE_MAPPING_LOG` environment variable for log directives,
/// e.g. `PROFILE_MAPPING_LOG=profile_core=debug`.
///
/// Falls back to `profile_core=info` if the variable is unset or invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("PROFILE_MAPPING_LOG")
            .unwrap_or_else(|_| EnvFilter::new("profile_core=info"));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
    });
}
