// ============================================================================
// Logging Setup
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber filtered by `RUST_LOG`
/// (default `monetary_amount=info`).
///
/// Returns `false` if a global subscriber was already set.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("monetary_amount=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
