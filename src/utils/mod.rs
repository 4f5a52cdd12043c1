// ============================================================================
// Utilities Module
// Process-level helpers
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
