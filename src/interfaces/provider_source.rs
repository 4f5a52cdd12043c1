// ============================================================================
// Provider Source Interface
// Discovery of registered amount implementations
// ============================================================================

use crate::domain::ProviderDescriptor;
use std::sync::Arc;

/// Supplies the registered provider descriptors.
///
/// Each call returns an immutable snapshot in registration order; resolution
/// works on that snapshot and never writes back.
pub trait ProviderSource: Send + Sync {
    fn providers(&self) -> Arc<[ProviderDescriptor]>;
}
