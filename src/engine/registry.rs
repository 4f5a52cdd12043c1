// ============================================================================
// Provider Registry
// Copy-on-write list of registered amount providers
// ============================================================================

use crate::domain::{AmountType, ProviderDescriptor};
use crate::interfaces::ProviderSource;
use crate::numeric::{MonetaryError, MonetaryResult};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe registry of provider descriptors.
///
/// Readers get an `Arc` snapshot and never hold the lock while resolving;
/// registration swaps in a new snapshot.
#[derive(Debug)]
pub struct ProviderRegistry {
    providers: RwLock<Arc<[ProviderDescriptor]>>,
}

impl ProviderRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// Registry holding `Money`, `FastMoney` and `RoundedMoney`
    pub fn with_builtin_providers() -> Self {
        Self {
            providers: RwLock::new(Arc::from(ProviderDescriptor::builtin())),
        }
    }

    /// Append a provider.
    ///
    /// # Errors
    /// `InvalidConfig` if a provider with the same amount type is registered.
    pub fn register(&self, descriptor: ProviderDescriptor) -> MonetaryResult<()> {
        let mut guard = self.providers.write();
        if guard.iter().any(|p| p.amount_type() == descriptor.amount_type()) {
            return Err(MonetaryError::InvalidConfig(format!(
                "Amount type {} is already registered",
                descriptor.amount_type()
            )));
        }

        tracing::debug!(amount_type = %descriptor.amount_type(), "registering amount provider");
        let mut next = guard.to_vec();
        next.push(descriptor);
        *guard = Arc::from(next);
        Ok(())
    }

    /// Current providers in registration order
    pub fn snapshot(&self) -> Arc<[ProviderDescriptor]> {
        Arc::clone(&self.providers.read())
    }

    /// Descriptor registered for `amount_type`
    pub fn find(&self, amount_type: &AmountType) -> Option<ProviderDescriptor> {
        self.providers
            .read()
            .iter()
            .find(|p| p.amount_type() == amount_type)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_builtin_providers()
    }
}

impl ProviderSource for ProviderRegistry {
    fn providers(&self) -> Arc<[ProviderDescriptor]> {
        self.snapshot()
    }
}
