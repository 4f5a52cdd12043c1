// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod context;
pub mod currency;
pub mod money;
pub mod provider;

pub use config::AmountsConfig;
pub use context::{AmountFlavor, ContextAttributes, NumericContext, NumericContextBuilder};
pub use currency::{CurrencyUnit, StaticCurrencyCatalog};
pub use money::Money;
pub use provider::{AmountType, InclusionPolicy, ProviderDescriptor};
