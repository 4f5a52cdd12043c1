// ============================================================================
// Engine Module
// Context derivation, rounding, provider resolution and amount creation
// ============================================================================

mod context_deriver;
mod registry;
mod resolver;
mod rounding;

pub mod factory;

pub use context_deriver::derive_rounding_spec;
pub use factory::{AmountFactory, AmountFactoryBuilder, AmountRequest};
pub use registry::ProviderRegistry;
pub use resolver::{is_precision_compatible, rank_key, resolve_type, RankKey};
pub use rounding::{DefaultRounding, RoundingSpec};
