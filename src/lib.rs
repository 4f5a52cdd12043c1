// ============================================================================
// Monetary Amount Library
// Arbitrary-precision amounts with canonical normalization and provider resolution
// ============================================================================

//! # Monetary Amount
//!
//! Arbitrary-precision monetary amounts for financial code.
//!
//! ## Features
//!
//! - **Canonical decimals**: every numeric input (integers, floats, big
//!   integers, big decimals, `rust_decimal` values) normalizes to one unique
//!   representation, with zero at scale 0 and no trailing fractional zeros
//! - **No binary artifacts**: floats are converted through their shortest
//!   text, so `0.1` stays `0.1`
//! - **Currency rounding** as a stateless, shareable operator
//! - **Provider resolution**: picks the amount implementation whose bounds
//!   satisfy a requested precision, scale and flavor
//!
//! ## Example
//!
//! ```rust
//! use monetary_amount::prelude::*;
//!
//! let factory = AmountFactoryBuilder::new().build().unwrap();
//!
//! // Resolution picks the implementation from the requested context
//! let context = NumericContext::builder()
//!     .with_precision(10)
//!     .with_max_scale(2)
//!     .with_flavor(AmountFlavor::Performance)
//!     .build();
//! let fast = factory.create("USD", 19.99, Some(&context)).unwrap();
//! assert_eq!(fast.amount_type(), Some(&AmountType::FAST_MONEY));
//!
//! // Rounding is applied explicitly, never on construction
//! let amount = factory.create("INR", 123456789101112.123456, None).unwrap();
//! let rounding = factory.rounding("INR", None).unwrap();
//! assert_eq!(amount.with(&rounding).to_string(), "INR 123456789101112.12");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AmountFlavor, AmountType, AmountsConfig, CurrencyUnit, InclusionPolicy, Money,
        NumericContext, ProviderDescriptor, StaticCurrencyCatalog,
    };
    pub use crate::engine::{
        derive_rounding_spec, resolve_type, AmountFactory, AmountFactoryBuilder, DefaultRounding,
        ProviderRegistry,
    };
    pub use crate::interfaces::{CurrencyCatalog, MonetaryOperator, ProviderSource};
    pub use crate::numeric::{
        normalize, CanonicalDecimal, MathContext, MonetaryError, MonetaryResult, NumberLike,
        RoundingMode,
    };
}
