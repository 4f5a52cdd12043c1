// ============================================================================
// Provider Descriptors
// Identity and capability bounds of registered amount implementations
// ============================================================================

use super::context::{AmountFlavor, NumericContext};
use crate::numeric::RoundingMode;
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a concrete amount implementation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AmountType(Cow<'static, str>);

impl AmountType {
    /// Arbitrary-precision amount
    pub const MONEY: Self = Self::from_static("Money");

    /// Fixed-width, performance oriented amount
    pub const FAST_MONEY: Self = Self::from_static("FastMoney");

    /// Amount rounded on every operation; only available by direct reference
    pub const ROUNDED_MONEY: Self = Self::from_static("RoundedMoney");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AmountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a provider takes part in open-ended resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InclusionPolicy {
    /// Eligible for every query
    #[default]
    Always,
    /// Only when its amount type is named explicitly
    DirectReferenceOnly,
    /// Never eligible
    Never,
}

/// Metadata describing one registered amount implementation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProviderDescriptor {
    amount_type: AmountType,
    default_context: NumericContext,
    maximal_context: NumericContext,
    inclusion_policy: InclusionPolicy,
}

impl ProviderDescriptor {
    /// Create a descriptor with the `Always` inclusion policy.
    ///
    /// Both contexts are tagged with `amount_type`.
    pub fn new(
        amount_type: AmountType,
        default_context: NumericContext,
        maximal_context: NumericContext,
    ) -> Self {
        Self {
            default_context: default_context
                .to_builder()
                .with_amount_type(amount_type.clone())
                .build(),
            maximal_context: maximal_context
                .to_builder()
                .with_amount_type(amount_type.clone())
                .build(),
            amount_type,
            inclusion_policy: InclusionPolicy::Always,
        }
    }

    pub fn with_inclusion_policy(mut self, policy: InclusionPolicy) -> Self {
        self.inclusion_policy = policy;
        self
    }

    #[inline]
    pub fn amount_type(&self) -> &AmountType {
        &self.amount_type
    }

    #[inline]
    pub fn default_context(&self) -> &NumericContext {
        &self.default_context
    }

    #[inline]
    pub fn maximal_context(&self) -> &NumericContext {
        &self.maximal_context
    }

    #[inline]
    pub fn inclusion_policy(&self) -> InclusionPolicy {
        self.inclusion_policy
    }

    // ========================================================================
    // Built-in Providers
    // ========================================================================

    /// Arbitrary-precision `Money`: 64 digits by default, unbounded maximum
    pub fn money() -> Self {
        Self::new(
            AmountType::MONEY,
            NumericContext::builder()
                .with_precision(64)
                .with_max_scale(63)
                .with_flavor(AmountFlavor::Precision)
                .with_rounding_mode(RoundingMode::HalfEven)
                .build(),
            NumericContext::builder()
                .with_precision(0)
                .with_max_scale(i32::MAX)
                .with_flavor(AmountFlavor::Precision)
                .build(),
        )
    }

    /// Fixed-width `FastMoney`: 19 digits, 5 fractional digits
    pub fn fast_money() -> Self {
        let context = NumericContext::builder()
            .with_precision(19)
            .with_max_scale(5)
            .with_flavor(AmountFlavor::Performance)
            .with_rounding_mode(RoundingMode::HalfEven)
            .build();
        Self::new(AmountType::FAST_MONEY, context.clone(), context)
    }

    /// `RoundedMoney`, reachable only by naming it
    pub fn rounded_money() -> Self {
        let context = NumericContext::builder()
            .with_precision(0)
            .with_max_scale(i32::MAX)
            .with_flavor(AmountFlavor::Undefined)
            .build();
        Self::new(AmountType::ROUNDED_MONEY, context.clone(), context)
            .with_inclusion_policy(InclusionPolicy::DirectReferenceOnly)
    }

    /// All built-in providers in registration order
    pub fn builtin() -> Vec<Self> {
        vec![Self::money(), Self::fast_money(), Self::rounded_money()]
    }
}
