// ============================================================================
// Numeric Context
// Declared precision, scale bound and flavor of an amount or provider
// ============================================================================

use super::provider::AmountType;
use crate::numeric::{MathContext, RoundingMode};
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Amount Flavor
// ============================================================================

/// Declared intent of an amount representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AmountFlavor {
    /// Exactness first (arbitrary-precision backed)
    Precision,
    /// Speed first (fixed-width backed)
    Performance,
    /// No preference
    #[default]
    Undefined,
}

// ============================================================================
// Context Attributes
// ============================================================================

/// Optional overrides carried by a [`NumericContext`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContextAttributes {
    rounding_mode: Option<RoundingMode>,
    math_context: Option<MathContext>,
    custom: BTreeMap<String, String>,
}

impl ContextAttributes {
    /// Explicit rounding mode override
    #[inline]
    pub fn rounding_mode(&self) -> Option<RoundingMode> {
        self.rounding_mode
    }

    /// Explicit math-precision override; wins over precision and mode
    #[inline]
    pub fn math_context(&self) -> Option<MathContext> {
        self.math_context
    }

    /// Free-form attribute by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.custom.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.rounding_mode.is_none() && self.math_context.is_none() && self.custom.is_empty()
    }
}

// ============================================================================
// Numeric Context
// ============================================================================

/// Precision / scale / flavor requirements of an amount.
///
/// Immutable once built; use [`NumericContext::builder`] or
/// [`NumericContext::to_builder`] to derive a modified copy.
///
/// # Example
/// ```
/// use monetary_amount::domain::{AmountFlavor, NumericContext};
///
/// let ctx = NumericContext::builder()
///     .with_precision(19)
///     .with_max_scale(5)
///     .with_flavor(AmountFlavor::Performance)
///     .build();
/// assert_eq!(ctx.precision(), 19);
/// assert!(!ctx.is_unbounded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericContext {
    /// Significant digits, 0 = unbounded
    precision: u32,
    /// Upper bound on fractional digits
    max_scale: i32,
    amount_flavor: AmountFlavor,
    amount_type: Option<AmountType>,
    attributes: ContextAttributes,
}

impl NumericContext {
    /// Start building a context (unbounded precision, unbounded scale,
    /// undefined flavor).
    pub fn builder() -> NumericContextBuilder {
        NumericContextBuilder::new()
    }

    /// Unbounded precision and scale, undefined flavor
    pub fn unbounded() -> Self {
        NumericContextBuilder::new().build()
    }

    /// Copy this context into a builder
    pub fn to_builder(&self) -> NumericContextBuilder {
        NumericContextBuilder {
            context: self.clone(),
        }
    }

    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub fn max_scale(&self) -> i32 {
        self.max_scale
    }

    #[inline]
    pub fn amount_flavor(&self) -> AmountFlavor {
        self.amount_flavor
    }

    #[inline]
    pub fn amount_type(&self) -> Option<&AmountType> {
        self.amount_type.as_ref()
    }

    #[inline]
    pub fn attributes(&self) -> &ContextAttributes {
        &self.attributes
    }

    /// Whether the precision is unbounded (0)
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.precision == 0
    }
}

impl Default for NumericContext {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl fmt::Display for NumericContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NumericContext[precision={}, maxScale={}, flavor={:?}",
            self.precision, self.max_scale, self.amount_flavor
        )?;
        if let Some(amount_type) = &self.amount_type {
            write!(f, ", amountType={}", amount_type)?;
        }
        if let Some(mode) = self.attributes.rounding_mode {
            write!(f, ", roundingMode={}", mode)?;
        }
        if let Some(math_context) = self.attributes.math_context {
            write!(f, ", mathContext=({})", math_context)?;
        }
        f.write_str("]")
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for [`NumericContext`]
#[derive(Debug, Clone)]
pub struct NumericContextBuilder {
    context: NumericContext,
}

impl NumericContextBuilder {
    pub fn new() -> Self {
        Self {
            context: NumericContext {
                precision: 0,
                max_scale: i32::MAX,
                amount_flavor: AmountFlavor::Undefined,
                amount_type: None,
                attributes: ContextAttributes::default(),
            },
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.context.precision = precision;
        self
    }

    pub fn with_max_scale(mut self, max_scale: i32) -> Self {
        self.context.max_scale = max_scale;
        self
    }

    pub fn with_flavor(mut self, flavor: AmountFlavor) -> Self {
        self.context.amount_flavor = flavor;
        self
    }

    /// Request a specific amount implementation
    pub fn with_amount_type(mut self, amount_type: AmountType) -> Self {
        self.context.amount_type = Some(amount_type);
        self
    }

    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.context.attributes.rounding_mode = Some(mode);
        self
    }

    pub fn with_math_context(mut self, math_context: MathContext) -> Self {
        self.context.attributes.math_context = Some(math_context);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.attributes.custom.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> NumericContext {
        self.context
    }
}

impl Default for NumericContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
