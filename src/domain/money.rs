// ============================================================================
// Money Domain Model
// A currency plus a canonical decimal number
// ============================================================================

use super::context::NumericContext;
use super::currency::CurrencyUnit;
use super::provider::{AmountType, ProviderDescriptor};
use crate::interfaces::MonetaryOperator;
use crate::numeric::{
    normalize_with_context, CanonicalDecimal, MonetaryError, MonetaryResult, NumberLike,
};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Monetary amount: currency, canonical number and the context it was created
/// under.
///
/// The number is always canonical, so two amounts with equal currency and
/// numeric value compare equal regardless of how they were constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Money {
    currency: CurrencyUnit,
    number: CanonicalDecimal,
    context: NumericContext,
}

impl Money {
    /// Create with the default `Money` context.
    ///
    /// # Errors
    /// `InvalidNumber` if the input cannot be normalized.
    pub fn new(currency: CurrencyUnit, number: impl Into<NumberLike>) -> MonetaryResult<Self> {
        let context = ProviderDescriptor::money().default_context().clone();
        Self::with_context(currency, number, context)
    }

    /// Create under an explicit context; a math-context override in the
    /// context bounds the number's precision.
    pub fn with_context(
        currency: CurrencyUnit,
        number: impl Into<NumberLike>,
        context: NumericContext,
    ) -> MonetaryResult<Self> {
        let number = normalize_with_context(number, &context)?;
        Ok(Self {
            currency,
            number,
            context,
        })
    }

    /// Assemble from an already canonical number.
    pub fn from_canonical(
        currency: CurrencyUnit,
        number: CanonicalDecimal,
        context: NumericContext,
    ) -> Self {
        Self {
            currency,
            number,
            context,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn currency(&self) -> &CurrencyUnit {
        &self.currency
    }

    #[inline]
    pub fn number(&self) -> &CanonicalDecimal {
        &self.number
    }

    #[inline]
    pub fn context(&self) -> &NumericContext {
        &self.context
    }

    /// Implementation this amount was created for, if recorded in its context
    pub fn amount_type(&self) -> Option<&AmountType> {
        self.context.amount_type()
    }

    #[inline]
    pub fn signum(&self) -> i8 {
        self.number.signum()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    /// Same currency and context, different number
    pub fn with_number(&self, number: CanonicalDecimal) -> Self {
        Self {
            currency: self.currency.clone(),
            number,
            context: self.context.clone(),
        }
    }

    // ========================================================================
    // Operators and Comparison
    // ========================================================================

    /// Apply a monetary operator, e.g. a rounding.
    pub fn with<O: MonetaryOperator + ?Sized>(&self, operator: &O) -> Self {
        operator.apply(self)
    }

    /// Fail unless `other` has the same currency code.
    ///
    /// # Errors
    /// `CurrencyMismatch` naming both codes.
    pub fn check_currency(&self, other: &Money) -> MonetaryResult<()> {
        if self.currency.code() != other.currency.code() {
            return Err(MonetaryError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                found: other.currency.code().to_string(),
            });
        }
        Ok(())
    }

    /// Numeric comparison of two amounts in the same currency.
    pub fn try_cmp(&self, other: &Money) -> MonetaryResult<Ordering> {
        self.check_currency(other)?;
        Ok(self.number.cmp(&other.number))
    }

    /// Same currency and numerically equal, ignoring contexts.
    pub fn is_equal_to(&self, other: &Money) -> MonetaryResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Equal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.number)
    }
}
