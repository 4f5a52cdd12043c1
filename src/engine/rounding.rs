// ============================================================================
// Default Rounding
// Currency-aware rounding to a fixed scale
// ============================================================================

use crate::domain::{CurrencyUnit, Money};
use crate::interfaces::MonetaryOperator;
use crate::numeric::{CanonicalDecimal, MonetaryError, MonetaryResult, RoundingMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed scale plus rounding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundingSpec {
    pub scale: u32,
    pub mode: RoundingMode,
}

impl RoundingSpec {
    /// Round `value` to `scale` fractional digits. The result stays canonical,
    /// so trailing zeros introduced by the scale are not kept.
    #[inline]
    pub fn round(&self, value: &CanonicalDecimal) -> CanonicalDecimal {
        value.round_to_scale(self.scale, self.mode)
    }
}

/// Stateless rounding operator.
///
/// Holds only its scale and mode, so one instance can be shared freely
/// between threads.
///
/// # Example
/// ```
/// use monetary_amount::domain::{CurrencyUnit, Money};
/// use monetary_amount::engine::DefaultRounding;
///
/// let chf = CurrencyUnit::new("CHF", 2);
/// let rounding = DefaultRounding::for_currency(&chf);
/// let amount = Money::new(chf, 10.125).unwrap();
/// assert_eq!(amount.with(&rounding).to_string(), "CHF 10.13");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultRounding {
    spec: RoundingSpec,
}

impl DefaultRounding {
    /// Round to `scale` digits with `mode`. Negative scales are treated as 0.
    pub fn new(scale: i32, mode: RoundingMode) -> Self {
        Self {
            spec: RoundingSpec {
                scale: scale.max(0) as u32,
                mode,
            },
        }
    }

    /// Like [`new`](Self::new) with the mode supplied from an optional source.
    ///
    /// # Errors
    /// `MissingArgument` when `mode` is `None`.
    pub fn try_new(scale: i32, mode: Option<RoundingMode>) -> MonetaryResult<Self> {
        let mode = mode.ok_or(MonetaryError::MissingArgument("rounding mode"))?;
        Ok(Self::new(scale, mode))
    }

    /// Round to the currency's default fraction digits, half-up.
    pub fn for_currency(currency: &CurrencyUnit) -> Self {
        Self::new(currency.default_fraction_digits(), RoundingMode::HalfUp)
    }

    /// Round to the currency's default fraction digits with `mode`.
    pub fn for_currency_with_mode(currency: &CurrencyUnit, mode: RoundingMode) -> Self {
        Self::new(currency.default_fraction_digits(), mode)
    }

    #[inline]
    pub fn scale(&self) -> u32 {
        self.spec.scale
    }

    #[inline]
    pub fn mode(&self) -> RoundingMode {
        self.spec.mode
    }

    #[inline]
    pub fn spec(&self) -> RoundingSpec {
        self.spec
    }
}

impl MonetaryOperator for DefaultRounding {
    fn apply(&self, amount: &Money) -> Money {
        amount.with_number(self.spec.round(amount.number()))
    }
}
