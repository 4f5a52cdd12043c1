// ============================================================================
// Canonical Decimal
// The single arbitrary-precision representation every component works on
// ============================================================================

use super::errors::{MonetaryError, MonetaryResult};
use super::rounding_mode::{MathContext, RoundingMode};
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use std::fmt;
use std::num::NonZeroU64;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest accepted exponent magnitude, in either direction.
pub const MAX_EXPONENT: i64 = i32::MAX as i64;

/// Arbitrary-precision decimal in canonical form.
///
/// Stored as an unscaled [`BigInt`] and a scale (`value = unscaled × 10^-scale`).
///
/// # Invariants
/// - zero is always unscaled `0` with scale `0`
/// - the scale is never negative and never above [`MAX_EXPONENT`]
/// - a value with scale > 0 has no trailing zero in its fractional part
///
/// Together these make the representation unique per numeric value, so
/// structural equality and hashing agree with numeric equality.
///
/// # Example
/// ```
/// use monetary_amount::numeric::CanonicalDecimal;
/// use num_bigint::BigInt;
///
/// let x = CanonicalDecimal::new(BigInt::from(12_500), 3).unwrap(); // 12.500
/// assert_eq!(x.scale(), 1);
/// assert_eq!(x.unscaled(), BigInt::from(125));
/// assert_eq!(x.to_string(), "12.5");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BigDecimal", into = "BigDecimal"))]
pub struct CanonicalDecimal(BigDecimal);

/// Strip trailing zeros and lift a negative exponent to scale 0.
///
/// The exponent of `value` must already be within [`MAX_EXPONENT`].
fn canonicalize(value: BigDecimal) -> BigDecimal {
    if value.is_zero() {
        return BigDecimal::zero();
    }

    let value = value.normalized();
    if value.as_bigint_and_exponent().1 < 0 {
        value.with_scale(0)
    } else {
        value
    }
}

/// Reject exponents the canonical form cannot hold.
fn check_exponent(value: &BigDecimal) -> MonetaryResult<()> {
    let (unscaled, scale) = value.as_bigint_and_exponent();
    if (-MAX_EXPONENT..=MAX_EXPONENT).contains(&scale) {
        return Ok(());
    }

    let sign = if scale > 0 { '-' } else { '+' };
    Err(MonetaryError::InvalidNumber(format!(
        "{}E{}{}",
        unscaled,
        sign,
        scale.unsigned_abs()
    )))
}

impl CanonicalDecimal {
    /// Create from an unscaled value and a scale, canonicalizing the result.
    ///
    /// # Errors
    /// `InvalidNumber` if the stripped exponent exceeds [`MAX_EXPONENT`].
    pub fn new(unscaled: BigInt, scale: i64) -> MonetaryResult<Self> {
        Self::from_big_decimal(BigDecimal::new(unscaled, scale))
    }

    /// The canonical zero (unscaled 0, scale 0).
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    /// Canonicalize an arbitrary [`BigDecimal`].
    ///
    /// # Errors
    /// `InvalidNumber` if the stripped exponent exceeds [`MAX_EXPONENT`].
    pub fn from_big_decimal(value: BigDecimal) -> MonetaryResult<Self> {
        if value.is_zero() {
            return Ok(Self::zero());
        }

        let value = value.normalized();
        check_exponent(&value)?;
        Ok(Self(canonicalize(value)))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unscaled digits including sign.
    pub fn unscaled(&self) -> BigInt {
        self.0.as_bigint_and_exponent().0
    }

    /// Number of fractional digits. Never negative.
    pub fn scale(&self) -> i64 {
        self.0.as_bigint_and_exponent().1
    }

    /// Number of significant digits in the unscaled value.
    pub fn precision(&self) -> u64 {
        if self.is_zero() {
            return 1;
        }
        self.0.digits()
    }

    /// -1, 0 or 1
    pub fn signum(&self) -> i8 {
        match self.0.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.signum() == 0
    }

    /// Borrow as a [`BigDecimal`].
    #[inline]
    pub fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    #[inline]
    pub fn into_big_decimal(self) -> BigDecimal {
        self.0
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to at most `scale` fractional digits.
    ///
    /// Values that already fit are returned unchanged, so rounding is
    /// idempotent for a fixed scale and mode.
    pub fn round_to_scale(&self, scale: u32, mode: RoundingMode) -> Self {
        let current = self.scale();
        let target = i64::from(scale);
        if current <= target {
            return self.clone();
        }

        // Every digit sits below a tenth of the last kept place
        let digits = i64::try_from(self.precision()).unwrap_or(i64::MAX);
        if current - target > digits {
            return self.round_below_tenth(target, mode);
        }

        Self(canonicalize(self.0.with_scale_round(target, mode.into())))
    }

    /// Round to at most `precision` significant digits. 0 leaves the value as is.
    pub fn round_to_precision(&self, precision: u32, mode: RoundingMode) -> Self {
        let Some(precision) = NonZeroU64::new(u64::from(precision)) else {
            return self.clone();
        };
        if self.precision() <= precision.get() {
            return self.clone();
        }

        Self(canonicalize(self.0.with_precision_round(precision, mode.into())))
    }

    /// Round with a [`MathContext`] (precision + mode).
    #[inline]
    pub fn round_with(&self, math_context: &MathContext) -> Self {
        self.round_to_precision(math_context.precision(), math_context.rounding_mode())
    }

    /// Result of rounding a non-zero value smaller than a tenth of one unit
    /// at `scale`: only the directed modes pointing away from zero move it.
    fn round_below_tenth(&self, scale: i64, mode: RoundingMode) -> Self {
        let negative = self.signum() < 0;
        let away_from_zero = match mode {
            RoundingMode::Up => true,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::Down
            | RoundingMode::HalfUp
            | RoundingMode::HalfDown
            | RoundingMode::HalfEven => false,
        };

        if !away_from_zero {
            return Self::zero();
        }
        let unit = if negative { -1 } else { 1 };
        Self(canonicalize(BigDecimal::new(BigInt::from(unit), scale)))
    }
}

impl Default for CanonicalDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for CanonicalDecimal {
    /// Plain notation, never exponent form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (unscaled, scale) = self.0.as_bigint_and_exponent();
        let digits = unscaled.abs().to_str_radix(10);
        let sign = if unscaled.is_negative() { "-" } else { "" };
        let scale = scale.max(0) as usize;

        if scale == 0 {
            write!(f, "{}{}", sign, digits)
        } else if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{}{}.{}", sign, int_part, frac_part)
        } else {
            write!(f, "{}0.{:0>width$}", sign, digits, width = scale)
        }
    }
}

impl fmt::Debug for CanonicalDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CanonicalDecimal({}, unscaled={}, scale={})",
            self,
            self.unscaled(),
            self.scale()
        )
    }
}

impl TryFrom<BigDecimal> for CanonicalDecimal {
    type Error = MonetaryError;

    fn try_from(value: BigDecimal) -> MonetaryResult<Self> {
        Self::from_big_decimal(value)
    }
}

impl From<CanonicalDecimal> for BigDecimal {
    fn from(value: CanonicalDecimal) -> Self {
        value.0
    }
}

// ============================================================================
// Tests
// ============================================================================
