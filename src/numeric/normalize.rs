// ============================================================================
// Numeric Normalizer
// Converts any accepted numeric input into a CanonicalDecimal
// ============================================================================

use super::canonical::CanonicalDecimal;
use super::errors::{MonetaryError, MonetaryResult};
use super::number::{NumberLike, NumberValue};
use super::rounding_mode::RoundingMode;
use crate::domain::NumericContext;
use crate::engine::derive_rounding_spec;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::str::FromStr;

/// Normalize a numeric input into canonical decimal form.
///
/// Exact kinds (integers, decimals, wrapped decimals) convert without loss.
/// Floating-point values go through their shortest round-trip text, so `0.1`
/// becomes `0.1` and not the full binary expansion.
///
/// # Errors
/// `InvalidNumber` for NaN, infinities, exponents beyond
/// [`MAX_EXPONENT`](crate::numeric::MAX_EXPONENT), or a wrapped value that
/// offers neither a decimal, a parseable text, nor a finite `f64`.
///
/// # Example
/// ```
/// use monetary_amount::numeric::normalize;
/// use num_bigint::BigInt;
///
/// let x = normalize(12.50).unwrap();
/// assert_eq!(x.scale(), 1);
/// assert_eq!(x.unscaled(), BigInt::from(125));
/// ```
pub fn normalize(input: impl Into<NumberLike>) -> MonetaryResult<CanonicalDecimal> {
    let input = input.into();
    tracing::trace!(kind = input.kind(), "normalizing numeric input");

    let raw = match input {
        NumberLike::Canonical(value) => return Ok(value),
        NumberLike::Wrapped(value) => from_wrapped(value.as_ref())?,
        NumberLike::Integral(value) => BigDecimal::new(BigInt::from(value), 0),
        NumberLike::Floating(value) => from_floating(value)?,
        NumberLike::BigInteger(value) => BigDecimal::new(value, 0),
        NumberLike::Decimal(value) => value,
    };

    CanonicalDecimal::from_big_decimal(raw)
}

/// Normalize, then apply the context's math-context override if it has one.
///
/// Without an override the result equals [`normalize`]. With one, the value is
/// rounded to the override's significant digits; half-even is the fallback mode.
pub fn normalize_with_context(
    input: impl Into<NumberLike>,
    context: &NumericContext,
) -> MonetaryResult<CanonicalDecimal> {
    let value = normalize(input)?;
    if context.attributes().math_context().is_none() {
        return Ok(value);
    }

    let math_context = derive_rounding_spec(context, Some(RoundingMode::HalfEven));
    Ok(value.round_with(&math_context))
}

fn from_floating(value: f64) -> MonetaryResult<BigDecimal> {
    if !value.is_finite() {
        return Err(MonetaryError::InvalidNumber(value.to_string()));
    }
    // f64 Display is the shortest text that round-trips, never exponent form
    let text = value.to_string();
    BigDecimal::from_str(&text).map_err(|_| MonetaryError::InvalidNumber(text))
}

fn from_wrapped(value: &dyn NumberValue) -> MonetaryResult<BigDecimal> {
    if let Some(decimal) = value.decimal_value() {
        return Ok(decimal);
    }

    let text = value.to_string();
    if let Ok(decimal) = BigDecimal::from_str(text.trim()) {
        return Ok(decimal);
    }

    match value.to_f64() {
        Some(approx) => {
            tracing::warn!(text = %text, "falling back to floating-point conversion");
            from_floating(approx)
        }
        None => Err(MonetaryError::InvalidNumber(text)),
    }
}

// ============================================================================
// Tests
// ============================================================================
