// ============================================================================
// Numeric Inputs
// Closed set of numeric kinds accepted by the normalizer
// ============================================================================

use super::canonical::CanonicalDecimal;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A value that already carries (or can describe) a decimal number.
///
/// Implementors are unwrapped through [`decimal_value`](Self::decimal_value)
/// first. When that returns `None` the normalizer parses the `Display` text,
/// and as a last resort converts [`to_f64`](Self::to_f64).
pub trait NumberValue: fmt::Debug + fmt::Display + Send + Sync {
    /// Exact decimal accessor
    fn decimal_value(&self) -> Option<BigDecimal>;

    /// Binary floating-point approximation, used only when nothing else works
    fn to_f64(&self) -> Option<f64> {
        None
    }
}

impl NumberValue for rust_decimal::Decimal {
    fn decimal_value(&self) -> Option<BigDecimal> {
        Some(BigDecimal::new(
            BigInt::from(self.mantissa()),
            i64::from(self.scale()),
        ))
    }

    fn to_f64(&self) -> Option<f64> {
        use rust_decimal::prelude::ToPrimitive;
        ToPrimitive::to_f64(self)
    }
}

/// Every numeric kind the normalizer understands.
#[derive(Debug, Clone)]
pub enum NumberLike {
    /// Fixed-width whole numbers (all primitive integers up to 64 bits, and i128)
    Integral(i128),
    /// Binary floating point
    Floating(f64),
    /// Arbitrary-width whole numbers
    BigInteger(BigInt),
    /// Arbitrary-precision decimal, not yet canonical
    Decimal(BigDecimal),
    /// Already canonical; passed through untouched
    Canonical(CanonicalDecimal),
    /// Decimal-capable wrapper with its own accessor
    Wrapped(Arc<dyn NumberValue>),
}

impl NumberLike {
    /// Wrap any [`NumberValue`] implementor.
    pub fn wrap<V: NumberValue + 'static>(value: V) -> Self {
        NumberLike::Wrapped(Arc::new(value))
    }

    /// Short name of the kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            NumberLike::Integral(_) => "integral",
            NumberLike::Floating(_) => "floating",
            NumberLike::BigInteger(_) => "big-integer",
            NumberLike::Decimal(_) => "decimal",
            NumberLike::Canonical(_) => "canonical",
            NumberLike::Wrapped(_) => "wrapped",
        }
    }
}

macro_rules! impl_from_integral {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumberLike {
                #[inline]
                fn from(value: $t) -> Self {
                    NumberLike::Integral(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integral!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for NumberLike {
    #[inline]
    fn from(value: isize) -> Self {
        NumberLike::Integral(value as i128)
    }
}

impl From<usize> for NumberLike {
    #[inline]
    fn from(value: usize) -> Self {
        NumberLike::Integral(value as i128)
    }
}

impl From<u128> for NumberLike {
    fn from(value: u128) -> Self {
        NumberLike::BigInteger(BigInt::from(value))
    }
}

impl From<f64> for NumberLike {
    #[inline]
    fn from(value: f64) -> Self {
        NumberLike::Floating(value)
    }
}

impl From<f32> for NumberLike {
    /// Goes through the shortest `f32` text so `0.1f32` does not widen to
    /// `0.100000001490116...`.
    fn from(value: f32) -> Self {
        let widened = f64::from_str(&value.to_string()).unwrap_or(f64::from(value));
        NumberLike::Floating(widened)
    }
}

impl From<BigInt> for NumberLike {
    fn from(value: BigInt) -> Self {
        NumberLike::BigInteger(value)
    }
}

impl From<BigDecimal> for NumberLike {
    fn from(value: BigDecimal) -> Self {
        NumberLike::Decimal(value)
    }
}

impl From<CanonicalDecimal> for NumberLike {
    fn from(value: CanonicalDecimal) -> Self {
        NumberLike::Canonical(value)
    }
}

impl From<&CanonicalDecimal> for NumberLike {
    fn from(value: &CanonicalDecimal) -> Self {
        NumberLike::Canonical(value.clone())
    }
}

impl From<rust_decimal::Decimal> for NumberLike {
    fn from(value: rust_decimal::Decimal) -> Self {
        NumberLike::wrap(value)
    }
}

impl From<Arc<dyn NumberValue>> for NumberLike {
    fn from(value: Arc<dyn NumberValue>) -> Self {
        NumberLike::Wrapped(value)
    }
}
