// ============================================================================
// Rounding Modes and Math Context
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How digits are discarded when a decimal is reduced to fewer digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Toward zero (truncation)
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Nearest neighbour, ties away from zero
    HalfUp,
    /// Nearest neighbour, ties toward zero
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour (banker's rounding)
    HalfEven,
}

impl From<RoundingMode> for bigdecimal::RoundingMode {
    fn from(mode: RoundingMode) -> Self {
        match mode {
            RoundingMode::Up => bigdecimal::RoundingMode::Up,
            RoundingMode::Down => bigdecimal::RoundingMode::Down,
            RoundingMode::Ceiling => bigdecimal::RoundingMode::Ceiling,
            RoundingMode::Floor => bigdecimal::RoundingMode::Floor,
            RoundingMode::HalfUp => bigdecimal::RoundingMode::HalfUp,
            RoundingMode::HalfDown => bigdecimal::RoundingMode::HalfDown,
            RoundingMode::HalfEven => bigdecimal::RoundingMode::HalfEven,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Math Context
// ============================================================================

/// Precision-bounded rounding specification: significant digits plus mode.
///
/// A precision of 0 means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MathContext {
    precision: u32,
    rounding_mode: RoundingMode,
}

impl MathContext {
    /// 7 digits, half-even
    pub const DECIMAL32: Self = Self::new(7, RoundingMode::HalfEven);

    /// 16 digits, half-even
    pub const DECIMAL64: Self = Self::new(16, RoundingMode::HalfEven);

    /// 34 digits, half-even
    pub const DECIMAL128: Self = Self::new(34, RoundingMode::HalfEven);

    /// No precision bound
    pub const UNLIMITED: Self = Self::new(0, RoundingMode::HalfUp);

    pub const fn new(precision: u32, rounding_mode: RoundingMode) -> Self {
        Self {
            precision,
            rounding_mode,
        }
    }

    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub const fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    #[inline]
    pub const fn is_unlimited(&self) -> bool {
        self.precision == 0
    }
}

impl fmt::Display for MathContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "precision={} roundingMode={}",
            self.precision, self.rounding_mode
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::CanonicalDecimal;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn round(mode: RoundingMode, value: &str) -> String {
        let value = CanonicalDecimal::from_big_decimal(BigDecimal::from_str(value).unwrap()).unwrap();
        value.round_to_scale(0, mode).to_string()
    }

    #[test]
    fn test_half_modes_on_ties() {
        assert_eq!(round(RoundingMode::HalfUp, "2.5"), "3");
        assert_eq!(round(RoundingMode::HalfUp, "-2.5"), "-3");
        assert_eq!(round(RoundingMode::HalfDown, "2.5"), "2");
        assert_eq!(round(RoundingMode::HalfDown, "-2.5"), "-2");
        assert_eq!(round(RoundingMode::HalfEven, "2.5"), "2");
        assert_eq!(round(RoundingMode::HalfEven, "3.5"), "4");
        assert_eq!(round(RoundingMode::HalfEven, "-3.5"), "-4");
    }

    #[test]
    fn test_directed_modes() {
        assert_eq!(round(RoundingMode::Up, "1.1"), "2");
        assert_eq!(round(RoundingMode::Up, "-1.1"), "-2");
        assert_eq!(round(RoundingMode::Down, "1.9"), "1");
        assert_eq!(round(RoundingMode::Down, "-1.9"), "-1");
        assert_eq!(round(RoundingMode::Ceiling, "-1.1"), "-1");
        assert_eq!(round(RoundingMode::Ceiling, "1.1"), "2");
        assert_eq!(round(RoundingMode::Floor, "-1.1"), "-2");
        assert_eq!(round(RoundingMode::Floor, "1.1"), "1");
    }

    #[test]
    fn test_below_one_negative() {
        // -0.6 rounds away from zero to -1, -0.4 toward zero
        assert_eq!(round(RoundingMode::HalfUp, "-0.6"), "-1");
        assert_eq!(round(RoundingMode::HalfUp, "-0.4"), "0");
    }

    #[test]
    fn test_maps_to_bigdecimal_modes() {
        assert_eq!(
            bigdecimal::RoundingMode::from(RoundingMode::HalfEven),
            bigdecimal::RoundingMode::HalfEven
        );
        assert_eq!(
            bigdecimal::RoundingMode::from(RoundingMode::Ceiling),
            bigdecimal::RoundingMode::Ceiling
        );
    }

    #[test]
    fn test_math_context_presets() {
        assert_eq!(MathContext::DECIMAL64.precision(), 16);
        assert_eq!(MathContext::DECIMAL64.rounding_mode(), RoundingMode::HalfEven);
        assert!(MathContext::UNLIMITED.is_unlimited());
        assert_eq!(
            MathContext::DECIMAL32.to_string(),
            "precision=7 roundingMode=HALF_EVEN"
        );
    }
}
