// ============================================================================
// Amounts Configuration
// Defaults used when callers leave the amount type or rounding mode open
// ============================================================================

use super::provider::AmountType;
use crate::numeric::{MonetaryError, MonetaryResult, RoundingMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for an amount factory
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AmountsConfig {
    /// Returned by resolution when the caller gives no required context
    pub default_amount_type: AmountType,

    /// Used by currency roundings when the caller names no mode
    pub default_rounding_mode: RoundingMode,
}

impl AmountsConfig {
    /// Create a new configuration with required parameters
    pub fn new(default_amount_type: AmountType, default_rounding_mode: RoundingMode) -> Self {
        Self {
            default_amount_type,
            default_rounding_mode,
        }
    }

    /// Builder method: Set the default amount type
    pub fn with_default_amount_type(mut self, amount_type: AmountType) -> Self {
        self.default_amount_type = amount_type;
        self
    }

    /// Builder method: Set the default rounding mode
    pub fn with_default_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.default_rounding_mode = mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> MonetaryResult<()> {
        if self.default_amount_type.name().trim().is_empty() {
            return Err(MonetaryError::InvalidConfig(
                "Default amount type cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl AmountsConfig {
    /// Arbitrary-precision `Money` by default, half-up currency rounding
    pub fn precision_first() -> Self {
        Self::new(AmountType::MONEY, RoundingMode::HalfUp)
    }

    /// Fixed-width `FastMoney` by default, half-up currency rounding
    pub fn performance_first() -> Self {
        Self::new(AmountType::FAST_MONEY, RoundingMode::HalfUp)
    }
}

impl Default for AmountsConfig {
    fn default() -> Self {
        Self::precision_first()
    }
}
