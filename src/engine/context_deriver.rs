// ============================================================================
// Context Deriver
// Turns a declared NumericContext into a concrete MathContext
// ============================================================================

use crate::domain::NumericContext;
use crate::numeric::{MathContext, RoundingMode};

/// Derive the precision-bounded rounding specification of `context`.
///
/// Resolution order:
/// 1. a math-context attribute wins outright;
/// 2. otherwise `context.precision()` with the attribute rounding mode,
///    falling back to `default_mode`, then to half-even.
///
/// Pure: `context` is only read.
pub fn derive_rounding_spec(
    context: &NumericContext,
    default_mode: Option<RoundingMode>,
) -> MathContext {
    if let Some(math_context) = context.attributes().math_context() {
        return math_context;
    }

    let mode = context
        .attributes()
        .rounding_mode()
        .or(default_mode)
        .unwrap_or(RoundingMode::HalfEven);

    MathContext::new(context.precision(), mode)
}
