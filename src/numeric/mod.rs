// ============================================================================
// Numeric Module
// Arbitrary-precision canonical decimals for monetary amounts
// ============================================================================
//
// This module provides:
// - CanonicalDecimal: unique decimal representation (zero at scale 0, no
//   trailing fractional zeros)
// - NumberLike / NumberValue: the closed set of accepted numeric inputs
// - normalize: conversion of any NumberLike into a CanonicalDecimal
// - RoundingMode / MathContext: rounding primitives
// - MonetaryError: error type shared across the crate
//
// Design principles:
// - No binary floating-point arithmetic; floats enter through their text
// - All fallible operations return Result (no panics)
// - Exhaustive matching over input kinds, no runtime fallback chain

mod canonical;
mod errors;
mod normalize;
mod number;
mod rounding_mode;

pub use canonical::{CanonicalDecimal, MAX_EXPONENT};
pub use errors::{MonetaryError, MonetaryResult};
pub use normalize::{normalize, normalize_with_context};
pub use number::{NumberLike, NumberValue};
pub use rounding_mode::{MathContext, RoundingMode};
