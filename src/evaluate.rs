//! Candidate sine evaluators and the high-precision reference.
//!
//! Every evaluator computes sine at its tier's precision and then widens the
//! result into a working-precision [`Float`]. The widening step is exact: a
//! value with a 24/53/64/113-bit significand embeds losslessly into any
//! wider significand, so the only rounding in an evaluator's output is the
//! rounding performed by the tier's own sine.

use rug::Float;

use crate::constants::{EXTENDED_PREC, QUAD_PREC};
use crate::types::Evaluator;

impl Evaluator {
    /// Compute this tier's sine of `x`, widened exactly to `prec` bits.
    ///
    /// The single and double tiers go through the native `f32`/`f64` libm
    /// sine. The extended and quad tiers have no native type on stable Rust
    /// and are emulated with a correctly-rounded MPFR sine at the tier's
    /// significand width (64 and 113 bits).
    pub fn evaluate(self, x: f32, prec: u32) -> Float {
        match self {
            Evaluator::Single => Float::with_val(prec, x.sin()),
            Evaluator::Double => Float::with_val(prec, (x as f64).sin()),
            Evaluator::Extended => widened_mpfr_sin(x, EXTENDED_PREC, prec),
            Evaluator::Quad => widened_mpfr_sin(x, QUAD_PREC, prec),
        }
    }
}

/// Sine rounded to `tier_prec` bits, then widened exactly to `prec` bits.
fn widened_mpfr_sin(x: f32, tier_prec: u32, prec: u32) -> Float {
    // The f32 input embeds exactly at any tier width >= 24 bits; the sin
    // call is the tier's single rounding.
    let narrow = Float::with_val(tier_prec, x).sin();
    Float::with_val(prec, &narrow)
}

/// Ground-truth sine of `x` at full working precision.
///
/// The input is first converted to the working precision (exact for any
/// `f32`), then MPFR's sine rounds once at `prec` bits. Every evaluator for
/// a given sample is measured against the same reference value.
pub fn reference_sin(x: f32, prec: u32) -> Float {
    Float::with_val(prec, x).sin()
}
