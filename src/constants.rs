//! Hardcoded bit patterns and precision widths used throughout the crate.

/// Default deterministic seed for the sampling RNG.
///
/// Same seed + same configuration = same report, bit for bit.
pub const DEFAULT_SEED: u64 = 1111;

/// Bit pattern of the smallest `f32` greater than or equal to pi/2
/// (`0x1.921fb6p+0`). Positive floats below this pattern are exactly the
/// floats in `[+0, pi/2)`.
pub const PI_2_SUP_BITS: u32 = 0x3fc9_0fdb;

/// `round(2^23 * pi/2)`. Integers below this, divided by `2^23`, enumerate
/// the uniformly spaced grid of `[+0, pi/2)` at 23-bit granularity. Both the
/// integer-to-float conversion and the division are exact in `f32`.
pub const PI_2_Q23: u32 = 13_176_795;

/// Exponent-field mask of an `f32` bit pattern. All exponent bits set means
/// NaN or an infinity.
pub const F32_EXP_MASK: u32 = 0x7f80_0000;

/// Significand width of IEEE binary32 (including the implicit bit).
pub const SINGLE_PREC: u32 = 24;

/// Significand width of IEEE binary64.
pub const DOUBLE_PREC: u32 = 53;

/// Significand width of the x87 80-bit extended format.
pub const EXTENDED_PREC: u32 = 64;

/// Significand width of IEEE binary128.
pub const QUAD_PREC: u32 = 113;

/// Default working precision, in bits, for the reference sine and the
/// running statistics.
pub const DEFAULT_WORKING_PREC: u32 = 512;

/// Smallest accepted working precision. Anything below this cannot hold the
/// quad-tier results with headroom for the accumulator arithmetic.
pub const MIN_WORKING_PREC: u32 = 128;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pi_2_sup_is_smallest_float_at_or_above_pi_2() {
        let sup = f32::from_bits(PI_2_SUP_BITS);
        let below = f32::from_bits(PI_2_SUP_BITS - 1);
        assert!((sup as f64) >= std::f64::consts::FRAC_PI_2);
        assert!((below as f64) < std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn pi_2_q23_is_rounded_scaled_pi_2() {
        let exact = std::f64::consts::FRAC_PI_2 * (1u64 << 23) as f64;
        assert_eq!(PI_2_Q23, exact.round() as u32);
    }
}
