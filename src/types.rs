//! Closed variant sets for sample distributions and candidate evaluators.
//!
//! Both sets are deliberately small and closed: dispatch goes through an
//! exhaustive `match`, so adding a variant forces every call site to handle
//! it. The declared order of `ALL` is the fixed enumeration order used for
//! the statistics matrix and for report output.

use crate::constants::{DOUBLE_PREC, EXTENDED_PREC, QUAD_PREC, SINGLE_PREC};

/// Input sample distribution over single-precision floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Random bit patterns below the pattern of pi/2, reinterpreted as
    /// floats. Covers `[+0, pi/2)` with density skewed towards zero by the
    /// bit-pattern spacing.
    BiasedSmall,
    /// Uniform 23-bit grid over `[+0, pi/2)`; every produced value is an
    /// exact multiple of `2^-23`.
    UniformSmall,
    /// All finite floats, denormals included; NaN and infinities are
    /// resampled away.
    FullRange,
}

impl Distribution {
    /// Every distribution, in the fixed enumeration order used for the
    /// statistics matrix and for reports.
    pub const ALL: [Distribution; 3] = [
        Distribution::BiasedSmall,
        Distribution::UniformSmall,
        Distribution::FullRange,
    ];

    /// Number of distribution variants.
    pub const COUNT: usize = Self::ALL.len();

    /// Human-readable name used in report records.
    pub fn name(self) -> &'static str {
        match self {
            Distribution::BiasedSmall => "+0 <= x < pi/2, non-uniform",
            Distribution::UniformSmall => "+0 <= x < pi/2, uniform",
            Distribution::FullRange => "all floats",
        }
    }
}

/// Candidate sine evaluator, one per native precision tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evaluator {
    /// IEEE binary32: `f32::sin`.
    Single,
    /// IEEE binary64: `f64::sin`.
    Double,
    /// x87 80-bit extended tier (64-bit significand). Stable Rust has no
    /// native 80-bit float, so the tier is emulated with a correctly-rounded
    /// MPFR sine at 64 bits.
    Extended,
    /// IEEE binary128 tier (113-bit significand), emulated the same way.
    Quad,
}

impl Evaluator {
    /// Every evaluator, in the fixed enumeration order used for the
    /// statistics matrix and for reports.
    pub const ALL: [Evaluator; 4] = [
        Evaluator::Single,
        Evaluator::Double,
        Evaluator::Extended,
        Evaluator::Quad,
    ];

    /// Number of evaluator variants.
    pub const COUNT: usize = Self::ALL.len();

    /// Human-readable name used in report records.
    pub fn name(self) -> &'static str {
        match self {
            Evaluator::Single => "single",
            Evaluator::Double => "double",
            Evaluator::Extended => "extended",
            Evaluator::Quad => "quad",
        }
    }

    /// Significand width, in bits, of this tier.
    pub fn precision(self) -> u32 {
        match self {
            Evaluator::Single => SINGLE_PREC,
            Evaluator::Double => DOUBLE_PREC,
            Evaluator::Extended => EXTENDED_PREC,
            Evaluator::Quad => QUAD_PREC,
        }
    }
}
