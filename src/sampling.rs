//! Random sample generation for the input distributions.
//!
//! Each distribution is a stateless pure function of the RNG: the only side
//! effect is advancing the generator. Given the same RNG state, the same
//! value comes out, which is what makes whole runs reproducible from a seed.

use rand::Rng;

use crate::constants::{F32_EXP_MASK, PI_2_Q23, PI_2_SUP_BITS};
use crate::types::Distribution;

impl Distribution {
    /// Draw one single-precision sample from this distribution.
    ///
    /// Never produces NaN or an infinity. `BiasedSmall` and `UniformSmall`
    /// additionally restrict the output to `[+0, pi/2)`.
    pub fn sample<R: Rng>(self, rng: &mut R) -> f32 {
        match self {
            // A uniform draw over bit patterns is non-uniform over values:
            // each binade below pi/2 holds the same number of patterns, so
            // density piles up near zero.
            Distribution::BiasedSmall => f32::from_bits(rng.random_range(0..PI_2_SUP_BITS)),

            // Integers below 2^24 convert to f32 exactly, and dividing by a
            // power of two only changes the exponent, so every step here is
            // exact.
            Distribution::UniformSmall => {
                rng.random_range(0..PI_2_Q23) as f32 / (1u32 << 23) as f32
            }

            // Rejection-sample the all-ones exponent field (NaN/Inf).
            // Denormals stay in.
            Distribution::FullRange => loop {
                let bits = rng.random::<u32>();
                if bits & F32_EXP_MASK != F32_EXP_MASK {
                    break f32::from_bits(bits);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn rng(seed: u64) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(seed)
    }

    #[test]
    fn biased_small_stays_below_pi_2() {
        let sup = f32::from_bits(PI_2_SUP_BITS);
        let mut rng = rng(7);
        for _ in 0..10_000 {
            let x = Distribution::BiasedSmall.sample(&mut rng);
            assert!(x.is_finite());
            assert!(x >= 0.0 && x < sup, "out of domain: {x}");
        }
    }

    #[test]
    fn uniform_small_is_exact_grid() {
        let mut rng = rng(8);
        for _ in 0..10_000 {
            let x = Distribution::UniformSmall.sample(&mut rng);
            assert!(x.is_finite());
            assert!(x >= 0.0 && (x as f64) < std::f64::consts::FRAC_PI_2);
            // Every value must sit exactly on the 2^-23 grid.
            let scaled = x as f64 * (1u64 << 23) as f64;
            assert_eq!(scaled, scaled.trunc(), "off-grid value: {x}");
            assert!((scaled as u32) < PI_2_Q23);
        }
    }

    #[test]
    fn full_range_excludes_nan_and_inf() {
        let mut rng = rng(9);
        for _ in 0..100_000 {
            let x = Distribution::FullRange.sample(&mut rng);
            assert!(!x.is_nan());
            assert!(!x.is_infinite());
        }
    }

    #[test]
    fn full_range_reaches_denormals_and_negatives() {
        let mut rng = rng(10);
        let mut saw_negative = false;
        let mut saw_denormal = false;
        for _ in 0..1_000_000 {
            let x = Distribution::FullRange.sample(&mut rng);
            saw_negative |= x < 0.0;
            saw_denormal |= x != 0.0 && x.abs() < f32::MIN_POSITIVE;
            if saw_negative && saw_denormal {
                return;
            }
        }
        panic!("negatives: {saw_negative}, denormals: {saw_denormal}");
    }

    #[test]
    fn sampling_is_deterministic_for_a_seed() {
        for dist in Distribution::ALL {
            let mut a = rng(42);
            let mut b = rng(42);
            for _ in 0..100 {
                assert_eq!(dist.sample(&mut a).to_bits(), dist.sample(&mut b).to_bits());
            }
        }
    }

    /// Property-based domain checks over arbitrary seeds.
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn prop_restricted_distributions_stay_in_domain(seed in any::<u64>()) {
                let sup = f32::from_bits(PI_2_SUP_BITS);
                let mut rng = rng(seed);
                for _ in 0..256 {
                    for dist in [Distribution::BiasedSmall, Distribution::UniformSmall] {
                        let x = dist.sample(&mut rng);
                        prop_assert!(x.is_finite());
                        prop_assert!(x >= 0.0 && x < sup);
                    }
                }
            }

            #[test]
            fn prop_full_range_is_always_finite(seed in any::<u64>()) {
                let mut rng = rng(seed);
                for _ in 0..1024 {
                    let x = Distribution::FullRange.sample(&mut rng);
                    prop_assert!(!x.is_nan() && !x.is_infinite());
                }
            }
        }
    }
}
