//! Welford's online mean/variance over arbitrary-precision relative errors.
//!
//! The quantities being accumulated are themselves tiny relative errors, so
//! naively summing squares would cancel catastrophically. Welford's update
//! keeps both the running mean and the running sum of squared deviations
//! (`m2`) numerically stable, and all arithmetic happens at the working
//! precision of the engine.

use rug::Float;

use crate::types::{Distribution, Evaluator};

/// Running relative-error statistics for one (distribution, evaluator) cell.
///
/// Created once per cell at engine construction, updated once per observed
/// sample, and read non-destructively whenever a report is requested.
///
/// A reference value of exact zero (sine of `x = +0`) makes the relative
/// error non-finite; this is deliberately not guarded, and a single such
/// sample permanently poisons the cell's mean and variance. See the crate
/// docs for the rationale.
#[derive(Debug, Clone)]
pub struct ErrorStats {
    distribution: Distribution,
    evaluator: Evaluator,
    n: u64,
    mean: Float,
    m2: Float,
}

impl ErrorStats {
    /// Create a zeroed accumulator for one cell at `precision` bits.
    pub fn new(distribution: Distribution, evaluator: Evaluator, precision: u32) -> Self {
        Self {
            distribution,
            evaluator,
            n: 0,
            mean: Float::with_val(precision, 0),
            m2: Float::with_val(precision, 0),
        }
    }

    /// Distribution tag of this cell.
    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    /// Evaluator tag of this cell.
    pub fn evaluator(&self) -> Evaluator {
        self.evaluator
    }

    /// Number of samples recorded so far.
    pub fn samples(&self) -> u64 {
        self.n
    }

    /// Fold one `(observed, reference)` pair into the running statistics.
    ///
    /// Computes `reldiff = (observed - reference) / |reference|` and applies
    /// Welford's update; the `m2` step uses a fused multiply-add so the
    /// product rounds only once.
    pub fn record(&mut self, observed: &Float, reference: &Float) {
        let prec = self.mean.prec();
        self.n += 1;

        let diff = Float::with_val(prec, observed - reference);
        let magnitude = Float::with_val(prec, reference.abs_ref());
        let reldiff = Float::with_val(prec, &diff / &magnitude);

        let delta = Float::with_val(prec, &reldiff - &self.mean);
        self.mean += Float::with_val(prec, &delta / self.n);
        let delta2 = Float::with_val(prec, &reldiff - &self.mean);
        self.m2 = delta.mul_add(&delta2, &self.m2);
    }

    /// Non-destructive snapshot of this cell.
    ///
    /// Variance uses the `n - 1` divisor. With fewer than two samples the
    /// variance and standard deviation are undefined and reported as `None`
    /// rather than a stale or zero value.
    pub fn report(&self) -> Report {
        let prec = self.mean.prec();
        let variance =
            (self.n > 1).then(|| Float::with_val(prec, &self.m2 / (self.n - 1)));
        let stddev = variance
            .as_ref()
            .map(|v| Float::with_val(prec, v.sqrt_ref()));
        Report {
            distribution: self.distribution,
            evaluator: self.evaluator,
            samples: self.n,
            mean: self.mean.clone(),
            variance,
            stddev,
        }
    }
}

/// Read-only snapshot of one cell's statistics.
#[derive(Debug, Clone)]
pub struct Report {
    /// Distribution tag of the cell.
    pub distribution: Distribution,
    /// Evaluator tag of the cell.
    pub evaluator: Evaluator,
    /// Number of samples recorded.
    pub samples: u64,
    /// Running mean of the relative error.
    pub mean: Float,
    /// Sample variance (`m2 / (n - 1)`); `None` when fewer than two samples.
    pub variance: Option<Float>,
    /// Square root of the variance; `None` when the variance is undefined.
    pub stddev: Option<Float>,
}
