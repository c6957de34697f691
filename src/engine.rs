//! The comparison loop: sampling, reference computation, and fan-out.
//!
//! The engine owns the RNG and the full 3x4 matrix of [`ErrorStats`] cells
//! and runs a single logical thread of control. External parties talk to a
//! running engine only through [`ControlFlags`], which the loop polls at
//! iteration boundaries; no cell is ever observed mid-update.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, info};

use crate::config::{Config, ConfigError};
use crate::evaluate::reference_sin;
use crate::output;
use crate::statistics::{ErrorStats, Report};
use crate::types::{Distribution, Evaluator};

/// Errors surfaced by [`ComparisonEngine`].
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Writing a report to the output sink failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Level-triggered cooperative control flags for a running engine.
///
/// Both flags may be set from any thread, including an async signal handler;
/// the setters only store to atomics. The engine polls them between outer
/// iterations, never inside a `record` or a report, so a report always
/// observes a consistent snapshot of every cell.
#[derive(Debug, Default)]
pub struct ControlFlags {
    stop: AtomicBool,
    snapshot: AtomicBool,
}

impl ControlFlags {
    /// Create cleared flags. `const` so the binary can keep a `static` set
    /// from its signal handlers.
    pub const fn new() -> Self {
        Self {
            stop: AtomicBool::new(false),
            snapshot: AtomicBool::new(false),
        }
    }

    /// Ask the engine to finish the current iteration, write the final
    /// report, and return.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Ask the engine for one non-destructive report without stopping.
    pub fn request_snapshot(&self) {
        self.snapshot.store(true, Ordering::Relaxed);
    }

    /// Whether a stop has been requested.
    pub fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Consume a pending snapshot request, if any.
    fn take_snapshot(&self) -> bool {
        self.snapshot.swap(false, Ordering::Relaxed)
    }
}

/// Drives the infinite sampling loop over the distribution x evaluator matrix.
pub struct ComparisonEngine {
    config: Config,
    rng: Xoshiro256PlusPlus,
    cells: [[ErrorStats; Evaluator::COUNT]; Distribution::COUNT],
    iterations: u64,
}

impl ComparisonEngine {
    /// Build an engine with one zeroed cell per (distribution, evaluator)
    /// pair and an RNG seeded from the configuration.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let prec = config.precision;
        let cells = std::array::from_fn(|d| {
            std::array::from_fn(|e| {
                ErrorStats::new(Distribution::ALL[d], Evaluator::ALL[e], prec)
            })
        });
        Ok(Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(config.seed),
            config,
            cells,
            iterations: 0,
        })
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Completed outer iterations (samples drawn per distribution).
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Run one outer iteration: for each distribution, draw one sample,
    /// compute the shared reference sine, and record every evaluator's
    /// result against it.
    ///
    /// The reference is computed once per sample and shared read-only across
    /// evaluators, so all four are measured against the same ground truth.
    pub fn step(&mut self) {
        let prec = self.config.precision;
        for (d, dist) in Distribution::ALL.into_iter().enumerate() {
            let x = dist.sample(&mut self.rng);
            let reference = reference_sin(x, prec);
            for (e, ev) in Evaluator::ALL.into_iter().enumerate() {
                let observed = ev.evaluate(x, prec);
                self.cells[d][e].record(&observed, &reference);
            }
        }
        self.iterations += 1;
    }

    /// Snapshot every cell, in the fixed (distribution, evaluator) order.
    pub fn reports(&self) -> Vec<Report> {
        self.cells
            .iter()
            .flatten()
            .map(ErrorStats::report)
            .collect()
    }

    /// Write a full report of every cell to `out` in the configured format.
    pub fn write_report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        output::write_reports(out, &self.reports(), self.config.format)
    }

    /// Run until a stop is requested or the configured iteration cap is
    /// reached, then write one final unconditional report.
    ///
    /// Control flags are polled once per outer iteration. A pending snapshot
    /// request produces one non-destructive report between iterations and is
    /// then cleared. Stopping never loses samples: the final report reflects
    /// every sample processed.
    pub fn run<W: Write>(&mut self, control: &ControlFlags, out: &mut W) -> Result<(), EngineError> {
        loop {
            if control.stop_requested() {
                info!(iterations = self.iterations, "stop requested");
                break;
            }
            if let Some(limit) = self.config.max_iterations {
                if self.iterations >= limit {
                    info!(iterations = self.iterations, "iteration cap reached");
                    break;
                }
            }
            self.step();
            if control.take_snapshot() {
                debug!(iterations = self.iterations, "snapshot requested");
                self.write_report(out)?;
            }
        }
        self.write_report(out)?;
        Ok(())
    }
}
