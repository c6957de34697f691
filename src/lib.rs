//! # sincheck
//!
//! Measure the relative numerical error of floating-point sine
//! implementations against an arbitrary-precision reference, accumulating
//! running statistics over an unbounded stream of randomly sampled inputs.
//!
//! Three input [`Distribution`]s are crossed with four candidate
//! [`Evaluator`] tiers (single, double, extended, quad). For each sample the
//! engine computes one MPFR reference sine and folds every tier's relative
//! error into its own numerically stable Welford accumulator. A run can be
//! inspected live (snapshot) or stopped cleanly via [`ControlFlags`].
//!
//! ## Quick start
//!
//! ```no_run
//! use sincheck::{ComparisonEngine, Config, ControlFlags};
//!
//! let config = Config::new().seed(1111).max_iterations(10_000);
//! let mut engine = ComparisonEngine::new(config)?;
//! let control = ControlFlags::new();
//! engine.run(&control, &mut std::io::stdout().lock())?;
//! # Ok::<(), sincheck::EngineError>(())
//! ```
//!
//! ## Known sharp edge
//!
//! A sampled input of exactly `+0` has a reference sine of exactly zero, so
//! the relative error divides by zero and permanently poisons that cell's
//! mean and variance with a non-finite value. This is intentional: the
//! engine characterizes error, it does not sanitize it.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
pub mod constants;
mod engine;
mod evaluate;
pub mod output;
mod sampling;
pub mod statistics;
mod types;

pub use config::{Config, ConfigError};
pub use engine::{ComparisonEngine, ControlFlags, EngineError};
pub use evaluate::reference_sin;
pub use output::ReportFormat;
pub use statistics::{ErrorStats, Report};
pub use types::{Distribution, Evaluator};
