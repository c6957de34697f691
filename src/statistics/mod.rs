//! Online statistics over arbitrary-precision relative errors.

mod welford;

pub use welford::{ErrorStats, Report};
