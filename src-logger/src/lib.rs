//! Attainment histogram logging for benchmark runs
//!
//! Two pieces:
//!
//! - [`scale`]: deterministic, stateless mappings from a bounded value range
//!   to a fixed number of ordered bins (linear / log2 / log10, crossed over
//!   real and integer domains)
//! - [`histogram`]: a run-scoped logger folding every
//!   [`Observation`](optbench_problem::Observation) into a 2-D count grid
//!   keyed by (evaluation-count bin, objective-value bin)
//!
//! # Example
//!
//! ```rust
//! use optbench_logger::{HistogramLogger, IntegerLinearScale, LinearScale};
//! use optbench_problem::Observation;
//!
//! let mut logger = HistogramLogger::new(
//!     IntegerLinearScale::new(0, 1000, 20).unwrap(),
//!     LinearScale::new(0.0, 500.0, 20).unwrap(),
//! );
//! logger.start_run();
//! logger
//!     .log(&Observation { eval_count: 1, value: 42.0, best_so_far: 42.0 })
//!     .unwrap();
//! assert_eq!(logger.total(), 1);
//! ```

pub mod error;
pub mod histogram;
pub mod scale;

pub use error::LoggerError;
pub use histogram::{HistogramLogger, RunGrid};
pub use scale::{IntegerLinearScale, IntegerLogScale, LinearScale, LogBase, LogScale, Scale};
