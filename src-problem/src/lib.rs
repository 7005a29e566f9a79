//! Benchmark problem construction for iterative optimization heuristics
//!
//! This crate turns a small catalogue of base landscapes into reproducible,
//! instance-specific benchmark problems:
//!
//! - **functions**: the continuous base formulas and their typed metadata
//! - **pbo**: pseudo-boolean base functions and their variants
//! - **transform**: the pure instance-transformation pipeline
//!   (shift/scale/rotation for continuous problems, dummy/epistasis/
//!   neutrality/ruggedness maps at the bit level)
//! - **instance**: deterministic derivation of transformation parameters
//!   from an `(id, instance, dimension)` triple
//! - **data**: loader for versioned static parameter tables
//! - **problem**: the [`Problem`] wrapper owning counters and the
//!   precomputed optimum, emitting an [`Observation`] per evaluation
//! - **registry**: explicit id-to-constructor mapping plus [`Suite`]s
//!
//! # Example
//!
//! ```rust
//! use optbench_problem::{FunctionId, Registry};
//!
//! let registry = Registry::with_defaults();
//! let mut problem = registry.create(FunctionId::Sphere.id(), 1, 3).unwrap();
//!
//! let x = ndarray::Array1::from_vec(vec![1.0, 2.0, 2.0]);
//! let (value, observation) = problem.evaluate(&x).unwrap();
//! assert_eq!(value, 9.0);
//! assert_eq!(observation.eval_count, 1);
//! ```

pub mod data;
pub mod error;
pub mod functions;
pub mod instance;
pub mod pbo;
pub mod problem;
pub mod registry;
pub mod transform;

pub use error::{DataError, ProblemError};
pub use functions::{CompositeLandscape, FunctionId, FunctionMetadata};
pub use instance::{InstanceParameters, instance_seed};
pub use pbo::{BitProblem, PboFunctionId};
pub use problem::{Evaluable, Observation, Optimum, Problem, ProblemMeta};
pub use registry::{Constructor, Registry, Suite};
