//! Base landscape implementations organized by category
//!
//! This module contains the continuous base functions used by the benchmark
//! suite, organized into logical groups:
//! - `unimodal`: single-optimum functions (bowl-shaped, valley-shaped)
//! - `multimodal`: multi-optimum functions with many local minima
//! - `composite`: weighted combinations of several base landscapes
//!
//! The formulas are canonical; every reproducible variant of them is produced
//! by the instance transformation pipeline, never by editing the formulas.

pub mod composite;
pub mod metadata;
pub mod multimodal;
pub mod unimodal;

pub use composite::CompositeLandscape;
pub use metadata::{FunctionId, FunctionMetadata};
pub use multimodal::*;
pub use unimodal::*;
