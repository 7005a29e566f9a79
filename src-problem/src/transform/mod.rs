//! Instance transformation pipeline
//!
//! Pure functions mapping a raw candidate and a set of instance parameters
//! into the transformed candidate actually passed to the base formula, and
//! mapping the raw objective value back out. Continuous problems use the
//! shift/scale/rotation chain in [`continuous`]; pseudo-boolean problems use
//! the bit-level maps in [`discrete`].

pub mod continuous;
pub mod discrete;

pub use continuous::{affine, inverse_affine, rotate};
pub use discrete::{RuggednessKind, dummy_mask, epistasis, neutrality, ruggedness, select};
