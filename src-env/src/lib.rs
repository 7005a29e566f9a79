//! Environment utilities and constants for Optbench
//!
//! This crate centralizes how the rest of the workspace locates static
//! benchmark data (shift vectors, rotation matrices, shuffle tables) and
//! exposes the `OPTBENCH_DATA` environment variable handling.

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::{EnvError, get_data_root, suite_data_dir};
