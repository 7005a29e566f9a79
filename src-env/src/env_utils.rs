//! Environment variable utilities for Optbench
//!
//! This module provides utilities for handling environment variables,
//! particularly the OPTBENCH_DATA variable that points to the root of the
//! static transformation-parameter tables.

use crate::constants::DATA_ROOT_ENV;
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "OPTBENCH_DATA environment variable is not set. Please set it to the benchmark data root directory (e.g., export OPTBENCH_DATA=/path/to/optbench/static)"
    )]
    DataRootNotSet,

    #[error("OPTBENCH_DATA points to a non-existent directory: {0}")]
    DataRootNotFound(PathBuf),

    #[error("suite version directory does not exist: {0}")]
    SuiteVersionNotFound(PathBuf),
}

/// Get the OPTBENCH_DATA environment variable and validate it exists
///
/// # Returns
///
/// Returns the path to the benchmark data root directory.
///
/// # Errors
///
/// Returns an error if:
/// - OPTBENCH_DATA is not set
/// - OPTBENCH_DATA points to a non-existent directory
pub fn get_data_root() -> Result<PathBuf, EnvError> {
    let data_root = env::var(DATA_ROOT_ENV).map_err(|_| EnvError::DataRootNotSet)?;

    let path = PathBuf::from(data_root);

    if !path.exists() {
        return Err(EnvError::DataRootNotFound(path));
    }

    Ok(path)
}

/// Get the directory holding the tables of one suite version
///
/// Static tables are laid out as `<data-root>/<suite-version>/...`, so for
/// example the 2022 tables of function 1 in dimension 10 live at
/// `<data-root>/2022/M_1_D10.txt` and `<data-root>/2022/shift_data_1.txt`.
///
/// # Errors
///
/// Returns an error if the versioned subdirectory does not exist.
pub fn suite_data_dir(data_root: &Path, suite_version: &str) -> Result<PathBuf, EnvError> {
    let dir = data_root.join(suite_version);

    if !dir.is_dir() {
        return Err(EnvError::SuiteVersionNotFound(dir));
    }

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_data_root_not_set() {
        // Temporarily remove OPTBENCH_DATA if it exists
        let original = env::var(DATA_ROOT_ENV).ok();
        unsafe { env::remove_var(DATA_ROOT_ENV) };

        let result = get_data_root();
        assert!(matches!(result, Err(EnvError::DataRootNotSet)));

        // Restore original value if it existed
        if let Some(value) = original {
            unsafe { env::set_var(DATA_ROOT_ENV, value) };
        }
    }

    #[test]
    fn test_data_root_nonexistent() {
        let original = env::var(DATA_ROOT_ENV).ok();
        unsafe { env::set_var(DATA_ROOT_ENV, "/this/path/should/not/exist") };

        let result = get_data_root();
        assert!(matches!(result, Err(EnvError::DataRootNotFound(_))));

        // Restore original value
        if let Some(value) = original {
            unsafe { env::set_var(DATA_ROOT_ENV, value) };
        } else {
            unsafe { env::remove_var(DATA_ROOT_ENV) };
        }
    }

    #[test]
    fn test_suite_data_dir_missing_version() {
        let tmp = env::temp_dir();
        let result = suite_data_dir(&tmp, "no_such_suite_version");
        assert!(matches!(result, Err(EnvError::SuiteVersionNotFound(_))));
    }
}
