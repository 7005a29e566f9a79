//! Static transformation-parameter tables
//!
//! Tables are whitespace-separated numeric files laid out as
//! `<data-root>/<suite-version>/{M_<fn>_D<dim>.txt, shift_data_<fn>.txt,
//! shuffle_data_<fn>_D<dim>.txt}`. Reading stops at the expected element
//! count or at end-of-file; a short file is an explicit
//! [`DataError::Truncated`], never a silently padded table.

use ndarray::{Array1, Array2};
use std::fs;
use std::path::Path;

use crate::error::DataError;
use optbench_env::{matrix_file_name, shift_file_name, shuffle_file_name};

/// Load the `dim x dim` rotation matrix of `function` from `dir`.
pub fn load_matrix(dir: &Path, function: u16, dimension: usize) -> Result<Array2<f64>, DataError> {
    let path = dir.join(matrix_file_name(function, dimension));
    let values = read_values(&path, dimension * dimension)?;
    // read_values guarantees exactly dimension^2 values on success
    Ok(Array2::from_shape_vec((dimension, dimension), values)
        .expect("element count checked by read_values"))
}

/// Load the shift vector of `function` from `dir`.
pub fn load_shift(dir: &Path, function: u16, dimension: usize) -> Result<Array1<f64>, DataError> {
    let path = dir.join(shift_file_name(function));
    let values = read_values(&path, dimension)?;
    Ok(Array1::from_vec(values))
}

/// Load the shuffle table of `function` from `dir`.
///
/// Files store 1-based indices; the returned permutation is 0-based. An
/// index outside `[1, dim]` is reported as a parse error.
pub fn load_shuffle(dir: &Path, function: u16, dimension: usize) -> Result<Vec<usize>, DataError> {
    let path = dir.join(shuffle_file_name(function, dimension));
    let values = read_values(&path, dimension)?;

    let mut shuffle = Vec::with_capacity(dimension);
    for &v in &values {
        let idx = v as usize;
        if v.fract() != 0.0 || idx < 1 || idx > dimension {
            return Err(DataError::Parse {
                path,
                token: format!("{}", v),
            });
        }
        shuffle.push(idx - 1);
    }
    Ok(shuffle)
}

/// Read exactly `expected` whitespace-separated numbers from `path`.
fn read_values(path: &Path, expected: usize) -> Result<Vec<f64>, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut values = Vec::with_capacity(expected);
    for token in content.split_whitespace() {
        if values.len() == expected {
            break;
        }
        let v: f64 = token.parse().map_err(|_| DataError::Parse {
            path: path.to_path_buf(),
            token: token.to_string(),
        })?;
        values.push(v);
    }

    if values.len() < expected {
        log::warn!(
            "data file {} is short: expected {} values, got {}",
            path.display(),
            expected,
            values.len()
        );
        return Err(DataError::Truncated {
            path: path.to_path_buf(),
            expected,
            got: values.len(),
        });
    }

    log::debug!("loaded {} values from {}", expected, path.display());
    Ok(values)
}
