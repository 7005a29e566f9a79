//! Continuous shift/scale/rotation chain
//!
//! The forward chain is, in fixed order: subtract the instance shift,
//! multiply uniformly by the function's shrink rate, rotate, then reorder
//! the coordinates through the instance shuffle (the hybrid evaluation
//! order). Rotation with the flag disabled is a strict identity: no matrix
//! product runs at all, which keeps unrotated problems O(N) per evaluation.
//! The shuffle is likewise skipped entirely when absent.

use ndarray::{Array1, Array2};

use crate::instance::InstanceParameters;

/// Row-major matrix-vector product `m · x`.
pub fn rotate(m: &Array2<f64>, x: &Array1<f64>) -> Array1<f64> {
    m.dot(x)
}

/// Forward transform: raw candidate -> coordinates of the base formula.
pub fn affine(x: &Array1<f64>, params: &InstanceParameters, shrink_rate: f64) -> Array1<f64> {
    let mut z = if params.shift_enabled {
        x - &params.shift
    } else {
        x.clone()
    };

    if shrink_rate != 1.0 {
        z.mapv_inplace(|v| v * shrink_rate);
    }

    let z = match &params.rotation {
        Some(r) => rotate(r, &z),
        None => z,
    };

    match &params.shuffle {
        Some(order) => Array1::from_shape_fn(z.len(), |i| z[order[i]]),
        None => z,
    }
}

/// Inverse transform: base-formula optimum -> raw-space optimum.
///
/// The rotation matrix is orthogonal, so its inverse is its transpose. This
/// is how the known untransformed optimum is pushed through the chain once at
/// construction time.
pub fn inverse_affine(x0: &Array1<f64>, params: &InstanceParameters, shrink_rate: f64) -> Array1<f64> {
    let unshuffled = match &params.shuffle {
        Some(order) => {
            let mut out = Array1::zeros(x0.len());
            for (i, &oi) in order.iter().enumerate() {
                out[oi] = x0[i];
            }
            out
        }
        None => x0.clone(),
    };

    let mut z = match &params.rotation {
        Some(r) => r.t().dot(&unshuffled),
        None => unshuffled,
    };

    if shrink_rate != 1.0 {
        z.mapv_inplace(|v| v / shrink_rate);
    }

    if params.shift_enabled {
        z += &params.shift;
    }
    z
}
