//! Instance parameter derivation
//!
//! An instance number plus a function id and dimension deterministically
//! select one reproducible transformation of a base landscape. Parameters are
//! either derived algorithmically from a seeded generator or loaded from the
//! versioned static tables (see [`crate::data`]).

use ndarray::{Array1, Array2};
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use crate::data;
use crate::error::{DataError, ProblemError};
use crate::functions::FunctionMetadata;

/// Shift is drawn inside this fraction of the search domain, so the shifted
/// optimum never sits on the boundary.
const SHIFT_DOMAIN_FRACTION: f64 = 0.8;

/// Everything derived from `(function, instance, dimension)` that the
/// pipeline needs to transform candidates and objective values.
#[derive(Debug, Clone)]
pub struct InstanceParameters {
    /// Per-coordinate shift, length equals the dimension
    pub shift: Array1<f64>,
    /// Orthogonal rotation matrix; `None` means rotation is disabled
    pub rotation: Option<Array2<f64>>,
    /// Bijection on `[0, n)` applied as the pipeline's final coordinate
    /// reorder (the hybrid evaluation order), when present
    pub shuffle: Option<Vec<usize>>,
    /// Additive objective bias
    pub bias: f64,
    /// Whether the shift step runs at all
    pub shift_enabled: bool,
}

impl InstanceParameters {
    /// The canonical untransformed parameters: no shift, no rotation, only
    /// the per-function bias.
    pub fn canonical(dimension: usize, bias: f64) -> Self {
        Self {
            shift: Array1::zeros(dimension),
            rotation: None,
            shuffle: None,
            bias,
            shift_enabled: false,
        }
    }

    /// Whether the rotation step runs.
    pub fn rotate_enabled(&self) -> bool {
        self.rotation.is_some()
    }

    /// Derive parameters algorithmically for `(function, instance, dimension)`.
    ///
    /// Instance 1 is the canonical untransformed instance. Higher instances
    /// draw a shift inside 80% of the domain and, for rotation-enabled
    /// functions, an orthogonal matrix by Gram-Schmidt, all from a generator
    /// seeded by the `(function, instance, dimension)` triple.
    pub fn derive(meta: &FunctionMetadata, instance: usize, dimension: usize) -> Self {
        if instance <= 1 {
            return Self::canonical(dimension, meta.bias);
        }

        let seed = instance_seed(meta.id.id(), instance, dimension);
        let mut rng = StdRng::seed_from_u64(seed);

        let (lo, hi) = meta.bounds;
        let shift = if meta.shift_by_default {
            Array1::from_shape_fn(dimension, |_| {
                rng.random_range(SHIFT_DOMAIN_FRACTION * lo..SHIFT_DOMAIN_FRACTION * hi)
            })
        } else {
            Array1::zeros(dimension)
        };

        let rotation = if meta.rotate_by_default {
            Some(random_rotation(dimension, &mut rng))
        } else {
            None
        };

        Self {
            shift,
            rotation,
            shuffle: Some(random_permutation(dimension, &mut rng)),
            bias: meta.bias,
            shift_enabled: meta.shift_by_default,
        }
    }

    /// Load parameters from the static tables under `dir` instead of
    /// deriving them. Table layout and truncation handling live in
    /// [`crate::data`]. A missing shuffle table disables the hybrid
    /// ordering; every other loader error aborts construction.
    pub fn from_tables(
        meta: &FunctionMetadata,
        dimension: usize,
        dir: &Path,
    ) -> Result<Self, ProblemError> {
        let function = meta.id.id();
        let shift = data::load_shift(dir, function, dimension)?;
        let rotation = if meta.rotate_by_default {
            Some(data::load_matrix(dir, function, dimension)?)
        } else {
            None
        };
        // a shuffle table is optional, but one that exists must be whole
        let shuffle = match data::load_shuffle(dir, function, dimension) {
            Ok(order) => Some(order),
            Err(DataError::Unavailable { .. }) => None,
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            shift,
            rotation,
            shuffle,
            bias: meta.bias,
            shift_enabled: meta.shift_by_default,
        })
    }
}

/// Stable seed for `(function, instance, dimension)`.
///
/// SplitMix64-style mixing: the same triple always yields the same seed, and
/// neighboring triples yield unrelated seeds.
pub fn instance_seed(function: u16, instance: usize, dimension: usize) -> u64 {
    let mut z = (function as u64)
        .wrapping_mul(0x9e37_79b9_7f4a_7c15)
        .wrapping_add((instance as u64).wrapping_mul(0xbf58_476d_1ce4_e5b9))
        .wrapping_add((dimension as u64).wrapping_mul(0x94d0_49bb_1331_11eb));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Standard normal draw via Box-Muller.
fn gaussian(rng: &mut StdRng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300);
    let u2: f64 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Random orthogonal matrix: Gaussian entries, then Gram-Schmidt on the rows.
///
/// A degenerate draw (a row collapsing to near-zero norm during
/// orthogonalization) is retried with fresh entries.
pub fn random_rotation(n: usize, rng: &mut StdRng) -> Array2<f64> {
    loop {
        let mut m = Array2::from_shape_fn((n, n), |_| gaussian(rng));

        let mut ok = true;
        for i in 0..n {
            for j in 0..i {
                let dot: f64 = (0..n).map(|k| m[[i, k]] * m[[j, k]]).sum();
                for k in 0..n {
                    let v = m[[j, k]];
                    m[[i, k]] -= dot * v;
                }
            }
            let norm: f64 = (0..n).map(|k| m[[i, k]].powi(2)).sum::<f64>().sqrt();
            if norm < 1e-9 {
                ok = false;
                break;
            }
            for k in 0..n {
                m[[i, k]] /= norm;
            }
        }

        if ok {
            return m;
        }
    }
}

/// Uniform random permutation of `[0, n)` by Fisher-Yates.
fn random_permutation(n: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        perm.swap(i, j);
    }
    perm
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::FunctionId;

    #[test]
    fn test_instance_one_is_canonical() {
        let meta = FunctionId::Rastrigin.metadata();
        let params = InstanceParameters::derive(&meta, 1, 5);
        assert!(!params.shift_enabled);
        assert!(params.rotation.is_none());
        assert_eq!(params.shift, Array1::zeros(5));
        assert_eq!(params.bias, meta.bias);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let meta = FunctionId::Rastrigin.metadata();
        let a = InstanceParameters::derive(&meta, 3, 5);
        let b = InstanceParameters::derive(&meta, 3, 5);
        assert_eq!(a.shift, b.shift);
        assert_eq!(a.rotation, b.rotation);
        assert_eq!(a.shuffle, b.shuffle);

        let c = InstanceParameters::derive(&meta, 4, 5);
        assert_ne!(a.shift, c.shift);
    }

    #[test]
    fn test_shift_stays_inside_domain_fraction() {
        let meta = FunctionId::Ackley.metadata();
        let params = InstanceParameters::derive(&meta, 7, 20);
        for &s in params.shift.iter() {
            assert!(s.abs() <= 80.0);
        }
    }

    #[test]
    fn test_rotation_is_orthogonal() {
        let meta = FunctionId::Rastrigin.metadata();
        let params = InstanceParameters::derive(&meta, 2, 6);
        let r = params.rotation.expect("rastrigin instances rotate");
        let product = r.dot(&r.t());
        for i in 0..6 {
            for j in 0..6 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (product[[i, j]] - expected).abs() < 1e-9,
                    "R R^T [{},{}] = {}",
                    i,
                    j,
                    product[[i, j]]
                );
            }
        }
    }

    #[test]
    fn test_shuffle_is_a_bijection() {
        let meta = FunctionId::Griewank.metadata();
        let params = InstanceParameters::derive(&meta, 5, 16);
        let shuffle = params.shuffle.expect("derived instances carry a shuffle");
        let mut seen = vec![false; 16];
        for &p in &shuffle {
            assert!(p < 16);
            assert!(!seen[p]);
            seen[p] = true;
        }
    }

    #[test]
    fn test_instance_seed_is_stable() {
        assert_eq!(instance_seed(4, 2, 10), instance_seed(4, 2, 10));
        assert_ne!(instance_seed(4, 2, 10), instance_seed(4, 3, 10));
        assert_ne!(instance_seed(4, 2, 10), instance_seed(5, 2, 10));
        assert_ne!(instance_seed(4, 2, 10), instance_seed(4, 2, 11));
    }

    #[test]
    fn test_from_tables_loads_shift_and_matrix() {
        use std::fs::File;
        use std::io::Write;

        let tmp = tempfile::TempDir::new().unwrap();
        let meta = FunctionId::Rastrigin.metadata();
        let function = meta.id.id();

        let mut f = File::create(tmp.path().join(format!("shift_data_{}.txt", function))).unwrap();
        write!(f, "1.5 -2.5").unwrap();
        let mut f = File::create(tmp.path().join(format!("M_{}_D2.txt", function))).unwrap();
        write!(f, "0.0 -1.0\n1.0 0.0\n").unwrap();

        let params = InstanceParameters::from_tables(&meta, 2, tmp.path()).unwrap();
        assert_eq!(params.shift, Array1::from_vec(vec![1.5, -2.5]));
        let r = params.rotation.expect("rastrigin tables carry a matrix");
        assert_eq!(r[[0, 1]], -1.0);
        // no shuffle table on disk: hybrid ordering stays disabled
        assert!(params.shuffle.is_none());
        assert_eq!(params.bias, meta.bias);
    }

    #[test]
    fn test_from_tables_propagates_missing_files() {
        let tmp = tempfile::TempDir::new().unwrap();
        let meta = FunctionId::Sphere.metadata();
        let err = InstanceParameters::from_tables(&meta, 3, tmp.path()).unwrap_err();
        assert!(matches!(err, ProblemError::Data(_)));
    }

    #[test]
    fn test_from_tables_rejects_truncated_shuffle() {
        use crate::error::DataError;
        use std::fs::File;
        use std::io::Write;

        let tmp = tempfile::TempDir::new().unwrap();
        let meta = FunctionId::Sphere.metadata();
        let function = meta.id.id();

        let mut f = File::create(tmp.path().join(format!("shift_data_{}.txt", function))).unwrap();
        write!(f, "1.0 2.0").unwrap();
        // one value short of the dimension: must surface, never drop
        let mut f =
            File::create(tmp.path().join(format!("shuffle_data_{}_D2.txt", function))).unwrap();
        write!(f, "1").unwrap();

        let err = InstanceParameters::from_tables(&meta, 2, tmp.path()).unwrap_err();
        assert!(matches!(
            err,
            ProblemError::Data(DataError::Truncated { expected: 2, got: 1, .. })
        ));
    }
}
