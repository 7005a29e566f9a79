//! Unimodal base functions
//!
//! Single-optimum landscapes used to measure pure convergence speed.

use ndarray::Array1;

/// Sphere function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi.powi(2)).sum::<f64>()
}

/// Zakharov function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn zakharov(x: &Array1<f64>) -> f64 {
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum_lin: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| 0.5 * (i + 1) as f64 * xi)
        .sum();
    sum_sq + sum_lin.powi(2) + sum_lin.powi(4)
}

/// Rosenbrock function - narrow curved valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-100, 100] (evaluated after a 2.048e-2 shrink)
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    let n = x.len();
    (0..n.saturating_sub(1))
        .map(|i| 100.0 * (x[i + 1] - x[i].powi(2)).powi(2) + (x[i] - 1.0).powi(2))
        .sum()
}

/// Bent Cigar function - badly conditioned along one axis
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn bent_cigar(x: &Array1<f64>) -> f64 {
    let head = x[0].powi(2);
    let tail: f64 = x.iter().skip(1).map(|&xi| xi.powi(2)).sum();
    head + 1e6 * tail
}

/// Discus function - badly conditioned along all but one axis
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn discus(x: &Array1<f64>) -> f64 {
    let head = 1e6 * x[0].powi(2);
    let tail: f64 = x.iter().skip(1).map(|&xi| xi.powi(2)).sum();
    head + tail
}

/// High-conditioned elliptic function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn elliptic(x: &Array1<f64>) -> f64 {
    let n = x.len();
    if n == 1 {
        return x[0].powi(2);
    }
    x.iter()
        .enumerate()
        .map(|(i, &xi)| 1e6_f64.powf(i as f64 / (n - 1) as f64) * xi.powi(2))
        .sum()
}
