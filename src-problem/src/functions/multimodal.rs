//! Multimodal base functions
//!
//! These functions have multiple local minima and are used to measure the
//! global search capabilities of an optimizer.

use ndarray::Array1;
use std::f64::consts::PI;

/// Rastrigin function - highly multimodal, regular grid of minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100] (evaluated after a 5.12e-2 shrink)
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum: f64 = x
        .iter()
        .map(|&xi| xi.powi(2) - 10.0 * (2.0 * PI * xi).cos())
        .sum();
    10.0 * n + sum
}

/// Ackley function - nearly flat outer region, central funnel
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum_cos: f64 = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum();

    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + std::f64::consts::E
}

/// Griewank function - multimodal, challenging for large dimensions
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100] (evaluated after a 6.0 spread)
pub fn griewank(x: &Array1<f64>) -> f64 {
    let sum_squares: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let product_cos: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    1.0 + sum_squares / 4000.0 - product_cos
}

/// Lévy function
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-100, 100]
pub fn levy(x: &Array1<f64>) -> f64 {
    let w: Vec<f64> = x.iter().map(|&xi| 1.0 + (xi - 1.0) / 4.0).collect();
    let n = w.len();

    let first = (PI * w[0]).sin().powi(2);
    let middle: f64 = (0..n - 1)
        .map(|i| (w[i] - 1.0).powi(2) * (1.0 + 10.0 * (PI * w[i] + 1.0).sin().powi(2)))
        .sum();
    let last = (w[n - 1] - 1.0).powi(2) * (1.0 + (2.0 * PI * w[n - 1]).sin().powi(2));

    first + middle + last
}

/// Schwefel function - deceptive, best minima far from origin
/// Global minimum: f(x) ~= 0 at x = (420.9687..., ..., 420.9687...)
/// Bounds: x_i in [-100, 100] (evaluated after a 10.0 spread)
pub fn schwefel(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum: f64 = x.iter().map(|&xi| xi * xi.abs().sqrt().sin()).sum();
    418.9829 * n - sum
}

/// Expanded Schaffer F7 function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]; requires at least 2 dimensions
pub fn schaffer_f7(x: &Array1<f64>) -> f64 {
    let n = x.len();
    let mut sum = 0.0;
    for i in 0..n - 1 {
        let s = (x[i].powi(2) + x[i + 1].powi(2)).sqrt();
        sum += s.sqrt() + s.sqrt() * (50.0 * s.powf(0.2)).sin().powi(2);
    }
    (sum / (n - 1) as f64).powi(2)
}

/// Katsuura function - fractal-like, nowhere differentiable at the optimum
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100] (evaluated after a 5e-2 shrink)
pub fn katsuura(x: &Array1<f64>) -> f64 {
    let n = x.len();
    let nf = n as f64;
    let mut product = 1.0;

    for (i, &xi) in x.iter().enumerate() {
        let mut sum = 0.0;
        // 32 binary digits are enough for f64 precision
        for j in 1..=32 {
            let pow2 = (1u64 << j) as f64;
            sum += (pow2 * xi - (pow2 * xi).round()).abs() / pow2;
        }
        product *= (1.0 + (i + 1) as f64 * sum).powf(10.0 / nf.powf(1.2));
    }

    10.0 / nf.powi(2) * product - 10.0 / nf.powi(2)
}

/// HappyCat function
/// Global minimum: f(x) = 0 at x = (-1, -1, ..., -1)
/// Bounds: x_i in [-100, 100] (evaluated after a 5e-2 shrink)
pub fn happy_cat(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum: f64 = x.iter().sum();
    (sum_sq - n).abs().powf(0.25) + (0.5 * sum_sq + sum) / n + 0.5
}

/// HGBat function
/// Global minimum: f(x) = 0 at x = (-1, -1, ..., -1)
/// Bounds: x_i in [-100, 100] (evaluated after a 5e-2 shrink)
pub fn hgbat(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum: f64 = x.iter().sum();
    (sum_sq.powi(2) - sum.powi(2)).abs().sqrt() + (0.5 * sum_sq + sum) / n + 0.5
}
