//! Composite landscapes
//!
//! A composite landscape blends several base functions through distance-based
//! nonlinear weights: near a component's anchor the blend is dominated by that
//! component, far away the weights mix. The shared shift/scale/rotation
//! preprocessing of the instance pipeline runs before this combination.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{multimodal, unimodal};

/// One weighted component of a composite landscape.
#[derive(Debug, Clone)]
pub struct Component {
    /// Base formula of the component
    pub base: fn(&Array1<f64>) -> f64,
    /// Anchor point the component is centered on
    pub anchor: Array1<f64>,
    /// Width of the component's basin of influence
    pub sigma: f64,
    /// Multiplicative stretch of the component's values
    pub lambda: f64,
    /// Additive offset separating the component's basin from the others
    pub bias: f64,
}

/// A nonlinear weighted combination of base landscapes.
#[derive(Debug, Clone)]
pub struct CompositeLandscape {
    components: Vec<Component>,
}

impl CompositeLandscape {
    /// Build a composite from explicit components. At least one is required.
    pub fn new(components: Vec<Component>) -> Self {
        assert!(!components.is_empty(), "composite needs >= 1 component");
        Self { components }
    }

    /// The standard three-component blend (rastrigin, griewank, sphere) with
    /// anchors drawn reproducibly from `seed` inside [-80, 80]^n.
    pub fn standard(dimension: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut anchor =
            |rng: &mut StdRng| Array1::from_shape_fn(dimension, |_| rng.random_range(-80.0..80.0));

        Self::new(vec![
            Component {
                base: multimodal::rastrigin,
                anchor: anchor(&mut rng),
                sigma: 10.0,
                lambda: 1.0,
                bias: 0.0,
            },
            Component {
                base: multimodal::griewank,
                anchor: anchor(&mut rng),
                sigma: 20.0,
                lambda: 10.0,
                bias: 100.0,
            },
            Component {
                base: unimodal::sphere,
                anchor: anchor(&mut rng),
                sigma: 30.0,
                lambda: 1e-2,
                bias: 200.0,
            },
        ])
    }

    /// Anchor of the best component (bias 0), i.e. the raw optimum location.
    pub fn raw_optimum(&self) -> Array1<f64> {
        self.components
            .iter()
            .min_by(|a, b| a.bias.total_cmp(&b.bias))
            .map(|c| c.anchor.clone())
            .expect("composite needs >= 1 component")
    }

    /// Evaluate the blend at `x`.
    pub fn evaluate(&self, x: &Array1<f64>) -> f64 {
        let n = x.len() as f64;
        let mut weights = Vec::with_capacity(self.components.len());
        let mut distances = Vec::with_capacity(self.components.len());

        for c in &self.components {
            let d2: f64 = x
                .iter()
                .zip(c.anchor.iter())
                .map(|(&xi, &oi)| (xi - oi).powi(2))
                .sum();
            if d2 == 0.0 {
                // sitting exactly on an anchor, that component wins outright
                let local = x - &c.anchor;
                return c.lambda * (c.base)(&local) + c.bias;
            }
            distances.push(d2);
            weights.push((1.0 / d2.sqrt()) * (-d2 / (2.0 * n * c.sigma.powi(2))).exp());
        }

        let total: f64 = weights.iter().sum();
        if total == 0.0 {
            // far enough out that every weight underflowed; the nearest
            // component decides instead of a 0/0 blend
            let nearest = distances
                .iter()
                .enumerate()
                .min_by(|a, b| a.1.total_cmp(b.1))
                .map(|(i, _)| i)
                .unwrap_or(0);
            let c = &self.components[nearest];
            let local = x - &c.anchor;
            return c.lambda * (c.base)(&local) + c.bias;
        }

        let mut value = 0.0;
        for (c, w) in self.components.iter().zip(weights.iter()) {
            let local = x - &c.anchor;
            value += (w / total) * (c.lambda * (c.base)(&local) + c.bias);
        }
        value
    }
}
