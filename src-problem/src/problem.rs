//! Problem wrapper: base landscape + instance transformation + run counters
//!
//! A [`Problem`] owns one base evaluable function and one set of
//! instance-derived parameters. Every evaluation runs the full pipeline,
//! bumps the evaluation counter and hands back an [`Observation`] record —
//! the caller forwards observations to whatever loggers are attached, so the
//! problem itself knows nothing about logging.

use ndarray::Array1;
use serde::Serialize;

use crate::error::ProblemError;
use crate::functions::{CompositeLandscape, FunctionMetadata};
use crate::instance::InstanceParameters;
use crate::transform::continuous;

/// Anything that can score a transformed candidate.
pub trait Evaluable {
    /// Evaluate the raw formula at already-transformed coordinates.
    fn evaluate(&self, x: &Array1<f64>) -> f64;
}

impl Evaluable for fn(&Array1<f64>) -> f64 {
    fn evaluate(&self, x: &Array1<f64>) -> f64 {
        self(x)
    }
}

impl Evaluable for CompositeLandscape {
    fn evaluate(&self, x: &Array1<f64>) -> f64 {
        CompositeLandscape::evaluate(self, x)
    }
}

/// Identity of one constructed problem.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemMeta {
    /// Numeric function id
    pub id: u16,
    /// Function name
    pub name: &'static str,
    /// Instance number the parameters were derived for
    pub instance: usize,
    /// Dimension
    pub dimension: usize,
}

/// The transformed optimum: the ground truth regret is measured against.
#[derive(Debug, Clone)]
pub struct Optimum {
    /// Optimum location in raw (untransformed) candidate space
    pub x: Array1<f64>,
    /// Optimum objective value after the objective transformation
    pub y: f64,
}

/// One evaluation, as seen by loggers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Evaluation counter after this evaluation (1-based)
    pub eval_count: u64,
    /// Transformed objective value of this candidate
    pub value: f64,
    /// Best transformed objective value seen so far in this run
    pub best_so_far: f64,
}

/// A ready-to-evaluate continuous minimization problem.
pub struct Problem {
    meta: ProblemMeta,
    params: InstanceParameters,
    shrink_rate: f64,
    base: Box<dyn Evaluable>,
    optimum: Optimum,
    eval_count: u64,
    best_so_far: Option<f64>,
}

impl Problem {
    /// Assemble a problem from its parts and precompute the optimum by
    /// pushing the known raw optimum through the exact transformation chain
    /// used for arbitrary candidates.
    pub fn new(
        meta: &FunctionMetadata,
        instance: usize,
        dimension: usize,
        params: InstanceParameters,
        base: Box<dyn Evaluable>,
        raw_optimum: Array1<f64>,
    ) -> Result<Self, ProblemError> {
        if !meta.supports_dimension(dimension) {
            return Err(ProblemError::InvalidDimension {
                id: meta.id.id(),
                dimension,
                supported: meta.supported_description(),
            });
        }

        // invert the chain to locate the optimum in raw space, then run the
        // forward chain on that exact point so evaluating optimum.x always
        // reproduces optimum.y bit for bit
        let x_star = continuous::inverse_affine(&raw_optimum, &params, meta.shrink_rate);
        let z_star = continuous::affine(&x_star, &params, meta.shrink_rate);
        let optimum = Optimum {
            y: base.evaluate(&z_star) + params.bias,
            x: x_star,
        };

        Ok(Self {
            meta: ProblemMeta {
                id: meta.id.id(),
                name: meta.name,
                instance,
                dimension,
            },
            params,
            shrink_rate: meta.shrink_rate,
            base,
            optimum,
            eval_count: 0,
            best_so_far: None,
        })
    }

    /// Run the pipeline on one candidate: transform, evaluate the base
    /// formula, apply the objective bias, update counters.
    pub fn evaluate(&mut self, x: &Array1<f64>) -> Result<(f64, Observation), ProblemError> {
        if x.len() != self.meta.dimension {
            return Err(ProblemError::DimensionMismatch {
                expected: self.meta.dimension,
                got: x.len(),
            });
        }

        let z = continuous::affine(x, &self.params, self.shrink_rate);
        let y = self.base.evaluate(&z) + self.params.bias;

        self.eval_count += 1;
        let best = match self.best_so_far {
            Some(b) if b <= y => b,
            _ => y,
        };
        self.best_so_far = Some(best);

        Ok((
            y,
            Observation {
                eval_count: self.eval_count,
                value: y,
                best_so_far: best,
            },
        ))
    }

    /// Reset the per-run counters for a fresh run. Parameters and optimum
    /// are immutable configuration and survive resets.
    pub fn reset(&mut self) {
        self.eval_count = 0;
        self.best_so_far = None;
    }

    /// Difference between the best value seen and the known optimum value.
    pub fn regret(&self) -> Option<f64> {
        self.best_so_far.map(|b| b - self.optimum.y)
    }

    /// Identity of this problem.
    pub fn meta(&self) -> &ProblemMeta {
        &self.meta
    }

    /// Instance parameters this problem was built with.
    pub fn params(&self) -> &InstanceParameters {
        &self.params
    }

    /// The transformed optimum.
    pub fn optimum(&self) -> &Optimum {
        &self.optimum
    }

    /// Evaluations performed since construction or the last reset.
    pub fn eval_count(&self) -> u64 {
        self.eval_count
    }

    /// Best objective value seen in the current run.
    pub fn best_so_far(&self) -> Option<f64> {
        self.best_so_far
    }
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("meta", &self.meta)
            .field("optimum", &self.optimum)
            .field("eval_count", &self.eval_count)
            .field("best_so_far", &self.best_so_far)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{FunctionId, unimodal};
    use ndarray::Array1;

    fn sphere_problem(dimension: usize) -> Problem {
        let meta = FunctionId::Sphere.metadata();
        let params = InstanceParameters::canonical(dimension, meta.bias);
        Problem::new(
            &meta,
            1,
            dimension,
            params,
            Box::new(unimodal::sphere as fn(&Array1<f64>) -> f64),
            FunctionId::Sphere.raw_optimum(dimension),
        )
        .unwrap()
    }

    #[test]
    fn test_counters_and_best_so_far() {
        let mut p = sphere_problem(3);
        assert_eq!(p.eval_count(), 0);

        let (y1, o1) = p.evaluate(&Array1::from_vec(vec![2.0, 0.0, 0.0])).unwrap();
        assert_eq!(y1, 4.0);
        assert_eq!(o1.eval_count, 1);
        assert_eq!(o1.best_so_far, 4.0);

        let (_, o2) = p.evaluate(&Array1::from_vec(vec![1.0, 0.0, 0.0])).unwrap();
        assert_eq!(o2.eval_count, 2);
        assert_eq!(o2.best_so_far, 1.0);

        let (_, o3) = p.evaluate(&Array1::from_vec(vec![3.0, 0.0, 0.0])).unwrap();
        assert_eq!(o3.eval_count, 3);
        assert_eq!(o3.best_so_far, 1.0);

        assert_eq!(p.eval_count(), 3);
        assert_eq!(p.regret(), Some(1.0));
    }

    #[test]
    fn test_reset_clears_run_state_only() {
        let mut p = sphere_problem(2);
        p.evaluate(&Array1::from_vec(vec![1.0, 1.0])).unwrap();
        let optimum_before = p.optimum().y;

        p.reset();
        assert_eq!(p.eval_count(), 0);
        assert_eq!(p.best_so_far(), None);
        assert_eq!(p.optimum().y, optimum_before);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let mut p = sphere_problem(3);
        let err = p.evaluate(&Array1::from_vec(vec![1.0])).unwrap_err();
        assert!(matches!(err, ProblemError::DimensionMismatch { expected: 3, got: 1 }));

        let err = p.evaluate(&Array1::from_vec(vec![])).unwrap_err();
        assert!(matches!(err, ProblemError::DimensionMismatch { got: 0, .. }));
    }
}
