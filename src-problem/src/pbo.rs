//! Pseudo-boolean problems
//!
//! Discrete maximization landscapes over bit strings, each variant pairing a
//! base formula (OneMax, LeadingOnes, Linear) with one bit-level instance
//! transformation from [`crate::transform::discrete`]. Variant numbering
//! follows the established suite: OneMax family first, LeadingOnes family
//! second.

use crate::error::ProblemError;
use crate::instance::instance_seed;
use crate::problem::Observation;
use crate::transform::discrete::{self, RuggednessKind};

/// Count of one-bits.
pub fn one_max(x: &[u8]) -> f64 {
    x.iter().filter(|&&b| b == 1).count() as f64
}

/// Length of the leading run of one-bits.
pub fn leading_ones(x: &[u8]) -> f64 {
    let mut run = 0.0;
    for &b in x {
        if b == 1 {
            run += 1.0;
        } else {
            break;
        }
    }
    run
}

/// Position-weighted linear function: bit i contributes i + 1.
pub fn linear_weights(x: &[u8]) -> f64 {
    x.iter()
        .enumerate()
        .filter(|&(_, &b)| b == 1)
        .map(|(i, _)| (i + 1) as f64)
        .sum()
}

/// Identifier of a pseudo-boolean problem variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PboFunctionId {
    OneMax,
    LeadingOnes,
    Linear,
    OneMaxDummy1,
    OneMaxDummy2,
    OneMaxNeutrality,
    OneMaxEpistasis,
    OneMaxRuggedness1,
    OneMaxRuggedness2,
    OneMaxRuggedness3,
    LeadingOnesDummy1,
    LeadingOnesDummy2,
    LeadingOnesNeutrality,
    LeadingOnesEpistasis,
    LeadingOnesRuggedness1,
    LeadingOnesRuggedness2,
    LeadingOnesRuggedness3,
}

/// The bit-level transformation a variant applies before/after its base.
#[derive(Debug, Clone)]
enum BitTransform {
    None,
    /// Keep this fraction of the bits, chosen from the instance seed
    Dummy(f64),
    /// Collapse groups of this many bits into their majority
    Neutrality(usize),
    /// Remap blocks of this many bits through the rotation-XOR scheme
    Epistasis(usize),
    /// Permute the output ordering
    Ruggedness(RuggednessKind),
}

impl PboFunctionId {
    /// All variants in suite order.
    pub const ALL: [PboFunctionId; 17] = [
        PboFunctionId::OneMax,
        PboFunctionId::LeadingOnes,
        PboFunctionId::Linear,
        PboFunctionId::OneMaxDummy1,
        PboFunctionId::OneMaxDummy2,
        PboFunctionId::OneMaxNeutrality,
        PboFunctionId::OneMaxEpistasis,
        PboFunctionId::OneMaxRuggedness1,
        PboFunctionId::OneMaxRuggedness2,
        PboFunctionId::OneMaxRuggedness3,
        PboFunctionId::LeadingOnesDummy1,
        PboFunctionId::LeadingOnesDummy2,
        PboFunctionId::LeadingOnesNeutrality,
        PboFunctionId::LeadingOnesEpistasis,
        PboFunctionId::LeadingOnesRuggedness1,
        PboFunctionId::LeadingOnesRuggedness2,
        PboFunctionId::LeadingOnesRuggedness3,
    ];

    /// Numeric id used in registries.
    pub fn id(self) -> u16 {
        match self {
            PboFunctionId::OneMax => 1,
            PboFunctionId::LeadingOnes => 2,
            PboFunctionId::Linear => 3,
            PboFunctionId::OneMaxDummy1 => 4,
            PboFunctionId::OneMaxDummy2 => 5,
            PboFunctionId::OneMaxNeutrality => 6,
            PboFunctionId::OneMaxEpistasis => 7,
            PboFunctionId::OneMaxRuggedness1 => 8,
            PboFunctionId::OneMaxRuggedness2 => 9,
            PboFunctionId::OneMaxRuggedness3 => 10,
            PboFunctionId::LeadingOnesDummy1 => 11,
            PboFunctionId::LeadingOnesDummy2 => 12,
            PboFunctionId::LeadingOnesNeutrality => 13,
            PboFunctionId::LeadingOnesEpistasis => 14,
            PboFunctionId::LeadingOnesRuggedness1 => 15,
            PboFunctionId::LeadingOnesRuggedness2 => 16,
            PboFunctionId::LeadingOnesRuggedness3 => 17,
        }
    }

    /// Reverse lookup from a numeric id.
    pub fn from_id(id: u16) -> Option<PboFunctionId> {
        PboFunctionId::ALL.iter().copied().find(|f| f.id() == id)
    }

    /// Function name.
    pub fn name(self) -> &'static str {
        match self {
            PboFunctionId::OneMax => "one_max",
            PboFunctionId::LeadingOnes => "leading_ones",
            PboFunctionId::Linear => "linear",
            PboFunctionId::OneMaxDummy1 => "one_max_dummy1",
            PboFunctionId::OneMaxDummy2 => "one_max_dummy2",
            PboFunctionId::OneMaxNeutrality => "one_max_neutrality",
            PboFunctionId::OneMaxEpistasis => "one_max_epistasis",
            PboFunctionId::OneMaxRuggedness1 => "one_max_ruggedness1",
            PboFunctionId::OneMaxRuggedness2 => "one_max_ruggedness2",
            PboFunctionId::OneMaxRuggedness3 => "one_max_ruggedness3",
            PboFunctionId::LeadingOnesDummy1 => "leading_ones_dummy1",
            PboFunctionId::LeadingOnesDummy2 => "leading_ones_dummy2",
            PboFunctionId::LeadingOnesNeutrality => "leading_ones_neutrality",
            PboFunctionId::LeadingOnesEpistasis => "leading_ones_epistasis",
            PboFunctionId::LeadingOnesRuggedness1 => "leading_ones_ruggedness1",
            PboFunctionId::LeadingOnesRuggedness2 => "leading_ones_ruggedness2",
            PboFunctionId::LeadingOnesRuggedness3 => "leading_ones_ruggedness3",
        }
    }

    fn base(self) -> fn(&[u8]) -> f64 {
        use PboFunctionId::*;
        match self {
            OneMax | OneMaxDummy1 | OneMaxDummy2 | OneMaxNeutrality | OneMaxEpistasis
            | OneMaxRuggedness1 | OneMaxRuggedness2 | OneMaxRuggedness3 => one_max,
            Linear => linear_weights,
            _ => leading_ones,
        }
    }

    fn transform(self) -> BitTransform {
        use PboFunctionId::*;
        match self {
            OneMax | LeadingOnes | Linear => BitTransform::None,
            OneMaxDummy1 | LeadingOnesDummy1 => BitTransform::Dummy(0.5),
            OneMaxDummy2 | LeadingOnesDummy2 => BitTransform::Dummy(0.9),
            OneMaxNeutrality | LeadingOnesNeutrality => BitTransform::Neutrality(3),
            OneMaxEpistasis | LeadingOnesEpistasis => BitTransform::Epistasis(4),
            OneMaxRuggedness1 | LeadingOnesRuggedness1 => {
                BitTransform::Ruggedness(RuggednessKind::R1)
            }
            OneMaxRuggedness2 | LeadingOnesRuggedness2 => {
                BitTransform::Ruggedness(RuggednessKind::R2)
            }
            OneMaxRuggedness3 | LeadingOnesRuggedness3 => {
                BitTransform::Ruggedness(RuggednessKind::R3)
            }
        }
    }
}

/// A ready-to-evaluate pseudo-boolean maximization problem.
#[derive(Debug)]
pub struct BitProblem {
    id: PboFunctionId,
    instance: usize,
    dimension: usize,
    base: fn(&[u8]) -> f64,
    transform: BitTransform,
    /// Selected positions when a dummy mask applies
    mask: Option<Vec<usize>>,
    optimum_y: f64,
    eval_count: u64,
    best_so_far: Option<f64>,
}

impl BitProblem {
    /// Build a variant for `(instance, dimension)`. The dummy mask, when the
    /// variant has one, is drawn from the instance seed.
    pub fn new(
        id: PboFunctionId,
        instance: usize,
        dimension: usize,
    ) -> Result<Self, ProblemError> {
        if dimension == 0 {
            return Err(ProblemError::InvalidDimension {
                id: id.id(),
                dimension,
                supported: ">= 1".to_string(),
            });
        }

        let transform = id.transform();
        let mask = match transform {
            BitTransform::Dummy(rate) => {
                let seed = instance_seed(id.id(), instance, dimension);
                Some(discrete::dummy_mask(dimension, rate, seed))
            }
            _ => None,
        };

        let mut problem = Self {
            id,
            instance,
            dimension,
            base: id.base(),
            transform,
            mask,
            optimum_y: 0.0,
            eval_count: 0,
            best_so_far: None,
        };

        // the known raw optimum (all ones) pushed through the same chain
        let ones = vec![1u8; dimension];
        problem.optimum_y = problem.transformed_value(&ones);
        Ok(problem)
    }

    fn transformed_value(&self, x: &[u8]) -> f64 {
        match &self.transform {
            BitTransform::None => (self.base)(x),
            BitTransform::Dummy(_) => {
                let mask = self.mask.as_ref().expect("dummy variants carry a mask");
                (self.base)(&discrete::select(x, mask))
            }
            BitTransform::Neutrality(mu) => (self.base)(&discrete::neutrality(x, *mu)),
            BitTransform::Epistasis(block) => (self.base)(&discrete::epistasis(x, *block)),
            BitTransform::Ruggedness(kind) => {
                discrete::ruggedness((self.base)(x), self.effective_dimension(), *kind)
            }
        }
    }

    /// Dimension of the bit string the base formula actually sees.
    pub fn effective_dimension(&self) -> usize {
        match &self.transform {
            BitTransform::Dummy(_) => self.mask.as_ref().map_or(0, Vec::len),
            BitTransform::Neutrality(mu) => self.dimension / mu,
            _ => self.dimension,
        }
    }

    /// Evaluate one bit string: transform, score, update counters.
    pub fn evaluate(&mut self, x: &[u8]) -> Result<(f64, Observation), ProblemError> {
        if x.len() != self.dimension {
            return Err(ProblemError::DimensionMismatch {
                expected: self.dimension,
                got: x.len(),
            });
        }

        let y = self.transformed_value(x);

        self.eval_count += 1;
        let best = match self.best_so_far {
            Some(b) if b >= y => b,
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

    /// Reset per-run counters; configuration survives.
    pub fn reset(&mut self) {
        self.eval_count = 0;
        self.best_so_far = None;
    }

    /// The optimum value of this instance (maximization).
    pub fn optimum_y(&self) -> f64 {
        self.optimum_y
    }

    /// Variant id.
    pub fn id(&self) -> PboFunctionId {
        self.id
    }

    /// Instance number.
    pub fn instance(&self) -> usize {
        self.instance
    }

    /// Bit-string length this problem expects.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Evaluations performed since construction or the last reset.
    pub fn eval_count(&self) -> u64 {
        self.eval_count
    }

    /// Best value seen in the current run.
    pub fn best_so_far(&self) -> Option<f64> {
        self.best_so_far
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_functions() {
        assert_eq!(one_max(&[1, 0, 1, 1]), 3.0);
        assert_eq!(leading_ones(&[1, 1, 0, 1]), 2.0);
        assert_eq!(leading_ones(&[0, 1, 1, 1]), 0.0);
        assert_eq!(linear_weights(&[1, 0, 0, 1]), 5.0);
        assert_eq!(linear_weights(&[0, 0, 0, 0]), 0.0);
        assert_eq!(linear_weights(&[1, 1, 1, 1]), 10.0);
    }

    #[test]
    fn test_one_max_dummy_ignores_dropped_bits() {
        let mut p = BitProblem::new(PboFunctionId::OneMaxDummy2, 1, 100).unwrap();
        assert_eq!(p.effective_dimension(), 90);

        let ones = vec![1u8; 100];
        let (y, _) = p.evaluate(&ones).unwrap();
        assert_eq!(y, 90.0);
        assert_eq!(y, p.optimum_y());
    }

    #[test]
    fn test_leading_ones_dummy_matches_mask() {
        let p = BitProblem::new(PboFunctionId::LeadingOnesDummy2, 3, 50).unwrap();
        let q = BitProblem::new(PboFunctionId::LeadingOnesDummy2, 3, 50).unwrap();
        // same instance, same mask, same optimum
        assert_eq!(p.optimum_y(), q.optimum_y());

        let r = BitProblem::new(PboFunctionId::LeadingOnesDummy2, 4, 50).unwrap();
        // a different instance may drop different bits but keeps the density
        assert_eq!(r.effective_dimension(), 45);
    }

    #[test]
    fn test_neutrality_effective_dimension() {
        let mut p = BitProblem::new(PboFunctionId::OneMaxNeutrality, 1, 10).unwrap();
        assert_eq!(p.effective_dimension(), 3);
        let (y, _) = p.evaluate(&vec![1u8; 10]).unwrap();
        assert_eq!(y, 3.0);
    }

    #[test]
    fn test_ruggedness_keeps_optimum_value() {
        let mut p = BitProblem::new(PboFunctionId::OneMaxRuggedness2, 1, 8).unwrap();
        let (y, _) = p.evaluate(&vec![1u8; 8]).unwrap();
        assert_eq!(y, 8.0);
        assert_eq!(p.optimum_y(), 8.0);

        // one level below the optimum becomes the worst level
        let mut x = vec![1u8; 8];
        x[0] = 0;
        let (y, _) = p.evaluate(&x).unwrap();
        assert_eq!(y, 0.0);
    }

    #[test]
    fn test_counters_track_maximization() {
        let mut p = BitProblem::new(PboFunctionId::OneMax, 1, 4).unwrap();
        let (_, o1) = p.evaluate(&[1, 0, 0, 0]).unwrap();
        assert_eq!(o1.best_so_far, 1.0);
        let (_, o2) = p.evaluate(&[1, 1, 1, 0]).unwrap();
        assert_eq!(o2.best_so_far, 3.0);
        let (_, o3) = p.evaluate(&[0, 0, 0, 0]).unwrap();
        assert_eq!(o3.best_so_far, 3.0);
        assert_eq!(o3.eval_count, 3);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = BitProblem::new(PboFunctionId::OneMax, 1, 0).unwrap_err();
        assert!(matches!(err, ProblemError::InvalidDimension { dimension: 0, .. }));
    }
}
