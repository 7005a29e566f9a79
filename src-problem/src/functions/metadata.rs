//! Typed function identifiers and per-function metadata
//!
//! Every per-function constant (search domain, shrink rate, objective bias,
//! raw optimum location, supported dimensions) hangs off [`FunctionId`]
//! instead of being spread across parallel arrays indexed by function number.

use ndarray::Array1;

use super::{multimodal, unimodal};

/// Identifier of a continuous base function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionId {
    Zakharov,
    Rosenbrock,
    SchafferF7,
    Rastrigin,
    Levy,
    BentCigar,
    Hgbat,
    HappyCat,
    Ackley,
    Griewank,
    Sphere,
    Schwefel,
    Katsuura,
    Discus,
    Elliptic,
    Composite,
}

/// Metadata for a base function: everything the instance pipeline needs to
/// build a reproducible variant of it.
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Typed identifier
    pub id: FunctionId,
    /// Function name
    pub name: &'static str,
    /// Search domain, identical in every coordinate
    pub bounds: (f64, f64),
    /// Uniform shrink rate applied between shift and rotation
    pub shrink_rate: f64,
    /// Fixed additive objective bias for this function
    pub bias: f64,
    /// Supported dimensions; `None` means any dimension >= the minimum
    pub dimensions: Option<&'static [usize]>,
    /// Smallest usable dimension
    pub min_dimension: usize,
    /// Whether instances of this function are shifted by default
    pub shift_by_default: bool,
    /// Whether instances of this function are rotated by default
    pub rotate_by_default: bool,
}

impl FunctionId {
    /// All continuous function ids in suite order.
    pub const ALL: [FunctionId; 16] = [
        FunctionId::Zakharov,
        FunctionId::Rosenbrock,
        FunctionId::SchafferF7,
        FunctionId::Rastrigin,
        FunctionId::Levy,
        FunctionId::BentCigar,
        FunctionId::Hgbat,
        FunctionId::HappyCat,
        FunctionId::Ackley,
        FunctionId::Griewank,
        FunctionId::Sphere,
        FunctionId::Schwefel,
        FunctionId::Katsuura,
        FunctionId::Discus,
        FunctionId::Elliptic,
        FunctionId::Composite,
    ];

    /// Numeric id used in registries, data file names and the wire protocol.
    pub fn id(self) -> u16 {
        match self {
            FunctionId::Zakharov => 1,
            FunctionId::Rosenbrock => 2,
            FunctionId::SchafferF7 => 3,
            FunctionId::Rastrigin => 4,
            FunctionId::Levy => 5,
            FunctionId::BentCigar => 6,
            FunctionId::Hgbat => 7,
            FunctionId::HappyCat => 8,
            FunctionId::Ackley => 9,
            FunctionId::Griewank => 10,
            FunctionId::Sphere => 11,
            FunctionId::Schwefel => 12,
            FunctionId::Katsuura => 13,
            FunctionId::Discus => 14,
            FunctionId::Elliptic => 15,
            FunctionId::Composite => 16,
        }
    }

    /// Reverse lookup from a numeric id.
    pub fn from_id(id: u16) -> Option<FunctionId> {
        FunctionId::ALL.iter().copied().find(|f| f.id() == id)
    }

    /// The base evaluation formula, when the function is a plain formula.
    /// `Composite` has no single formula and returns `None`.
    pub fn base(self) -> Option<fn(&Array1<f64>) -> f64> {
        match self {
            FunctionId::Zakharov => Some(unimodal::zakharov),
            FunctionId::Rosenbrock => Some(unimodal::rosenbrock),
            FunctionId::SchafferF7 => Some(multimodal::schaffer_f7),
            FunctionId::Rastrigin => Some(multimodal::rastrigin),
            FunctionId::Levy => Some(multimodal::levy),
            FunctionId::BentCigar => Some(unimodal::bent_cigar),
            FunctionId::Hgbat => Some(multimodal::hgbat),
            FunctionId::HappyCat => Some(multimodal::happy_cat),
            FunctionId::Ackley => Some(multimodal::ackley),
            FunctionId::Griewank => Some(multimodal::griewank),
            FunctionId::Sphere => Some(unimodal::sphere),
            FunctionId::Schwefel => Some(multimodal::schwefel),
            FunctionId::Katsuura => Some(multimodal::katsuura),
            FunctionId::Discus => Some(unimodal::discus),
            FunctionId::Elliptic => Some(unimodal::elliptic),
            FunctionId::Composite => None,
        }
    }

    /// Location of the optimum of the raw, untransformed formula.
    pub fn raw_optimum(self, dimension: usize) -> Array1<f64> {
        match self {
            FunctionId::Rosenbrock | FunctionId::Levy => {
                Array1::from_elem(dimension, 1.0)
            }
            FunctionId::Hgbat | FunctionId::HappyCat => Array1::from_elem(dimension, -1.0),
            FunctionId::Schwefel => Array1::from_elem(dimension, 420.9687462275036),
            _ => Array1::zeros(dimension),
        }
    }

    /// Full metadata record for this function.
    pub fn metadata(self) -> FunctionMetadata {
        let (name, shrink_rate, bias, dimensions, min_dimension, rotate) = match self {
            FunctionId::Zakharov => ("zakharov", 1.0, 100.0, None, 1, true),
            FunctionId::Rosenbrock => ("rosenbrock", 2.048e-2, 1100.0, None, 2, true),
            FunctionId::SchafferF7 => ("schaffer_f7", 0.5e-2, 700.0, None, 2, true),
            FunctionId::Rastrigin => ("rastrigin", 5.12e-2, 1900.0, None, 1, true),
            FunctionId::Levy => ("levy", 5.12e-2, 1700.0, None, 1, true),
            FunctionId::BentCigar => ("bent_cigar", 1.0, 1600.0, None, 2, true),
            FunctionId::Hgbat => ("hgbat", 5e-2, 2100.0, None, 1, true),
            FunctionId::HappyCat => ("happy_cat", 5e-2, 2200.0, None, 1, true),
            FunctionId::Ackley => ("ackley", 1.0, 2400.0, None, 1, true),
            FunctionId::Griewank => ("griewank", 6.0, 2500.0, None, 1, true),
            FunctionId::Sphere => ("sphere", 1.0, 0.0, None, 1, false),
            FunctionId::Schwefel => ("schwefel", 10.0, 0.0, None, 1, true),
            FunctionId::Katsuura => ("katsuura", 5e-2, 0.0, None, 1, true),
            FunctionId::Discus => ("discus", 1.0, 0.0, None, 2, true),
            FunctionId::Elliptic => ("elliptic", 1.0, 0.0, None, 1, true),
            FunctionId::Composite => {
                ("composite", 1.0, 0.0, Some(&[2usize, 10, 20][..]), 2, false)
            }
        };
        FunctionMetadata {
            id: self,
            name,
            bounds: (-100.0, 100.0),
            shrink_rate,
            bias,
            dimensions,
            min_dimension,
            shift_by_default: true,
            rotate_by_default: rotate,
        }
    }
}

impl FunctionMetadata {
    /// Whether `dimension` is usable for this function.
    pub fn supports_dimension(&self, dimension: usize) -> bool {
        if dimension < self.min_dimension {
            return false;
        }
        match self.dimensions {
            Some(set) => set.contains(&dimension),
            None => true,
        }
    }

    /// Human-readable description of the supported dimensions, used in errors.
    pub fn supported_description(&self) -> String {
        match self.dimensions {
            Some(set) => format!("{:?}", set),
            None => format!(">= {}", self.min_dimension),
        }
    }
}
