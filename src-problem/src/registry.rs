//! Problem registry and suites
//!
//! A registry maps numeric function ids to constructors able to produce a
//! ready-to-evaluate problem for an `(instance, dimension)` pair. It is an
//! explicit value the caller owns and passes around; there is no hidden
//! global registry. A suite is an ordered collection of
//! `(id, instance, dimension)` triples resolved against one registry.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ProblemError;
use crate::functions::{CompositeLandscape, FunctionId};
use crate::instance::{InstanceParameters, instance_seed};
use crate::pbo::{BitProblem, PboFunctionId};
use crate::problem::Problem;

/// A constructor producing a problem for `(instance, dimension)`.
pub type Constructor<P> = Box<dyn Fn(usize, usize) -> Result<P, ProblemError>>;

/// Maps function ids to constructors, preserving registration order.
pub struct Registry<P> {
    entries: HashMap<u16, Constructor<P>>,
    order: Vec<u16>,
}

impl<P> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Registry<P> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Add or replace a constructor. Re-registering an id overwrites the
    /// constructor but keeps the id's original position in the enumeration
    /// order, so suites stay stable under re-registration.
    pub fn register(&mut self, id: u16, constructor: Constructor<P>) {
        if self.entries.insert(id, constructor).is_none() {
            self.order.push(id);
        } else {
            log::debug!("re-registered problem id {}", id);
        }
    }

    /// Construct a problem. Fails fast on unknown ids and on dimensions the
    /// problem class does not support; no partially built problem escapes.
    pub fn create(&self, id: u16, instance: usize, dimension: usize) -> Result<P, ProblemError> {
        let constructor = self
            .entries
            .get(&id)
            .ok_or(ProblemError::UnknownProblem { id })?;
        constructor(instance, dimension)
    }

    /// Registered ids in stable insertion order.
    pub fn enumerate(&self) -> impl Iterator<Item = u16> + '_ {
        self.order.iter().copied()
    }

    /// Number of registered ids.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no ids are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Registry<Problem> {
    /// A registry holding the whole continuous catalogue, in suite order.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for function in FunctionId::ALL {
            registry.register(function.id(), continuous_constructor(function));
        }
        registry
    }
}

impl Registry<BitProblem> {
    /// A registry holding the pseudo-boolean catalogue, in suite order.
    pub fn with_pbo_defaults() -> Self {
        let mut registry = Self::new();
        for function in PboFunctionId::ALL {
            let ctor: Constructor<BitProblem> = Box::new(move |instance, dimension| {
                BitProblem::new(function, instance, dimension)
            });
            registry.register(function.id(), ctor);
        }
        registry
    }
}

fn continuous_constructor(function: FunctionId) -> Constructor<Problem> {
    Box::new(move |instance, dimension| {
        let meta = function.metadata();
        if !meta.supports_dimension(dimension) {
            return Err(ProblemError::InvalidDimension {
                id: meta.id.id(),
                dimension,
                supported: meta.supported_description(),
            });
        }

        let params = InstanceParameters::derive(&meta, instance, dimension);
        match function.base() {
            Some(base) => Problem::new(
                &meta,
                instance,
                dimension,
                params,
                Box::new(base),
                function.raw_optimum(dimension),
            ),
            None => {
                // composite landscape: component anchors come from the seed
                let seed = instance_seed(function.id(), instance, dimension);
                let landscape = CompositeLandscape::standard(dimension, seed);
                let raw_optimum: Array1<f64> = landscape.raw_optimum();
                Problem::new(
                    &meta,
                    instance,
                    dimension,
                    params,
                    Box::new(landscape),
                    raw_optimum,
                )
            }
        }
    })
}

/// An ordered collection of function ids, instances and dimensions to
/// benchmark in sequence. Serializable so suite descriptions can live in
/// configuration files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suite {
    /// Suite name, used for reporting
    pub name: String,
    /// Function ids in benchmarking order
    pub ids: Vec<u16>,
    /// Instances to build for each id
    pub instances: Vec<usize>,
    /// Dimensions to build for each id
    pub dimensions: Vec<usize>,
}

impl Suite {
    /// Assemble a suite description.
    pub fn new(
        name: impl Into<String>,
        ids: Vec<u16>,
        instances: Vec<usize>,
        dimensions: Vec<usize>,
    ) -> Self {
        Self {
            name: name.into(),
            ids,
            instances,
            dimensions,
        }
    }

    /// A suite over every id a registry holds, in the registry's order.
    pub fn over_registry<P>(
        name: impl Into<String>,
        registry: &Registry<P>,
        instances: Vec<usize>,
        dimensions: Vec<usize>,
    ) -> Self {
        Self::new(name, registry.enumerate().collect(), instances, dimensions)
    }

    /// Construct every problem of the suite in order: ids outermost, then
    /// dimensions, then instances. The first construction error ends the
    /// iteration for its triple; callers decide whether to continue.
    pub fn problems<'a, P>(
        &'a self,
        registry: &'a Registry<P>,
    ) -> impl Iterator<Item = Result<P, ProblemError>> + 'a {
        self.ids.iter().flat_map(move |&id| {
            self.dimensions.iter().flat_map(move |&dimension| {
                self.instances
                    .iter()
                    .map(move |&instance| registry.create(id, instance, dimension))
            })
        })
    }

    /// Total number of problems the suite describes.
    pub fn len(&self) -> usize {
        self.ids.len() * self.instances.len() * self.dimensions.len()
    }

    /// Whether the suite describes no problems.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_preserves_insertion_order() {
        let mut registry: Registry<BitProblem> = Registry::new();
        let make = |id: PboFunctionId| -> Constructor<BitProblem> {
            Box::new(move |i, d| BitProblem::new(id, i, d))
        };
        registry.register(9, make(PboFunctionId::OneMax));
        registry.register(3, make(PboFunctionId::LeadingOnes));
        registry.register(7, make(PboFunctionId::Linear));
        assert_eq!(registry.enumerate().collect::<Vec<_>>(), vec![9, 3, 7]);
    }

    #[test]
    fn test_reregistration_overwrites_but_keeps_order() {
        let mut registry: Registry<BitProblem> = Registry::new();
        registry.register(1, Box::new(|i, d| BitProblem::new(PboFunctionId::OneMax, i, d)));
        registry.register(2, Box::new(|i, d| BitProblem::new(PboFunctionId::Linear, i, d)));
        // last registration wins
        registry.register(
            1,
            Box::new(|i, d| BitProblem::new(PboFunctionId::LeadingOnes, i, d)),
        );

        assert_eq!(registry.enumerate().collect::<Vec<_>>(), vec![1, 2]);
        let p = registry.create(1, 1, 8).unwrap();
        assert_eq!(p.id(), PboFunctionId::LeadingOnes);
    }

    #[test]
    fn test_unknown_problem() {
        let registry = Registry::with_defaults();
        let err = registry.create(999, 1, 5).unwrap_err();
        assert!(matches!(err, ProblemError::UnknownProblem { id: 999 }));
    }

    #[test]
    fn test_invalid_dimension() {
        let registry = Registry::with_defaults();
        let err = registry
            .create(FunctionId::Sphere.id(), 1, 0)
            .unwrap_err();
        assert!(matches!(err, ProblemError::InvalidDimension { dimension: 0, .. }));

        // composite is only defined for a fixed dimension set
        let err = registry
            .create(FunctionId::Composite.id(), 1, 7)
            .unwrap_err();
        assert!(matches!(err, ProblemError::InvalidDimension { dimension: 7, .. }));
    }

    #[test]
    fn test_suite_iteration_order_and_count() {
        let registry = Registry::with_pbo_defaults();
        let suite = Suite::new(
            "pbo-mini",
            vec![PboFunctionId::OneMax.id(), PboFunctionId::LeadingOnes.id()],
            vec![1, 2],
            vec![8],
        );
        assert_eq!(suite.len(), 4);

        let problems: Vec<_> = suite
            .problems(&registry)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let order: Vec<(u16, usize)> = problems
            .iter()
            .map(|p| (p.id().id(), p.instance()))
            .collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }
}
