use optbench_problem::{FunctionId, PboFunctionId, Registry};

#[test]
fn test_optimum_self_consistency_canonical_instances() {
    // For every registered id: evaluating the precomputed optimum location
    // must reproduce the precomputed optimum value exactly.
    let registry = Registry::with_defaults();
    for id in registry.enumerate() {
        // dimension 10 is inside every function's supported set
        let mut problem = registry.create(id, 1, 10).unwrap();
        let optimum = problem.optimum().clone();

        let (value, _) = problem.evaluate(&optimum.x).unwrap();
        assert_eq!(
            value, optimum.y,
            "problem {} instance 1 optimum is not self-consistent",
            id
        );
    }
}

#[test]
fn test_optimum_self_consistency_transformed_instances() {
    // Shifted/rotated instances go through the full chain in both
    // directions and must stay self-consistent too.
    let registry = Registry::with_defaults();
    for id in registry.enumerate() {
        for instance in [2, 3, 11] {
            let mut problem = registry.create(id, instance, 10).unwrap();
            let optimum = problem.optimum().clone();

            let (value, _) = problem.evaluate(&optimum.x).unwrap();
            assert_eq!(
                value, optimum.y,
                "problem {} instance {} optimum is not self-consistent",
                id, instance
            );
        }
    }
}

#[test]
fn test_optimum_value_carries_the_bias() {
    let registry = Registry::with_defaults();
    let problem = registry.create(FunctionId::Zakharov.id(), 1, 5).unwrap();
    // zakharov raw optimum value is 0, plus the fixed per-function bias
    assert_eq!(problem.optimum().y, 100.0);

    let problem = registry.create(FunctionId::Sphere.id(), 1, 5).unwrap();
    assert_eq!(problem.optimum().y, 0.0);
}

#[test]
fn test_transformed_optimum_near_known_minimum() {
    // the transformed optimum value may only differ from the raw minimum
    // plus bias by floating point noise of the rotation round trip
    let registry = Registry::with_defaults();
    for instance in [2, 5] {
        let problem = registry
            .create(FunctionId::Rastrigin.id(), instance, 10)
            .unwrap();
        let bias = FunctionId::Rastrigin.metadata().bias;
        assert!(
            (problem.optimum().y - bias).abs() < 1e-6,
            "instance {} optimum drifted: {}",
            instance,
            problem.optimum().y
        );
    }
}

#[test]
fn test_pbo_optimum_self_consistency() {
    let registry = Registry::with_pbo_defaults();
    for id in registry.enumerate() {
        let mut problem = registry.create(id, 1, 20).unwrap();
        let optimum_y = problem.optimum_y();

        let ones = vec![1u8; 20];
        let (value, _) = problem.evaluate(&ones).unwrap();
        assert_eq!(
            value,
            optimum_y,
            "pbo problem {:?} optimum is not self-consistent",
            PboFunctionId::from_id(id)
        );
    }
}

#[test]
fn test_same_instance_is_reproducible_across_constructions() {
    let registry = Registry::with_defaults();
    let x = ndarray::Array1::from_vec(vec![3.0, -1.5, 0.25, 10.0, -20.0]);

    let mut a = registry.create(FunctionId::Ackley.id(), 4, 5).unwrap();
    let mut b = registry.create(FunctionId::Ackley.id(), 4, 5).unwrap();
    let (ya, _) = a.evaluate(&x).unwrap();
    let (yb, _) = b.evaluate(&x).unwrap();
    assert_eq!(ya, yb);

    let mut c = registry.create(FunctionId::Ackley.id(), 5, 5).unwrap();
    let (yc, _) = c.evaluate(&x).unwrap();
    assert_ne!(ya, yc, "distinct instances must transform differently");
}
