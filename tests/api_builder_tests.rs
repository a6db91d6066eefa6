//! Tests for the fluent builder and the execution adapters.
//!
//! ## Test Organization
//!
//! 1. **Defaults** - The default builder reproduces the RBF estimator
//! 2. **Configuration** - Kernel, length scale, amplitude, dimensions
//! 3. **Validation** - Parameter bounds and duplicate detection
//! 4. **Batch Adapter** - Broadcasting and execution modes

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use kernel_quadrature::prelude::*;
use kernel_quadrature::LengthScale;

fn grid(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| lo + (hi - lo) * i as f64 / (n - 1) as f64)
        .collect()
}

// ============================================================================
// Default Tests
// ============================================================================

#[test]
fn test_default_builder_matches_rbf_gaussian() {
    let nodes = grid(-4.0, 4.0, 50);
    let x = SampleSet::from_column(&nodes).unwrap();
    let f_x: Vec<f64> = nodes.iter().map(|v| v.cos()).collect();

    let model = KernelQuadrature::new().adapter(Single).build().unwrap();
    let generic = model
        .estimate(&x, &f_x, &MeasureParameters::gaussian(&[0.3], &[0.8]))
        .unwrap();
    let named = kq_rbf_gaussian(&x, &f_x, &[0.3], &[0.8]).unwrap();
    assert_eq!(generic, named);
}

#[test]
fn test_weights_reuse_matches_estimate() {
    let nodes = grid(0.0, 1.0, 15);
    let x = SampleSet::from_column(&nodes).unwrap();
    let measure = MeasureParameters::uniform(0.0, 1.0);
    let model = KernelQuadrature::new()
        .kernel(Matern12)
        .adapter(Single)
        .build()
        .unwrap();

    let rule = model.weights(&x, &measure).unwrap();
    for power in 0..4 {
        let f_x: Vec<f64> = nodes.iter().map(|v| v.powi(power)).collect();
        assert_eq!(
            rule.integrate(&f_x).unwrap(),
            model.estimate(&x, &f_x, &measure).unwrap()
        );
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_vector_median_product_kernel() {
    let first = grid(0.0, 1.0, 6);
    let second = grid(-1.0, 1.0, 6);
    let rows: Vec<[f64; 2]> = first
        .iter()
        .flat_map(|&a| second.iter().map(move |&b| [a, b]))
        .collect();
    let x = SampleSet::from_rows(&rows).unwrap();
    let measure = MeasureParameters::uniform_box(&[0.0, -1.0], &[1.0, 1.0]);

    let model = KernelQuadrature::new()
        .kernel(Matern32Product)
        .length_scale(VectorMedian)
        .adapter(Single)
        .build()
        .unwrap();
    let rule = model.weights(&x, &measure).unwrap();
    match rule.lengthscale() {
        LengthScale::PerDimension(ls) => {
            assert_eq!(ls.len(), 2);
            assert!(ls[1] > ls[0]);
        }
        other => panic!("expected per-dimension length scale, got {:?}", other),
    }
    let mass: f64 = rule.weights().iter().sum();
    assert_relative_eq!(mass, 1.0, epsilon = 0.05);
}

#[test]
fn test_amplitude_cancels_without_regularization_effects() {
    let nodes = grid(-3.0, 3.0, 25);
    let x = SampleSet::from_column(&nodes).unwrap();
    let f_x: Vec<f64> = nodes.iter().map(|v| v * v).collect();
    let measure = MeasureParameters::StandardNormal;

    let unit = KernelQuadrature::new()
        .kernel(Matern32)
        .adapter(Single)
        .build()
        .unwrap()
        .estimate(&x, &f_x, &measure)
        .unwrap();
    let scaled = KernelQuadrature::new()
        .kernel(Matern32)
        .amplitude(4.0)
        .regularization(4e-6)
        .adapter(Single)
        .build()
        .unwrap()
        .estimate(&x, &f_x, &measure)
        .unwrap();
    assert_relative_eq!(unit, scaled, max_relative = 1e-8);
}

#[test]
fn test_dimension_restriction() {
    let x = SampleSet::from_rows(&[[0.0, 0.0], [1.0, 1.0]]).unwrap();
    let model = KernelQuadrature::new()
        .dimensions(1)
        .adapter(Single)
        .build()
        .unwrap();
    assert!(matches!(
        model.estimate(&x, &[1.0, 1.0], &MeasureParameters::StandardNormal),
        Err(QuadratureError::UnsupportedDimension {
            supported: 1,
            got: 2,
            ..
        })
    ));
}

#[test]
fn test_custom_name_reported_in_errors() {
    let x = SampleSet::from_rows(&[[0.0, 0.0], [1.0, 1.0]]).unwrap();
    let model = KernelQuadrature::new()
        .kernel(Matern12)
        .name("exponential_kq")
        .dimensions(1)
        .adapter(Single)
        .build()
        .unwrap();
    assert_eq!(model.executor().name, "exponential_kq");
    assert_eq!(
        model.estimate(&x, &[1.0, 1.0], &MeasureParameters::uniform(0.0, 1.0)),
        Err(QuadratureError::UnsupportedDimension {
            estimator: "exponential_kq",
            supported: 1,
            got: 2,
        })
    );

    let default = KernelQuadrature::<f64>::new()
        .adapter(Single)
        .build()
        .unwrap();
    assert_eq!(default.executor().name, "RBF");
}

#[test]
fn test_condition_diagnostics_do_not_change_results() {
    let nodes = grid(0.0, 1.0, 20);
    let x = SampleSet::from_column(&nodes).unwrap();
    let f_x: Vec<f64> = nodes.iter().map(|v| v.sin()).collect();
    let measure = MeasureParameters::uniform(0.0, 1.0);

    let plain = KernelQuadrature::new().adapter(Single).build().unwrap();
    let diagnosed = KernelQuadrature::new()
        .condition_diagnostics()
        .adapter(Single)
        .build()
        .unwrap();
    assert_eq!(
        plain.estimate(&x, &f_x, &measure).unwrap(),
        diagnosed.estimate(&x, &f_x, &measure).unwrap()
    );
}

#[test]
fn test_incompatible_kernel_and_measure() {
    let x = SampleSet::from_column(&[0.5, 1.5]).unwrap();
    let model = KernelQuadrature::new()
        .kernel(LogRbf)
        .length_scale(FixedScalar(0.1))
        .adapter(Single)
        .build()
        .unwrap();
    assert!(matches!(
        model.estimate(&x, &[1.0, 1.0], &MeasureParameters::StandardNormal),
        Err(QuadratureError::IncompatibleMeasure { .. })
    ));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_duplicate_parameters_rejected() {
    let result = KernelQuadrature::<f64>::new()
        .kernel(Rbf)
        .kernel(Matern32)
        .adapter(Single)
        .build();
    assert!(matches!(
        result,
        Err(QuadratureError::DuplicateParameter { parameter: "kernel" })
    ));

    let result = KernelQuadrature::new()
        .regularization(1e-6)
        .regularization(1e-8)
        .adapter(Batch)
        .build();
    assert!(matches!(
        result,
        Err(QuadratureError::DuplicateParameter {
            parameter: "regularization"
        })
    ));

    let result = KernelQuadrature::<f64>::new()
        .name("first")
        .name("second")
        .adapter(Single)
        .build();
    assert!(matches!(
        result,
        Err(QuadratureError::DuplicateParameter { parameter: "name" })
    ));
}

#[test]
fn test_invalid_parameters_rejected() {
    assert!(matches!(
        KernelQuadrature::new()
            .amplitude(0.0)
            .adapter(Single)
            .build(),
        Err(QuadratureError::InvalidAmplitude(_))
    ));
    assert!(matches!(
        KernelQuadrature::new()
            .regularization(-1.0)
            .adapter(Single)
            .build(),
        Err(QuadratureError::InvalidRegularization(_))
    ));
    assert!(matches!(
        KernelQuadrature::new()
            .length_scale(FixedVector(f64::NAN))
            .adapter(Single)
            .build(),
        Err(QuadratureError::InvalidLengthScale(_))
    ));
}

// ============================================================================
// Batch Adapter Tests
// ============================================================================

#[test]
fn test_batch_execution_modes_identical() {
    let mut rng = StdRng::seed_from_u64(99);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let xs: Vec<SampleSet<f64>> = (0..16)
        .map(|_| {
            let nodes: Vec<f64> = (0..20).map(|_| normal.sample(&mut rng)).collect();
            SampleSet::from_column(&nodes).unwrap()
        })
        .collect();
    let f_x: Vec<Vec<f64>> = (0..16)
        .map(|_| (0..20).map(|_| normal.sample(&mut rng)).collect())
        .collect();
    let measure = MeasureParameters::StandardNormal;

    let run = |mode| {
        KernelQuadrature::new()
            .kernel(Matern32)
            .execution(mode)
            .adapter(Batch)
            .build()
            .unwrap()
            .estimate(
                Batched::Indexed(&xs),
                Batched::Indexed(&f_x),
                Batched::Shared(&measure),
            )
            .unwrap()
    };
    let sequential = run(Sequential);
    let parallel = run(Parallel);
    assert_eq!(sequential.len(), 16);
    assert_eq!(sequential, parallel);
}

#[test]
fn test_batch_shared_rule_matches_single() {
    let nodes = grid(-3.0, 3.0, 30);
    let x = SampleSet::from_column(&nodes).unwrap();
    let f_x: Vec<Vec<f64>> = (0..4)
        .map(|k| nodes.iter().map(|v| v.powi(k)).collect())
        .collect();
    let measure = MeasureParameters::StandardNormal;

    let single = KernelQuadrature::new().adapter(Single).build().unwrap();
    let batch = KernelQuadrature::new().adapter(Batch).build().unwrap();
    let estimates = batch
        .estimate(
            Batched::Shared(&x),
            Batched::Indexed(&f_x),
            Batched::Shared(&measure),
        )
        .unwrap();
    for (values, estimate) in f_x.iter().zip(&estimates) {
        assert_relative_eq!(
            *estimate,
            single.estimate(&x, values, &measure).unwrap(),
            max_relative = 1e-6
        );
    }
}

#[test]
fn test_batch_indexed_measures() {
    let nodes = grid(0.0, 2.0, 15);
    let x = SampleSet::from_column(&nodes).unwrap();
    let ones = vec![1.0; 15];
    let measures = vec![
        MeasureParameters::uniform(0.0, 1.0),
        MeasureParameters::uniform(0.5, 2.0),
    ];

    let batch = KernelQuadrature::new().adapter(Batch).build().unwrap();
    let estimates = batch
        .estimate(
            Batched::Shared(&x),
            Batched::Shared(&ones),
            Batched::Indexed(&measures),
        )
        .unwrap();
    assert_eq!(estimates.len(), 2);
    for estimate in estimates {
        assert_relative_eq!(estimate, 1.0, epsilon = 0.01);
    }
}

#[test]
fn test_batch_without_indexed_argument() {
    let x = SampleSet::from_column(&[0.0, 1.0]).unwrap();
    let f_x = vec![1.0, 1.0];
    let batch = KernelQuadrature::new()
        .execution(Sequential)
        .adapter(Batch)
        .build()
        .unwrap();
    assert_eq!(batch.execution(), Sequential);
    assert_eq!(
        batch.estimate(
            Batched::Shared(&x),
            Batched::Shared(&f_x),
            Batched::Shared(&MeasureParameters::StandardNormal),
        ),
        Err(QuadratureError::EmptyBatch)
    );
}
