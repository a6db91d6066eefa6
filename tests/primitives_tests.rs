#![cfg(feature = "dev")]
//! Tests for the primitives layer.
//!
//! ## Test Organization
//!
//! 1. **Errors** - Display formatting of every error variant
//! 2. **Sample Sets** - Construction, shape checks and accessors
//! 3. **Measures** - Shape checks against the sample dimension
//! 4. **Batching** - Batch length resolution and the ordered batch map

use kernel_quadrature::internals::primitives::backend::ExecutionMode;
use kernel_quadrature::internals::primitives::batch::{map_batch, resolve_batch_len, Batched};
use kernel_quadrature::internals::primitives::errors::QuadratureError;
use kernel_quadrature::internals::primitives::measure::MeasureParameters;
use kernel_quadrature::internals::primitives::samples::SampleSet;

// ============================================================================
// Error Display Tests
// ============================================================================

#[test]
fn test_quadrature_error_display() {
    let err = QuadratureError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    let err = QuadratureError::MismatchedInputs {
        points: 10,
        values: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: 10 sample points, 5 function values"
    );

    let err = QuadratureError::DimensionMismatch {
        argument: "mean",
        expected: 2,
        got: 3,
    };
    assert_eq!(
        format!("{}", err),
        "Dimension mismatch for 'mean': expected 2, got 3"
    );

    let err = QuadratureError::UnsupportedDimension {
        estimator: "kq_matern32_gaussian",
        supported: 1,
        got: 2,
    };
    assert_eq!(
        format!("{}", err),
        "'kq_matern32_gaussian' only supports 1-dimensional samples, got 2"
    );

    let err = QuadratureError::InvalidNumericValue("x[0][0]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: x[0][0]=NaN");

    let err = QuadratureError::InvalidLengthScale(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid length scale: -1 (must be > 0 and finite)"
    );

    let err = QuadratureError::InvalidRegularization(-0.5);
    assert_eq!(
        format!("{}", err),
        "Invalid regularization: -0.5 (must be >= 0 and finite)"
    );

    let err = QuadratureError::InvalidAmplitude(0.0);
    assert_eq!(
        format!("{}", err),
        "Invalid amplitude: 0 (must be > 0 and finite)"
    );

    let err = QuadratureError::IncompatibleMeasure {
        kernel: "RBF",
        measure: "LogGaussian",
    };
    assert_eq!(
        format!("{}", err),
        "No closed-form embedding of kernel 'RBF' against measure 'LogGaussian'"
    );

    let err = QuadratureError::MismatchedBatch {
        argument: "f_x",
        expected: 4,
        got: 3,
    };
    assert_eq!(
        format!("{}", err),
        "Batch length mismatch for 'f_x': expected 4, got 3"
    );

    let err = QuadratureError::EmptyBatch;
    assert_eq!(format!("{}", err), "Batch has no indexed argument");

    let err = QuadratureError::SingularMatrix;
    assert_eq!(format!("{}", err), "Regularized Gram matrix is singular");

    let err = QuadratureError::DuplicateParameter {
        parameter: "kernel",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'kernel' was set multiple times. Each parameter can only be configured once."
    );
}

/// Test that the error type works with `Box<dyn Error>`.
#[test]
fn test_quadrature_error_is_std_error() {
    fn fails() -> Result<(), Box<dyn std::error::Error>> {
        Err::<(), _>(QuadratureError::EmptyBatch)?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert_eq!(err.to_string(), "Batch has no indexed argument");
}

// ============================================================================
// Sample Set Tests
// ============================================================================

#[test]
fn test_sample_set_from_rows() {
    let samples = SampleSet::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    assert_eq!(samples.n_points(), 3);
    assert_eq!(samples.dims(), 2);
    assert_eq!(samples.points().nth(1), Some(&[3.0, 4.0][..]));
    assert_eq!(samples.column(1).collect::<Vec<_>>(), vec![2.0, 4.0, 6.0]);
    assert_eq!(samples.column_means(), vec![3.0, 4.0]);
    assert_eq!(samples.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_sample_set_from_column() {
    let samples = SampleSet::from_column(&[0.5f64, 1.5, 2.5]).unwrap();
    assert_eq!(samples.n_points(), 3);
    assert_eq!(samples.dims(), 1);
    assert_eq!(samples.points().count(), 3);
}

#[test]
fn test_sample_set_empty_rejected() {
    let empty: [f64; 0] = [];
    assert_eq!(
        SampleSet::from_column(&empty),
        Err(QuadratureError::EmptyInput)
    );
    assert_eq!(
        SampleSet::new(vec![1.0f64, 2.0], 0),
        Err(QuadratureError::EmptyInput)
    );
}

#[test]
fn test_sample_set_ragged_rejected() {
    let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
    assert!(matches!(
        SampleSet::from_rows(&rows),
        Err(QuadratureError::DimensionMismatch {
            argument: "samples",
            expected: 2,
            got: 1
        })
    ));
    assert!(matches!(
        SampleSet::new(vec![1.0f64, 2.0, 3.0], 2),
        Err(QuadratureError::DimensionMismatch { .. })
    ));
}

// ============================================================================
// Measure Tests
// ============================================================================

#[test]
fn test_gaussian_shape_checks() {
    let measure = MeasureParameters::gaussian(&[0.0, 0.0], &[1.0, 0.0, 0.0, 1.0]);
    assert!(measure.check_dims(2).is_ok());
    assert!(matches!(
        measure.check_dims(3),
        Err(QuadratureError::DimensionMismatch {
            argument: "mean",
            expected: 3,
            got: 2
        })
    ));

    let bad_cov = MeasureParameters::gaussian(&[0.0, 0.0], &[1.0, 0.0, 1.0]);
    assert!(matches!(
        bad_cov.check_dims(2),
        Err(QuadratureError::DimensionMismatch {
            argument: "cov",
            expected: 4,
            got: 3
        })
    ));
}

#[test]
fn test_uniform_bounds_broadcast() {
    let scalar = MeasureParameters::uniform(0.0, 1.0);
    assert!(scalar.check_dims(1).is_ok());
    assert!(scalar.check_dims(5).is_ok());

    let boxed = MeasureParameters::uniform_box(&[0.0, -1.0], &[1.0, 1.0]);
    assert!(boxed.check_dims(2).is_ok());
    assert!(matches!(
        boxed.check_dims(3),
        Err(QuadratureError::DimensionMismatch {
            argument: "lower",
            ..
        })
    ));
}

#[test]
fn test_log_gaussian_is_one_dimensional() {
    let measure = MeasureParameters::log_gaussian(0.0, 0.5);
    assert!(measure.check_dims(1).is_ok());
    assert!(matches!(
        measure.check_dims(2),
        Err(QuadratureError::UnsupportedDimension {
            supported: 1,
            got: 2,
            ..
        })
    ));
    assert_eq!(measure.name(), "LogGaussian");
    assert_eq!(MeasureParameters::<f64>::StandardNormal.name(), "StandardNormal");
}

// ============================================================================
// Batching Tests
// ============================================================================

#[test]
fn test_batched_get_and_len() {
    let shared = 7;
    let indexed = [1, 2, 3];
    let a = Batched::Shared(&shared);
    let b = Batched::Indexed(&indexed[..]);

    assert_eq!(a.len(), None);
    assert_eq!(b.len(), Some(3));
    assert!(a.is_shared());
    assert!(!b.is_shared());
    assert_eq!(*a.get(2), 7);
    assert_eq!(*b.get(2), 3);
}

#[test]
fn test_resolve_batch_len() {
    assert_eq!(
        resolve_batch_len(&[("x", None), ("f_x", Some(4)), ("measure", Some(4))]),
        Ok(4)
    );
    assert_eq!(
        resolve_batch_len(&[("x", Some(4)), ("f_x", Some(3))]),
        Err(QuadratureError::MismatchedBatch {
            argument: "f_x",
            expected: 4,
            got: 3
        })
    );
    assert_eq!(
        resolve_batch_len(&[("x", None), ("measure", None)]),
        Err(QuadratureError::EmptyBatch)
    );
}

#[test]
fn test_map_batch_preserves_order() {
    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let out = map_batch(100, mode, |i| Ok(i * i)).unwrap();
        assert_eq!(out, (0..100).map(|i| i * i).collect::<Vec<_>>());
    }
}

#[test]
fn test_map_batch_propagates_errors() {
    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let out = map_batch(10, mode, |i| {
            if i == 6 {
                Err(QuadratureError::SingularMatrix)
            } else {
                Ok(i)
            }
        });
        assert_eq!(out, Err(QuadratureError::SingularMatrix));
    }
}

#[test]
fn test_execution_mode_default() {
    assert_eq!(ExecutionMode::default(), ExecutionMode::Parallel);
    assert!(!ExecutionMode::Sequential.is_parallel());
    assert_eq!(
        ExecutionMode::Parallel.is_parallel(),
        cfg!(feature = "parallel")
    );
}
