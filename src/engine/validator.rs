//! Input validation for kernel quadrature configuration and data.
//!
//! ## Purpose
//!
//! This module provides the precondition checks run before an estimate is
//! computed: input lengths, finite values, sample dimension and measure
//! shapes, and builder parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs have consistent shapes and finite values.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check measure-parameter values (a < b, std > 0,
//!   positive-definite covariance); those remain the caller's responsibility.
//! * This module does not detect ill-conditioned Gram matrices.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::lengthscale::LengthScalePolicy;
use crate::primitives::errors::QuadratureError;
use crate::primitives::measure::MeasureParameters;
use crate::primitives::samples::SampleSet;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for quadrature configuration and input data.
///
/// Provides static methods that return `Result<(), QuadratureError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a sample set and its function values.
    pub fn validate_inputs<T: Float>(
        samples: &SampleSet<T>,
        values: &[T],
    ) -> Result<(), QuadratureError> {
        // Check 1: Non-empty values
        if values.is_empty() {
            return Err(QuadratureError::EmptyInput);
        }

        // Check 2: One value per point
        if values.len() != samples.n_points() {
            return Err(QuadratureError::MismatchedInputs {
                points: samples.n_points(),
                values: values.len(),
            });
        }

        // Check 3: All values finite
        Self::validate_samples(samples)?;
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(QuadratureError::InvalidNumericValue(format!(
                    "f_x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that every sample coordinate is finite.
    pub fn validate_samples<T: Float>(samples: &SampleSet<T>) -> Result<(), QuadratureError> {
        let dims = samples.dims();
        for (k, &val) in samples.as_slice().iter().enumerate() {
            if !val.is_finite() {
                return Err(QuadratureError::InvalidNumericValue(format!(
                    "x[{}][{}]={}",
                    k / dims,
                    k % dims,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate the sample dimension of a fixed-dimension estimator.
    pub fn validate_dimension<T: Float>(
        estimator: &'static str,
        samples: &SampleSet<T>,
        supported: Option<usize>,
    ) -> Result<(), QuadratureError> {
        match supported {
            Some(dims) if dims != samples.dims() => Err(QuadratureError::UnsupportedDimension {
                estimator,
                supported: dims,
                got: samples.dims(),
            }),
            _ => Ok(()),
        }
    }

    /// Validate the shapes of the measure parameters against the sample dimension.
    pub fn validate_measure<T: Float>(
        measure: &MeasureParameters<T>,
        samples: &SampleSet<T>,
    ) -> Result<(), QuadratureError> {
        measure.check_dims(samples.dims())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the kernel amplitude.
    pub fn validate_amplitude<T: Float>(amplitude: T) -> Result<(), QuadratureError> {
        if !amplitude.is_finite() || amplitude <= T::zero() {
            return Err(QuadratureError::InvalidAmplitude(
                amplitude.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the diagonal regularization.
    pub fn validate_regularization<T: Float>(eps: T) -> Result<(), QuadratureError> {
        if !eps.is_finite() || eps < T::zero() {
            return Err(QuadratureError::InvalidRegularization(
                eps.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the constant of a fixed length-scale policy.
    pub fn validate_policy<T: Float>(policy: &LengthScalePolicy<T>) -> Result<(), QuadratureError> {
        match *policy {
            LengthScalePolicy::FixedScalar(l) | LengthScalePolicy::FixedVector(l)
                if !l.is_finite() || l <= T::zero() =>
            {
                Err(QuadratureError::InvalidLengthScale(
                    l.to_f64().unwrap_or(f64::NAN),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Validate that no builder parameter was configured twice.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), QuadratureError> {
        if let Some(parameter) = duplicate_param {
            return Err(QuadratureError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
