//! Error types for kernel quadrature.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate: input validation, kernel and embedding
//! construction, Gram-matrix inversion and batched execution.
//!
//! ## Design notes
//!
//! * **Flat**: One enum for the whole crate, propagated with `?`.
//! * **Descriptive**: Variants carry the offending sizes or values so that the
//!   `Display` output can be read without a debugger.
//! * **no_std**: `std::error::Error` is only implemented with the `std` feature.
//!
//! ## Non-goals
//!
//! * Numerical ill-conditioning is not an error (see `engine::executor`).
//! * Measure-parameter values (a < b, std > 0) are not reported here.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Errors produced by kernel quadrature estimators.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadratureError {
    /// The sample set or the function values are empty.
    EmptyInput,

    /// The number of function values does not match the number of points.
    MismatchedInputs {
        /// Number of sample points.
        points: usize,
        /// Number of function values.
        values: usize,
    },

    /// An argument has a shape inconsistent with the sample dimension.
    DimensionMismatch {
        /// Name of the offending argument.
        argument: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// The estimator only supports a fixed number of dimensions.
    UnsupportedDimension {
        /// Name of the estimator or kernel.
        estimator: &'static str,
        /// Supported dimension.
        supported: usize,
        /// Dimension of the sample set.
        got: usize,
    },

    /// A sample, function value or parameter is NaN or infinite.
    InvalidNumericValue(String),

    /// A length scale is not strictly positive and finite.
    InvalidLengthScale(f64),

    /// The diagonal regularization is negative or not finite.
    InvalidRegularization(f64),

    /// The kernel amplitude is not strictly positive and finite.
    InvalidAmplitude(f64),

    /// No closed-form embedding exists for this kernel/measure pair.
    IncompatibleMeasure {
        /// Kernel family name.
        kernel: &'static str,
        /// Measure name.
        measure: &'static str,
    },

    /// An indexed batch argument has a different length than the others.
    MismatchedBatch {
        /// Name of the offending argument.
        argument: &'static str,
        /// Batch length established by the earlier arguments.
        expected: usize,
        /// Length of this argument.
        got: usize,
    },

    /// Every batch argument is shared, so the batch length is undefined.
    EmptyBatch,

    /// The regularized Gram matrix could not be inverted.
    SingularMatrix,

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { points, values } => write!(
                f,
                "Length mismatch: {} sample points, {} function values",
                points, values
            ),
            Self::DimensionMismatch {
                argument,
                expected,
                got,
            } => write!(
                f,
                "Dimension mismatch for '{}': expected {}, got {}",
                argument, expected, got
            ),
            Self::UnsupportedDimension {
                estimator,
                supported,
                got,
            } => write!(
                f,
                "'{}' only supports {}-dimensional samples, got {}",
                estimator, supported, got
            ),
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::InvalidLengthScale(l) => {
                write!(f, "Invalid length scale: {} (must be > 0 and finite)", l)
            }
            Self::InvalidRegularization(eps) => {
                write!(f, "Invalid regularization: {} (must be >= 0 and finite)", eps)
            }
            Self::InvalidAmplitude(a) => {
                write!(f, "Invalid amplitude: {} (must be > 0 and finite)", a)
            }
            Self::IncompatibleMeasure { kernel, measure } => write!(
                f,
                "No closed-form embedding of kernel '{}' against measure '{}'",
                kernel, measure
            ),
            Self::MismatchedBatch {
                argument,
                expected,
                got,
            } => write!(
                f,
                "Batch length mismatch for '{}': expected {}, got {}",
                argument, expected, got
            ),
            Self::EmptyBatch => write!(f, "Batch has no indexed argument"),
            Self::SingularMatrix => write!(f, "Regularized Gram matrix is singular"),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuadratureError {}
