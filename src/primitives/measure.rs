//! Reference measures for kernel quadrature.
//!
//! ## Purpose
//!
//! This module defines `MeasureParameters`, the tagged description of the
//! probability measure p in ∫ f(x) p(x) dx.
//!
//! ## Key concepts
//!
//! * **Gaussian**: Mean vector and row-major covariance matrix.
//! * **StandardNormal**: N(0, I), the form required by the Matérn embeddings.
//! * **Uniform**: Box [a, b]; bounds of length 1 apply to every dimension.
//! * **LogGaussian**: One-dimensional log-normal, ln x ~ N(mu, std²).
//!
//! ## Non-goals
//!
//! * Parameter values are not checked: a < b, std > 0 and positive-definite
//!   covariances are the caller's responsibility.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::QuadratureError;

/// Parameters of the reference measure p.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasureParameters<T> {
    /// Multivariate normal N(mean, cov).
    Gaussian {
        /// Mean vector of length D.
        mean: Vec<T>,
        /// Covariance matrix, D×D row-major.
        cov: Vec<T>,
    },

    /// Standard normal N(0, I) in any dimension.
    StandardNormal,

    /// Uniform distribution on the box [lower, upper].
    Uniform {
        /// Lower bounds (length 1 or D).
        lower: Vec<T>,
        /// Upper bounds (length 1 or D).
        upper: Vec<T>,
    },

    /// Log-normal distribution with ln x ~ N(mu, std²).
    LogGaussian {
        /// Mean of ln x.
        mu: T,
        /// Standard deviation of ln x.
        std: T,
    },
}

impl<T: Float> MeasureParameters<T> {
    /// Gaussian measure from a mean vector and a row-major covariance.
    pub fn gaussian(mean: &[T], cov: &[T]) -> Self {
        Self::Gaussian {
            mean: mean.to_vec(),
            cov: cov.to_vec(),
        }
    }

    /// Uniform measure with the same scalar bounds in every dimension.
    pub fn uniform(a: T, b: T) -> Self {
        Self::Uniform {
            lower: vec![a],
            upper: vec![b],
        }
    }

    /// Uniform measure with per-dimension bounds.
    pub fn uniform_box(lower: &[T], upper: &[T]) -> Self {
        Self::Uniform {
            lower: lower.to_vec(),
            upper: upper.to_vec(),
        }
    }

    /// Log-Gaussian measure.
    pub fn log_gaussian(mu: T, std: T) -> Self {
        Self::LogGaussian { mu, std }
    }

    /// Short name used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gaussian { .. } => "Gaussian",
            Self::StandardNormal => "StandardNormal",
            Self::Uniform { .. } => "Uniform",
            Self::LogGaussian { .. } => "LogGaussian",
        }
    }

    /// Check that the parameter shapes agree with a sample dimension.
    pub fn check_dims(&self, dims: usize) -> Result<(), QuadratureError> {
        match self {
            Self::Gaussian { mean, cov } => {
                if mean.len() != dims {
                    return Err(QuadratureError::DimensionMismatch {
                        argument: "mean",
                        expected: dims,
                        got: mean.len(),
                    });
                }
                if cov.len() != dims * dims {
                    return Err(QuadratureError::DimensionMismatch {
                        argument: "cov",
                        expected: dims * dims,
                        got: cov.len(),
                    });
                }
            }
            Self::StandardNormal => {}
            Self::Uniform { lower, upper } => {
                if lower.len() != 1 && lower.len() != dims {
                    return Err(QuadratureError::DimensionMismatch {
                        argument: "lower",
                        expected: dims,
                        got: lower.len(),
                    });
                }
                if upper.len() != 1 && upper.len() != dims {
                    return Err(QuadratureError::DimensionMismatch {
                        argument: "upper",
                        expected: dims,
                        got: upper.len(),
                    });
                }
            }
            Self::LogGaussian { .. } => {
                if dims != 1 {
                    return Err(QuadratureError::UnsupportedDimension {
                        estimator: "LogGaussian",
                        supported: 1,
                        got: dims,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Bound of a uniform box in dimension `d`, broadcasting length-1 bounds.
#[inline]
pub(crate) fn bound_at<T: Copy>(bounds: &[T], d: usize) -> T {
    if bounds.len() == 1 {
        bounds[0]
    } else {
        bounds[d]
    }
}
