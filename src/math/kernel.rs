//! Kernel library: pairwise Gram-matrix construction.
//!
//! ## Purpose
//!
//! This module provides the positive-definite kernels used as quadrature
//! interpolants and the Gram-matrix builder `gram(X, Y, l)` for each family.
//!
//! ## Design notes
//!
//! * **Closed set**: Kernel families are an enum so the embedding dispatch in
//!   `math::embedding` can match exhaustively on (kernel, measure).
//! * **Row-major output**: `gram` returns an N×M row-major buffer.
//! * **Length-scale shape**: Isotropic families take a scalar length scale;
//!   product families take one per dimension and broadcast a scalar.
//!
//! ## Key concepts
//!
//! * **RBF**: `exp(-‖x−y‖² / 2l²)`.
//! * **log-RBF**: RBF on `ln x`, defined for positive inputs.
//! * **Matérn-1/2**: `exp(-r/l)`.
//! * **Matérn-3/2**: `(1 + √3 r/l) exp(-√3 r/l)`.
//! * **Product**: One 1-D kernel per coordinate, multiplied.
//!
//! ## Invariants
//!
//! * `gram(X, X, l)` is symmetric positive semi-definite with unit diagonal.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::QuadratureError;
use crate::primitives::samples::SampleSet;

// ============================================================================
// Length Scale
// ============================================================================

/// Kernel length scale.
#[derive(Debug, Clone, PartialEq)]
pub enum LengthScale<T> {
    /// One length scale shared by every dimension.
    Isotropic(T),

    /// One length scale per dimension (product kernels).
    PerDimension(Vec<T>),
}

impl<T: Float> LengthScale<T> {
    /// Check that every entry is strictly positive and finite.
    pub fn validate(&self) -> Result<(), QuadratureError> {
        let entries: &[T] = match self {
            Self::Isotropic(l) => core::slice::from_ref(l),
            Self::PerDimension(ls) => ls,
        };
        for &l in entries {
            if !l.is_finite() || l <= T::zero() {
                return Err(QuadratureError::InvalidLengthScale(
                    l.to_f64().unwrap_or(f64::NAN),
                ));
            }
        }
        Ok(())
    }

    /// The scalar length scale of an isotropic kernel.
    pub fn scalar(&self, kernel: &'static str) -> Result<T, QuadratureError> {
        match self {
            Self::Isotropic(l) => Ok(*l),
            Self::PerDimension(ls) if ls.len() == 1 => Ok(ls[0]),
            Self::PerDimension(ls) => Err(QuadratureError::DimensionMismatch {
                argument: kernel,
                expected: 1,
                got: ls.len(),
            }),
        }
    }

    /// One length scale per dimension, broadcasting an isotropic value.
    pub fn per_dimension(&self, dims: usize) -> Result<Vec<T>, QuadratureError> {
        match self {
            Self::Isotropic(l) => Ok(vec![*l; dims]),
            Self::PerDimension(ls) if ls.len() == dims => Ok(ls.clone()),
            Self::PerDimension(ls) => Err(QuadratureError::DimensionMismatch {
                argument: "lengthscale",
                expected: dims,
                got: ls.len(),
            }),
        }
    }
}

// ============================================================================
// Kernel Families
// ============================================================================

/// Kernel families with closed-form mean embeddings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelFamily {
    /// Isotropic Gaussian RBF kernel.
    #[default]
    Rbf,

    /// RBF kernel on log-transformed inputs.
    LogRbf,

    /// Isotropic Matérn-1/2 (exponential) kernel.
    Matern12,

    /// Product of one-dimensional Matérn-1/2 kernels.
    Matern12Product,

    /// Isotropic Matérn-3/2 kernel.
    Matern32,

    /// Product of one-dimensional Matérn-3/2 kernels.
    Matern32Product,
}

impl KernelFamily {
    /// Short name used in error messages and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rbf => "RBF",
            Self::LogRbf => "log-RBF",
            Self::Matern12 => "Matern-1/2",
            Self::Matern12Product => "Matern-1/2 product",
            Self::Matern32 => "Matern-3/2",
            Self::Matern32Product => "Matern-3/2 product",
        }
    }

    /// Whether the kernel is a product over dimensions.
    #[inline]
    pub fn is_product(self) -> bool {
        matches!(self, Self::Matern12Product | Self::Matern32Product)
    }

    /// Gram matrix `k(x_i, y_j)` as an N×M row-major buffer.
    pub fn gram<T: Float>(
        self,
        x: &SampleSet<T>,
        y: &SampleSet<T>,
        lengthscale: &LengthScale<T>,
    ) -> Result<Vec<T>, QuadratureError> {
        if x.dims() != y.dims() {
            return Err(QuadratureError::DimensionMismatch {
                argument: "y",
                expected: x.dims(),
                got: y.dims(),
            });
        }
        lengthscale.validate()?;
        if matches!(self, Self::LogRbf) {
            require_positive(x)?;
            require_positive(y)?;
        }

        let mut gram = Vec::with_capacity(x.n_points() * y.n_points());
        if self.is_product() {
            let ls = lengthscale.per_dimension(x.dims())?;
            for xi in x.points() {
                gram.extend(y.points().map(|yj| self.product(xi, yj, &ls)));
            }
        } else {
            let l = lengthscale.scalar(self.name())?;
            for xi in x.points() {
                gram.extend(y.points().map(|yj| self.isotropic(xi, yj, l)));
            }
        }
        Ok(gram)
    }

    /// Isotropic kernel value for one pair of points.
    fn isotropic<T: Float>(self, a: &[T], b: &[T], l: T) -> T {
        match self {
            Self::Rbf => rbf(squared_distance(a, b), l),
            Self::LogRbf => {
                let sq = a.iter().zip(b).fold(T::zero(), |acc, (&u, &v)| {
                    let d = u.ln() - v.ln();
                    acc + d * d
                });
                rbf(sq, l)
            }
            Self::Matern12 => matern12(squared_distance(a, b).sqrt(), l),
            Self::Matern32 => matern32(squared_distance(a, b).sqrt(), l),
            Self::Matern12Product | Self::Matern32Product => self.product(a, b, &vec![l; a.len()]),
        }
    }

    /// Product kernel value for one pair of points.
    fn product<T: Float>(self, a: &[T], b: &[T], ls: &[T]) -> T {
        let one_d: fn(T, T) -> T = match self {
            Self::Matern12Product => matern12,
            _ => matern32,
        };
        a.iter()
            .zip(b)
            .zip(ls)
            .fold(T::one(), |acc, ((&u, &v), &l)| acc * one_d((u - v).abs(), l))
    }
}

// ============================================================================
// Kernel Functions
// ============================================================================

/// The log-domain kernel is only defined for strictly positive coordinates.
fn require_positive<T: Float>(x: &SampleSet<T>) -> Result<(), QuadratureError> {
    match x.as_slice().iter().position(|&v| v <= T::zero()) {
        Some(k) => Err(QuadratureError::InvalidNumericValue(format!(
            "x[{}][{}]={} (log-domain kernel requires positive samples)",
            k / x.dims(),
            k % x.dims(),
            x.as_slice()[k].to_f64().unwrap_or(f64::NAN)
        ))),
        None => Ok(()),
    }
}

#[inline]
fn squared_distance<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter().zip(b).fold(T::zero(), |acc, (&u, &v)| {
        let d = u - v;
        acc + d * d
    })
}

/// RBF kernel from a squared distance.
#[inline]
pub fn rbf<T: Float>(squared_distance: T, l: T) -> T {
    let two = T::from(2.0).unwrap();
    (-squared_distance / (two * l * l)).exp()
}

/// Matérn-1/2 kernel from a distance.
#[inline]
pub fn matern12<T: Float>(r: T, l: T) -> T {
    (-r / l).exp()
}

/// Matérn-3/2 kernel from a distance.
#[inline]
pub fn matern32<T: Float>(r: T, l: T) -> T {
    let s = T::from(3.0).unwrap().sqrt() * r / l;
    (T::one() + s) * (-s).exp()
}
