//! Linear algebra backend for kernel quadrature.
//!
//! ## Purpose
//!
//! This module provides the dense matrix operations the estimators need
//! (inverse, determinant, condition number) behind a small trait, backed by
//! nalgebra.
//!
//! ## Design notes
//!
//! * Uses QR decomposition (Householder reflections) for inversion, falling
//!   back to an SVD pseudo-inverse when QR reports a singular factor.
//! * All matrices cross the trait boundary as row-major slices.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + Send + Sync + 'static {
    /// Invert an n×n row-major matrix.
    fn invert(a: &[Self], n: usize) -> Option<Vec<Self>>;
    /// Determinant of an n×n row-major matrix.
    fn determinant(a: &[Self], n: usize) -> Self;
    /// 2-norm condition number of an n×n row-major matrix.
    fn condition_number(a: &[Self], n: usize) -> Self;
}

impl FloatLinalg for f64 {
    #[inline]
    fn invert(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::invert(a, n, f64::EPSILON * 100.0)
    }
    #[inline]
    fn determinant(a: &[Self], n: usize) -> Self {
        nalgebra_backend::determinant(a, n)
    }
    #[inline]
    fn condition_number(a: &[Self], n: usize) -> Self {
        nalgebra_backend::condition_number(a, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn invert(a: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::invert(a, n, f32::EPSILON * 100.0)
    }
    #[inline]
    fn determinant(a: &[Self], n: usize) -> Self {
        nalgebra_backend::determinant(a, n)
    }
    #[inline]
    fn condition_number(a: &[Self], n: usize) -> Self {
        nalgebra_backend::condition_number(a, n)
    }
}

// ============================================================================
// Dense Helpers
// ============================================================================

/// Dot product of two equally sized slices.
#[inline]
pub fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter().zip(b).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Add `eps` to the diagonal of an n×n row-major matrix in place.
#[inline]
pub fn add_diagonal<T: Float>(a: &mut [T], n: usize, eps: T) {
    for i in 0..n {
        a[i * n + i] = a[i * n + i] + eps;
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, RealField};

    /// Invert a row-major matrix, QR first and SVD pseudo-inverse second.
    pub fn invert<T: RealField + Copy>(a: &[T], n: usize, svd_eps: T) -> Option<Vec<T>> {
        let matrix = DMatrix::from_row_slice(n, n, a);
        let qr = matrix.clone().qr();
        let identity = DMatrix::identity(n, n);

        if let Some(inv) = qr.solve(&identity) {
            return Some(inv.transpose().as_slice().to_vec());
        }

        matrix
            .pseudo_inverse(svd_eps)
            .ok()
            .map(|inv: DMatrix<T>| inv.transpose().as_slice().to_vec())
    }

    /// Determinant via LU decomposition.
    pub fn determinant<T: RealField + Copy>(a: &[T], n: usize) -> T {
        DMatrix::from_row_slice(n, n, a).determinant()
    }

    /// Ratio of the largest to the smallest singular value.
    pub fn condition_number<T: RealField + Copy>(a: &[T], n: usize) -> T {
        let singular = DMatrix::from_row_slice(n, n, a)
            .svd(false, false)
            .singular_values;
        let max = singular.max();
        let min = singular.min();
        max / min
    }
}
