//! Sample point storage.
//!
//! ## Purpose
//!
//! This module defines `SampleSet`, the N×D matrix of quadrature nodes that
//! every estimator consumes.
//!
//! ## Design notes
//!
//! * **Row-major**: Point `i` occupies `data[i * dims..(i + 1) * dims]`, the
//!   same flat layout used for multi-dimensional inputs throughout the crate.
//! * **Immutable**: A sample set is validated once on construction and never
//!   mutated afterwards.
//!
//! ## Invariants
//!
//! * `n_points >= 1` and `dims >= 1`.
//! * `data.len() == n_points * dims`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::QuadratureError;

/// An ordered set of N sample points in D-dimensional space.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet<T> {
    data: Vec<T>,
    dims: usize,
}

impl<T: Float> SampleSet<T> {
    /// Build a sample set from row-major data with `dims` columns.
    pub fn new(data: Vec<T>, dims: usize) -> Result<Self, QuadratureError> {
        if data.is_empty() || dims == 0 {
            return Err(QuadratureError::EmptyInput);
        }
        if data.len() % dims != 0 {
            return Err(QuadratureError::DimensionMismatch {
                argument: "samples",
                expected: (data.len() / dims + 1) * dims,
                got: data.len(),
            });
        }
        Ok(Self { data, dims })
    }

    /// Build a one-dimensional sample set (one column).
    pub fn from_column(points: &[T]) -> Result<Self, QuadratureError> {
        Self::new(points.to_vec(), 1)
    }

    /// Build a sample set from a list of equally sized rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, QuadratureError> {
        let dims = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * dims);
        for row in rows {
            let row = row.as_ref();
            if row.len() != dims {
                return Err(QuadratureError::DimensionMismatch {
                    argument: "samples",
                    expected: dims,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(data, dims)
    }

    /// Number of sample points (N).
    #[inline]
    pub fn n_points(&self) -> usize {
        self.data.len() / self.dims
    }

    /// Number of dimensions (D).
    #[inline]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Iterate over the points in order.
    pub fn points(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.dims)
    }

    /// Iterate over column `d` (coordinate d of every point).
    pub fn column(&self, d: usize) -> impl Iterator<Item = T> + '_ {
        self.data.iter().skip(d).step_by(self.dims).copied()
    }

    /// Column means (mean over points, per dimension).
    pub fn column_means(&self) -> Vec<T> {
        let n = T::from(self.n_points()).unwrap();
        let mut means = vec![T::zero(); self.dims];
        for point in self.points() {
            for (m, &v) in means.iter_mut().zip(point) {
                *m = *m + v;
            }
        }
        for m in means.iter_mut() {
            *m = *m / n;
        }
        means
    }

    /// Flat row-major view of the data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}
