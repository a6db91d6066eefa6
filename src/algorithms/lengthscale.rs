//! Length-scale selection for quadrature kernels.
//!
//! ## Purpose
//!
//! This module derives the kernel length scale from the sample set, either
//! with the median heuristic or as a fixed constant.
//!
//! ## Design notes
//!
//! * **Policy per estimator**: The named estimators fix their policy; it is
//!   not a call-time argument.
//! * **Zero-scale fallback**: A median heuristic of zero (single point,
//!   identical points) or a non-finite one falls back to 1.0 with a warning,
//!   instead of producing a NaN kernel.
//!
//! ## Key concepts
//!
//! * **ScalarMedian**: `median(|X − mean(X, axis=0)|)` over all N·D entries.
//! * **VectorMedian**: The same statistic per column.
//! * **FixedScalar / FixedVector**: A constant, isotropic or repeated per dimension.
//!
//! ## Invariants
//!
//! * Every selected length scale is strictly positive and finite for finite,
//!   non-empty input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::LengthScale;
use crate::math::median::{column_median_abs_deviation_from_mean, median_abs_deviation_from_mean};
use crate::primitives::samples::SampleSet;

// ============================================================================
// Length-Scale Policy
// ============================================================================

/// Rule deriving a length scale from a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LengthScalePolicy<T> {
    /// Median heuristic over all entries, isotropic result.
    #[default]
    ScalarMedian,

    /// Median heuristic per column, one length scale per dimension.
    VectorMedian,

    /// Constant isotropic length scale.
    FixedScalar(T),

    /// Constant repeated for every dimension.
    FixedVector(T),
}

impl<T: Float> LengthScalePolicy<T> {
    /// Length scale used when a median heuristic collapses to zero.
    const FALLBACK: f64 = 1.0;

    /// Select the length scale for `samples`.
    pub fn select(&self, samples: &SampleSet<T>) -> LengthScale<T> {
        match *self {
            Self::ScalarMedian => {
                LengthScale::Isotropic(Self::or_fallback(median_abs_deviation_from_mean(samples)))
            }
            Self::VectorMedian => LengthScale::PerDimension(
                column_median_abs_deviation_from_mean(samples)
                    .into_iter()
                    .map(Self::or_fallback)
                    .collect::<Vec<T>>(),
            ),
            Self::FixedScalar(l) => LengthScale::Isotropic(l),
            Self::FixedVector(l) => LengthScale::PerDimension(vec![l; samples.dims()]),
        }
    }

    fn or_fallback(l: T) -> T {
        if l.is_finite() && l > T::zero() {
            return l;
        }
        log::warn!(
            "median heuristic gave length scale {:?}; falling back to {}",
            l.to_f64(),
            Self::FALLBACK
        );
        T::from(Self::FALLBACK).unwrap()
    }
}
