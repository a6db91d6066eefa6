//! Median and median-heuristic computation.
//!
//! ## Purpose
//!
//! This module provides the robust dispersion statistic behind the
//! length-scale heuristic: the median absolute deviation of the samples from
//! their column means.
//!
//! ## Design notes
//!
//! * **Algorithm**: Uses Quickselect for O(n) median finding.
//! * **Formula**: `median(|x_ij - mean_j(x)|)` over the selected entries.
//! * **Even counts**: The median of an even-sized set is the mean of the two
//!   middle values.
//!
//! ## Invariants
//!
//! * The result is >= 0 for any finite input.
//!
//! ## Non-goals
//!
//! * This module does not handle non-finite values (NaN/Inf).
//! * This module does not decide what to do with a zero result (see
//!   `algorithms::lengthscale`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::primitives::samples::SampleSet;

// ============================================================================
// Median Heuristic
// ============================================================================

/// Median of `|x - mean(x, axis=0)|` over every entry of the sample set.
pub fn median_abs_deviation_from_mean<T: Float>(samples: &SampleSet<T>) -> T {
    let means = samples.column_means();
    let mut deviations: Vec<T> = samples
        .points()
        .flat_map(|p| p.iter().zip(&means).map(|(&x, &m)| (x - m).abs()))
        .collect();
    median_inplace(&mut deviations)
}

/// Median of `|x_d - mean(x_d)|` computed separately for every column d.
pub fn column_median_abs_deviation_from_mean<T: Float>(samples: &SampleSet<T>) -> Vec<T> {
    let means = samples.column_means();
    let mut column = Vec::with_capacity(samples.n_points());
    means
        .iter()
        .enumerate()
        .map(|(d, &m)| {
            column.clear();
            column.extend(samples.column(d).map(|x| (x - m).abs()));
            median_inplace(&mut column)
        })
        .collect()
}

// ============================================================================
// Median
// ============================================================================

/// Compute the median in-place using Quickselect.
///
/// # Safety
///
/// This function reorders the provided `vals` slice.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 0 {
        // Largest value of the lower half
        let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);
        (lower + upper) / T::from(2.0).unwrap()
    } else {
        upper
    }
}
