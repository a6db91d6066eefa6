//! Batched arguments and the data-parallel batch map.
//!
//! ## Purpose
//!
//! This module provides the general utility behind every batched estimator:
//! a per-argument flag saying whether the argument is shared by the whole
//! batch or indexed by the batch position, and a map over the batch
//! dimension that runs either sequentially or on rayon.
//!
//! ## Design notes
//!
//! * **Broadcast**: `Batched::Shared` borrows one value for every element;
//!   `Batched::Indexed` borrows one value per element.
//! * **Ordering**: Output index i always corresponds to input slice i,
//!   regardless of the execution order.
//! * **Fail-fast**: The first failing element aborts the batch.
//!
//! ## Invariants
//!
//! * All indexed arguments of one call have the same length T.
//! * A batch with only shared arguments has no length and is rejected.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::primitives::backend::ExecutionMode;
use crate::primitives::errors::QuadratureError;

// ============================================================================
// Batched Argument
// ============================================================================

/// One argument of a batched call.
#[derive(Debug)]
pub enum Batched<'a, A> {
    /// The same value is used for every batch element.
    Shared(&'a A),

    /// Element i uses `values[i]`.
    Indexed(&'a [A]),
}

impl<A> Clone for Batched<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Batched<'_, A> {}

impl<'a, A> Batched<'a, A> {
    /// Value for batch element `i`.
    #[inline]
    pub fn get(&self, i: usize) -> &'a A {
        match *self {
            Self::Shared(value) => value,
            Self::Indexed(values) => &values[i],
        }
    }

    /// Batch length carried by this argument (`None` when shared).
    #[inline]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Shared(_) => None,
            Self::Indexed(values) => Some(values.len()),
        }
    }

    /// Whether this argument is shared across the batch.
    #[inline]
    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared(_))
    }
}

// ============================================================================
// Batch Length Resolution
// ============================================================================

/// Resolve the common batch length of a set of named argument lengths.
///
/// Each entry is the argument name and `Batched::len()` of that argument.
pub fn resolve_batch_len(
    lengths: &[(&'static str, Option<usize>)],
) -> Result<usize, QuadratureError> {
    let mut batch_len: Option<usize> = None;
    for &(argument, len) in lengths {
        let Some(len) = len else { continue };
        match batch_len {
            None => batch_len = Some(len),
            Some(expected) if expected != len => {
                return Err(QuadratureError::MismatchedBatch {
                    argument,
                    expected,
                    got: len,
                });
            }
            Some(_) => {}
        }
    }
    batch_len.ok_or(QuadratureError::EmptyBatch)
}

// ============================================================================
// Batch Map
// ============================================================================

/// Apply `f` to every batch index in `0..len` and collect the results in order.
pub fn map_batch<R, F>(len: usize, mode: ExecutionMode, f: F) -> Result<Vec<R>, QuadratureError>
where
    R: Send,
    F: Fn(usize) -> Result<R, QuadratureError> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if mode.is_parallel() {
            return (0..len).into_par_iter().map(f).collect();
        }
    }

    #[cfg(not(feature = "parallel"))]
    let _ = mode;

    (0..len).map(f).collect()
}
