//! Execution mode for batched estimation.
//!
//! ## Purpose
//!
//! This module defines the `ExecutionMode` hint that selects how the batched
//! estimator walks its batch dimension.
//!
//! ## Design notes
//!
//! * **Hint only**: `Parallel` degrades to sequential execution when the crate
//!   is built without the `parallel` feature.
//! * **Result-neutral**: Both modes produce bit-identical output; batch
//!   elements share nothing mutable.

/// How batch elements are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One element after another on the calling thread.
    Sequential,

    /// Data-parallel over the rayon global pool (requires the `parallel` feature).
    #[default]
    Parallel,
}

impl ExecutionMode {
    /// Whether this mode will actually run in parallel in the current build.
    #[inline]
    pub fn is_parallel(self) -> bool {
        cfg!(feature = "parallel") && self == Self::Parallel
    }
}
