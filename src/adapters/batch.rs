//! Batch adapter for kernel quadrature.
//!
//! ## Purpose
//!
//! This module provides the batched execution adapter: it applies the
//! single-instance estimator independently to T batch elements and stacks
//! the T estimates.
//!
//! ## Design notes
//!
//! * **Broadcasting**: Each argument is `Batched::Shared` or
//!   `Batched::Indexed`; the batch length is the common length of the
//!   indexed arguments.
//! * **Parallelism**: Elements run on rayon when the `parallel` feature is on
//!   and the execution mode is `Parallel`.
//! * **Shared rule**: When the samples and the measure are both shared, the
//!   quadrature rule is assembled once and applied to every value vector.
//!   The arithmetic is the same as assembling it per element.
//!
//! ## Invariants
//!
//! * Output index i corresponds to input slice i.
//! * Results are identical in sequential and parallel mode.
//!
//! ## Non-goals
//!
//! * This adapter does not share work across elements beyond the shared-rule case.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::adapters::single::SingleQuadratureBuilder;
use crate::engine::executor::QuadratureExecutor;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::backend::ExecutionMode;
use crate::primitives::batch::{map_batch, resolve_batch_len, Batched};
use crate::primitives::errors::QuadratureError;
use crate::primitives::measure::MeasureParameters;
use crate::primitives::samples::SampleSet;

// ============================================================================
// Batch Quadrature Builder
// ============================================================================

/// Builder for the batched estimator.
#[derive(Debug, Clone)]
pub struct BatchQuadratureBuilder<T> {
    /// Shared estimator configuration
    pub single: SingleQuadratureBuilder<T>,

    /// Scheduling of batch elements
    pub execution: ExecutionMode,
}

impl<T: FloatLinalg> BatchQuadratureBuilder<T> {
    /// Wrap an estimator configuration for batched execution.
    pub(crate) fn from_single(single: SingleQuadratureBuilder<T>) -> Self {
        Self {
            single,
            execution: ExecutionMode::default(),
        }
    }

    /// Set how batch elements are scheduled.
    pub fn execution(mut self, mode: ExecutionMode) -> Self {
        self.execution = mode;
        self
    }

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchQuadrature<T>, QuadratureError> {
        let single = self.single.build()?;
        Ok(BatchQuadrature {
            executor: *single.executor(),
            execution: self.execution,
        })
    }
}

// ============================================================================
// Batch Quadrature Processor
// ============================================================================

/// Batched kernel quadrature estimator.
#[derive(Debug, Clone, Copy)]
pub struct BatchQuadrature<T> {
    executor: QuadratureExecutor<T>,
    execution: ExecutionMode,
}

impl<T: FloatLinalg> BatchQuadrature<T> {
    /// Create a batch processor from an executor.
    pub fn new(executor: QuadratureExecutor<T>, execution: ExecutionMode) -> Self {
        Self {
            executor,
            execution,
        }
    }

    /// Estimate one integral per batch element.
    pub fn estimate(
        &self,
        x: Batched<'_, SampleSet<T>>,
        f_x: Batched<'_, Vec<T>>,
        measure: Batched<'_, MeasureParameters<T>>,
    ) -> Result<Vec<T>, QuadratureError> {
        let len = resolve_batch_len(&[
            ("x", x.len()),
            ("f_x", f_x.len()),
            ("measure", measure.len()),
        ])?;
        let shared_rule = x.is_shared() && measure.is_shared();
        log::debug!(
            "{}: batch of {} ({:?}, parallel={}, shared rule={})",
            self.executor.name,
            len,
            self.execution,
            self.execution.is_parallel(),
            shared_rule
        );

        if shared_rule {
            let (samples, measure) = (x.get(0), measure.get(0));
            let rule = self.executor.rule(samples, measure)?;
            return map_batch(len, self.execution, |i| {
                let values = f_x.get(i);
                Validator::validate_inputs(samples, values)?;
                rule.integrate(values)
            });
        }

        map_batch(len, self.execution, |i| {
            self.executor.estimate(x.get(i), f_x.get(i), measure.get(i))
        })
    }

    /// Scheduling of batch elements.
    pub fn execution(&self) -> ExecutionMode {
        self.execution
    }
}
