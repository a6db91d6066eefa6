//! Execution engine for single-instance kernel quadrature.
//!
//! ## Purpose
//!
//! This module runs one quadrature estimate end to end: validation,
//! length-scale selection, rule assembly, optional conditioning diagnostics
//! and the final contraction with the function values.
//!
//! ## Design notes
//!
//! * **Stateless**: The executor holds configuration only; every call builds
//!   its own Gram matrix and embedding.
//! * **Diagnostics are passive**: Conditioning is logged, never acted upon,
//!   so enabling diagnostics does not change any result.
//! * Generic over `FloatLinalg` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Identical inputs produce bit-identical estimates.
//!
//! ## Non-goals
//!
//! * This module does not iterate over batches (handled by `adapters::batch`).

// Internal dependencies
use crate::algorithms::quadrature::{regularized_gram, QuadratureRule, RuleParameters};
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::QuadratureError;
use crate::primitives::measure::MeasureParameters;
use crate::primitives::samples::SampleSet;

/// Condition number above which diagnostics emit a warning.
const CONDITION_WARNING: f64 = 1e12;

// ============================================================================
// Executor
// ============================================================================

/// Single-instance kernel quadrature executor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureExecutor<T> {
    /// Kernel, length-scale policy, amplitude and regularization.
    pub params: RuleParameters<T>,

    /// Name reported in errors and logs.
    pub name: &'static str,

    /// Required sample dimension, if the estimator is dimension-specific.
    pub required_dims: Option<usize>,

    /// Whether to log the condition number of the regularized Gram matrix.
    pub condition_diagnostics: bool,
}

impl<T: FloatLinalg> QuadratureExecutor<T> {
    /// Create an executor from rule parameters.
    pub fn new(params: RuleParameters<T>) -> Self {
        Self {
            params,
            name: params.kernel.name(),
            required_dims: None,
            condition_diagnostics: false,
        }
    }

    /// Set the name reported in errors and logs.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Restrict the executor to samples of one dimension.
    pub fn required_dims(mut self, dims: usize) -> Self {
        self.required_dims = Some(dims);
        self
    }

    /// Enable or disable conditioning diagnostics.
    pub fn condition_diagnostics(mut self, enabled: bool) -> Self {
        self.condition_diagnostics = enabled;
        self
    }

    // ========================================================================
    // Main API
    // ========================================================================

    /// Build the quadrature rule for `samples` against `measure`.
    pub fn rule(
        &self,
        samples: &SampleSet<T>,
        measure: &MeasureParameters<T>,
    ) -> Result<QuadratureRule<T>, QuadratureError> {
        Validator::validate_samples(samples)?;
        self.check_shapes(samples, measure)?;
        self.assemble(samples, measure)
    }

    /// Estimate `∫ f(x) p(x) dx` from the values `f(X)`.
    pub fn estimate(
        &self,
        samples: &SampleSet<T>,
        values: &[T],
        measure: &MeasureParameters<T>,
    ) -> Result<T, QuadratureError> {
        Validator::validate_inputs(samples, values)?;
        self.check_shapes(samples, measure)?;
        self.assemble(samples, measure)?.integrate(values)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn check_shapes(
        &self,
        samples: &SampleSet<T>,
        measure: &MeasureParameters<T>,
    ) -> Result<(), QuadratureError> {
        Validator::validate_dimension(self.name, samples, self.required_dims)?;
        Validator::validate_measure(measure, samples)
    }

    fn assemble(
        &self,
        samples: &SampleSet<T>,
        measure: &MeasureParameters<T>,
    ) -> Result<QuadratureRule<T>, QuadratureError> {
        let rule = QuadratureRule::assemble(&self.params, samples, measure)?;
        log::debug!(
            "{}: n={} d={} lengthscale={:?}",
            self.name,
            samples.n_points(),
            samples.dims(),
            rule.lengthscale()
        );

        if self.condition_diagnostics {
            self.report_conditioning(samples, &rule)?;
        }
        Ok(rule)
    }

    fn report_conditioning(
        &self,
        samples: &SampleSet<T>,
        rule: &QuadratureRule<T>,
    ) -> Result<(), QuadratureError> {
        let gram = regularized_gram(&self.params, samples, rule.lengthscale())?;
        let cond = T::condition_number(&gram, samples.n_points())
            .to_f64()
            .unwrap_or(f64::INFINITY);
        if cond > CONDITION_WARNING {
            log::warn!(
                "{}: regularized Gram matrix is ill-conditioned (condition number {:e}); estimate may be inaccurate",
                self.name,
                cond
            );
        } else {
            log::debug!("{}: condition number {:e}", self.name, cond);
        }
        Ok(())
    }
}
