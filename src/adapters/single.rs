//! Single-instance adapter for kernel quadrature.
//!
//! ## Purpose
//!
//! This module provides the execution adapter for one integral at a time:
//! one sample set, one vector of function values, one measure.
//!
//! ## Design notes
//!
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Reusable rules**: `weights()` exposes the quadrature weights so several
//!   integrands over the same nodes share one Gram inversion.
//! * **Generics**: Generic over `FloatLinalg` types.
//!
//! ## Invariants
//!
//! * `f_x.len()` equals the number of sample points.
//! * All values must be finite.

// Internal dependencies
use crate::algorithms::lengthscale::LengthScalePolicy;
use crate::algorithms::quadrature::{QuadratureRule, RuleParameters};
use crate::engine::executor::QuadratureExecutor;
use crate::engine::validator::Validator;
use crate::math::kernel::KernelFamily;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::QuadratureError;
use crate::primitives::measure::MeasureParameters;
use crate::primitives::samples::SampleSet;

// ============================================================================
// Single Quadrature Builder
// ============================================================================

/// Builder for the single-instance estimator.
#[derive(Debug, Clone)]
pub struct SingleQuadratureBuilder<T> {
    /// Kernel family
    pub kernel: KernelFamily,

    /// Length-scale selection rule
    pub length_scale: LengthScalePolicy<T>,

    /// Kernel amplitude
    pub amplitude: T,

    /// Diagonal regularization
    pub regularization: T,

    /// Required sample dimension
    pub dimensions: Option<usize>,

    /// Whether to log Gram-matrix conditioning
    pub condition_diagnostics: bool,

    /// Name reported in errors and logs
    pub name: Option<&'static str>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for SingleQuadratureBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> SingleQuadratureBuilder<T> {
    /// Create a new builder with default parameters.
    fn new() -> Self {
        Self {
            kernel: KernelFamily::default(),
            length_scale: LengthScalePolicy::default(),
            amplitude: T::one(),
            regularization: T::from(RuleParameters::<T>::DEFAULT_REGULARIZATION).unwrap(),
            dimensions: None,
            condition_diagnostics: false,
            name: None,
            duplicate_param: None,
        }
    }

    /// Set the kernel family.
    pub fn kernel(mut self, kernel: KernelFamily) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set the length-scale policy.
    pub fn length_scale(mut self, policy: LengthScalePolicy<T>) -> Self {
        self.length_scale = policy;
        self
    }

    /// Set the kernel amplitude.
    pub fn amplitude(mut self, amplitude: T) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the diagonal regularization.
    pub fn regularization(mut self, eps: T) -> Self {
        self.regularization = eps;
        self
    }

    /// Set the name reported in errors and logs.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Enable or disable conditioning diagnostics.
    pub fn condition_diagnostics(mut self, enabled: bool) -> Self {
        self.condition_diagnostics = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the single-instance estimator.
    pub fn build(self) -> Result<SingleQuadrature<T>, QuadratureError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_amplitude(self.amplitude)?;
        Validator::validate_regularization(self.regularization)?;
        Validator::validate_policy(&self.length_scale)?;

        let params = RuleParameters {
            kernel: self.kernel,
            policy: self.length_scale,
            amplitude: self.amplitude,
            regularization: self.regularization,
        };
        let mut executor =
            QuadratureExecutor::new(params).condition_diagnostics(self.condition_diagnostics);
        if let Some(name) = self.name {
            executor = executor.name(name);
        }
        if let Some(dims) = self.dimensions {
            executor = executor.required_dims(dims);
        }

        Ok(SingleQuadrature { executor })
    }
}

// ============================================================================
// Single Quadrature Processor
// ============================================================================

/// Single-instance kernel quadrature estimator.
#[derive(Debug, Clone, Copy)]
pub struct SingleQuadrature<T> {
    executor: QuadratureExecutor<T>,
}

impl<T: FloatLinalg> SingleQuadrature<T> {
    /// Estimate `∫ f(x) p(x) dx` from samples `x` and values `f_x = f(x)`.
    pub fn estimate(
        &self,
        x: &SampleSet<T>,
        f_x: &[T],
        measure: &MeasureParameters<T>,
    ) -> Result<T, QuadratureError> {
        self.executor.estimate(x, f_x, measure)
    }

    /// Quadrature weights for samples `x` against `measure`.
    pub fn weights(
        &self,
        x: &SampleSet<T>,
        measure: &MeasureParameters<T>,
    ) -> Result<QuadratureRule<T>, QuadratureError> {
        self.executor.rule(x, measure)
    }

    /// The underlying executor.
    pub fn executor(&self) -> &QuadratureExecutor<T> {
        &self.executor
    }
}
