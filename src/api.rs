//! High-level API for kernel quadrature.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the kernel, its length scale and the
//! regularized Gram system, and for choosing an execution adapter (Single or
//! Batch).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `FloatLinalg` types (f32 and f64).
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Single and Batch modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KernelQuadratureBuilder`] via `KernelQuadrature::new()`.
//! 2. Chain configuration methods (`.kernel()`, `.length_scale()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Single)` to get an execution builder.

// Internal dependencies
use crate::adapters::batch::BatchQuadratureBuilder;
use crate::adapters::single::SingleQuadratureBuilder;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::adapters::batch::BatchQuadrature;
pub use crate::adapters::single::SingleQuadrature;
pub use crate::algorithms::lengthscale::LengthScalePolicy;
pub use crate::algorithms::quadrature::QuadratureRule;
pub use crate::math::kernel::{KernelFamily, LengthScale};
pub use crate::primitives::backend::ExecutionMode;
pub use crate::primitives::batch::Batched;
pub use crate::primitives::errors::QuadratureError;
pub use crate::primitives::measure::MeasureParameters;
pub use crate::primitives::samples::SampleSet;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Single};
}

/// Fluent builder for configuring kernel quadrature and its execution mode.
#[derive(Debug, Clone)]
pub struct KernelQuadratureBuilder<T: FloatLinalg> {
    /// Kernel family (default: RBF).
    pub kernel: Option<KernelFamily>,

    /// Length-scale selection rule (default: scalar median heuristic).
    pub length_scale: Option<LengthScalePolicy<T>>,

    /// Kernel amplitude A (default: 1).
    pub amplitude: Option<T>,

    /// Diagonal regularization ε (default: 1e-6).
    pub regularization: Option<T>,

    /// Required sample dimension (default: any).
    pub dimensions: Option<usize>,

    /// Log the condition number of the regularized Gram matrix.
    pub condition_diagnostics: Option<bool>,

    /// Scheduling of batch elements (Batch only).
    pub execution: Option<ExecutionMode>,

    /// Name reported in errors and logs (default: the kernel name).
    pub name: Option<&'static str>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for KernelQuadratureBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> KernelQuadratureBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: QuadratureAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            kernel: None,
            length_scale: None,
            amplitude: None,
            regularization: None,
            dimensions: None,
            condition_diagnostics: None,
            execution: None,
            name: None,
            duplicate_param: None,
        }
    }

    /// Set the kernel family.
    pub fn kernel(mut self, kernel: KernelFamily) -> Self {
        if self.kernel.is_some() {
            self.duplicate_param = Some("kernel");
        }
        self.kernel = Some(kernel);
        self
    }

    /// Set the length-scale policy.
    ///
    /// - `ScalarMedian` (default): median of `|X − mean(X)|` over all entries
    /// - `VectorMedian`: the same statistic per dimension
    /// - `FixedScalar(l)` / `FixedVector(l)`: a constant length scale
    pub fn length_scale(mut self, policy: LengthScalePolicy<T>) -> Self {
        if self.length_scale.is_some() {
            self.duplicate_param = Some("length_scale");
        }
        self.length_scale = Some(policy);
        self
    }

    /// Set the kernel amplitude A.
    pub fn amplitude(mut self, amplitude: T) -> Self {
        if self.amplitude.is_some() {
            self.duplicate_param = Some("amplitude");
        }
        self.amplitude = Some(amplitude);
        self
    }

    /// Set the diagonal regularization ε added to the Gram matrix.
    pub fn regularization(mut self, eps: T) -> Self {
        if self.regularization.is_some() {
            self.duplicate_param = Some("regularization");
        }
        self.regularization = Some(eps);
        self
    }

    /// Restrict the estimator to samples of one dimension.
    pub fn dimensions(mut self, dims: usize) -> Self {
        if self.dimensions.is_some() {
            self.duplicate_param = Some("dimensions");
        }
        self.dimensions = Some(dims);
        self
    }

    /// Set the name reported in errors and logs.
    pub fn name(mut self, name: &'static str) -> Self {
        if self.name.is_some() {
            self.duplicate_param = Some("name");
        }
        self.name = Some(name);
        self
    }

    /// Log the condition number of the regularized Gram matrix.
    pub fn condition_diagnostics(mut self) -> Self {
        self.condition_diagnostics = Some(true);
        self
    }

    /// Set how batch elements are scheduled (Batch only).
    pub fn execution(mut self, mode: ExecutionMode) -> Self {
        if self.execution.is_some() {
            self.duplicate_param = Some("execution");
        }
        self.execution = Some(mode);
        self
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Trait for transitioning from a generic builder to an execution builder.
pub trait QuadratureAdapter<T: FloatLinalg> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`KernelQuadratureBuilder`] into a specialized execution builder.
    fn convert(builder: KernelQuadratureBuilder<T>) -> Self::Output;
}

/// Marker for one integral at a time.
#[derive(Debug, Clone, Copy)]
pub struct Single;

impl<T: FloatLinalg> QuadratureAdapter<T> for Single {
    type Output = SingleQuadratureBuilder<T>;

    fn convert(builder: KernelQuadratureBuilder<T>) -> Self::Output {
        let mut result = SingleQuadratureBuilder::default();

        if let Some(kernel) = builder.kernel {
            result.kernel = kernel;
        }
        if let Some(policy) = builder.length_scale {
            result.length_scale = policy;
        }
        if let Some(amplitude) = builder.amplitude {
            result.amplitude = amplitude;
        }
        if let Some(eps) = builder.regularization {
            result.regularization = eps;
        }
        if let Some(cd) = builder.condition_diagnostics {
            result.condition_diagnostics = cd;
        }
        result.dimensions = builder.dimensions;
        result.name = builder.name;
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for a stack of independent integrals.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: FloatLinalg> QuadratureAdapter<T> for Batch {
    type Output = BatchQuadratureBuilder<T>;

    fn convert(builder: KernelQuadratureBuilder<T>) -> Self::Output {
        let execution = builder.execution;
        let mut result =
            BatchQuadratureBuilder::from_single(<Single as QuadratureAdapter<T>>::convert(builder));

        if let Some(mode) = execution {
            result.execution = mode;
        }

        result
    }
}
