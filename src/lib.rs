//! # Kernel Quadrature for Rust
//!
//! Numerical integration of a function against a probability measure from a
//! finite set of function evaluations, using kernel quadrature with
//! closed-form kernel mean embeddings.
//!
//! ## What is Kernel Quadrature?
//!
//! Given sample points `X = {x_1, …, x_N}` and function values `f(x_i)`,
//! kernel quadrature estimates
//!
//! ```text
//! ∫ f(x) p(x) dx  ≈  φᵀ (A·K + εI)⁻¹ f(X)
//! ```
//!
//! where `K` is the Gram matrix of a positive-definite kernel on `X`, `φ` is
//! the kernel mean embedding `φ_i = ∫ k(x_i, y) p(y) dy` of the measure `p`,
//! `A` is the kernel amplitude and `ε` a small diagonal regularization.
//! The estimate is the exact integral of the kernel interpolant of `f`.
//!
//! **Supported pairings:**
//! - RBF kernel against Gaussian and uniform measures, in any dimension
//! - Matérn-1/2 and Matérn-3/2 kernels against the standard normal and
//!   uniform measures (product forms in any dimension)
//! - A log-domain RBF kernel against the log-normal measure
//!
//! ## Quick Start
//!
//! ### Named Estimators
//!
//! ```rust
//! use kernel_quadrature::prelude::*;
//!
//! // 100 equispaced nodes on [-4, 4]
//! let nodes: Vec<f64> = (0..100).map(|i| -4.0 + 8.0 * i as f64 / 99.0).collect();
//! let x = SampleSet::from_column(&nodes)?;
//! let f_x: Vec<f64> = nodes.iter().map(|&v| v * v).collect();
//!
//! // E[X²] under N(0, 1)
//! let estimate = kq_rbf_gaussian(&x, &f_x, &[0.0], &[1.0])?;
//! assert!((estimate - 1.0).abs() < 0.1);
//! # Result::<(), QuadratureError>::Ok(())
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use kernel_quadrature::prelude::*;
//!
//! let model = KernelQuadrature::new()
//!     .kernel(Matern32Product)        // Kernel family
//!     .length_scale(FixedVector(3.0)) // Length-scale policy
//!     .regularization(1e-6)           // Diagonal jitter
//!     .adapter(Single)
//!     .build()?;
//!
//! let nodes: Vec<f64> = (0..20).map(|i| i as f64 / 19.0).collect();
//! let x = SampleSet::from_column(&nodes)?;
//!
//! // Weights can be reused for several integrands over the same nodes
//! let rule = model.weights(&x, &MeasureParameters::uniform(0.0, 1.0))?;
//! let mean = rule.integrate(&nodes)?;
//! assert!((mean - 0.5).abs() < 1e-3);
//! # Result::<(), QuadratureError>::Ok(())
//! ```
//!
//! ### Batches
//!
//! Every named estimator has a `_batch` form. Each argument is either shared
//! by the batch or indexed by the batch position:
//!
//! ```rust
//! use kernel_quadrature::prelude::*;
//!
//! let nodes: Vec<f64> = (0..60).map(|i| -3.5 + 7.0 * i as f64 / 59.0).collect();
//! let x = SampleSet::from_column(&nodes)?;
//! let f_x = vec![vec![1.0; 60], nodes.iter().map(|&v| v * v).collect()];
//!
//! // Shared nodes, one integrand per element
//! let estimates = kq_matern32_gaussian_batch(&x, &f_x)?;
//! assert_eq!(estimates.len(), 2);
//! assert!((estimates[0] - 1.0).abs() < 0.01);
//!
//! // The same with the generic builder
//! let model = KernelQuadrature::<f64>::new()
//!     .kernel(Matern32)
//!     .execution(Sequential)
//!     .adapter(Batch)
//!     .build()?;
//! let generic = model.estimate(
//!     Batched::Shared(&x),
//!     Batched::Indexed(&f_x),
//!     Batched::Shared(&MeasureParameters::StandardNormal),
//! )?;
//! assert!((generic[1] - estimates[1]).abs() < 1e-12);
//! # Result::<(), QuadratureError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every estimator returns `Result<_, QuadratureError>`. Shape violations
//! (empty samples, mismatched lengths, unsupported dimension, measure
//! parameters of the wrong length, non-finite values) fail fast:
//!
//! ```rust
//! use kernel_quadrature::prelude::*;
//!
//! let x = SampleSet::from_rows(&[[0.0, 0.0], [1.0, 1.0]])?;
//! match kq_matern32_gaussian(&x, &[1.0, 1.0]) {
//!     Err(QuadratureError::UnsupportedDimension { supported, got, .. }) => {
//!         assert_eq!((supported, got), (1, 2));
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! # Result::<(), QuadratureError>::Ok(())
//! ```
//!
//! ## Estimators
//!
//! | Estimator                  | Kernel             | Measure         | Dim.  | Length scale   |
//! |----------------------------|--------------------|-----------------|-------|----------------|
//! | `kq_rbf_gaussian`          | RBF                | N(mean, cov)    | any   | median         |
//! | `kq_rbf_uniform`           | RBF                | U(a, b)         | any   | median         |
//! | `kq_matern32_gaussian`     | Matérn-3/2         | N(0, 1)         | 1     | median         |
//! | `kq_matern12_gaussian`     | product Matérn-1/2 | N(0, 1)         | 1     | 1.0            |
//! | `kq_matern32_uniform`      | product Matérn-3/2 | U(a, b) box     | any   | 3.0            |
//! | `kq_matern12_uniform`      | Matérn-1/2         | U(a, b)         | 1     | median         |
//! | `kq_log_rbf_log_gaussian`  | log-domain RBF     | logN(mu, std)   | 1     | 0.1            |
//!
//! The median heuristic is `median(|X − mean(X)|)` over all entries. If it
//! collapses to zero (a single point, identical points) the length scale
//! falls back to 1.0 and a warning is logged.
//!
//! ## Builder Parameters
//!
//! | Parameter                 | Default        | Description                                   | Adapter |
//! |---------------------------|----------------|-----------------------------------------------|---------|
//! | **kernel**                | `Rbf`          | Kernel family (also selects the embedding)    | All     |
//! | **length_scale**          | `ScalarMedian` | Length-scale policy                           | All     |
//! | **amplitude**             | 1.0            | Kernel amplitude A                            | All     |
//! | **regularization**        | 1e-6           | Diagonal jitter ε                             | All     |
//! | **dimensions**            | any            | Required sample dimension                     | All     |
//! | **condition_diagnostics** | off            | Log the Gram condition number                 | All     |
//! | **name**                  | kernel name    | Name reported in errors and logs              | All     |
//! | **execution**             | `Parallel`     | Scheduling of batch elements                  | Batch   |
//!
//! Setting a parameter twice is reported by `build()` as
//! `QuadratureError::DuplicateParameter`.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never
//! installs a logger. Length-scale selection and batch scheduling are logged
//! at `debug`; the median fallback and ill-conditioned Gram matrices (with
//! `condition_diagnostics`) at `warn`.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std + alloc`. Disable default features to remove
//! the standard library and rayon:
//!
//! ```toml
//! [dependencies]
//! kernel-quadrature = { version = "0.1", default-features = false }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): standard library support and `std::error::Error`.
//! - `parallel` (default): batch elements run on rayon.
//! - `dev`: exposes the `internals` module for white-box testing.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains sample sets, measure parameters, batched arguments, the batch
// map and the error type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains kernels, closed-form kernel mean embeddings, special functions,
// the median heuristic statistic and the linear algebra backend.
mod math;

// Layer 3: Algorithms - core quadrature algorithms.
//
// Contains length-scale selection and quadrature-rule assembly.
mod algorithms;

// Layer 4: Engine - orchestration and validation.
//
// Contains the single-instance executor and input validation.
mod engine;

// Layer 5: Adapters - execution mode adapters.
//
// Contains execution adapters for one integral (single) and stacks of
// independent integrals (batch).
mod adapters;

// High-level fluent API for kernel quadrature.
//
// Provides the `KernelQuadrature` builder.
mod api;

// Named estimators with fixed kernel, measure and length-scale policy.
mod variants;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use api::*;
pub use variants::*;

// ============================================================================
// Prelude
// ============================================================================

/// Standard kernel quadrature prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use kernel_quadrature::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Single},
        Batched,
        ExecutionMode::{Parallel, Sequential},
        KernelFamily::{LogRbf, Matern12, Matern12Product, Matern32, Matern32Product, Rbf},
        KernelQuadratureBuilder as KernelQuadrature,
        LengthScalePolicy::{FixedScalar, FixedVector, ScalarMedian, VectorMedian},
        MeasureParameters, QuadratureError, QuadratureRule, SampleSet,
    };
    pub use crate::variants::*;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
