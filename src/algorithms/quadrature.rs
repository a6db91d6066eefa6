//! Quadrature-rule assembly.
//!
//! ## Purpose
//!
//! This module turns a sample set, a kernel family, a length-scale policy and
//! a reference measure into quadrature weights `w = φᵀ (A·K + εI)⁻¹`, so that
//! the integral estimate is `w · f(X)`.
//!
//! ## Design notes
//!
//! * **Explicit inverse**: The regularized Gram matrix is inverted (QR, SVD
//!   fallback) rather than solved against one right-hand side, so the same
//!   rule integrates any number of function-value vectors.
//! * **Amplitude**: `A` scales both the Gram matrix and the embedding.
//! * **Generics**: Generic over `FloatLinalg` types.
//!
//! ## Key concepts
//!
//! 1. `l ← policy(X)`
//! 2. `K ← A·k(X, X; l) + εI`, then `K⁻¹`
//! 3. `φ ← A·embed(p; l, X)`
//! 4. `w ← φᵀ K⁻¹`, estimate `w · f(X)`
//!
//! ## Invariants
//!
//! * `weights.len() == samples.n_points()`.
//! * The map `f(X) ↦ estimate` is linear.
//!
//! ## Non-goals
//!
//! * This module does not validate shapes beyond what the kernels check
//!   (handled by `engine::validator`).
//! * This module does not compute posterior variances.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::lengthscale::LengthScalePolicy;
use crate::math::kernel::{KernelFamily, LengthScale};
use crate::math::linalg::{add_diagonal, dot, FloatLinalg};
use crate::primitives::errors::QuadratureError;
use crate::primitives::measure::MeasureParameters;
use crate::primitives::samples::SampleSet;

// ============================================================================
// Rule Parameters
// ============================================================================

/// Everything that defines a quadrature rule apart from the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleParameters<T> {
    /// Kernel family (also selects the embedding formula).
    pub kernel: KernelFamily,

    /// Length-scale selection rule.
    pub policy: LengthScalePolicy<T>,

    /// Kernel amplitude A.
    pub amplitude: T,

    /// Diagonal regularization ε.
    pub regularization: T,
}

impl<T: FloatLinalg> RuleParameters<T> {
    /// Default diagonal regularization.
    pub const DEFAULT_REGULARIZATION: f64 = 1e-6;

    /// Parameters with unit amplitude and the default regularization.
    pub fn new(kernel: KernelFamily, policy: LengthScalePolicy<T>) -> Self {
        Self {
            kernel,
            policy,
            amplitude: T::one(),
            regularization: T::from(Self::DEFAULT_REGULARIZATION).unwrap(),
        }
    }
}

// ============================================================================
// Quadrature Rule
// ============================================================================

/// Quadrature weights for one sample set and one measure.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureRule<T> {
    weights: Vec<T>,
    lengthscale: LengthScale<T>,
}

impl<T: FloatLinalg> QuadratureRule<T> {
    /// Assemble the rule for `samples` against `measure`.
    pub fn assemble(
        params: &RuleParameters<T>,
        samples: &SampleSet<T>,
        measure: &MeasureParameters<T>,
    ) -> Result<Self, QuadratureError> {
        let n = samples.n_points();
        let lengthscale = params.policy.select(samples);

        let gram = regularized_gram(params, samples, &lengthscale)?;
        let gram_inv = T::invert(&gram, n).ok_or(QuadratureError::SingularMatrix)?;

        let embedding: Vec<T> = params
            .kernel
            .embed(measure, &lengthscale, samples)?
            .into_iter()
            .map(|phi| params.amplitude * phi)
            .collect();

        // Row vector φᵀ K⁻¹
        let weights = (0..n)
            .map(|j| {
                embedding
                    .iter()
                    .enumerate()
                    .fold(T::zero(), |acc, (i, &phi)| acc + phi * gram_inv[i * n + j])
            })
            .collect();

        Ok(Self {
            weights,
            lengthscale,
        })
    }

    /// Integral estimate `w · f(X)`.
    pub fn integrate(&self, values: &[T]) -> Result<T, QuadratureError> {
        if values.len() != self.weights.len() {
            return Err(QuadratureError::MismatchedInputs {
                points: self.weights.len(),
                values: values.len(),
            });
        }
        Ok(dot(&self.weights, values))
    }

    /// Quadrature weights, one per sample point.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Length scale the rule was built with.
    #[inline]
    pub fn lengthscale(&self) -> &LengthScale<T> {
        &self.lengthscale
    }
}

/// Regularized Gram matrix `A·k(X, X; l) + εI` (row-major), as used by `assemble`.
pub fn regularized_gram<T: FloatLinalg>(
    params: &RuleParameters<T>,
    samples: &SampleSet<T>,
    lengthscale: &LengthScale<T>,
) -> Result<Vec<T>, QuadratureError> {
    let mut gram = params.kernel.gram(samples, samples, lengthscale)?;
    gram.iter_mut().for_each(|k| *k = *k * params.amplitude);
    add_diagonal(&mut gram, samples.n_points(), params.regularization);
    Ok(gram)
}
