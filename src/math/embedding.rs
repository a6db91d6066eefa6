//! Embedding library: closed-form kernel mean embeddings.
//!
//! ## Purpose
//!
//! This module provides `φ(x_i) = ∫ k(x_i, y) p(y) dy` in closed form for
//! every supported (kernel, measure) pair, and the dispatch from a
//! `KernelFamily` and a `MeasureParameters` value to the right formula.
//!
//! ## Design notes
//!
//! * **Product structure**: Uniform boxes and the standard normal factorize
//!   over dimensions, so product kernels embed one coordinate at a time.
//! * **Isotropic Matérn**: Only the one-dimensional case has a closed form
//!   here; higher dimensions are rejected with `UnsupportedDimension`.
//! * **Stability**: Terms of the form `e^a Φ(z)` go through
//!   `special::exp_times_normal_cdf`.
//!
//! ## Key concepts
//!
//! For a one-dimensional stationary kernel g(|x − y|) on a box [a, b]:
//!
//! ```text
//! φ(x) = (G(b − x) − G(a − x)) / (b − a),   G(s) = sign(s) · ∫₀^|s| g(t) dt
//! ```
//!
//! which covers points inside and outside the box with one expression.
//!
//! ## Non-goals
//!
//! * Double embeddings ∫∫ k dp dp (used for posterior variances) are not provided.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::{KernelFamily, LengthScale};
use crate::math::linalg::FloatLinalg;
use crate::math::special::{erf, exp_times_normal_cdf, normal_pdf};
use crate::primitives::errors::QuadratureError;
use crate::primitives::measure::{bound_at, MeasureParameters};
use crate::primitives::samples::SampleSet;

// ============================================================================
// Dispatch
// ============================================================================

impl KernelFamily {
    /// Kernel mean embedding of every sample point against `measure`.
    pub fn embed<T: FloatLinalg>(
        self,
        measure: &MeasureParameters<T>,
        lengthscale: &LengthScale<T>,
        x: &SampleSet<T>,
    ) -> Result<Vec<T>, QuadratureError> {
        lengthscale.validate()?;
        measure.check_dims(x.dims())?;

        match (self, measure) {
            (Self::Rbf, MeasureParameters::Gaussian { mean, cov }) => {
                kme_rbf_gaussian(mean, cov, lengthscale.scalar(self.name())?, x)
            }
            (Self::Rbf, MeasureParameters::StandardNormal) => {
                let d = x.dims();
                let mean = vec![T::zero(); d];
                let mut cov = vec![T::zero(); d * d];
                for i in 0..d {
                    cov[i * d + i] = T::one();
                }
                kme_rbf_gaussian(&mean, &cov, lengthscale.scalar(self.name())?, x)
            }
            (Self::Rbf, MeasureParameters::Uniform { lower, upper }) => {
                kme_rbf_uniform(lower, upper, lengthscale.scalar(self.name())?, x)
            }
            (Self::Matern12, MeasureParameters::StandardNormal) => {
                require_one_dimensional(self.name(), x)?;
                kme_matern12_gaussian(&[lengthscale.scalar(self.name())?], x)
            }
            (Self::Matern32, MeasureParameters::StandardNormal) => {
                require_one_dimensional(self.name(), x)?;
                kme_matern32_gaussian(lengthscale.scalar(self.name())?, x)
            }
            (Self::Matern12, MeasureParameters::Uniform { lower, upper }) => {
                require_one_dimensional(self.name(), x)?;
                let l = lengthscale.scalar(self.name())?;
                kme_matern12_uniform(bound_at(lower, 0), bound_at(upper, 0), l, x)
            }
            (Self::Matern32, MeasureParameters::Uniform { lower, upper }) => {
                require_one_dimensional(self.name(), x)?;
                let l = lengthscale.scalar(self.name())?;
                kme_matern32_uniform(lower, upper, &[l], x)
            }
            (
                Self::Matern12Product | Self::Matern32Product,
                MeasureParameters::StandardNormal | MeasureParameters::Uniform { .. },
            ) => {
                let ls = lengthscale.per_dimension(x.dims())?;
                self.product_embedding(measure, &ls, x)
            }
            (Self::LogRbf, MeasureParameters::LogGaussian { mu, std }) => {
                kme_log_rbf_log_gaussian(*mu, *std, x, lengthscale.scalar(self.name())?)
            }
            _ => Err(QuadratureError::IncompatibleMeasure {
                kernel: self.name(),
                measure: measure.name(),
            }),
        }
    }

    /// Route a Matérn kernel and a factorizing measure to its product formula.
    fn product_embedding<T: Float>(
        self,
        measure: &MeasureParameters<T>,
        ls: &[T],
        x: &SampleSet<T>,
    ) -> Result<Vec<T>, QuadratureError> {
        let half = matches!(self, Self::Matern12 | Self::Matern12Product);
        match (measure, half) {
            (MeasureParameters::StandardNormal, true) => kme_matern12_gaussian(ls, x),
            (MeasureParameters::StandardNormal, false) => {
                Ok(product_over_dims(x, ls, matern32_standard_normal_1d))
            }
            (MeasureParameters::Uniform { lower, upper }, true) => {
                uniform_product(lower, upper, ls, x, matern12_antiderivative)
            }
            (MeasureParameters::Uniform { lower, upper }, false) => {
                kme_matern32_uniform(lower, upper, ls, x)
            }
            _ => Err(QuadratureError::IncompatibleMeasure {
                kernel: self.name(),
                measure: measure.name(),
            }),
        }
    }
}

// ============================================================================
// RBF Embeddings
// ============================================================================

/// RBF kernel against N(mean, cov).
///
/// ```text
/// φ(x) = det(I + Σ/l²)^(-1/2) · exp(-½ (x−μ)ᵀ (Σ + l²I)⁻¹ (x−μ))
/// ```
pub fn kme_rbf_gaussian<T: FloatLinalg>(
    mean: &[T],
    cov: &[T],
    l: T,
    x: &SampleSet<T>,
) -> Result<Vec<T>, QuadratureError> {
    let d = x.dims();
    MeasureParameters::gaussian(mean, cov).check_dims(d)?;

    // B = I + Σ/l², so (Σ + l²I)⁻¹ = B⁻¹ / l²
    let l2 = l * l;
    let mut b: Vec<T> = cov.iter().map(|&c| c / l2).collect();
    for i in 0..d {
        b[i * d + i] = b[i * d + i] + T::one();
    }
    let b_inv = T::invert(&b, d).ok_or(QuadratureError::SingularMatrix)?;
    let scale = T::one() / T::determinant(&b, d).sqrt();
    let half = T::from(0.5).unwrap();

    let mut centered = vec![T::zero(); d];
    Ok(x.points()
        .map(|p| {
            for ((c, &xi), &m) in centered.iter_mut().zip(p).zip(mean) {
                *c = xi - m;
            }
            let mut quad = T::zero();
            for i in 0..d {
                let row = &b_inv[i * d..(i + 1) * d];
                let bx = row
                    .iter()
                    .zip(&centered)
                    .fold(T::zero(), |acc, (&bij, &cj)| acc + bij * cj);
                quad = quad + centered[i] * bx;
            }
            scale * (-half * quad / l2).exp()
        })
        .collect())
}

/// RBF kernel against the uniform box [a, b] (bounds of length 1 or D).
///
/// ```text
/// φ(x) = ∏_d l√(π/2) [erf((b_d−x_d)/(√2 l)) − erf((a_d−x_d)/(√2 l))] / (b_d − a_d)
/// ```
pub fn kme_rbf_uniform<T: Float>(
    a: &[T],
    b: &[T],
    l: T,
    x: &SampleSet<T>,
) -> Result<Vec<T>, QuadratureError> {
    MeasureParameters::uniform_box(a, b).check_dims(x.dims())?;
    let pi = T::from(core::f64::consts::PI).unwrap();
    let two = T::from(2.0).unwrap();
    let prefactor = l * (pi / two).sqrt();
    let denom = two.sqrt() * l;

    Ok(x.points()
        .map(|p| {
            p.iter().enumerate().fold(T::one(), |acc, (d, &xd)| {
                let (ad, bd) = (bound_at(a, d), bound_at(b, d));
                let mass = erf((bd - xd) / denom) - erf((ad - xd) / denom);
                acc * prefactor * mass / (bd - ad)
            })
        })
        .collect())
}

/// Log-domain RBF kernel against the log-normal measure (D = 1).
///
/// ```text
/// φ(x) = l / √(l² + σ²) · exp(−(ln x − μ)² / (2(l² + σ²)))
/// ```
pub fn kme_log_rbf_log_gaussian<T: Float>(
    mu: T,
    std: T,
    x: &SampleSet<T>,
    l: T,
) -> Result<Vec<T>, QuadratureError> {
    require_one_dimensional("log-RBF", x)?;
    let total = l * l + std * std;
    let two = T::from(2.0).unwrap();
    let scale = l / total.sqrt();
    Ok(x.column(0)
        .map(|xi| {
            let c = xi.ln() - mu;
            scale * (-c * c / (two * total)).exp()
        })
        .collect())
}

// ============================================================================
// Matérn Embeddings
// ============================================================================

/// Product Matérn-1/2 kernel against the standard normal.
///
/// ```text
/// φ_d(x) = e^{λ²/2 − λx} Φ(x − λ) + e^{λ²/2 + λx} Φ(−x − λ),   λ = 1/l_d
/// ```
pub fn kme_matern12_gaussian<T: Float>(
    ls: &[T],
    x: &SampleSet<T>,
) -> Result<Vec<T>, QuadratureError> {
    check_lengthscales(ls, x)?;
    Ok(product_over_dims(x, ls, matern12_standard_normal_1d))
}

/// Isotropic Matérn-3/2 kernel against the standard normal (D = 1).
pub fn kme_matern32_gaussian<T: Float>(l: T, x: &SampleSet<T>) -> Result<Vec<T>, QuadratureError> {
    require_one_dimensional(KernelFamily::Matern32.name(), x)?;
    Ok(x.column(0)
        .map(|xi| matern32_standard_normal_1d(xi, l))
        .collect())
}

/// Product Matérn-3/2 kernel against the uniform box [a, b].
pub fn kme_matern32_uniform<T: Float>(
    a: &[T],
    b: &[T],
    ls: &[T],
    x: &SampleSet<T>,
) -> Result<Vec<T>, QuadratureError> {
    uniform_product(a, b, ls, x, matern32_antiderivative)
}

/// Isotropic Matérn-1/2 kernel against the uniform interval [a, b] (D = 1).
pub fn kme_matern12_uniform<T: Float>(
    a: T,
    b: T,
    l: T,
    x: &SampleSet<T>,
) -> Result<Vec<T>, QuadratureError> {
    require_one_dimensional(KernelFamily::Matern12.name(), x)?;
    uniform_product(&[a], &[b], &[l], x, matern12_antiderivative)
}

fn matern12_standard_normal_1d<T: Float>(x: T, l: T) -> T {
    let lam = T::one() / l;
    let a = lam * lam / T::from(2.0).unwrap();
    exp_times_normal_cdf(a - lam * x, x - lam) + exp_times_normal_cdf(a + lam * x, -x - lam)
}

fn matern32_standard_normal_1d<T: Float>(x: T, l: T) -> T {
    let lam = T::from(3.0).unwrap().sqrt() / l;
    let two = T::from(2.0).unwrap();
    let a = lam * lam / two;
    let side = |s: T| {
        exp_times_normal_cdf(a - lam * s, s - lam) * (T::one() + lam * s - lam * lam)
    };
    side(x) + side(-x) + two * lam * normal_pdf(x)
}

/// ∫₀^d exp(−t/l) dt
fn matern12_antiderivative<T: Float>(d: T, l: T) -> T {
    l * (T::one() - (-d / l).exp())
}

/// ∫₀^d (1 + λt) exp(−λt) dt with λ = √3/l
fn matern32_antiderivative<T: Float>(d: T, l: T) -> T {
    let lam = T::from(3.0).unwrap().sqrt() / l;
    let two = T::from(2.0).unwrap();
    (two - (two + lam * d) * (-lam * d).exp()) / lam
}

// ============================================================================
// Helpers
// ============================================================================

fn require_one_dimensional<T: Float>(
    estimator: &'static str,
    x: &SampleSet<T>,
) -> Result<(), QuadratureError> {
    if x.dims() != 1 {
        return Err(QuadratureError::UnsupportedDimension {
            estimator,
            supported: 1,
            got: x.dims(),
        });
    }
    Ok(())
}

fn check_lengthscales<T: Float>(ls: &[T], x: &SampleSet<T>) -> Result<(), QuadratureError> {
    if ls.len() != x.dims() {
        return Err(QuadratureError::DimensionMismatch {
            argument: "lengthscale",
            expected: x.dims(),
            got: ls.len(),
        });
    }
    Ok(())
}

/// Multiply a one-dimensional embedding over the coordinates of every point.
fn product_over_dims<T: Float>(x: &SampleSet<T>, ls: &[T], one_d: fn(T, T) -> T) -> Vec<T> {
    x.points()
        .map(|p| {
            p.iter()
                .zip(ls)
                .fold(T::one(), |acc, (&xd, &l)| acc * one_d(xd, l))
        })
        .collect()
}

/// Product embedding against a uniform box from the kernel antiderivative.
fn uniform_product<T: Float>(
    a: &[T],
    b: &[T],
    ls: &[T],
    x: &SampleSet<T>,
    antiderivative: fn(T, T) -> T,
) -> Result<Vec<T>, QuadratureError> {
    MeasureParameters::uniform_box(a, b).check_dims(x.dims())?;
    check_lengthscales(ls, x)?;

    let signed = |s: T, l: T| {
        let v = antiderivative(s.abs(), l);
        if s < T::zero() {
            -v
        } else {
            v
        }
    };
    Ok(x.points()
        .map(|p| {
            p.iter()
                .zip(ls)
                .enumerate()
                .fold(T::one(), |acc, (d, (&xd, &l))| {
                    let (ad, bd) = (bound_at(a, d), bound_at(b, d));
                    acc * (signed(bd - xd, l) - signed(ad - xd, l)) / (bd - ad)
                })
        })
        .collect())
}
