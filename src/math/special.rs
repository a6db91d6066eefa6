//! Special functions used by the closed-form embeddings.
//!
//! ## Purpose
//!
//! This module provides the error function and standard normal pdf/cdf for
//! generic float types. Evaluation happens in f64 through `libm`, so the same
//! code serves `no_std` builds.
//!
//! ## Key concepts
//!
//! * **Scaled cdf**: `e^a · Φ(z)` appears in every Matérn/Gaussian embedding
//!   with `a` growing like λ². For deep negative `z` the product is evaluated
//!   from the Mills-ratio expansion so the two factors never overflow or
//!   underflow separately.

// External dependencies
use core::f64::consts::{FRAC_1_SQRT_2, PI};
use num_traits::Float;

/// Below this argument `Φ(z)` is replaced by its asymptotic expansion.
const TAIL_CUTOFF: f64 = -20.0;

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

#[inline]
fn from_f64<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

/// Error function.
#[inline]
pub fn erf<T: Float>(x: T) -> T {
    from_f64(libm::erf(to_f64(x)))
}

/// Standard normal density φ(z).
#[inline]
pub fn normal_pdf<T: Float>(z: T) -> T {
    let z = to_f64(z);
    from_f64(libm::exp(-0.5 * z * z) / libm::sqrt(2.0 * PI))
}

/// Standard normal distribution function Φ(z).
#[inline]
pub fn normal_cdf<T: Float>(z: T) -> T {
    from_f64(0.5 * libm::erfc(-to_f64(z) * FRAC_1_SQRT_2))
}

/// `e^a · Φ(z)`, stable when `a` is large and `z` is very negative.
pub fn exp_times_normal_cdf<T: Float>(a: T, z: T) -> T {
    let (a, z) = (to_f64(a), to_f64(z));
    if z >= TAIL_CUTOFF {
        return from_f64(libm::exp(a) * normal_cdf(z));
    }
    // Φ(z) ≈ φ(z)/|z| · (1 - 1/z² + 3/z⁴ - 15/z⁶)
    let z2 = z * z;
    let series = 1.0 - 1.0 / z2 + 3.0 / (z2 * z2) - 15.0 / (z2 * z2 * z2);
    from_f64(libm::exp(a - 0.5 * z2) / (libm::sqrt(2.0 * PI) * -z) * series)
}
