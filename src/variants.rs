//! Named kernel quadrature estimators.
//!
//! ## Purpose
//!
//! This module provides the fixed (kernel, measure, length-scale) pairings as
//! plain functions, each with a single-instance form returning one estimate
//! and a batched form returning one estimate per batch element.
//!
//! ## Design notes
//!
//! * **Configurations, not copies**: Every estimator is a
//!   [`QuadratureExecutor`] with a fixed kernel and length-scale policy,
//!   unit amplitude and the default regularization.
//! * **Fixed broadcast patterns**: Each batched form fixes which arguments
//!   are shared and which are indexed by the batch position.
//! * **Parallel batches**: Batched forms run on rayon when the `parallel`
//!   feature is enabled.
//!
//! ## Key concepts
//!
//! | Estimator                  | Kernel             | Measure         | Dim.  | Length scale   |
//! |----------------------------|--------------------|-----------------|-------|----------------|
//! | `kq_rbf_gaussian`          | RBF                | N(mean, cov)    | any   | scalar median  |
//! | `kq_rbf_uniform`           | RBF                | U(a, b)         | any   | scalar median  |
//! | `kq_matern32_gaussian`     | Matérn-3/2         | N(0, 1)         | 1     | scalar median  |
//! | `kq_matern12_gaussian`     | product Matérn-1/2 | N(0, 1)         | 1     | 1.0 per dim    |
//! | `kq_matern32_uniform`      | product Matérn-3/2 | U(a, b) box     | any   | 3.0 per dim    |
//! | `kq_matern12_uniform`      | Matérn-1/2         | U(a, b)         | 1     | scalar median  |
//! | `kq_log_rbf_log_gaussian`  | log-domain RBF     | logN(mu, std)   | 1     | 0.1            |
//!
//! ## Non-goals
//!
//! * Measure-parameter values (a < b, std > 0, positive-definite covariance)
//!   are not validated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::adapters::batch::BatchQuadrature;
use crate::algorithms::lengthscale::LengthScalePolicy;
use crate::algorithms::quadrature::RuleParameters;
use crate::engine::executor::QuadratureExecutor;
use crate::math::kernel::KernelFamily;
use crate::math::linalg::FloatLinalg;
use crate::primitives::backend::ExecutionMode;
use crate::primitives::batch::{resolve_batch_len, Batched};
use crate::primitives::errors::QuadratureError;
use crate::primitives::measure::MeasureParameters;
use crate::primitives::samples::SampleSet;

// ============================================================================
// Estimator Configurations
// ============================================================================

fn rbf_gaussian<T: FloatLinalg>() -> QuadratureExecutor<T> {
    QuadratureExecutor::new(RuleParameters::new(
        KernelFamily::Rbf,
        LengthScalePolicy::ScalarMedian,
    ))
    .name("kq_rbf_gaussian")
}

fn rbf_uniform<T: FloatLinalg>() -> QuadratureExecutor<T> {
    QuadratureExecutor::new(RuleParameters::new(
        KernelFamily::Rbf,
        LengthScalePolicy::ScalarMedian,
    ))
    .name("kq_rbf_uniform")
}

fn matern32_gaussian<T: FloatLinalg>() -> QuadratureExecutor<T> {
    QuadratureExecutor::new(RuleParameters::new(
        KernelFamily::Matern32,
        LengthScalePolicy::ScalarMedian,
    ))
    .name("kq_matern32_gaussian")
    .required_dims(1)
}

fn matern12_gaussian<T: FloatLinalg>() -> QuadratureExecutor<T> {
    QuadratureExecutor::new(RuleParameters::new(
        KernelFamily::Matern12Product,
        LengthScalePolicy::FixedVector(T::one()),
    ))
    .name("kq_matern12_gaussian")
    .required_dims(1)
}

fn matern32_uniform<T: FloatLinalg>() -> QuadratureExecutor<T> {
    QuadratureExecutor::new(RuleParameters::new(
        KernelFamily::Matern32Product,
        LengthScalePolicy::FixedVector(T::from(3.0).unwrap()),
    ))
    .name("kq_matern32_uniform")
}

fn matern12_uniform<T: FloatLinalg>() -> QuadratureExecutor<T> {
    QuadratureExecutor::new(RuleParameters::new(
        KernelFamily::Matern12,
        LengthScalePolicy::ScalarMedian,
    ))
    .name("kq_matern12_uniform")
    .required_dims(1)
}

fn log_rbf_log_gaussian<T: FloatLinalg>() -> QuadratureExecutor<T> {
    QuadratureExecutor::new(RuleParameters::new(
        KernelFamily::LogRbf,
        LengthScalePolicy::FixedScalar(T::from(0.1).unwrap()),
    ))
    .name("kq_log_rbf_log_gaussian")
    .required_dims(1)
}

/// Run `executor` over a batch with the default execution mode.
fn run_batch<T: FloatLinalg>(
    executor: QuadratureExecutor<T>,
    x: Batched<'_, SampleSet<T>>,
    f_x: Batched<'_, Vec<T>>,
    measure: Batched<'_, MeasureParameters<T>>,
) -> Result<Vec<T>, QuadratureError> {
    BatchQuadrature::new(executor, ExecutionMode::default()).estimate(x, f_x, measure)
}

/// Pair up two indexed measure-parameter arrays into one measure per element.
fn zip_measures<T, A, B, F>(
    names: (&'static str, &'static str),
    first: &[A],
    second: &[B],
    make: F,
) -> Result<Vec<MeasureParameters<T>>, QuadratureError>
where
    F: Fn(&A, &B) -> MeasureParameters<T>,
{
    resolve_batch_len(&[(names.0, Some(first.len())), (names.1, Some(second.len()))])?;
    Ok(first.iter().zip(second).map(|(a, b)| make(a, b)).collect())
}

// ============================================================================
// RBF Estimators
// ============================================================================

/// RBF kernel quadrature against N(mean, cov).
///
/// `mean` has length D and `cov` is the row-major D×D covariance.
pub fn kq_rbf_gaussian<T: FloatLinalg>(
    x: &SampleSet<T>,
    f_x: &[T],
    mean: &[T],
    cov: &[T],
) -> Result<T, QuadratureError> {
    rbf_gaussian().estimate(x, f_x, &MeasureParameters::gaussian(mean, cov))
}

/// Batched [`kq_rbf_gaussian`]: shared samples, one integrand and one
/// Gaussian per element.
pub fn kq_rbf_gaussian_batch<T: FloatLinalg>(
    x: &SampleSet<T>,
    f_x: &[Vec<T>],
    means: &[Vec<T>],
    covs: &[Vec<T>],
) -> Result<Vec<T>, QuadratureError> {
    let measures = zip_measures(("mean", "cov"), means, covs, |m, c| {
        MeasureParameters::gaussian(m, c)
    })?;
    run_batch(
        rbf_gaussian(),
        Batched::Shared(x),
        Batched::Indexed(f_x),
        Batched::Indexed(&measures),
    )
}

/// RBF kernel quadrature against U(a, b) in every dimension.
pub fn kq_rbf_uniform<T: FloatLinalg>(
    x: &SampleSet<T>,
    f_x: &[T],
    a: T,
    b: T,
) -> Result<T, QuadratureError> {
    rbf_uniform().estimate(x, f_x, &MeasureParameters::uniform(a, b))
}

/// Batched [`kq_rbf_uniform`]: one sample set and integrand per element,
/// shared bounds.
pub fn kq_rbf_uniform_batch<T: FloatLinalg>(
    x: &[SampleSet<T>],
    f_x: &[Vec<T>],
    a: T,
    b: T,
) -> Result<Vec<T>, QuadratureError> {
    let measure = MeasureParameters::uniform(a, b);
    run_batch(
        rbf_uniform(),
        Batched::Indexed(x),
        Batched::Indexed(f_x),
        Batched::Shared(&measure),
    )
}

// ============================================================================
// Matérn Estimators
// ============================================================================

/// Matérn-3/2 kernel quadrature against N(0, 1). One-dimensional samples only.
pub fn kq_matern32_gaussian<T: FloatLinalg>(
    x: &SampleSet<T>,
    f_x: &[T],
) -> Result<T, QuadratureError> {
    matern32_gaussian().estimate(x, f_x, &MeasureParameters::StandardNormal)
}

/// Batched [`kq_matern32_gaussian`]: shared samples, one integrand per element.
pub fn kq_matern32_gaussian_batch<T: FloatLinalg>(
    x: &SampleSet<T>,
    f_x: &[Vec<T>],
) -> Result<Vec<T>, QuadratureError> {
    run_batch(
        matern32_gaussian(),
        Batched::Shared(x),
        Batched::Indexed(f_x),
        Batched::Shared(&MeasureParameters::StandardNormal),
    )
}

/// Matérn-1/2 kernel quadrature against N(0, 1) with unit length scale.
/// One-dimensional samples only.
pub fn kq_matern12_gaussian<T: FloatLinalg>(
    x: &SampleSet<T>,
    f_x: &[T],
) -> Result<T, QuadratureError> {
    matern12_gaussian().estimate(x, f_x, &MeasureParameters::StandardNormal)
}

/// Batched [`kq_matern12_gaussian`]: one sample set and integrand per element.
pub fn kq_matern12_gaussian_batch<T: FloatLinalg>(
    x: &[SampleSet<T>],
    f_x: &[Vec<T>],
) -> Result<Vec<T>, QuadratureError> {
    run_batch(
        matern12_gaussian(),
        Batched::Indexed(x),
        Batched::Indexed(f_x),
        Batched::Shared(&MeasureParameters::StandardNormal),
    )
}

/// Product Matérn-3/2 kernel quadrature against the box U(a, b), length
/// scale 3 in every dimension. `a` and `b` have length 1 or D.
pub fn kq_matern32_uniform<T: FloatLinalg>(
    x: &SampleSet<T>,
    f_x: &[T],
    a: &[T],
    b: &[T],
) -> Result<T, QuadratureError> {
    matern32_uniform().estimate(x, f_x, &MeasureParameters::uniform_box(a, b))
}

/// Batched [`kq_matern32_uniform`]: every argument indexed.
pub fn kq_matern32_uniform_batch<T: FloatLinalg>(
    x: &[SampleSet<T>],
    f_x: &[Vec<T>],
    a: &[Vec<T>],
    b: &[Vec<T>],
) -> Result<Vec<T>, QuadratureError> {
    let measures = zip_measures(("a", "b"), a, b, |lo, hi| {
        MeasureParameters::uniform_box(lo, hi)
    })?;
    run_batch(
        matern32_uniform(),
        Batched::Indexed(x),
        Batched::Indexed(f_x),
        Batched::Indexed(&measures),
    )
}

/// Matérn-1/2 kernel quadrature against U(a, b). One-dimensional samples only.
pub fn kq_matern12_uniform<T: FloatLinalg>(
    x: &SampleSet<T>,
    f_x: &[T],
    a: T,
    b: T,
) -> Result<T, QuadratureError> {
    matern12_uniform().estimate(x, f_x, &MeasureParameters::uniform(a, b))
}

/// Batched [`kq_matern12_uniform`]: one sample set and integrand per element,
/// shared bounds.
pub fn kq_matern12_uniform_batch<T: FloatLinalg>(
    x: &[SampleSet<T>],
    f_x: &[Vec<T>],
    a: T,
    b: T,
) -> Result<Vec<T>, QuadratureError> {
    let measure = MeasureParameters::uniform(a, b);
    run_batch(
        matern12_uniform(),
        Batched::Indexed(x),
        Batched::Indexed(f_x),
        Batched::Shared(&measure),
    )
}

// ============================================================================
// Log-Domain Estimators
// ============================================================================

/// Log-RBF kernel quadrature against the log-normal measure with log-mean
/// `mu` and log-standard-deviation `std`. Samples must be positive and
/// one-dimensional.
pub fn kq_log_rbf_log_gaussian<T: FloatLinalg>(
    x: &SampleSet<T>,
    f_x: &[T],
    mu: T,
    std: T,
) -> Result<T, QuadratureError> {
    log_rbf_log_gaussian().estimate(x, f_x, &MeasureParameters::log_gaussian(mu, std))
}

/// Batched [`kq_log_rbf_log_gaussian`]: every argument indexed.
pub fn kq_log_rbf_log_gaussian_batch<T: FloatLinalg>(
    x: &[SampleSet<T>],
    f_x: &[Vec<T>],
    mu: &[T],
    std: &[T],
) -> Result<Vec<T>, QuadratureError> {
    let measures = zip_measures(("mu", "std"), mu, std, |&m, &s| {
        MeasureParameters::log_gaussian(m, s)
    })?;
    run_batch(
        log_rbf_log_gaussian(),
        Batched::Indexed(x),
        Batched::Indexed(f_x),
        Batched::Indexed(&measures),
    )
}
