#![cfg(feature = "dev")]
//! Tests for kernel functions and Gram-matrix construction.
//!
//! ## Test Organization
//!
//! 1. **Kernel Functions** - Point values of RBF and Matérn kernels
//! 2. **Gram Matrices** - Symmetry, unit diagonal, shapes
//! 3. **Length Scales** - Validation and broadcasting

use approx::assert_relative_eq;

use kernel_quadrature::internals::math::kernel::{
    matern12, matern32, rbf, KernelFamily, LengthScale,
};
use kernel_quadrature::internals::primitives::errors::QuadratureError;
use kernel_quadrature::internals::primitives::samples::SampleSet;

const ALL_KERNELS: [KernelFamily; 6] = [
    KernelFamily::Rbf,
    KernelFamily::LogRbf,
    KernelFamily::Matern12,
    KernelFamily::Matern12Product,
    KernelFamily::Matern32,
    KernelFamily::Matern32Product,
];

// ============================================================================
// Kernel Function Tests
// ============================================================================

#[test]
fn test_kernel_values_at_zero_distance() {
    assert_relative_eq!(rbf(0.0f64, 0.7), 1.0);
    assert_relative_eq!(matern12(0.0f64, 0.7), 1.0);
    assert_relative_eq!(matern32(0.0f64, 0.7), 1.0);
}

#[test]
fn test_kernel_point_values() {
    // exp(-1 / 2)
    assert_relative_eq!(rbf(1.0f64, 1.0), (-0.5f64).exp(), epsilon = 1e-15);
    // exp(-r / l)
    assert_relative_eq!(matern12(2.0f64, 0.5), (-4.0f64).exp(), epsilon = 1e-15);
    // (1 + √3 r / l) exp(-√3 r / l) with √3 r / l = 1
    let l = 3.0f64.sqrt();
    assert_relative_eq!(matern32(1.0f64, l), 2.0 * (-1.0f64).exp(), epsilon = 1e-15);
}

#[test]
fn test_kernels_decrease_with_distance() {
    let mut prev = (2.0, 2.0, 2.0);
    for i in 0..20 {
        let r = i as f64 * 0.25;
        let cur = (rbf(r * r, 1.0), matern12(r, 1.0), matern32(r, 1.0));
        assert!(cur.0 < prev.0 && cur.1 < prev.1 && cur.2 < prev.2);
        prev = cur;
    }
}

// ============================================================================
// Gram Matrix Tests
// ============================================================================

#[test]
fn test_gram_symmetric_with_unit_diagonal() {
    let x = SampleSet::from_rows(&[[0.1, 0.4], [0.9, 1.3], [2.2, 0.7], [1.5, 1.5]]).unwrap();
    let ls = LengthScale::Isotropic(0.8);

    for kernel in ALL_KERNELS {
        let gram = kernel.gram(&x, &x, &ls).unwrap();
        assert_eq!(gram.len(), 16);
        for i in 0..4 {
            assert_relative_eq!(gram[i * 4 + i], 1.0, epsilon = 1e-15);
            for j in 0..4 {
                assert_relative_eq!(gram[i * 4 + j], gram[j * 4 + i], epsilon = 1e-15);
                assert!(gram[i * 4 + j] > 0.0 && gram[i * 4 + j] <= 1.0);
            }
        }
    }
}

#[test]
fn test_gram_rectangular_shape() {
    let x = SampleSet::from_column(&[0.0, 1.0, 2.0]).unwrap();
    let y = SampleSet::from_column(&[0.5, 1.5]).unwrap();
    let gram = KernelFamily::Rbf
        .gram(&x, &y, &LengthScale::Isotropic(1.0))
        .unwrap();
    assert_eq!(gram.len(), 6);
    // Row-major: gram[i * 2 + j] = k(x_i, y_j)
    assert_relative_eq!(gram[1], (-1.125f64).exp(), epsilon = 1e-15);
    assert_relative_eq!(gram[2], (-0.125f64).exp(), epsilon = 1e-15);
}

#[test]
fn test_gram_product_differs_from_isotropic() {
    let x = SampleSet::from_rows(&[[0.0, 0.0], [1.0, 1.0]]).unwrap();
    let ls = LengthScale::Isotropic(1.0);

    let iso = KernelFamily::Matern12.gram(&x, &x, &ls).unwrap();
    let prod = KernelFamily::Matern12Product.gram(&x, &x, &ls).unwrap();
    assert_relative_eq!(iso[1], (-(2.0f64.sqrt())).exp(), epsilon = 1e-15);
    assert_relative_eq!(prod[1], (-2.0f64).exp(), epsilon = 1e-15);
}

#[test]
fn test_gram_product_per_dimension_lengthscales() {
    let x = SampleSet::from_rows(&[[0.0, 0.0], [1.0, 2.0]]).unwrap();
    let ls = LengthScale::PerDimension(vec![1.0, 2.0]);
    let gram = KernelFamily::Matern12Product.gram(&x, &x, &ls).unwrap();
    assert_relative_eq!(gram[1], (-2.0f64).exp(), epsilon = 1e-15);
}

#[test]
fn test_gram_log_rbf_is_scale_invariant() {
    let x = SampleSet::from_column(&[0.5, 1.0, 4.0]).unwrap();
    let scaled = SampleSet::from_column(&[5.0, 10.0, 40.0]).unwrap();
    let ls = LengthScale::Isotropic(0.3);
    let a = KernelFamily::LogRbf.gram(&x, &x, &ls).unwrap();
    let b = KernelFamily::LogRbf.gram(&scaled, &scaled, &ls).unwrap();
    for (u, v) in a.iter().zip(&b) {
        assert_relative_eq!(*u, *v, epsilon = 1e-12);
    }
}

#[test]
fn test_gram_log_rbf_rejects_non_positive() {
    let x = SampleSet::from_column(&[0.5, 0.0, 4.0]).unwrap();
    let result = KernelFamily::LogRbf.gram(&x, &x, &LengthScale::Isotropic(0.1));
    assert!(matches!(result, Err(QuadratureError::InvalidNumericValue(_))));
}

#[test]
fn test_gram_dimension_mismatch() {
    let x = SampleSet::from_column(&[0.0, 1.0]).unwrap();
    let y = SampleSet::from_rows(&[[0.0, 1.0]]).unwrap();
    let result = KernelFamily::Rbf.gram(&x, &y, &LengthScale::Isotropic(1.0));
    assert_eq!(
        result,
        Err(QuadratureError::DimensionMismatch {
            argument: "y",
            expected: 1,
            got: 2
        })
    );
}

// ============================================================================
// Length Scale Tests
// ============================================================================

#[test]
fn test_lengthscale_validation() {
    assert!(LengthScale::Isotropic(0.5f64).validate().is_ok());
    assert_eq!(
        LengthScale::Isotropic(0.0f64).validate(),
        Err(QuadratureError::InvalidLengthScale(0.0))
    );
    assert!(LengthScale::PerDimension(vec![1.0f64, f64::NAN])
        .validate()
        .is_err());
    assert!(LengthScale::PerDimension(vec![1.0f64, -2.0])
        .validate()
        .is_err());
}

#[test]
fn test_lengthscale_shapes() {
    let iso = LengthScale::Isotropic(2.0f64);
    assert_eq!(iso.scalar("RBF"), Ok(2.0));
    assert_eq!(iso.per_dimension(3), Ok(vec![2.0, 2.0, 2.0]));

    let single = LengthScale::PerDimension(vec![1.5f64]);
    assert_eq!(single.scalar("RBF"), Ok(1.5));

    let vector = LengthScale::PerDimension(vec![1.0f64, 2.0]);
    assert!(matches!(
        vector.scalar("RBF"),
        Err(QuadratureError::DimensionMismatch {
            argument: "RBF",
            expected: 1,
            got: 2
        })
    ));
    assert!(vector.per_dimension(3).is_err());
}

#[test]
fn test_isotropic_kernel_rejects_vector_lengthscale() {
    let x = SampleSet::from_rows(&[[0.0, 0.0], [1.0, 1.0]]).unwrap();
    let ls = LengthScale::PerDimension(vec![1.0, 2.0]);
    assert!(KernelFamily::Rbf.gram(&x, &x, &ls).is_err());
    assert!(KernelFamily::Matern32Product.gram(&x, &x, &ls).is_ok());
}

#[test]
fn test_kernel_family_names() {
    assert_eq!(KernelFamily::default(), KernelFamily::Rbf);
    assert_eq!(KernelFamily::Matern32Product.name(), "Matern-3/2 product");
    assert!(KernelFamily::Matern12Product.is_product());
    assert!(!KernelFamily::Matern12.is_product());
}
