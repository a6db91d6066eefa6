//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the estimators:
//! - Kernel functions and Gram-matrix construction
//! - Closed-form kernel mean embeddings
//! - Dense linear algebra (nalgebra backend)
//! - Medians and special functions
//!
//! These are reusable mathematical building blocks with no estimator-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Closed-form kernel mean embeddings.
pub mod embedding;

/// Kernel families and Gram matrices.
pub mod kernel;

/// Linear algebra backend.
pub mod linalg;

/// Median and median heuristic.
pub mod median;

/// Error function and normal distribution helpers.
pub mod special;
