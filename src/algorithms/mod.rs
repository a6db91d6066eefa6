//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the kernel quadrature algorithm itself:
//! - Length-scale selection (median heuristic or fixed)
//! - Quadrature-rule assembly (Gram matrix, regularization, inversion, embedding)
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Length-scale selection.
pub mod lengthscale;

/// Quadrature-rule assembly.
pub mod quadrature;
