//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a single quadrature estimate:
//! - Input validation
//! - Rule assembly, diagnostics and contraction
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single-instance executor.
pub mod executor;

/// Input and parameter validation.
pub mod validator;
