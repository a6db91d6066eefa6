//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides the execution adapters:
//! - `single`: one integral per call
//! - `batch`: T independent integrals per call, optionally in parallel
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batched execution adapter.
pub mod batch;

/// Single-instance execution adapter.
pub mod single;
