//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data model and basic utilities shared by every
//! other layer:
//! - The crate-wide error type
//! - Sample sets and reference-measure parameters
//! - Batched arguments and the batch map
//! - Execution-mode hints
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Execution-mode hint for batched estimation.
pub mod backend;

/// Batched arguments and the data-parallel batch map.
pub mod batch;

/// Error types.
pub mod errors;

/// Reference-measure parameters.
pub mod measure;

/// Sample point storage.
pub mod samples;
