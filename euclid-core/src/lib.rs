//! # Euclid Core
//!
//! WASM-compatible core library for Euclidean rhythm generation.
//! Distributes a number of hits as evenly as possible over a number of beats,
//! then optionally rotates the result and mirrors it into a ping-pong cycle.
//!
//! ## Features
//!
//! - **serde**: Enable JSON serialization for web interop
//! - **wasm**: Enable WASM bindings via wasm-bindgen
//! - **colored**: Enable colored terminal output (disabled in WASM)
//!
//! ## Example
//!
//! ```
//! use euclid_core::{generate, PatternParams};
//!
//! let params = PatternParams::new(3, 8, 0, false);
//! assert_eq!(generate(&params).to_ints(), vec![1, 0, 0, 1, 0, 0, 1, 0]);
//! ```

pub mod adapter;
pub mod engine;
pub mod error;
pub mod types;
pub mod wasm;

// Re-export commonly used types
pub use adapter::{EuclidObject, SequenceMessage};
pub use engine::{generate, generate_raw, generate_with};
pub use error::EuclidError;
pub use types::{Distribution, PatternParams, Pulse, Sequence, MAX_BEATS, MAX_OFFSET};
