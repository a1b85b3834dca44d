//! # Euclid
//!
//! Euclid is a terminal front end for Euclidean rhythm generation. It wraps
//! the `euclid-core` sequence generator in a small host: a stateful sequencer
//! object whose parameters are set one at a time (each change prints the new
//! sequence), an interactive REPL, and a one-shot command-line mode.
//!
//! ## Modules
//!
//! - `cli`: Command-line configuration (initial parameters, strategy, format).
//! - `commands`: The REPL command registry and its handlers.
//! - `output`: Rendering of sequences as integers, grids or JSON.
//! - `repl`: Provides the Read-Eval-Print Loop for interactive use.

pub mod cli;
pub mod commands;
pub mod output;
pub mod repl;

// Re-export commonly used types and functions for convenience
pub use crate::output::OutputFormat;
pub use euclid_core::{generate, Distribution, EuclidObject, PatternParams, Sequence};
