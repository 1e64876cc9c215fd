//! circomata compiler: DFA to Circom constraint program.
//!
//! This crate provides the compilation pipeline for validated automata:
//! - `reverse` - incoming-edge index, in declaration order
//! - `classes` - character-class range optimization
//! - `emit` - transition logic, declarations, boundary rows, accept reduction
//! - `ir` - typed statement list the emitter produces
//! - `render` - single pass from statements to Circom text
//! - `lookup` - flat transition table for lookup-based backends

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod classes;
pub mod emit;
pub mod ir;
pub mod lookup;
pub mod render;
pub mod reverse;

mod compilation;

#[cfg(test)]
mod compilation_tests;

pub use compilation::{Compilation, compile};
pub use emit::ComponentCounts;
pub use lookup::LookupTable;
pub use render::Config;

use circomata_core::{EncodingError, LoadError};

/// Errors that can occur during compilation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;
