//! Core module wiring: bound storage, errors, and type utilities.

pub mod error;
pub mod normalizer;
pub mod types;

// Re-export the most commonly used items so downstream code can simply import
// `crate::core::*` without having to juggle individual submodules.
pub use error::*;
pub use normalizer::*;
pub use types::*;
