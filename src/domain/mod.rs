//! Domain types used throughout the library.
//!
//! This module defines:
//!
//! - the transform kind enumeration (`TransformKind`) with its static
//!   metadata (complexity, exponent, parameter names)
//! - the fitted parameter pair (`Params`) with map conversions

pub mod types;

pub use types::*;
