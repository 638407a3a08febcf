//! `linearizer` transform library.
//!
//! Parameterized, invertible-intent transforms for linearizing a numeric
//! series before curve fitting. An external search/fitting loop consumes
//! this crate as follows:
//!
//! - enumerate candidate kinds from [`catalog`]
//! - read `param_names` to learn the free parameters to estimate
//! - evaluate candidates statelessly with [`transform::apply`]
//! - store the fitted values with `set_params` and reuse `transform`
//! - break ties between equally good fits with `complexity`
//!
//! The crate is a pure computation library: no I/O, no logging, and no
//! errors for numeric domain violations (those surface as NaN values the
//! caller screens with `validate_input`).

pub mod catalog;
pub mod domain;
pub mod error;
pub mod math;
pub mod transform;
