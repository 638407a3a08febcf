//! A transform instance carrying its fitted parameter state.
//!
//! Lifecycle:
//!
//! - created unset via [`Transform::new`]
//! - usable after `set_params` (either form)
//! - reusable across series while the parameters stay fixed
//! - re-setting parameters overwrites prior state; there is no history
//!
//! `transform` takes `&self` and `set_params` takes `&mut self`, so the
//! borrow checker enforces the safe concurrency discipline: one instance
//! per concurrent fitting task, or an instance treated as immutable once
//! its parameters are set.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Params, TransformKind};
use crate::error::TransformError;
use crate::transform::apply::{apply, validate_input};

/// A transform kind plus its fitted parameters, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    kind: TransformKind,
    params: Option<Params>,
}

impl Transform {
    /// Create an instance with parameters unset.
    pub fn new(kind: TransformKind) -> Self {
        Self { kind, params: None }
    }

    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    /// The fitted parameters, if set.
    pub fn params(&self) -> Option<Params> {
        self.params
    }

    /// Store fitted parameter values directly.
    pub fn set_params(&mut self, params: Params) {
        self.params = Some(params);
    }

    /// Store fitted parameter values from a name→value map.
    ///
    /// The map must contain exactly the names reported by
    /// [`TransformKind::param_names`]; anything else leaves the stored
    /// parameters untouched and returns a mismatch error.
    pub fn set_params_map(&mut self, map: &BTreeMap<String, f64>) -> Result<(), TransformError> {
        self.params = Some(Params::from_map(self.kind, map)?);
        Ok(())
    }

    /// Apply the transform to `x` using the stored parameters.
    ///
    /// Fails with [`TransformError::ParamsNotSet`] when called before any
    /// parameters are set. Numeric domain violations do not fail the call;
    /// they surface as NaN/infinite elements in the output.
    pub fn transform(&self, x: &[f64]) -> Result<Vec<f64>, TransformError> {
        let params = self
            .params
            .ok_or(TransformError::ParamsNotSet { kind: self.kind })?;
        Ok(apply(self.kind, x, params))
    }

    /// Baseline input check: every element of `x` is finite.
    ///
    /// Kept on the instance so a stricter per-kind check has a natural seam
    /// to land in; the current catalog uses the shared baseline everywhere.
    pub fn validate_input(&self, x: &[f64]) -> bool {
        validate_input(x)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.params {
            Some(p) => write!(
                f,
                "Transform<{}: a={}, b={}>",
                self.kind.display_name(),
                p.a,
                p.b
            ),
            None => write!(f, "Transform<{}: unset>", self.kind.display_name()),
        }
    }
}
