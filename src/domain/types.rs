//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - enumerated and scored by an external transform search
//! - carried through a fitting loop while parameters are estimated
//! - exported to JSON and reloaded later for scoring or plotting

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// Free parameter names shared by every current transform kind.
const LINEAR_PARAM_NAMES: &[&str] = &["a", "b"];

/// Which linearizing transform to apply.
///
/// Every kind evaluates a nonlinear kernel over the same linear pre-map
/// `u = a·x + b`; the kind selects the kernel and its static metadata
/// (complexity score, power-family exponent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    Abs,
    Loge,
    Log2,
    Log10,
    Exp,
    Power2,
    Power3,
    Power4,
    Sqrt,
    Inv,
    InvPower2,
}

impl TransformKind {
    /// Human-readable label for diagnostics and error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TransformKind::Abs => "Abs",
            TransformKind::Loge => "Loge",
            TransformKind::Log2 => "Log2",
            TransformKind::Log10 => "Log10",
            TransformKind::Exp => "Exp",
            TransformKind::Power2 => "Power2",
            TransformKind::Power3 => "Power3",
            TransformKind::Power4 => "Power4",
            TransformKind::Sqrt => "Sqrt",
            TransformKind::Inv => "Inv",
            TransformKind::InvPower2 => "InvPower2",
        }
    }

    /// Static complexity prior, lower = simpler.
    ///
    /// When several transforms linearize a series equally well, external
    /// selection picks the one with the lowest complexity. The score never
    /// affects the numeric result of applying the transform.
    pub fn complexity(self) -> u32 {
        match self {
            TransformKind::Abs => 50,
            TransformKind::Loge => 26,
            TransformKind::Log2 => 25,
            TransformKind::Log10 => 35,
            TransformKind::Exp => 40,
            // Integer powers follow the power-family default of 30·n.
            TransformKind::Power2 => 60,
            TransformKind::Power3 => 90,
            TransformKind::Power4 => 120,
            TransformKind::Sqrt => 33,
            TransformKind::Inv => 37,
            TransformKind::InvPower2 => 67,
        }
    }

    /// Fixed exponent for the power-family kinds, `None` for simple kernels.
    ///
    /// The exponent is configuration, not a fitted parameter.
    pub fn exponent(self) -> Option<f64> {
        match self {
            TransformKind::Power2 => Some(2.0),
            TransformKind::Power3 => Some(3.0),
            TransformKind::Power4 => Some(4.0),
            TransformKind::Sqrt => Some(0.5),
            TransformKind::Inv => Some(-1.0),
            TransformKind::InvPower2 => Some(-2.0),
            _ => None,
        }
    }

    /// Ordered names of the free parameters an external fitter must estimate.
    ///
    /// Every current kind exposes the same linear pre-map pair `["a", "b"]`.
    /// Fitters should consume this list rather than hardcode the pair, so the
    /// catalog can grow kinds with a different arity without breaking them.
    pub fn param_names(self) -> &'static [&'static str] {
        LINEAR_PARAM_NAMES
    }
}

/// Fitted values for the linear pre-map `a·x + b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Linear scale applied to the raw series.
    pub a: f64,
    /// Linear offset added after scaling.
    pub b: f64,
}

impl Params {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Build from a name→value map, enforcing exactly the declared names.
    ///
    /// Rejects both missing and unexpected names so a fitter bug (a typo'd
    /// or stale parameter name) surfaces as a typed error instead of a
    /// silently wrong fit.
    pub fn from_map(
        kind: TransformKind,
        map: &BTreeMap<String, f64>,
    ) -> Result<Self, TransformError> {
        let missing: Vec<String> = kind
            .param_names()
            .iter()
            .filter(|&&name| !map.contains_key(name))
            .map(|name| name.to_string())
            .collect();
        let unexpected: Vec<String> = map
            .keys()
            .filter(|key| !kind.param_names().contains(&key.as_str()))
            .cloned()
            .collect();

        if let (Some(&a), Some(&b)) = (map.get("a"), map.get("b")) {
            if unexpected.is_empty() {
                return Ok(Self { a, b });
            }
        }

        Err(TransformError::ParamMismatch {
            kind,
            missing,
            unexpected,
        })
    }

    /// Inverse of `from_map`, for fitters that work with named values.
    pub fn to_map(self) -> BTreeMap<String, f64> {
        BTreeMap::from([("a".to_string(), self.a), ("b".to_string(), self.b)])
    }
}
