//! Library error type.
//!
//! Only state and argument problems are errors here. Numeric domain issues
//! (logarithm of a non-positive value, reciprocal blow-ups) are deliberately
//! not raised by transform application: they propagate as NaN/infinite
//! elements in the output, which callers detect by validating the result.

use crate::domain::TransformKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// `transform` was called before any parameters were set.
    ParamsNotSet { kind: TransformKind },
    /// A parameter map did not contain exactly the declared parameter names.
    ParamMismatch {
        kind: TransformKind,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::ParamsNotSet { kind } => write!(
                f,
                "No parameter values for {}; call set_params first with the fitted values.",
                kind.display_name()
            ),
            TransformError::ParamMismatch {
                kind,
                missing,
                unexpected,
            } => {
                write!(f, "Parameter mismatch for {}:", kind.display_name())?;
                if !missing.is_empty() {
                    write!(f, " missing [{}]", missing.join(", "))?;
                }
                if !unexpected.is_empty() {
                    write!(f, " unexpected [{}]", unexpected.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for TransformError {}
