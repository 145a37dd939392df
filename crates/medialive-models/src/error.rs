//! Model error types.

use std::fmt;

use thiserror::Error;

use crate::wire_enum::EnumParseError;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by model conversions and opt-in validation.
///
/// Building and comparing records never fails; these only come from strict
/// enum parsing, explicit `validate()` calls and JSON conversion.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    UnknownEnumValue(#[from] EnumParseError),

    #[error("{} constraint violation(s): {}", .0.len(), join_violations(.0))]
    ConstraintViolations(Vec<ConstraintViolation>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Violations carried by a validation failure, empty for other errors.
    pub fn violations(&self) -> &[ConstraintViolation] {
        match self {
            Self::ConstraintViolations(violations) => violations,
            _ => &[],
        }
    }
}

/// A numeric field outside its documented range.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolation {
    /// Dotted wire path, e.g. `outputGroups[0].outputs[1].videoDescriptionName`.
    pub path: String,
    pub value: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} is outside ", self.path, self.value)?;
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "[{}, {}]", min, max),
            (Some(min), None) => write!(f, "[{}, ..)", min),
            (None, Some(max)) => write!(f, "(.., {}]", max),
            (None, None) => f.write_str("its range"),
        }
    }
}

fn join_violations(violations: &[ConstraintViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display() {
        let violation = ConstraintViolation {
            path: "burnInDestinationSettings.fontOpacity".to_string(),
            value: 300.0,
            min: Some(0.0),
            max: Some(255.0),
        };
        assert_eq!(
            violation.to_string(),
            "burnInDestinationSettings.fontOpacity = 300 is outside [0, 255]"
        );

        let err = ModelError::ConstraintViolations(vec![violation]);
        assert!(err.to_string().starts_with("1 constraint violation(s): "));
        assert_eq!(err.violations().len(), 1);
    }

    #[test]
    fn test_enum_error_is_transparent() {
        let err = ModelError::from(EnumParseError::new("IpScheme", "LINK"));
        assert_eq!(err.to_string(), "Unknown IpScheme value: LINK");
        assert!(err.violations().is_empty());
    }
}
