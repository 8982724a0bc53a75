//! # Smoke Test Errors

use crate::error::SchemaError;
use std::fmt::Debug;
use thiserror::Error;

/// An observed value differed from its literal expected value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{test}: expected {expected}, got {actual}")]
pub struct AssertionFailure {
    pub test: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmokeError {
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    #[error("Binding call failed: {0}")]
    Schema(#[from] SchemaError),

    #[error("Test panicked: {0}")]
    Panicked(String),
}

pub type SmokeResult = Result<(), SmokeError>;

/// Fail `test` unless `actual == expected`, recording both literally
pub fn ensure_eq<T>(test: &str, expected: T, actual: T) -> Result<(), AssertionFailure>
where
    T: PartialEq + Debug,
{
    if expected == actual {
        return Ok(());
    }
    Err(AssertionFailure {
        test: test.to_string(),
        expected: format!("{expected:?}"),
        actual: format!("{actual:?}"),
    })
}

/// Fail `test` unless `condition` holds
pub fn ensure(test: &str, condition: bool, description: &str) -> Result<(), AssertionFailure> {
    if condition {
        return Ok(());
    }
    Err(AssertionFailure {
        test: test.to_string(),
        expected: description.to_string(),
        actual: "false".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_eq_passes() {
        assert!(ensure_eq("same", "Double", "Double").is_ok());
    }

    #[test]
    fn test_ensure_eq_reports_literals() {
        let failure = ensure_eq("names", "Double", "Float").unwrap_err();
        assert_eq!(failure.expected, "\"Double\"");
        assert_eq!(failure.actual, "\"Float\"");
        assert_eq!(
            failure.to_string(),
            "names: expected \"Double\", got \"Float\""
        );
    }

    #[test]
    fn test_ensure() {
        assert!(ensure("ok", true, "always").is_ok());
        let failure = ensure("nope", false, "names are unique").unwrap_err();
        assert_eq!(failure.expected, "names are unique");
    }
}
