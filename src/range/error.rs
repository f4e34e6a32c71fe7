use thiserror::Error;

/// Errors surfaced by range algebra, iteration and selector evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("No positive range")]
    EmptyRange,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("Cannot iterate with a zero or invalid step span")]
    DegenerateStep,

    #[error("Gap quantity must be positive, got {0}")]
    InvalidGap(i64),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_display() {
        assert_eq!(RangeError::EmptyRange.to_string(), "No positive range");
    }

    #[test]
    fn unsupported_operation_display() {
        let e = RangeError::UnsupportedOperation("cannot diff a set-mode range");
        assert_eq!(
            e.to_string(),
            "Unsupported operation: cannot diff a set-mode range"
        );
    }

    #[test]
    fn degenerate_step_display() {
        assert!(RangeError::DegenerateStep.to_string().contains("zero or invalid"));
    }

    #[test]
    fn invalid_gap_display() {
        assert_eq!(
            RangeError::InvalidGap(0).to_string(),
            "Gap quantity must be positive, got 0"
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(RangeError::EmptyRange, RangeError::EmptyRange);
        assert_ne!(RangeError::EmptyRange, RangeError::DegenerateStep);
    }
}
