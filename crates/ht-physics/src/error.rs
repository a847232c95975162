//! Error types for evaluator configuration.

use ht_core::HtError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("Invalid limit {what}: {value}")]
    InvalidLimit { what: &'static str, value: f64 },

    #[error(transparent)]
    Numeric(#[from] HtError),
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PhysicsError::InvalidLimit {
            what: "max_voltage_drop_v",
            value: -1.0,
        };
        assert!(err.to_string().contains("max_voltage_drop_v"));
    }

    #[test]
    fn error_conversion() {
        let err: PhysicsError = HtError::InvalidArg { what: "test" }.into();
        assert!(matches!(err, PhysicsError::Numeric(_)));
    }
}
