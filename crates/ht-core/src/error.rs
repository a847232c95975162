use thiserror::Error;

pub type HtResult<T> = Result<T, HtError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
