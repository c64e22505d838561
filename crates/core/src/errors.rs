//! Core error types for the retirement planner.
//!
//! Only `project` and share-link parsing can fail. Decoding plan fields and
//! formatting numbers are total and have no error kind.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the planner core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Invalid share link: {0}")]
    InvalidShareLink(#[from] url::ParseError),
}

/// Cross-field violations of a plan's invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Start age must be greater than zero")]
    NonPositiveStartAge,

    #[error("Retire age {retire_age} must be greater than start age {start_age}")]
    RetireNotAfterStart { start_age: u32, retire_age: u32 },

    #[error("Life expectancy {life_expectancy} must be greater than retire age {retire_age}")]
    LifeNotAfterRetire {
        retire_age: u32,
        life_expectancy: u32,
    },

    #[error("Field '{field}' must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: i64 },

    #[error("Derived value '{field}' is out of range")]
    Overflow { field: &'static str },
}

impl ValidationError {
    /// Name of the plan field the violation is reported against.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NonPositiveStartAge => "startAge",
            ValidationError::RetireNotAfterStart { .. } => "retireAge",
            ValidationError::LifeNotAfterRetire { .. } => "lifeExpectancy",
            ValidationError::NegativeAmount { field, .. } => *field,
            ValidationError::Overflow { field } => *field,
        }
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
