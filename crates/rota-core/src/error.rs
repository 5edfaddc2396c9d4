use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported delay unit: {0}")]
    UnsupportedUnit(String),
    #[error("invalid period: end must be after start")]
    InvalidPeriod,
    #[error("schedule name must not be empty")]
    EmptyScheduleName,
}
