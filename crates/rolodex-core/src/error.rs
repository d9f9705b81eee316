use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("name is required")]
    EmptyName,
    #[error("interaction date is required")]
    MissingInteractionDate,
    #[error("interaction medium is required")]
    MissingInteractionMedium,
    #[error("invalid date: {0}")]
    InvalidDate(String),
}
