use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Phone number is invalid")]
    InvalidPhone,
    #[error("Date is invalid")]
    InvalidDate,
    #[error("invalid verification options: {0}")]
    InvalidVerificationOptions(String),
    #[error("invalid placeholder character: {0:?}")]
    InvalidPlaceholderChar(char),
}
