// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid queue status transition: {from} -> {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("{0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
