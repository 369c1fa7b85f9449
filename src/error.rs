use thiserror::Error;

use crate::domain::error::DomainError;

/// Top-level error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type Result<T> = std::result::Result<T, Error>;
