//! Error types for safeincloud-rs

pub use crate::binary::errors::{OpenError, UnlockError};
pub use crate::binary::FailedUnlock;
pub use crate::crypto::KeyGenerationError;
pub use crate::xml::Error as XmlError;
use thiserror::Error;

#[derive(Error, Debug)]
/// Wrapper error type for this library
pub enum Error {
    /// Failed to open a container
    #[error("Could not open database: {0}")]
    Open(#[from] OpenError),
    /// Failed unlocking a container
    #[error("Could not unlock database: {0}")]
    Unlock(#[from] UnlockError),
    /// Failed re-emitting the decrypted XML
    #[error("Failed to format database XML: {0}")]
    Xml(#[from] XmlError),
}

impl From<FailedUnlock> for Error {
    fn from(funlock: FailedUnlock) -> Error {
        Error::Unlock(funlock.1)
    }
}
