use super::read::Field;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors encountered loading a container prior to decryption
pub enum OpenError {
    /// The stream ended before a header field was complete
    #[error("Truncated container - stream ended while reading {0}")]
    Truncated(Field),
    /// SafeInCloud magic number missing
    #[error("Unsupported file type - not a SafeInCloud database (magic {0})")]
    NonSafeInCloudFormat(i16),
    /// The container version is not the single supported one
    #[error("Unsupported database version {0}")]
    UnsupportedVersion(u8),
    /// Error encountered reading the container
    #[error("IO error reading file - {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
/// Errors encountered unlocking an encrypted container
pub enum UnlockError {
    /// The checksum in the secrets blob did not match. This indicates an invalid password
    #[error("Wrong password")]
    WrongPassword,
    /// A ciphertext is not a whole number of cipher blocks
    #[error("Corrupt database - ciphertext length {len} is not a multiple of the block size")]
    InvalidCiphertextLength {
        /// Length of the rejected ciphertext in bytes
        len: usize,
    },
    /// A cipher key or IV has the wrong size for AES-256-CBC
    #[error("Corrupt database - key or IV has an invalid length")]
    InvalidKeyMaterial,
    /// Key derivation rejected its parameters
    #[error("Key generation failed - {0}")]
    KeyGen(#[from] crate::crypto::KeyGenerationError),
    /// The decrypted payload is not valid zlib data
    #[error("Corrupt database - could not decompress payload: {0}")]
    Decompression(#[source] std::io::Error),
}

impl From<crate::stream::BlockCipherError> for UnlockError {
    fn from(e: crate::stream::BlockCipherError) -> UnlockError {
        match e {
            crate::stream::BlockCipherError::InvalidLength(len) => {
                UnlockError::InvalidCiphertextLength { len }
            }
            crate::stream::BlockCipherError::InvalidKeyOrIv => UnlockError::InvalidKeyMaterial,
        }
    }
}
