use super::errors::OpenError;
use super::read::{BinaryReader, Field};
use zeroize::Zeroizing;

/// Plaintext of the secrets blob
///
/// Holds the real key and IV for the payload, and the checksum proving
/// the outer key (and so the password) was correct.
pub(crate) struct Secrets {
    pub(crate) iv: Zeroizing<Vec<u8>>,
    pub(crate) key: Zeroizing<Vec<u8>>,
    pub(crate) checksum: Vec<u8>,
}

impl Secrets {
    /// Parse a decrypted secrets blob
    ///
    /// Any bytes after the checksum are cipher block filler and ignored.
    pub(crate) fn parse(blob: &[u8]) -> Result<Secrets, OpenError> {
        let mut reader = BinaryReader::new(blob);
        let iv = Zeroizing::new(reader.read_length_prefixed(Field::SecretIv)?);
        let key = Zeroizing::new(reader.read_length_prefixed(Field::SecretKey)?);
        let checksum = reader.read_length_prefixed(Field::Checksum)?;
        Ok(Secrets { iv, key, checksum })
    }
}
