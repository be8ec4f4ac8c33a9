use super::errors::OpenError as Error;
use super::read::{BinaryReader, Field};
use std::io::Read;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq, Clone)]
/// Unencrypted container fields
///
/// These are everything needed to derive the outer key and
/// check the password, apart from the encrypted secrets blob itself.
pub struct ContainerHeader {
    /// Container format version
    pub version: u8,
    /// Salt combined with the password to derive the outer key
    pub salt: Vec<u8>,
    /// IV used with the outer key to decrypt the secrets blob
    pub iv: Vec<u8>,
    /// Salt combined with the payload key to derive the password checksum
    pub secret_salt: Vec<u8>,
}

impl ContainerHeader {
    pub(crate) fn read<R: Read>(reader: &mut BinaryReader<R>, version: u8) -> Result<ContainerHeader> {
        let salt = reader.read_length_prefixed(Field::Salt)?;
        let iv = reader.read_length_prefixed(Field::Iv)?;
        let secret_salt = reader.read_length_prefixed(Field::SecretSalt)?;

        Ok(ContainerHeader {
            version,
            salt,
            iv,
            secret_salt,
        })
    }
}
