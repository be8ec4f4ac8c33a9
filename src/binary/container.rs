use super::{errors, header, secrets};
use crate::{crypto, stream};

/// Shared behaviour of locked and unlocked containers
pub trait ContainerState: std::fmt::Debug {
    /// Unencrypted header fields
    fn header(&self) -> &header::ContainerHeader;
}

#[derive(Debug)]
/// A SafeInCloud database container
///
/// Most methods are available on a specific state like `Container<Locked>`
/// or `Container<Unlocked>`.
///
/// A container is obtained by reading an existing file with
/// [`safeincloud_rs::open`][crate::open] or
/// [`safeincloud_rs::from_reader`][crate::from_reader], then unlocked
/// with [`Container::unlock`].
pub struct Container<S>
where
    S: ContainerState,
{
    pub(super) state: S,
}

impl<T: ContainerState> Container<T> {
    /// Unencrypted salts, IV and version
    pub fn header(&self) -> &header::ContainerHeader {
        self.state.header()
    }

    /// Container format version
    pub fn version(&self) -> u8 {
        self.state.header().version
    }
}

/// Represents a failed attempt at unlocking a container
///
/// Includes the locked container and the reason the unlock failed.
/// This allows you to keep the container for interactive use and
/// e.g. prompt the user for a new password if the password was wrong.
///
/// However, for unscripted use, `FailedUnlock` implements
/// `Into<[safeincloud_rs::Error]>` and `Into<[safeincloud_rs::errors::UnlockError]>`
/// for easy use with the `?` operator.
#[derive(Debug)]
pub struct FailedUnlock(pub Container<Locked>, pub errors::UnlockError);

impl From<FailedUnlock> for errors::UnlockError {
    fn from(funlock: FailedUnlock) -> errors::UnlockError {
        funlock.1
    }
}

#[derive(Debug, PartialEq, Eq)]
/// A locked container, use unlock(password) to unlock
pub struct Locked {
    /// Unencrypted header fields
    pub(crate) header: header::ContainerHeader,
    /// Secrets blob encrypted with the outer key
    pub(crate) encrypted_secrets: Vec<u8>,
    /// Compressed document encrypted with the payload key
    pub(crate) encrypted_payload: Vec<u8>,
}

impl ContainerState for Locked {
    fn header(&self) -> &header::ContainerHeader {
        &self.header
    }
}

impl Container<Locked> {
    /// Size in bytes of the encrypted secrets blob
    pub fn encrypted_secrets_len(&self) -> usize {
        self.state.encrypted_secrets.len()
    }

    /// Size in bytes of the encrypted document
    pub fn encrypted_payload_len(&self) -> usize {
        self.state.encrypted_payload.len()
    }

    /// Decrypt the secrets blob and check the password against its checksum
    fn unlock_secrets(&self, key: &crypto::Password) -> Result<secrets::Secrets, errors::UnlockError> {
        let header = &self.state.header;
        let outer_key = key.outer_key(&header.salt)?;

        let mut blob = zeroize::Zeroizing::new(self.state.encrypted_secrets.clone());
        stream::decrypt_in_place(&mut blob, &*outer_key.0, &header.iv)?;

        // A wrong outer key decrypts to noise, which rarely parses
        let secrets = secrets::Secrets::parse(&blob).map_err(|e| {
            tracing::debug!("secrets blob did not parse: {}", e);
            errors::UnlockError::WrongPassword
        })?;

        let checksum = crypto::Checksum::derive(&secrets.key, &header.secret_salt)?;
        if !checksum.verify(&secrets.checksum) {
            tracing::warn!("password checksum mismatch");
            return Err(errors::UnlockError::WrongPassword);
        }
        tracing::debug!("password checksum verified");

        Ok(secrets)
    }

    fn decrypt_data(&self, key: &crypto::Password) -> Result<Vec<u8>, errors::UnlockError> {
        let secrets = self.unlock_secrets(key)?;
        let document = stream::payload_read_stream(
            self.state.encrypted_payload.clone(),
            &secrets.key,
            &secrets.iv,
        )?
        .map_err(errors::UnlockError::Decompression)?;
        tracing::debug!(len = document.len(), "inflated document");
        Ok(document)
    }

    /// Unlocks the container
    ///
    /// The password is checked before the main payload is touched.
    /// If unlock fails, returns the locked container along with the error.
    pub fn unlock(self, key: &crypto::Password) -> Result<Container<Unlocked>, FailedUnlock> {
        match self.decrypt_data(key) {
            Ok(xml_data) => Ok(Container {
                state: Unlocked {
                    header: self.state.header,
                    xml_data,
                },
            }),
            Err(e) => Err(FailedUnlock(self, e)),
        }
    }
}

#[derive(Debug)]
/// An unlocked container, allowing access to the decrypted document
pub struct Unlocked {
    /// Unencrypted header fields
    pub(crate) header: header::ContainerHeader,
    /// Decrypted and inflated XML document
    pub(crate) xml_data: Vec<u8>,
}

impl ContainerState for Unlocked {
    fn header(&self) -> &header::ContainerHeader {
        &self.header
    }
}

impl Container<Unlocked> {
    /// Decrypted XML exactly as stored in the container
    pub fn raw_xml(&self) -> &[u8] {
        &self.state.xml_data
    }

    /// Decrypted XML re-indented with two spaces per level
    ///
    /// A document that ends early is emitted up to the last complete token.
    pub fn canonical_xml(&self) -> Result<Vec<u8>, crate::xml::Error> {
        crate::xml::canonicalize(&self.state.xml_data)
    }

    /// Consume the container, returning the decrypted XML
    pub fn into_raw_xml(self) -> Vec<u8> {
        self.state.xml_data
    }
}
