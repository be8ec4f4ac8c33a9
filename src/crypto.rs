use hmac::Hmac;
use sha1::Sha1;
use std::fmt;
use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::Zeroizing;

/// PBKDF2 rounds turning the password into the outer key
pub const OUTER_KEY_ROUNDS: u32 = 10_000;
/// PBKDF2 rounds turning the payload key into the password checksum
pub const CHECKSUM_ROUNDS: u32 = 1_000;
/// Length of every derived key and checksum, sized for AES-256
pub const KEY_LENGTH: usize = 32;

type HmacSha1 = Hmac<Sha1>;

/// Credentials needed to unlock the container
///
/// The password bytes are wiped from memory when this is dropped.
#[derive(Clone)]
pub struct Password(Zeroizing<Vec<u8>>);

impl Password {
    /// Create a password from a string
    pub fn from_password(pw: &str) -> Password {
        Password::from_bytes(pw.as_bytes())
    }

    /// Create a password from raw bytes, which do not need to be UTF-8
    pub fn from_bytes(pw: &[u8]) -> Password {
        Password(Zeroizing::new(pw.to_vec()))
    }

    /// Derive the key which unlocks the secrets blob
    pub(crate) fn outer_key(&self, salt: &[u8]) -> Result<OuterKey, KeyGenerationError> {
        derive(&self.0, salt, OUTER_KEY_ROUNDS).map(OuterKey)
    }
}

impl From<String> for Password {
    fn from(pw: String) -> Password {
        Password(Zeroizing::new(pw.into_bytes()))
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Key derived from the password, only used to decrypt the secrets blob
pub(crate) struct OuterKey(pub(crate) Zeroizing<[u8; KEY_LENGTH]>);

/// Checksum derived from the payload key found in the secrets blob
pub(crate) struct Checksum(Zeroizing<[u8; KEY_LENGTH]>);

impl Checksum {
    pub(crate) fn derive(secret_key: &[u8], secret_salt: &[u8]) -> Result<Checksum, KeyGenerationError> {
        derive(secret_key, secret_salt, CHECKSUM_ROUNDS).map(Checksum)
    }

    /// Compare against the checksum stored in the secrets blob
    pub(crate) fn verify(&self, stored: &[u8]) -> bool {
        verify_checksum(stored, &*self.0)
    }
}

/// PBKDF2-HMAC-SHA1 into a key sized buffer
pub(crate) fn derive(
    secret: &[u8],
    salt: &[u8],
    rounds: u32,
) -> Result<Zeroizing<[u8; KEY_LENGTH]>, KeyGenerationError> {
    if rounds == 0 {
        return Err(KeyGenerationError::KeyGeneration(
            "PBKDF2 rounds must be at least 1".into(),
        ));
    }
    let mut key = Zeroizing::new([0u8; KEY_LENGTH]);
    pbkdf2::pbkdf2::<HmacSha1>(secret, salt, rounds, &mut *key)
        .map_err(|e| KeyGenerationError::KeyGeneration(e.to_string()))?;
    Ok(key)
}

/// Constant time comparison of a stored and a derived checksum
pub(crate) fn verify_checksum(stored: &[u8], derived: &[u8]) -> bool {
    stored.ct_eq(derived).into()
}

#[derive(Debug, Error)]
/// Failure deriving keys from credentials
pub enum KeyGenerationError {
    /// The key derivation function rejected its input
    #[error("Could not generate key: {0}")]
    KeyGeneration(String),
}
