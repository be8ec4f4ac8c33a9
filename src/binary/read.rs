use super::{errors, header, Container, Locked};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Named fields of the container and of the decrypted secrets blob
pub enum Field {
    /// Format signature
    Magic,
    /// Container format version
    Version,
    /// Salt for the outer key
    Salt,
    /// IV for the secrets blob
    Iv,
    /// Salt for the checksum key derivation
    SecretSalt,
    /// Encrypted secrets blob
    EncryptedSecrets,
    /// IV for the main payload, stored in the secrets blob
    SecretIv,
    /// Key for the main payload, stored in the secrets blob
    SecretKey,
    /// Password checksum, stored in the secrets blob
    Checksum,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Magic => "magic",
            Field::Version => "version",
            Field::Salt => "salt",
            Field::Iv => "iv",
            Field::SecretSalt => "secret salt",
            Field::EncryptedSecrets => "encrypted secrets",
            Field::SecretIv => "secret iv",
            Field::SecretKey => "secret key",
            Field::Checksum => "checksum",
        };
        f.write_str(name)
    }
}

type Result<T> = std::result::Result<T, errors::OpenError>;

/// Sequential cursor over a byte stream
///
/// Every read names the field it is reading so a short stream can be
/// reported as [`OpenError::Truncated`](errors::OpenError::Truncated).
pub(crate) struct BinaryReader<R: Read> {
    inner: R,
}

impl<R: Read> BinaryReader<R> {
    pub(crate) fn new(inner: R) -> BinaryReader<R> {
        BinaryReader { inner }
    }

    fn fill(&mut self, buffer: &mut [u8], field: Field) -> Result<()> {
        self.inner.read_exact(buffer).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => errors::OpenError::Truncated(field),
            _ => errors::OpenError::Io(e),
        })
    }

    pub(crate) fn read_u8(&mut self, field: Field) -> Result<u8> {
        let mut buffer = [0u8];
        self.fill(&mut buffer, field)?;
        Ok(buffer[0])
    }

    pub(crate) fn read_i16_le(&mut self, field: Field) -> Result<i16> {
        let mut buffer = [0u8; 2];
        self.fill(&mut buffer, field)?;
        Ok(i16::from_le_bytes(buffer))
    }

    /// Read a single length byte followed by that many bytes
    pub(crate) fn read_length_prefixed(&mut self, field: Field) -> Result<Vec<u8>> {
        let len = self.read_u8(field)?;
        let mut buffer = vec![0u8; usize::from(len)];
        self.fill(&mut buffer, field)?;
        Ok(buffer)
    }

    /// Consume everything left in the stream
    pub(crate) fn read_to_end(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.inner.read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

/// Read a container from an input stream
///
/// The container starts locked, use [`Container.unlock`] to unlock
///
/// [`Container.unlock`]: ./struct.Container.html#method.unlock
pub fn from_reader<R: Read>(input: R) -> Result<Container<Locked>> {
    let mut reader = BinaryReader::new(input);

    let magic = reader.read_i16_le(Field::Magic)?;
    if magic != super::SAFEINCLOUD_MAGIC_NUMBER {
        return Err(errors::OpenError::NonSafeInCloudFormat(magic));
    }

    let version = reader.read_u8(Field::Version)?;
    if version != super::SUPPORTED_VERSION {
        return Err(errors::OpenError::UnsupportedVersion(version));
    }

    let header = header::ContainerHeader::read(&mut reader, version)?;
    let encrypted_secrets = reader.read_length_prefixed(Field::EncryptedSecrets)?;
    let encrypted_payload = reader.read_to_end()?;

    tracing::debug!(
        salt_len = header.salt.len(),
        iv_len = header.iv.len(),
        secret_salt_len = header.secret_salt.len(),
        secrets_len = encrypted_secrets.len(),
        payload_len = encrypted_payload.len(),
        "parsed container header"
    );

    let state = Locked {
        header,
        encrypted_secrets,
        encrypted_payload,
    };

    Ok(Container { state })
}

/// Read a container from a given path
///
/// The container starts locked, use [`Container.unlock`] to unlock
///
/// [`Container.unlock`]: ./struct.Container.html#method.unlock
pub fn open<P: AsRef<Path>>(path: P) -> Result<Container<Locked>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    from_reader(io::BufReader::new(file))
}
