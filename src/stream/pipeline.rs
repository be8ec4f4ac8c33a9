use super::block_cipher::{self, BlockCipherError};
use std::io::{self, Read};

/// Decrypt and inflate the main payload
///
/// Returns the inflated document. The ciphertext buffer is reused for
/// the decrypted bytes, which still hold zlib data plus block filler.
pub(crate) fn payload_read_stream(
    mut payload: Vec<u8>,
    key: &[u8],
    iv: &[u8],
) -> Result<io::Result<Vec<u8>>, BlockCipherError> {
    block_cipher::decrypt_in_place(&mut payload, key, iv)?;
    tracing::debug!(len = payload.len(), "decrypted payload");
    Ok(inflate(&payload))
}

/// Inflate zlib framed data
///
/// Bytes after the end of the zlib stream are ignored.
pub(crate) fn inflate(compressed: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = libflate::zlib::Decoder::new(compressed)?;
    let mut output = Vec::new();
    decoder.read_to_end(&mut output)?;
    Ok(output)
}
