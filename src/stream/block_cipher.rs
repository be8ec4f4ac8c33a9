use aes::Aes256;
use cipher::block_padding::NoPadding;
use cipher::{BlockDecryptMut, KeyIvInit};
use thiserror::Error;

/// AES block size in bytes
pub(crate) const BLOCK_SIZE: usize = 16;

#[derive(Debug, Error)]
pub(crate) enum BlockCipherError {
    #[error("Invalid length for key or IV")]
    InvalidKeyOrIv,
    #[error("Data size {0} not a multiple of block size")]
    InvalidLength(usize),
}

/// Decrypt `data` with AES-256-CBC, overwriting the ciphertext
///
/// The format never pads, so the whole buffer must be whole blocks.
pub(crate) fn decrypt_in_place(data: &mut [u8], key: &[u8], iv: &[u8]) -> Result<(), BlockCipherError> {
    let len = data.len();
    if len % BLOCK_SIZE != 0 {
        return Err(BlockCipherError::InvalidLength(len));
    }
    let cipher = cbc::Decryptor::<Aes256>::new_from_slices(key, iv)
        .map_err(|_| BlockCipherError::InvalidKeyOrIv)?;
    cipher
        .decrypt_padded_mut::<NoPadding>(data)
        .map_err(|_| BlockCipherError::InvalidLength(len))?;
    Ok(())
}
