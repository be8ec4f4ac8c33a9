mod block_cipher;
mod pipeline;

pub(crate) use block_cipher::{decrypt_in_place, BlockCipherError};
pub(crate) use pipeline::payload_read_stream;
