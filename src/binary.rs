//! SafeInCloud container files and their binary format
//!
//! A container is laid out as
//!
//! | Field | Encoding |
//! |---|---|
//! | magic | `i16` little endian, always [`SAFEINCLOUD_MAGIC_NUMBER`] |
//! | version | `u8`, always [`SUPPORTED_VERSION`] |
//! | salt | length prefixed bytes |
//! | iv | length prefixed bytes |
//! | secret salt | length prefixed bytes |
//! | encrypted secrets | length prefixed bytes |
//! | encrypted payload | all remaining bytes |
//!
//! Length prefixes are a single unsigned byte, so no block can exceed 255 bytes.

pub(crate) mod errors;
mod container;
mod header;
mod read;
mod secrets;

pub use container::{Container, ContainerState, FailedUnlock, Locked, Unlocked};
pub use header::ContainerHeader;
pub use read::{from_reader, open, Field};

/// Signature at the start of every container, bytes `05 05`
pub const SAFEINCLOUD_MAGIC_NUMBER: i16 = 1285;
/// The only container version this library reads
pub const SUPPORTED_VERSION: u8 = 1;
