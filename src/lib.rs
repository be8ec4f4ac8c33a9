#![deny(missing_docs)]

//! Module to read SafeInCloud password database containers.
//!
//! The main types in this crate are:
//!
//! * [`Container`] which represents a database file, locked or unlocked
//! * [`Password`] which unlocks a container
//!
//! A container is protected by two layers of keys. The password unlocks a
//! small secrets blob holding the real document key, and a checksum in that
//! blob confirms the password before the document itself is decrypted.
//! The document is zlib compressed XML.
//!
//! # Opening a container
//!
//! Containers can be read with the [`safeincloud_rs::open`] function. This provides
//! access to the unencrypted header. It can then be unlocked by providing a [`Password`]
//! to the [`Container.unlock`] method to access the decrypted document.
//!
//! ```no_run
//! # fn main() -> Result<(), safeincloud_rs::Error> {
//! use safeincloud_rs::Password;
//!
//! let container = safeincloud_rs::open("SafeInCloud.db")?;
//! let password = Password::from_password("hunter2");
//! let unlocked = container.unlock(&password)?;
//! let xml = unlocked.canonical_xml()?;
//! # Ok(())
//! # }
//! ```
//!
//! Alternatively, [`safeincloud_rs::from_reader`] can be used to open a container
//! from a non file source (such as in-memory or a network stream), and
//! [`safeincloud_rs::decode`] runs every step at once.
//!
//! [`Container`]: crate::Container
//! [`Container.unlock`]: crate::Container#method.unlock
//! [`Password`]: crate::Password
//! [`safeincloud_rs::decode`]: crate::decode
//! [`safeincloud_rs::from_reader`]: crate::from_reader
//! [`safeincloud_rs::open`]: crate::open

pub mod binary;
mod crypto;
pub mod errors;
mod stream;
pub mod xml;

pub use binary::{from_reader, open, Container, Locked, Unlocked};
pub use crypto::{Password, CHECKSUM_ROUNDS, KEY_LENGTH, OUTER_KEY_ROUNDS};
pub use errors::Error;

/// Decrypt a container and return its document re-indented
///
/// Equivalent to [`from_reader`], [`Container::unlock`] and
/// [`Container::canonical_xml`] in sequence.
pub fn decode<R: std::io::Read>(input: R, password: &Password) -> Result<Vec<u8>, Error> {
    let unlocked = from_reader(input)?.unlock(password)?;
    Ok(unlocked.canonical_xml()?)
}
