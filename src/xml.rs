//! Work with the decrypted XML document

mod canonical;

pub use canonical::{canonicalize, Error};
