//======================================================================
// src/error.rs
// Error type shared by variant lookup and the padding invariant.
//======================================================================

use thiserror::Error;

/// Errors reported by this crate.
///
/// Only variant lookup is recoverable. [`Sha3Error::PadSize`] describes a
/// broken length-tracking invariant and is raised as a panic by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Sha3Error {
    #[error("unknown SHA-3 algorithm name: {0:?}")]
    UnknownVariant(String),

    #[error("unsupported SHA-3 digest length: {0} bits")]
    UnsupportedDigestBits(usize),

    #[error("incorrect pad size {pad} for rate {rate}")]
    PadSize { pad: usize, rate: usize },
}

/// Result type for fallible operations in this crate.
pub type Result<T> = core::result::Result<T, Sha3Error>;
