//======================================================================
// src/variant.rs
// The four SHA-3 parameter profiles.
//======================================================================

use core::fmt;
use core::str::FromStr;

use digest::consts::{U104, U136, U144, U28, U32, U48, U64, U72};
use digest::generic_array::ArrayLength;

use crate::consts::{SHA3_SUFFIX, STATE_BYTES};
use crate::error::Sha3Error;

/// Runtime descriptor of a SHA-3 instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sha3Variant {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl Sha3Variant {
    /// Every variant, ordered by digest length.
    pub const ALL: [Sha3Variant; 4] = [
        Sha3Variant::Sha3_224,
        Sha3Variant::Sha3_256,
        Sha3Variant::Sha3_384,
        Sha3Variant::Sha3_512,
    ];

    /// Bytes of state absorbed or squeezed per block.
    pub const fn rate(self) -> usize {
        STATE_BYTES - self.capacity()
    }

    /// Bytes of state never touched by input, twice the digest length.
    pub const fn capacity(self) -> usize {
        2 * self.digest_len()
    }

    /// Output length in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            Sha3Variant::Sha3_224 => 28,
            Sha3Variant::Sha3_256 => 32,
            Sha3Variant::Sha3_384 => 48,
            Sha3Variant::Sha3_512 => 64,
        }
    }

    pub const fn domain_suffix(self) -> u8 {
        SHA3_SUFFIX
    }

    /// Standard algorithm name, e.g. `"SHA3-256"`.
    pub const fn name(self) -> &'static str {
        match self {
            Sha3Variant::Sha3_224 => "SHA3-224",
            Sha3Variant::Sha3_256 => "SHA3-256",
            Sha3Variant::Sha3_384 => "SHA3-384",
            Sha3Variant::Sha3_512 => "SHA3-512",
        }
    }

    /// Looks a variant up by its digest length in bits.
    pub fn from_digest_bits(bits: usize) -> Result<Self, Sha3Error> {
        Self::ALL
            .into_iter()
            .find(|v| v.digest_len() * 8 == bits)
            .ok_or(Sha3Error::UnsupportedDigestBits(bits))
    }
}

impl fmt::Display for Sha3Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sha3Variant {
    type Err = Sha3Error;

    /// Accepts `SHA3-256`, `sha3_256` and friends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|v| v.name() == normalized)
            .ok_or_else(|| Sha3Error::UnknownVariant(s.to_owned()))
    }
}

/// Type-level binding of a [`Sha3Variant`] for the `digest` core API,
/// which needs block and output sizes as types.
pub trait Sha3Params: Sized + Clone + Send + Sync + 'static {
    /// Rate in bytes.
    type BlockSize: ArrayLength<u8> + 'static;
    /// Digest length in bytes.
    type OutputSize: ArrayLength<u8> + 'static;

    const VARIANT: Sha3Variant;
}

/// SHA3-224: rate 144, 28-byte digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha3_224Params;
impl Sha3Params for Sha3_224Params {
    type BlockSize = U144;
    type OutputSize = U28;
    const VARIANT: Sha3Variant = Sha3Variant::Sha3_224;
}

/// SHA3-256: rate 136, 32-byte digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha3_256Params;
impl Sha3Params for Sha3_256Params {
    type BlockSize = U136;
    type OutputSize = U32;
    const VARIANT: Sha3Variant = Sha3Variant::Sha3_256;
}

/// SHA3-384: rate 104, 48-byte digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha3_384Params;
impl Sha3Params for Sha3_384Params {
    type BlockSize = U104;
    type OutputSize = U48;
    const VARIANT: Sha3Variant = Sha3Variant::Sha3_384;
}

/// SHA3-512: rate 72, 64-byte digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha3_512Params;
impl Sha3Params for Sha3_512Params {
    type BlockSize = U72;
    type OutputSize = U64;
    const VARIANT: Sha3Variant = Sha3Variant::Sha3_512;
}
