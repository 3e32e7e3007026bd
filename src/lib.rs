#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point. Declares the public API and wires up the modules.
//======================================================================

// --- Module declarations ---
pub mod consts;
pub mod error;
pub mod lanes;
pub mod padding;
pub mod variant;

mod backends;
pub mod engine;
pub mod sponge;


// --- Re-exports ---
pub use backends::soft::keccak_f1600;
pub use digest;
pub use engine::{hash, Sha3Engine};
pub use error::{Result, Sha3Error};
pub use sponge::Sha3Core;
pub use variant::{
    Sha3Params, Sha3Variant, Sha3_224Params, Sha3_256Params, Sha3_384Params, Sha3_512Params,
};

use digest::core_api::CoreWrapper;

// --- Convenience Type Aliases for Users ---
pub type Sha3_224Core = Sha3Core<Sha3_224Params>;
pub type Sha3_256Core = Sha3Core<Sha3_256Params>;
pub type Sha3_384Core = Sha3Core<Sha3_384Params>;
pub type Sha3_512Core = Sha3Core<Sha3_512Params>;

/// SHA3-224 hasher.
pub type Sha3_224 = CoreWrapper<Sha3_224Core>;
/// SHA3-256 hasher.
pub type Sha3_256 = CoreWrapper<Sha3_256Core>;
/// SHA3-384 hasher.
pub type Sha3_384 = CoreWrapper<Sha3_384Core>;
/// SHA3-512 hasher.
pub type Sha3_512 = CoreWrapper<Sha3_512Core>;
