//======================================================================
// src/engine.rs
// The SHA-3 sponge engine: block absorption, padding and extraction.
//======================================================================

use tracing::{error, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::backends;
use crate::consts::{LANES, STATE_BYTES};
use crate::lanes::{bytes_to_lanes, lanes_to_bytes};
use crate::padding;
use crate::variant::Sha3Variant;

/// Keccak sponge bound to one [`Sha3Variant`].
///
/// The engine only ever sees whole blocks. Accumulating arbitrary input
/// into rate-sized blocks is the caller's job; [`crate::Sha3_256`] and
/// friends get that from `digest`'s block buffer, [`hash`] does it by hand.
///
/// Both the byte state and the lane scratch are wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sha3Engine {
    #[zeroize(skip)]
    variant: Sha3Variant,
    state: [u8; STATE_BYTES],
    lanes: [u64; LANES],
}

impl Sha3Engine {
    pub fn new(variant: Sha3Variant) -> Self {
        trace!(variant = %variant, "sponge initialised");
        Self {
            variant,
            state: [0; STATE_BYTES],
            lanes: [0; LANES],
        }
    }

    pub fn variant(&self) -> Sha3Variant {
        self.variant
    }

    /// Current byte state, exposed for inspection and tests.
    pub fn state(&self) -> &[u8; STATE_BYTES] {
        &self.state
    }

    /// Zeroes the state so the engine can hash a new message.
    pub fn reset(&mut self) {
        trace!(variant = %self.variant, "sponge reset");
        self.state.zeroize();
        self.lanes.zeroize();
    }

    /// XORs one full block into the rate portion of the state and permutes.
    ///
    /// # Panics
    ///
    /// If `block` is not exactly `rate` bytes long.
    pub fn absorb_block(&mut self, block: &[u8]) {
        let rate = self.variant.rate();
        assert_eq!(
            block.len(),
            rate,
            "{} absorbs {rate}-byte blocks",
            self.variant
        );
        for (s, b) in self.state[..rate].iter_mut().zip(block) {
            *s ^= b;
        }
        self.permute();
    }

    /// Pads the final block, absorbs it and writes the digest into `out`.
    ///
    /// `block` is a rate-sized buffer holding `valid_len` message bytes; the
    /// rest of it is scratch. `valid_len == rate` means the block is full and
    /// a padding-only block follows it.
    ///
    /// The engine must be [reset](Self::reset) before hashing another message.
    ///
    /// # Panics
    ///
    /// On a block that is not `rate` bytes long, `valid_len > rate`, or an
    /// `out` buffer that is not `digest_len` bytes long. Also panics if the
    /// computed padding length falls outside `[1, rate]`.
    pub fn finalize_into(&mut self, block: &mut [u8], valid_len: usize, out: &mut [u8]) {
        let rate = self.variant.rate();
        let digest_len = self.variant.digest_len();
        assert_eq!(block.len(), rate, "{} pads {rate}-byte blocks", self.variant);
        assert!(
            valid_len <= rate,
            "{valid_len} valid bytes exceed the {rate}-byte rate of {}",
            self.variant
        );
        assert_eq!(out.len(), digest_len, "{} yields {digest_len} bytes", self.variant);
        trace!(variant = %self.variant, valid_len, "finalizing sponge");

        let mut len = valid_len;
        if len == rate {
            self.absorb_block(block);
            len = 0;
        }

        self.apply_padding(block, len);
        self.absorb_block(block);

        out.copy_from_slice(&self.state[..digest_len]);
    }

    /// Like [`finalize_into`](Self::finalize_into), returning the digest.
    pub fn finalize_and_extract(&mut self, block: &mut [u8], valid_len: usize) -> Vec<u8> {
        let mut out = vec![0u8; self.variant.digest_len()];
        self.finalize_into(block, valid_len, &mut out);
        out
    }

    /// Pads `block` after `len` message bytes. A bad padding length is a
    /// bookkeeping bug upstream, never a recoverable condition.
    fn apply_padding(&self, block: &mut [u8], len: usize) {
        if let Err(err) = padding::pad(block, len, self.variant.domain_suffix()) {
            error!(variant = %self.variant, %err, "padding invariant violated");
            panic!("internal consistency failure: {err}");
        }
    }

    fn permute(&mut self) {
        bytes_to_lanes(&self.state, &mut self.lanes);
        backends::permutation(&mut self.lanes);
        lanes_to_bytes(&self.lanes, &mut self.state);
    }
}

impl Clone for Sha3Engine {
    /// Copies the byte state; the clone gets its own zeroed lane scratch.
    fn clone(&self) -> Self {
        Self {
            variant: self.variant,
            state: self.state,
            lanes: [0; LANES],
        }
    }
}

impl core::fmt::Debug for Sha3Engine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sha3Engine")
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

/// Hashes `data` in one call with the given variant.
pub fn hash(variant: Sha3Variant, data: &[u8]) -> Vec<u8> {
    let rate = variant.rate();
    let mut engine = Sha3Engine::new(variant);

    let mut blocks = data.chunks_exact(rate);
    for block in blocks.by_ref() {
        engine.absorb_block(block);
    }
    let rem = blocks.remainder();

    let mut last = vec![0u8; rate];
    last[..rem.len()].copy_from_slice(rem);
    engine.finalize_and_extract(&mut last, rem.len())
}
