//======================================================================
// src/padding.rs
// pad10*1 with a domain suffix, FIPS 202 sections 5.1 and 6.1.
//======================================================================

use crate::consts::PAD_TERMINATOR;
use crate::error::{Result, Sha3Error};

/// Pads the final block in place and returns the number of padding bytes.
///
/// `block` is a whole rate-sized buffer whose first `len` bytes are message
/// data. Everything from `len` on is cleared, `suffix` is OR-ed into byte
/// `len` and the terminating bit into the last byte. When `len == rate - 1`
/// both land in the same byte.
///
/// A padding length outside `[1, rate]` means the caller lost track of the
/// message length; the block is left untouched in that case.
pub fn pad(block: &mut [u8], len: usize, suffix: u8) -> Result<usize> {
    let rate = block.len();
    let pad = rate.saturating_sub(len);
    if !(1..=rate).contains(&pad) {
        return Err(Sha3Error::PadSize { pad, rate });
    }

    block[len..].fill(0);
    block[len] |= suffix;
    block[rate - 1] |= PAD_TERMINATOR;
    Ok(pad)
}
