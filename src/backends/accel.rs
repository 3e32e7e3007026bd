//======================================================================
// src/backends/accel.rs
// Keccak-f[1600] delegated to the `keccak` crate.
//======================================================================

use crate::consts::LANES;

/// Permutes the lanes with `keccak::f1600`, which picks up the platform
/// intrinsics enabled on that crate.
#[inline(always)]
pub(crate) fn permutation(lanes: &mut [u64; LANES]) {
    keccak::f1600(lanes);
}
