//======================================================================
// src/backends/soft.rs
// Portable reference implementation of Keccak-f[1600].
//======================================================================

use crate::consts::*;

/// Step mapping Theta, FIPS 202 section 3.2.1.
#[inline(always)]
fn theta(a: &mut [u64; LANES]) {
    let mut c = [0u64; DIM];
    for x in 0..DIM {
        c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..DIM {
        let d = c[(x + DIM - 1) % DIM] ^ c[(x + 1) % DIM].rotate_left(1);
        for y in 0..DIM {
            a[DIM * y + x] ^= d;
        }
    }
}

/// Step mappings Rho and Pi merged into one in-place walk of the lane cycle.
#[inline(always)]
fn rho_pi(a: &mut [u64; LANES]) {
    let mut src = 1;
    let mut carried = a[src];
    for &dst in PI_CYCLE.iter() {
        let displaced = a[dst];
        a[dst] = carried.rotate_left(ROTATION_OFFSETS[src]);
        carried = displaced;
        src = dst;
    }
}

/// Step mapping Chi, FIPS 202 section 3.2.4.
#[inline(always)]
fn chi(a: &mut [u64; LANES]) {
    for row in a.chunks_exact_mut(DIM) {
        let r = [row[0], row[1], row[2], row[3], row[4]];
        for x in 0..DIM {
            row[x] = r[x] ^ (!r[(x + 1) % DIM] & r[(x + 2) % DIM]);
        }
    }
}

/// Step mapping Iota, FIPS 202 section 3.2.5.
#[inline(always)]
fn iota(a: &mut [u64; LANES], round: usize) {
    a[0] ^= ROUND_CONSTANTS[round];
}

/// Keccak-f[1600] on a lane matrix indexed by `5 * y + x`.
///
/// Always available, whichever backend the engine was compiled with.
pub fn keccak_f1600(lanes: &mut [u64; LANES]) {
    for round in 0..ROUNDS {
        theta(lanes);
        rho_pi(lanes);
        chi(lanes);
        iota(lanes, round);
    }
}

#[cfg(not(feature = "accel"))]
#[inline(always)]
pub(crate) fn permutation(lanes: &mut [u64; LANES]) {
    keccak_f1600(lanes);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_state_first_lane() {
        let mut lanes = [0u64; LANES];
        keccak_f1600(&mut lanes);
        assert_eq!(lanes[0], 0xF125_8F79_40E1_DDE7);
    }

    #[test]
    fn rho_pi_leaves_lane_zero_alone() {
        let mut lanes = [0u64; LANES];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = 1 << i;
        }
        rho_pi(&mut lanes);

        assert_eq!(lanes[0], 1);
        // Lane 1 lands on lane 10, rotated by one.
        assert_eq!(lanes[10], 1 << 2);
        // Lane 6 lands on lane 1, rotated by 44.
        assert_eq!(lanes[1], 1 << (6 + 44));
    }

    #[test]
    fn chi_on_single_row() {
        let mut lanes = [0u64; LANES];
        lanes[1] = u64::MAX;
        chi(&mut lanes);
        // a[0] ^= !a[1] & a[2] = 0; a[4] ^= !a[0] & a[1] = MAX.
        assert_eq!(lanes[0], 0);
        assert_eq!(lanes[1], u64::MAX);
        assert_eq!(lanes[4], u64::MAX);
    }

    #[test]
    fn matches_keccak_crate() {
        let mut ours = [0u64; LANES];
        for (i, lane) in ours.iter_mut().enumerate() {
            *lane = (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        }
        let mut theirs = ours;

        keccak_f1600(&mut ours);
        keccak::f1600(&mut theirs);

        assert_eq!(ours, theirs);
    }
}
