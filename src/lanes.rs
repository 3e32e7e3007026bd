//======================================================================
// src/lanes.rs
// Conversion between the 200-byte state and its 25-lane matrix view.
//======================================================================

use crate::consts::{DIM, LANES, STATE_BYTES};

/// Byte offset of lane `(x, y)` inside the byte state.
#[inline(always)]
const fn lane_offset(x: usize, y: usize) -> usize {
    40 * y + 8 * x
}

/// Loads the byte state into lanes, FIPS 202 section 3.1.2.
///
/// Traversal runs along x before y and every lane is read little-endian.
#[inline]
pub fn bytes_to_lanes(state: &[u8; STATE_BYTES], lanes: &mut [u64; LANES]) {
    for y in 0..DIM {
        for x in 0..DIM {
            let ofs = lane_offset(x, y);
            let mut word = [0u8; 8];
            word.copy_from_slice(&state[ofs..ofs + 8]);
            lanes[DIM * y + x] = u64::from_le_bytes(word);
        }
    }
}

/// Stores lanes back into the byte state, FIPS 202 section 3.1.3.
#[inline]
pub fn lanes_to_bytes(lanes: &[u64; LANES], state: &mut [u8; STATE_BYTES]) {
    for y in 0..DIM {
        for x in 0..DIM {
            let ofs = lane_offset(x, y);
            state[ofs..ofs + 8].copy_from_slice(&lanes[DIM * y + x].to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;
    use rand_core::{RngCore, SeedableRng};

    #[test]
    fn lane_layout_is_little_endian() {
        let mut state = [0u8; STATE_BYTES];
        // Lane (x = 2, y = 3) starts at byte 136.
        state[136] = 0x01;
        state[143] = 0x80;

        let mut lanes = [0u64; LANES];
        bytes_to_lanes(&state, &mut lanes);

        assert_eq!(lanes[17], 0x8000_0000_0000_0001);
        assert_eq!(lanes.iter().filter(|&&l| l != 0).count(), 1);
    }

    #[test]
    fn bytes_lanes_bytes_is_identity() {
        let mut rng = ChaCha8Rng::from_seed([7; 32]);
        for _ in 0..64 {
            let mut state = [0u8; STATE_BYTES];
            rng.fill_bytes(&mut state);

            let mut lanes = [0u64; LANES];
            bytes_to_lanes(&state, &mut lanes);
            let mut back = [0u8; STATE_BYTES];
            lanes_to_bytes(&lanes, &mut back);

            assert_eq!(state, back);
        }
    }
}
