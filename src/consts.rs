//======================================================================
// src/consts.rs
// Keccak-f[1600] dimensions and step-mapping tables.
//======================================================================

/// Width of the permutation state in bytes (1600 bits).
pub const STATE_BYTES: usize = 200;

/// Number of 64-bit lanes in the 5x5 state matrix.
pub const LANES: usize = 25;

/// Lanes per row and per column.
pub const DIM: usize = 5;

/// Rounds of Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Domain separation bits for SHA-3 fixed-output hashing ("01" followed by
/// the first pad bit), FIPS 202 section 6.1.
pub const SHA3_SUFFIX: u8 = 0x06;

/// Final bit of pad10*1, always stored in the last byte of the block.
pub const PAD_TERMINATOR: u8 = 0x80;

/// Round constants (RC) consumed by Iota, one per round.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho rotation amount for each lane, indexed by `5 * y + x`.
pub const ROTATION_OFFSETS: [u32; LANES] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

/// Destination order of the Pi lane cycle, starting from lane 1.
///
/// Lane 0 is the only fixed point; every other lane moves exactly once per
/// round along this 24-element cycle.
pub const PI_CYCLE: [usize; LANES - 1] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];
