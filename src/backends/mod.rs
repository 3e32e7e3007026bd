//======================================================================
// src/backends/mod.rs
// Selects the Keccak-f[1600] backend at compile time.
//======================================================================

use cfg_if::cfg_if;

// The reference permutation stays compiled in every configuration.
pub mod soft;

cfg_if! {
    if #[cfg(feature = "accel")] {
        mod accel;
        pub(crate) use self::accel::permutation;
    } else {
        pub(crate) use self::soft::permutation;
    }
}
