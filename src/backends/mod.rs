//======================================================================
// src/backends/mod.rs
// Permutation backend selection.
//======================================================================

use cfg_if::cfg_if;

#[cfg(any(not(feature = "sliced32"), test))]
pub(crate) mod soft;

#[cfg(any(feature = "sliced32", test))]
pub(crate) mod sliced32;

cfg_if! {
    if #[cfg(feature = "sliced32")] {
        pub(crate) use sliced32::permute;
    } else {
        pub(crate) use soft::permute;
    }
}
