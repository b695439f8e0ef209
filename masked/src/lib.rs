#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]
#![doc = include_str!("../README.md")]

//======================================================================
// masked/src/lib.rs
// Crate entry point for the masked permutation.
//======================================================================

// --- Module declarations ---
mod word;
pub use crate::word::MaskedWord;

mod state;
pub use crate::state::{EntropyPool, MaskedState};

// --- Test module ---
#[cfg(test)]
mod tests;

// --- Convenience type aliases ---

/// First-order masked word (2 shares).
pub type MaskedWord2 = MaskedWord<2>;

/// Higher-order masked word (4 shares).
pub type MaskedWord4 = MaskedWord<4>;

/// First-order masked permutation state (2 shares).
pub type MaskedState2 = MaskedState<2>;

/// Higher-order masked permutation state (4 shares).
pub type MaskedState4 = MaskedState<4>;
