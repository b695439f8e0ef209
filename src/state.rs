//======================================================================
// src/state.rs
// AsconState: the 320-bit permutation state and the byte-addressed
// helpers used by the sponge and AEAD layers.
//======================================================================

use crate::backends;
use crate::consts::{ROUNDS, STATE_BYTES, STATE_WORDS};
use zeroize::Zeroize;

/// The 320-bit permutation state, five 64-bit words X0..X4.
///
/// The regular serialization is big-endian per word; every byte offset
/// taken by the helpers below addresses that serialization, whatever
/// form the selected backend computes in internally.
#[derive(Clone, Default, Zeroize)]
pub struct AsconState {
    w: [u64; STATE_WORDS],
}

impl AsconState {
    /// Creates an all-zero state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from five words.
    pub const fn from_words(w: [u64; STATE_WORDS]) -> Self {
        Self { w }
    }

    /// Returns a copy of the five state words.
    pub fn to_words(&self) -> [u64; STATE_WORDS] {
        self.w
    }

    /// Serializes the state to its regular byte form.
    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let mut out = [0u8; STATE_BYTES];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.w.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Rebuilds a state from its regular byte form.
    pub fn from_bytes(bytes: &[u8; STATE_BYTES]) -> Self {
        let mut w = [0u64; STATE_WORDS];
        for (word, chunk) in w.iter_mut().zip(bytes.chunks_exact(8)) {
            *word = u64::from_be_bytes(chunk.try_into().unwrap());
        }
        Self { w }
    }

    /// Applies rounds `first_round..12` of the permutation.
    /// `first_round == 12` leaves the state unchanged.
    pub fn permute(&mut self, first_round: u8) {
        debug_assert!(first_round <= ROUNDS);
        backends::permute(&mut self.w, first_round);
    }

    #[inline(always)]
    fn shift(offset: usize) -> u32 {
        (56 - 8 * (offset % 8)) as u32
    }

    /// XORs one byte into the state at `offset` of the regular form.
    #[inline]
    pub(crate) fn add_byte(&mut self, byte: u8, offset: usize) {
        self.w[offset / 8] ^= u64::from(byte) << Self::shift(offset);
    }

    /// XORs `data` into the state starting at byte `offset`.
    pub(crate) fn add_bytes(&mut self, data: &[u8], offset: usize) {
        for (i, &byte) in data.iter().enumerate() {
            self.add_byte(byte, offset + i);
        }
    }

    /// Overwrites state bytes starting at `offset` with `data`.
    pub(crate) fn set_bytes(&mut self, data: &[u8], offset: usize) {
        for (i, &byte) in data.iter().enumerate() {
            let o = offset + i;
            let shift = Self::shift(o);
            self.w[o / 8] &= !(0xffu64 << shift);
            self.w[o / 8] |= u64::from(byte) << shift;
        }
    }

    /// Reads state bytes starting at `offset` into `out`.
    pub(crate) fn extract_bytes(&self, out: &mut [u8], offset: usize) {
        for (i, byte) in out.iter_mut().enumerate() {
            let o = offset + i;
            *byte = (self.w[o / 8] >> Self::shift(o)) as u8;
        }
    }

    /// Zeroes the 8-byte rate portion (X0).
    pub(crate) fn clear_rate(&mut self) {
        self.w[0] = 0;
    }

    /// XORs the phase-separator bit into the last state byte.
    pub(crate) fn add_separator(&mut self) {
        self.w[STATE_WORDS - 1] ^= 1;
    }
}
