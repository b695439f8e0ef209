//======================================================================
// src/sponge.rs
// Incremental absorb/squeeze state machine for the XOF constructions.
//======================================================================

use crate::consts::RATE;
use crate::state::AsconState;
use crate::variant::{Xof, XofA, XofVariant};
use core::marker::PhantomData;
use digest::{ExtendableOutput, ExtendableOutputReset, Reset, Update, XofReader};
use zeroize::{Zeroize, ZeroizeOnDrop};

const MODE_ABSORB: u8 = 0;
const MODE_SQUEEZE: u8 = 1;

// The fixed-output length is a bit counter in the low 32 bits of the
// IV; anything beyond it selects arbitrary-length output instead.
const MAX_FIXED_OUTPUT: usize = 0x1fff_ffff;

/// Incremental sponge state for ASCON-XOF and ASCON-XOFA.
///
/// `count` is the byte position inside the current rate block; once
/// the state starts squeezing it never absorbs again. Dropping the
/// state scrubs it; `Clone` yields an independent copy.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct XofState<V: XofVariant> {
    state: AsconState,
    iv: u64,
    count: u8,
    mode: u8,
    #[zeroize(skip)]
    _variant: PhantomData<V>,
}

impl<V: XofVariant> XofState<V> {
    /// Creates a state with arbitrary-length output.
    pub fn new() -> Self {
        Self::with_iv(V::IV)
    }

    /// Creates a state whose IV commits to a fixed output length of
    /// `outlen` bytes. Lengths beyond the IV's 29-bit counter fall
    /// back to arbitrary-length output.
    pub fn new_fixed(outlen: usize) -> Self {
        let outlen = if outlen > MAX_FIXED_OUTPUT { 0 } else { outlen };
        Self::with_iv(V::IV | (outlen as u64) * 8)
    }

    fn with_iv(iv: u64) -> Self {
        let mut state = AsconState::from_words([iv, 0, 0, 0, 0]);
        state.permute(0);
        Self {
            state,
            iv,
            count: 0,
            mode: MODE_ABSORB,
            _variant: PhantomData,
        }
    }

    /// Restarts the state with the IV it was created with. The old
    /// contents are scrubbed on replacement.
    pub fn reinit(&mut self) {
        *self = Self::with_iv(self.iv);
    }

    /// Absorbs input into the state.
    ///
    /// Absorbing after the first squeeze is a caller error: debug
    /// builds assert, release builds ignore the input.
    pub fn absorb(&mut self, mut input: &[u8]) {
        debug_assert_eq!(self.mode, MODE_ABSORB, "absorb after squeeze");
        if self.mode != MODE_ABSORB {
            return;
        }

        // Top up the partial block left over from the previous call.
        if self.count > 0 {
            let take = (RATE - self.count as usize).min(input.len());
            self.state.add_bytes(&input[..take], self.count as usize);
            self.count += take as u8;
            input = &input[take..];
            if (self.count as usize) < RATE {
                return;
            }
            self.state.permute(V::BLOCK_ROUND);
            self.count = 0;
        }

        let mut blocks = input.chunks_exact(RATE);
        for block in &mut blocks {
            self.state.add_bytes(block, 0);
            self.state.permute(V::BLOCK_ROUND);
        }

        let rest = blocks.remainder();
        self.state.add_bytes(rest, 0);
        self.count = rest.len() as u8;
    }

    /// Squeezes output from the state, finalizing the absorb phase on
    /// the first call.
    pub fn squeeze(&mut self, output: &mut [u8]) {
        if self.mode == MODE_ABSORB {
            // 10* padding; the finalization permutation is always the
            // full 12 rounds, for both variants.
            self.state.add_byte(0x80, self.count as usize);
            self.state.permute(0);
            self.count = 0;
            self.mode = MODE_SQUEEZE;
        }

        let mut pos = 0;
        while pos < output.len() {
            if self.count as usize == RATE {
                self.state.permute(V::BLOCK_ROUND);
                self.count = 0;
            }
            let take = (RATE - self.count as usize).min(output.len() - pos);
            self.state
                .extract_bytes(&mut output[pos..pos + take], self.count as usize);
            self.count += take as u8;
            pos += take;
        }
    }

    /// Pads the absorb phase to the next block boundary; a no-op when
    /// the state is already aligned.
    pub fn pad(&mut self) {
        debug_assert_eq!(self.mode, MODE_ABSORB, "pad after squeeze");
        if self.mode == MODE_ABSORB && self.count > 0 {
            self.state.add_byte(0x80, self.count as usize);
            self.state.permute(V::BLOCK_ROUND);
            self.count = 0;
        }
    }

    /// Pads, zeroes the rate and runs the permutation.
    ///
    /// Used by SpongePRNG constructions: once the rate has been
    /// cleared, a captured state can no longer be run backwards to
    /// recover earlier output.
    pub fn clear_rate(&mut self) {
        self.pad();
        self.state.clear_rate();
        self.state.permute(V::BLOCK_ROUND);
    }
}

impl<V: XofVariant> Default for XofState<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot ASCON-XOF with the default 32-byte output.
pub fn xof(input: &[u8]) -> [u8; 32] {
    let mut state = XofState::<Xof>::new();
    state.absorb(input);
    let mut out = [0u8; 32];
    state.squeeze(&mut out);
    out
}

/// One-shot ASCON-XOFA with the default 32-byte output.
pub fn xofa(input: &[u8]) -> [u8; 32] {
    let mut state = XofState::<XofA>::new();
    state.absorb(input);
    let mut out = [0u8; 32];
    state.squeeze(&mut out);
    out
}

//======================================================================
// digest trait surface
//======================================================================

impl<V: XofVariant> Update for XofState<V> {
    fn update(&mut self, data: &[u8]) {
        self.absorb(data);
    }
}

impl<V: XofVariant> ExtendableOutput for XofState<V> {
    type Reader = Self;

    fn finalize_xof(self) -> Self::Reader {
        self
    }
}

impl<V: XofVariant> XofReader for XofState<V> {
    fn read(&mut self, buffer: &mut [u8]) {
        self.squeeze(buffer);
    }
}

impl<V: XofVariant> Reset for XofState<V> {
    fn reset(&mut self) {
        self.reinit();
    }
}

impl<V: XofVariant> ExtendableOutputReset for XofState<V> {
    fn finalize_xof_reset(&mut self) -> Self::Reader {
        let reader = self.clone();
        self.reinit();
        reader
    }
}
