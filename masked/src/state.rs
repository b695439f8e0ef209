//======================================================================
// masked/src/state.rs
// The masked permutation state and the share-wise permutation rounds.
//======================================================================

use crate::word::{MaskedWord, SHARE_ROT};
use ascon320::consts::{ROUNDS, ROUND_CONSTANTS};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Per-round right rotations applied to the reshare channels.
const CHANNEL_ROT: [u32; 3] = [7, 13, 29];

/// The caller-owned randomness pool consumed by the masked
/// permutation.
///
/// The caller fills it with 24 fresh random bytes before a masked
/// permutation; the callee rotates the channels through the rounds and
/// writes them back on return, retaining no copy, so the pool can seed
/// a chained invocation until new randomness is available.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EntropyPool(pub [u64; 3]);

impl EntropyPool {
    /// Builds a pool from 24 caller-supplied random bytes.
    pub fn from_bytes(bytes: &[u8; 24]) -> Self {
        let mut words = [0u64; 3];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            *word = u64::from_be_bytes(chunk.try_into().unwrap());
        }
        Self(words)
    }
}

/// The 320-bit permutation state in `N`-share masked form, `N` = 2
/// or 4.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MaskedState<const N: usize> {
    x: [MaskedWord<N>; 5],
}

impl<const N: usize> MaskedState<N> {
    /// Masks the five plain state words, consuming `5 * (N - 1)` words
    /// of caller randomness.
    pub fn mask(words: &[u64; 5], fresh: &[u64]) -> Self {
        debug_assert_eq!(fresh.len(), 5 * (N - 1));
        let mut x = [MaskedWord::zero(); 5];
        for (i, chunk) in fresh.chunks_exact(N - 1).enumerate() {
            x[i] = MaskedWord::mask(words[i], chunk);
        }
        Self { x }
    }

    /// Recombines every word into the plain state.
    pub fn unmask(&self) -> [u64; 5] {
        let mut words = [0u64; 5];
        for (word, masked) in words.iter_mut().zip(self.x.iter()) {
            *word = masked.unmask();
        }
        words
    }

    /// Rerandomizes the share representation in place, consuming
    /// `5 * (N - 1)` words of caller randomness.
    pub fn remask(&mut self, fresh: &[u64]) {
        debug_assert_eq!(fresh.len(), 5 * (N - 1));
        for (masked, chunk) in self.x.iter_mut().zip(fresh.chunks_exact(N - 1)) {
            masked.remask(chunk);
        }
    }

    /// Applies rounds `first_round..12` share-wise. Unmasking the
    /// result equals the plain permutation of the unmasked input.
    pub fn permute(&mut self, first_round: u8, pool: &mut EntropyPool) {
        debug_assert!(N == 2 || N == 4);
        debug_assert!(first_round <= ROUNDS);

        // Running reshare word: channels 0..N-1 come from the pool;
        // the last share is re-derived every round so the word stays a
        // sharing of zero no matter what it has absorbed.
        let mut t0 = MaskedWord::<N>::zero();
        for c in 0..N - 1 {
            t0.shares[c] = pool.0[c];
        }

        for &rc in &ROUND_CONSTANTS[first_round as usize..] {
            let mut derived = 0u64;
            for c in 0..N - 1 {
                derived ^= t0.shares[c]
                    .rotate_right(SHARE_ROT[c])
                    .rotate_left(SHARE_ROT[N - 1]);
            }
            t0.shares[N - 1] = derived;

            let [x0, x1, x2, x3, x4] = &mut self.x;

            // round constant
            x2.xor_const(u64::from(rc));

            // substitution layer
            x0.xor(x4);
            x4.xor(x3);
            x2.xor(x1);

            let t1 = *x0;

            t0.and_not_xor(x0, x1);
            x0.and_not_xor(x1, x2);
            x1.and_not_xor(x2, x3);
            x2.and_not_xor(x3, x4);
            x3.and_not_xor(x4, &t1);
            x4.xor(&t0);

            x1.xor(x0);
            x0.xor(x4);
            x3.xor(x2);
            x2.not();

            // linear diffusion layer
            x0.linear(19, 28);
            x1.linear(61, 39);
            x2.linear(1, 6);
            x3.linear(10, 17);
            x4.linear(7, 41);

            // rotate the randomness channels for the next round
            for c in 0..N - 1 {
                t0.shares[c] = t0.shares[c].rotate_right(CHANNEL_ROT[c]);
            }
        }

        // Hand the rotated randomness back to the caller.
        for c in 0..N - 1 {
            pool.0[c] = t0.shares[c];
        }
    }
}
