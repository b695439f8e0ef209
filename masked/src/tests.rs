//======================================================================
// ascon320-masked test suite
//======================================================================
#![cfg(test)]

use crate::{EntropyPool, MaskedState, MaskedWord};
use ascon320::AsconState;

// State after the full permutation of the all-zero state.
const P12_ZERO: [u64; 5] = [
    0x78ea7ae5cfebb108,
    0x9b9bfb8513b560f7,
    0x6937f83e03d11a50,
    0x3fe53f36f2c1178c,
    0x045d648e4def12c9,
];

// Deterministic stand-in for the caller's RNG (splitmix64).
fn splitmix(seed: &mut u64) -> u64 {
    *seed = seed.wrapping_add(0x9e3779b97f4a7c15);
    let mut z = *seed;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

fn fresh_words<const W: usize>(seed: &mut u64) -> [u64; W] {
    core::array::from_fn(|_| splitmix(seed))
}

fn random_state(seed: &mut u64) -> [u64; 5] {
    core::array::from_fn(|_| splitmix(seed))
}

fn reference_permute(words: [u64; 5], first_round: u8) -> [u64; 5] {
    let mut state = AsconState::from_words(words);
    state.permute(first_round);
    state.to_words()
}

fn mask_unmask_roundtrip<const N: usize>() {
    let mut seed = 0x1234;
    for _ in 0..32 {
        let value = splitmix(&mut seed);
        let fresh: [u64; 3] = fresh_words(&mut seed);
        let word = MaskedWord::<N>::mask(value, &fresh[..N - 1]);
        assert_eq!(word.unmask(), value);
    }
}

#[test]
fn mask_unmask_roundtrip_two_shares() {
    mask_unmask_roundtrip::<2>();
}

#[test]
fn mask_unmask_roundtrip_four_shares() {
    mask_unmask_roundtrip::<4>();
}

fn remask_preserves_value<const N: usize>() {
    let mut seed = 0xfeed;
    let value = splitmix(&mut seed);
    let fresh: [u64; 3] = fresh_words(&mut seed);
    let mut word = MaskedWord::<N>::mask(value, &fresh[..N - 1]);
    let before = word.shares;

    let fresh: [u64; 3] = fresh_words(&mut seed);
    word.remask(&fresh[..N - 1]);
    assert_eq!(word.unmask(), value);
    assert_ne!(word.shares, before);
}

#[test]
fn remask_preserves_value_two_shares() {
    remask_preserves_value::<2>();
}

#[test]
fn remask_preserves_value_four_shares() {
    remask_preserves_value::<4>();
}

fn masked_permutation_matches_plain<const N: usize>() {
    let mut seed = 0x5eed ^ N as u64;
    for first_round in [0u8, 4, 6, 12] {
        for _ in 0..16 {
            let words = random_state(&mut seed);
            let fresh: [u64; 15] = fresh_words(&mut seed);
            let mut masked = MaskedState::<N>::mask(&words, &fresh[..5 * (N - 1)]);
            let mut pool = EntropyPool(fresh_words(&mut seed));

            masked.permute(first_round, &mut pool);
            assert_eq!(
                masked.unmask(),
                reference_permute(words, first_round),
                "first_round {first_round}"
            );
        }
    }
}

#[test]
fn masked_permutation_matches_plain_two_shares() {
    masked_permutation_matches_plain::<2>();
}

#[test]
fn masked_permutation_matches_plain_four_shares() {
    masked_permutation_matches_plain::<4>();
}

fn chained_permutations_reuse_the_pool<const N: usize>() {
    let mut seed = 0xcafe;
    let words = random_state(&mut seed);
    let fresh: [u64; 15] = fresh_words(&mut seed);
    let mut masked = MaskedState::<N>::mask(&words, &fresh[..5 * (N - 1)]);
    let mut pool = EntropyPool(fresh_words(&mut seed));
    let seeded = pool.0;

    // Three full permutations back to back, reusing the refreshed pool.
    let mut expected = words;
    for _ in 0..3 {
        masked.permute(0, &mut pool);
        expected = reference_permute(expected, 0);
        assert_eq!(masked.unmask(), expected);
    }

    // The callee must have rotated the pool forward.
    assert_ne!(pool.0, seeded);
}

#[test]
fn chained_permutations_reuse_the_pool_two_shares() {
    chained_permutations_reuse_the_pool::<2>();
}

#[test]
fn chained_permutations_reuse_the_pool_four_shares() {
    chained_permutations_reuse_the_pool::<4>();
}

#[test]
fn masked_permutation_of_zero_state() {
    let mut seed = 0x0ddba11;
    let fresh: [u64; 15] = fresh_words(&mut seed);
    let mut masked = MaskedState::<4>::mask(&[0; 5], &fresh);
    let mut pool = EntropyPool::from_bytes(&[0x5a; 24]);

    masked.permute(0, &mut pool);
    assert_eq!(masked.unmask(), P12_ZERO);
}

#[test]
fn first_round_twelve_is_identity() {
    let mut seed = 0x7777;
    let words = random_state(&mut seed);
    let fresh: [u64; 15] = fresh_words(&mut seed);
    let mut masked = MaskedState::<4>::mask(&words, &fresh);
    let mut pool = EntropyPool(fresh_words(&mut seed));

    masked.permute(12, &mut pool);
    assert_eq!(masked.unmask(), words);
}

#[test]
fn remask_state_preserves_the_permutation_result() {
    let mut seed = 0xbead;
    let words = random_state(&mut seed);
    let fresh: [u64; 15] = fresh_words(&mut seed);
    let mut masked = MaskedState::<4>::mask(&words, &fresh);

    let fresh: [u64; 15] = fresh_words(&mut seed);
    masked.remask(&fresh);
    assert_eq!(masked.unmask(), words);

    let mut pool = EntropyPool(fresh_words(&mut seed));
    masked.permute(6, &mut pool);
    assert_eq!(masked.unmask(), reference_permute(words, 6));
}
