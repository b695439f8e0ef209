//======================================================================
// src/siv.rs
// ASCON-80pq-SIV: a deterministic, misuse-resistant AEAD. The stream
// nonce of the encryption phase is the authentication tag computed
// over key, associated data and plaintext.
//======================================================================

use crate::consts::RATE;
use crate::state::AsconState;
use aead::consts::{U0, U16, U20};
use aead::generic_array::GenericArray;
use aead::{AeadCore, AeadInPlace, Error, Key, KeyInit, KeySizeUser, Nonce, Tag};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Key size in bytes.
pub const KEY_SIZE: usize = 20;

/// Nonce size in bytes.
pub const NONCE_SIZE: usize = 16;

/// Tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// Initialization vector for the authentication phase.
const IV_AUTH: u32 = 0xa1400c06;

/// Initialization vector for the encryption phase.
const IV_CRYPT: u32 = 0xa2400c06;

/// First round of the per-block permutation (six rounds).
const BLOCK_ROUND: u8 = 6;

/// The ASCON-80pq-SIV cipher keyed for encryption and decryption.
///
/// Encryption is deterministic: the same key, nonce, associated data
/// and plaintext always produce the same ciphertext, and a repeated
/// nonce leaks only message equality. The ciphertext layout is
/// `stream-encrypted plaintext ‖ 16-byte tag`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ascon80pqSiv {
    key: [u8; KEY_SIZE],
}

impl KeySizeUser for Ascon80pqSiv {
    type KeySize = U20;
}

impl KeyInit for Ascon80pqSiv {
    fn new(key: &Key<Self>) -> Self {
        let mut k = [0u8; KEY_SIZE];
        k.copy_from_slice(key);
        Self { key: k }
    }
}

impl AeadCore for Ascon80pqSiv {
    type NonceSize = U16;
    type TagSize = U16;
    type CiphertextOverhead = U0;
}

impl AeadInPlace for Ascon80pqSiv {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        let mut state = Zeroizing::new(AsconState::new());

        // 1. Authentication phase: the tag commits to the key, nonce,
        //    associated data and plaintext.
        let tag = authenticate(&mut state, nonce.as_slice(), &self.key, associated_data, buffer);

        // 2. Encryption phase, keyed by the tag in place of the nonce.
        init(&mut state, &tag, &self.key, IV_CRYPT);
        ofb_crypt(&mut state, buffer);

        Ok(GenericArray::clone_from_slice(&tag))
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        let mut state = Zeroizing::new(AsconState::new());

        // 1. Recover the candidate plaintext under the received tag.
        init(&mut state, tag.as_slice(), &self.key, IV_CRYPT);
        ofb_crypt(&mut state, buffer);

        // 2. Recompute the tag over the recovered plaintext.
        let expected = authenticate(&mut state, nonce.as_slice(), &self.key, associated_data, buffer);

        // 3. The plaintext must not survive a failed check.
        if tags_match(&expected, tag.as_slice()) {
            Ok(())
        } else {
            buffer.zeroize();
            Err(Error)
        }
    }
}

/// Loads IV ‖ key ‖ nonce into the state, permutes, then folds the key
/// back into the capacity at offset 20.
fn init(state: &mut AsconState, npub: &[u8], key: &[u8; KEY_SIZE], iv: u32) {
    *state = AsconState::new();
    state.set_bytes(&iv.to_be_bytes(), 0);
    state.set_bytes(key, 4);
    state.set_bytes(npub, 24);
    state.permute(0);
    state.add_bytes(key, 20);
}

/// Absorbs `data` in rate blocks with 10* padding. The trailing
/// permutation is skipped when the next phase keeps writing into the
/// padded block.
fn absorb(state: &mut AsconState, data: &[u8], last_permute: bool) {
    let mut blocks = data.chunks_exact(RATE);
    for block in &mut blocks {
        state.add_bytes(block, 0);
        state.permute(BLOCK_ROUND);
    }
    let rest = blocks.remainder();
    state.add_bytes(rest, 0);
    state.add_byte(0x80, rest.len());
    if last_permute {
        state.permute(BLOCK_ROUND);
    }
}

/// Computes the tag over nonce, associated data and plaintext.
fn authenticate(
    state: &mut AsconState,
    npub: &[u8],
    key: &[u8; KEY_SIZE],
    associated_data: &[u8],
    plaintext: &[u8],
) -> [u8; TAG_SIZE] {
    init(state, npub, key, IV_AUTH);
    if !associated_data.is_empty() {
        absorb(state, associated_data, true);
    }
    state.add_separator();
    absorb(state, plaintext, false);

    // Fold the key in around the final permutation and squeeze the tag
    // out of the capacity.
    state.add_bytes(key, 8);
    state.permute(0);
    state.add_bytes(&key[4..], 24);
    let mut tag = [0u8; TAG_SIZE];
    state.extract_bytes(&mut tag, 24);
    tag
}

/// Runs the permutation in OFB mode over `buffer`, encrypting or
/// decrypting in place.
fn ofb_crypt(state: &mut AsconState, buffer: &mut [u8]) {
    let mut block = Zeroizing::new([0u8; RATE]);
    for chunk in buffer.chunks_mut(RATE) {
        state.permute(BLOCK_ROUND);
        state.extract_bytes(&mut block[..chunk.len()], 0);
        for (byte, ks) in chunk.iter_mut().zip(block.iter()) {
            *byte ^= ks;
        }
    }
}

/// Constant-time tag comparison: no early exit on the first
/// differing byte.
fn tags_match(a: &[u8; TAG_SIZE], b: &[u8]) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
