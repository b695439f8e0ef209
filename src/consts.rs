//======================================================================
// src/consts.rs
// Round constants and state geometry shared across the crate.
//======================================================================

/// Number of 64-bit words in the permutation state.
pub const STATE_WORDS: usize = 5;

/// The permutation state size in bytes.
pub const STATE_BYTES: usize = STATE_WORDS * 8;

/// Sponge rate in bytes for the XOF and SIV constructions.
pub const RATE: usize = 8;

/// Total number of permutation rounds.
pub const ROUNDS: u8 = 12;

/// Round constants, XORed into the low byte of X2. Starting the
/// permutation at `first_round` selects the tail of this table.
pub const ROUND_CONSTANTS: [u8; 12] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];
