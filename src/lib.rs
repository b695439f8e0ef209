#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point: module layout and the public type aliases.
//======================================================================

// --- Module declarations ---
pub mod consts;

mod backends;

pub mod state;
pub use crate::state::AsconState;

pub mod variant;
use crate::variant::{Xof, XofA};

pub mod sponge;
pub use crate::sponge::{xof, xofa, XofState};

pub mod siv;
pub use crate::siv::Ascon80pqSiv;


// --- Re-exports for downstream users ---
pub use aead;
pub use digest;

// --- Convenience type aliases ---

/// Incremental ASCON-XOF state (12 rounds between rate blocks).
pub type AsconXof = XofState<Xof>;

/// Incremental ASCON-XOFA state (8 rounds between rate blocks).
pub type AsconXofA = XofState<XofA>;
