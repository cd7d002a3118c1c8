// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Hardening Server
// Licensed under the MIT License

//! Hardening-server side of the Pythia protocol.
//!
//! The server holds a master secret, derives a transformation key per tweak,
//! transforms blinded values with a proof of correct transformation, and issues
//! update tokens when the master secret is rotated.

/// Master secret, per-tweak key pairs and the server facade.
mod state;
/// Oblivious transformation with proof.
mod transformation;
mod rotation;

pub use rotation::{compute_update_token, update_token_from_keys};
pub use state::{MasterSecret, PythiaServer, TransformResult, TransformationKeyPair};
pub use transformation::transform;
