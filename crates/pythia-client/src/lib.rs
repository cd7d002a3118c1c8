// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Client
// Licensed under the MIT License

//! Client side of the Pythia protocol: blind a secret, verify the server's
//! proof, deblind the hardened value, and migrate stored values after a key
//! rotation.

mod blinding;
mod keys;
mod rotation;
mod state;
mod verification;

pub use blinding::{blind, blind_with_rng, deblind};
pub use keys::{generate_key_pair, generate_salt, generate_salt_with_rng};
pub use pythia_core::proof::VerificationFailure;
pub use rotation::{update_deblinded, update_deblinded_bytes};
pub use state::{BlindResult, IdentityKeyPair, PythiaClient};
pub use verification::{verify, verify_detailed, verify_parts};
