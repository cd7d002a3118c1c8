// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use pythia_core::crypto;
use pythia_core::rng::SodiumRng;
use pythia_core::types::{PythiaResult, POINT_LENGTH, SALT_LENGTH, SCALAR_LENGTH};
use rand_core::{CryptoRng, RngCore};

use crate::state::IdentityKeyPair;

pub fn generate_salt() -> PythiaResult<[u8; SALT_LENGTH]> {
    generate_salt_with_rng(&mut SodiumRng)
}

/// Draws [`SALT_LENGTH`] uniformly random bytes from `rng`.
pub fn generate_salt_with_rng<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
) -> PythiaResult<[u8; SALT_LENGTH]> {
    let mut salt = [0u8; SALT_LENGTH];
    crypto::random_bytes(rng, &mut salt)?;
    Ok(salt)
}

/// Derives an identity key pair from `seed`. The same seed always yields the
/// same pair.
pub fn generate_key_pair(seed: &[u8]) -> PythiaResult<IdentityKeyPair> {
    let mut pair = IdentityKeyPair {
        private_key: [0u8; SCALAR_LENGTH],
        public_key: [0u8; POINT_LENGTH],
    };
    crypto::derive_key_pair(seed, &mut pair.private_key, &mut pair.public_key)?;
    Ok(pair)
}
