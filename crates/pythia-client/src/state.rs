// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use pythia_core::proof::VerificationFailure;
use pythia_core::rng::SodiumRng;
use pythia_core::types::{
    BlindingSecret, Proof, PythiaResult, UpdateToken, BLINDED_VALUE_LENGTH,
    DEBLINDED_VALUE_LENGTH, POINT_LENGTH, SALT_LENGTH, SCALAR_LENGTH,
};
use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Output of [`crate::blind`]. Only `blinded_value` is sent to the server.
#[derive(Debug)]
pub struct BlindResult {
    pub blinded_value: [u8; BLINDED_VALUE_LENGTH],
    pub blinding_secret: BlindingSecret,
}

/// Deterministic Ristretto255 identity key pair.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct IdentityKeyPair {
    pub private_key: [u8; SCALAR_LENGTH],
    pub public_key: [u8; POINT_LENGTH],
}

impl std::fmt::Debug for IdentityKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityKeyPair")
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key.len())
            .finish()
    }
}

/// Client facade drawing all randomness from one RNG handle.
///
/// `PythiaClient::new()` uses the libsodium-backed [`SodiumRng`]; tests inject a
/// seeded generator through [`PythiaClient::with_rng`].
#[derive(Debug, Default)]
pub struct PythiaClient<R = SodiumRng> {
    rng: R,
}

impl PythiaClient<SodiumRng> {
    pub fn new() -> Self {
        Self { rng: SodiumRng }
    }
}

impl<R: RngCore + CryptoRng> PythiaClient<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn blind(&mut self, secret: &[u8]) -> PythiaResult<BlindResult> {
        crate::blinding::blind_with_rng(&mut self.rng, secret)
    }

    pub fn verify(
        &self,
        transformed_value: &[u8],
        blinded_value: &[u8],
        tweak: &[u8],
        transformation_public_key: &[u8],
        proof: &Proof,
    ) -> bool {
        crate::verification::verify(
            transformed_value,
            blinded_value,
            tweak,
            transformation_public_key,
            proof,
        )
    }

    pub fn verify_detailed(
        &self,
        transformed_value: &[u8],
        blinded_value: &[u8],
        tweak: &[u8],
        transformation_public_key: &[u8],
        proof_c: &[u8],
        proof_u: &[u8],
    ) -> Result<(), VerificationFailure> {
        crate::verification::verify_detailed(
            transformed_value,
            blinded_value,
            tweak,
            transformation_public_key,
            proof_c,
            proof_u,
        )
    }

    pub fn deblind(
        &self,
        transformed_value: &[u8],
        blinding_secret: &BlindingSecret,
    ) -> PythiaResult<[u8; DEBLINDED_VALUE_LENGTH]> {
        crate::blinding::deblind(transformed_value, blinding_secret)
    }

    pub fn update_deblinded(
        &self,
        deblinded_value: &[u8],
        token: &UpdateToken,
    ) -> PythiaResult<[u8; DEBLINDED_VALUE_LENGTH]> {
        crate::rotation::update_deblinded(deblinded_value, token)
    }

    pub fn generate_salt(&mut self) -> PythiaResult<[u8; SALT_LENGTH]> {
        crate::keys::generate_salt_with_rng(&mut self.rng)
    }

    pub fn generate_key_pair(&self, seed: &[u8]) -> PythiaResult<IdentityKeyPair> {
        crate::keys::generate_key_pair(seed)
    }
}
