// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use pythia_core::rng::SodiumRng;
use pythia_core::types::{
    BlindingSecret, PythiaError, PythiaResult, BLINDED_VALUE_LENGTH, BLINDING_SECRET_LENGTH,
    DEBLINDED_VALUE_LENGTH,
};
use pythia_core::{oprf, protocol};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::state::BlindResult;

/// Blinds `secret` with a fresh scalar from the process-wide random source.
pub fn blind(secret: &[u8]) -> PythiaResult<BlindResult> {
    blind_with_rng(&mut SodiumRng, secret)
}

/// Blinds `secret` with a fresh scalar drawn from `rng`.
///
/// # Errors
///
/// Returns [`PythiaError::RandomnessUnavailable`] if `rng` fails.
pub fn blind_with_rng<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    secret: &[u8],
) -> PythiaResult<BlindResult> {
    let mut blinded_value = [0u8; BLINDED_VALUE_LENGTH];
    let mut scalar = Zeroizing::new([0u8; BLINDING_SECRET_LENGTH]);
    oprf::blind(rng, secret, &mut blinded_value, &mut scalar)?;

    Ok(BlindResult {
        blinded_value,
        blinding_secret: BlindingSecret::from_bytes(*scalar),
    })
}

/// Removes the blinding factor: `deblinded = transformed · r⁻¹`.
///
/// # Errors
///
/// * [`PythiaError::InvalidBlindingSecret`] if `r` is zero or non-canonical.
/// * [`PythiaError::InvalidPoint`] if `transformed_value` does not decode.
pub fn deblind(
    transformed_value: &[u8],
    blinding_secret: &BlindingSecret,
) -> PythiaResult<[u8; DEBLINDED_VALUE_LENGTH]> {
    let transformed = protocol::read_point(transformed_value, PythiaError::InvalidPoint)?;
    let mut deblinded = [0u8; DEBLINDED_VALUE_LENGTH];
    oprf::deblind(&transformed, blinding_secret.as_bytes(), &mut deblinded)?;
    Ok(deblinded)
}
