// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::crypto;
use crate::types::{
    is_all_zero, labels, PythiaError, PythiaResult, HASH_LENGTH, POINT_LENGTH, SCALAR_LENGTH,
};

const HASH_TO_GROUP_DOMAIN: &[u8] = &[0x00];

/// Maps a secret onto a Ristretto255 element: `SHA-512(context || 0x00 || secret)`
/// followed by Elligator. An empty secret is accepted.
pub fn hash_to_group(input: &[u8], point_out: &mut [u8; POINT_LENGTH]) -> PythiaResult<()> {
    let mut hash = Zeroizing::new([0u8; HASH_LENGTH]);
    crypto::sha512_multi(
        &[labels::HASH_TO_GROUP_CONTEXT, HASH_TO_GROUP_DOMAIN, input],
        &mut hash,
    );
    *point_out = crypto::map_to_group(&hash)?;
    Ok(())
}

/// Blinds `input` under a fresh scalar `r` drawn from `rng`: `blinded = H(input) * r`.
pub fn blind<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    input: &[u8],
    blinded_element: &mut [u8; POINT_LENGTH],
    blind_scalar: &mut [u8; SCALAR_LENGTH],
) -> PythiaResult<()> {
    let r = crypto::random_nonzero_scalar(rng)?;

    let mut element = Zeroizing::new([0u8; POINT_LENGTH]);
    hash_to_group(input, &mut element)?;

    crypto::scalar_mult(&r, &element, blinded_element)?;
    blind_scalar.copy_from_slice(&r[..]);
    Ok(())
}

/// Evaluates the PRF on a blinded element: `evaluated = blinded * key`.
///
/// The identity element and non-canonical encodings are rejected with
/// [`PythiaError::InvalidBlindedValue`] before any multiplication.
pub fn evaluate(
    blinded_element: &[u8; POINT_LENGTH],
    private_key: &[u8; SCALAR_LENGTH],
    evaluated_element: &mut [u8; POINT_LENGTH],
) -> PythiaResult<()> {
    crypto::validate_ristretto_point(blinded_element)
        .map_err(|_| PythiaError::InvalidBlindedValue)?;
    crypto::scalar_mult(private_key, blinded_element, evaluated_element)
}

/// Removes the blinding factor: `unblinded = evaluated * r⁻¹`.
pub fn deblind(
    evaluated_element: &[u8; POINT_LENGTH],
    blind_scalar: &[u8; SCALAR_LENGTH],
    unblinded_out: &mut [u8; POINT_LENGTH],
) -> PythiaResult<()> {
    if !crypto::is_valid_nonzero_scalar(blind_scalar) {
        return Err(PythiaError::InvalidBlindingSecret);
    }
    crypto::validate_ristretto_point(evaluated_element)?;

    let scalar_inv = crypto::scalar_invert(blind_scalar)
        .map_err(|_| PythiaError::InvalidBlindingSecret)?;
    crypto::scalar_mult(&scalar_inv, evaluated_element, unblinded_out)
}

/// Computes the update token `Δ = new_key · old_key⁻¹` for one tweak.
pub fn compute_update_token(
    old_key: &[u8; SCALAR_LENGTH],
    new_key: &[u8; SCALAR_LENGTH],
) -> PythiaResult<Zeroizing<[u8; SCALAR_LENGTH]>> {
    if !crypto::is_valid_nonzero_scalar(old_key) || !crypto::is_valid_nonzero_scalar(new_key) {
        return Err(PythiaError::InvalidInput);
    }
    let old_inv = crypto::scalar_invert(old_key)?;
    let token = crypto::scalar_mul(new_key, &old_inv);
    if is_all_zero(&token[..]) {
        return Err(PythiaError::CryptoError);
    }
    Ok(token)
}

/// Applies an update token to a deblinded value: `updated = deblinded * Δ`.
pub fn apply_update_token(
    deblinded: &[u8; POINT_LENGTH],
    token: &[u8; SCALAR_LENGTH],
    updated_out: &mut [u8; POINT_LENGTH],
) -> PythiaResult<()> {
    if !crypto::is_valid_nonzero_scalar(token) {
        return Err(PythiaError::InvalidUpdateToken);
    }
    crypto::validate_ristretto_point(deblinded)?;
    crypto::scalar_mult(token, deblinded, updated_out)
}
