// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use pythia_core::types::{PythiaError, PythiaResult, UpdateToken, DEBLINDED_VALUE_LENGTH};
use pythia_core::{oprf, protocol};

/// Migrates a deblinded value to the rotated key: `updated = deblinded · Δ`.
///
/// # Errors
///
/// * [`PythiaError::InvalidUpdateToken`] if the token is zero or non-canonical.
/// * [`PythiaError::InvalidPoint`] if `deblinded_value` does not decode.
pub fn update_deblinded(
    deblinded_value: &[u8],
    token: &UpdateToken,
) -> PythiaResult<[u8; DEBLINDED_VALUE_LENGTH]> {
    let deblinded = protocol::read_point(deblinded_value, PythiaError::InvalidPoint)?;
    let mut updated = [0u8; DEBLINDED_VALUE_LENGTH];
    oprf::apply_update_token(&deblinded, token.as_bytes(), &mut updated)?;
    tracing::trace!("applied update token to deblinded value");
    Ok(updated)
}

/// [`update_deblinded`] over a raw token encoding.
pub fn update_deblinded_bytes(
    deblinded_value: &[u8],
    token: &[u8],
) -> PythiaResult<[u8; DEBLINDED_VALUE_LENGTH]> {
    let token = UpdateToken::from_slice(token)?;
    update_deblinded(deblinded_value, &token)
}
