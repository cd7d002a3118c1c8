// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use pythia_core::oprf;
use pythia_core::types::{PythiaResult, UpdateToken, SCALAR_LENGTH};

use crate::state::{MasterSecret, TransformationKeyPair};

/// Computes `Δ = w'_t · w_t⁻¹` for one tweak from the old and new master secrets.
///
/// The token is value-independent: it migrates every deblinded value hardened
/// under `tweak`.
pub fn compute_update_token(
    old_master: &MasterSecret,
    new_master: &MasterSecret,
    tweak: &[u8],
) -> PythiaResult<UpdateToken> {
    let old_pair = TransformationKeyPair::derive(old_master, tweak)?;
    let new_pair = TransformationKeyPair::derive(new_master, tweak)?;
    update_token_from_keys(old_pair.private_key(), new_pair.private_key())
}

/// Computes the update token from two transformation private keys directly.
///
/// # Errors
///
/// Returns [`pythia_core::types::PythiaError::InvalidInput`] if either key is
/// zero or non-canonical.
pub fn update_token_from_keys(
    old_private_key: &[u8; SCALAR_LENGTH],
    new_private_key: &[u8; SCALAR_LENGTH],
) -> PythiaResult<UpdateToken> {
    let token = oprf::compute_update_token(old_private_key, new_private_key)?;
    tracing::trace!("computed update token");
    Ok(UpdateToken::from_bytes(*token))
}
