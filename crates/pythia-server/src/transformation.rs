// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use pythia_core::types::{PythiaError, PythiaResult, TRANSFORMED_VALUE_LENGTH};
use pythia_core::{oprf, proof, protocol};

use crate::state::{MasterSecret, TransformResult, TransformationKeyPair};

/// Transforms a blinded value under the key for `tweak` and proves it.
///
/// Pure: the same inputs always produce the same result. The identity element
/// and undecodable encodings are rejected before any key material is derived.
///
/// # Errors
///
/// * [`PythiaError::InvalidBlindedValue`] for a malformed or identity blinded value.
/// * [`PythiaError::InvalidMasterSecret`] / [`PythiaError::CryptoError`] if key
///   derivation fails.
pub fn transform(
    blinded_value: &[u8],
    tweak: &[u8],
    master: &MasterSecret,
) -> PythiaResult<TransformResult> {
    let blinded = protocol::read_point(blinded_value, PythiaError::InvalidBlindedValue)
        .map_err(|err| {
            tracing::warn!(
                blinded_len = blinded_value.len(),
                tweak_len = tweak.len(),
                "rejected blinded value"
            );
            err
        })?;

    let key_pair = TransformationKeyPair::derive(master, tweak)?;

    let mut transformed = [0u8; TRANSFORMED_VALUE_LENGTH];
    oprf::evaluate(&blinded, key_pair.private_key(), &mut transformed)?;

    let proof = proof::prove(
        key_pair.private_key(),
        key_pair.public_key(),
        &blinded,
        &transformed,
        tweak,
    )?;

    Ok(TransformResult {
        transformed_value: transformed,
        transformation_public_key: *key_pair.public_key(),
        proof,
    })
}
