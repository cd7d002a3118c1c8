// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use pythia_core::proof::{self, VerificationFailure};
use pythia_core::types::Proof;

/// Checks the server's proof of correct transformation. Fail-closed: any
/// malformed input or failed check yields `false`.
pub fn verify(
    transformed_value: &[u8],
    blinded_value: &[u8],
    tweak: &[u8],
    transformation_public_key: &[u8],
    proof: &Proof,
) -> bool {
    verify_parts(
        transformed_value,
        blinded_value,
        tweak,
        transformation_public_key,
        &proof.c,
        &proof.u,
    )
}

/// [`verify`] with the proof transported as separate `C` and `U` byte strings.
pub fn verify_parts(
    transformed_value: &[u8],
    blinded_value: &[u8],
    tweak: &[u8],
    transformation_public_key: &[u8],
    proof_c: &[u8],
    proof_u: &[u8],
) -> bool {
    verify_detailed(
        transformed_value,
        blinded_value,
        tweak,
        transformation_public_key,
        proof_c,
        proof_u,
    )
    .is_ok()
}

/// Like [`verify_parts`], returning the reason a proof was rejected.
///
/// Malformed input is logged at `warn`, a proof that does not check out at
/// `debug`.
pub fn verify_detailed(
    transformed_value: &[u8],
    blinded_value: &[u8],
    tweak: &[u8],
    transformation_public_key: &[u8],
    proof_c: &[u8],
    proof_u: &[u8],
) -> Result<(), VerificationFailure> {
    let outcome = proof::verify(
        transformed_value,
        blinded_value,
        tweak,
        transformation_public_key,
        proof_c,
        proof_u,
    );

    if let Err(reason) = outcome {
        if reason.is_malformed_input() {
            tracing::warn!(%reason, tweak_len = tweak.len(), "proof verification rejected malformed input");
        } else {
            tracing::debug!(%reason, tweak_len = tweak.len(), "proof verification failed");
        }
    }
    outcome
}
