// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

//! Chaum-Pedersen discrete-log-equality proof, made non-interactive with
//! Fiat-Shamir.
//!
//! The prover shows that `log_G(W) == log_B(T)` where `W = G·w` is the
//! transformation public key, `B` the blinded element and `T = B·w` the
//! transformed element, without revealing `w`:
//!
//! ```text
//! k  = HMAC-SHA-512(w, PROOF_NONCE_INFO || B || T || tweak) mod ℓ
//! A1 = G·k,  A2 = B·k
//! C  = SHA-512(PROOF_CHALLENGE_CONTEXT || G || W || B || T || A1 || A2 || tweak) mod ℓ
//! U  = k - C·w
//! ```
//!
//! The verifier recomputes `A1 = G·U + W·C`, `A2 = B·U + T·C` and accepts iff
//! the recomputed challenge equals `C`. The nonce is derived from the secret
//! scalar and the statement, so proving consumes no randomness and the same
//! inputs always yield the same proof.

use thiserror::Error;
use zeroize::Zeroizing;

use crate::crypto;
use crate::types::{
    constant_time_eq, is_all_zero, labels, Proof, PythiaError, PythiaResult, MAC_LENGTH,
    POINT_LENGTH, SCALAR_LENGTH,
};

/// Why a proof was rejected.
///
/// Verification collapses all of these into `false`; the classification exists
/// so callers can tell malformed input apart from a proof that simply does not
/// check out.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VerificationFailure {
    #[error("transformed value is not a valid group element")]
    MalformedTransformedValue,
    #[error("blinded value is not a valid group element")]
    MalformedBlindedValue,
    #[error("transformation public key is not a valid group element")]
    MalformedPublicKey,
    #[error("proof scalar has the wrong length or is not canonical")]
    MalformedProof,
    #[error("group arithmetic failed while recomputing commitments")]
    ComputationFault,
    #[error("recomputed challenge does not match the proof")]
    ProofMismatch,
}

impl VerificationFailure {
    /// Returns `true` when the failure comes from undecodable input rather than
    /// from the algebraic check.
    pub fn is_malformed_input(self) -> bool {
        !matches!(
            self,
            VerificationFailure::ComputationFault | VerificationFailure::ProofMismatch
        )
    }
}

fn challenge(
    public_key: &[u8; POINT_LENGTH],
    blinded: &[u8; POINT_LENGTH],
    transformed: &[u8; POINT_LENGTH],
    commitment_base: &[u8; POINT_LENGTH],
    commitment_blinded: &[u8; POINT_LENGTH],
    tweak: &[u8],
) -> Zeroizing<[u8; SCALAR_LENGTH]> {
    let generator = crypto::generator();
    let transcript: [&[u8]; 8] = [
        labels::PROOF_CHALLENGE_CONTEXT,
        &generator,
        public_key,
        blinded,
        transformed,
        commitment_base,
        commitment_blinded,
        tweak,
    ];
    crypto::hash_to_scalar(&transcript)
}

fn proof_nonce(
    private_key: &[u8; SCALAR_LENGTH],
    blinded: &[u8; POINT_LENGTH],
    transformed: &[u8; POINT_LENGTH],
    tweak: &[u8],
) -> PythiaResult<Zeroizing<[u8; SCALAR_LENGTH]>> {
    let mut input = Zeroizing::new(Vec::with_capacity(
        labels::PROOF_NONCE_INFO.len() + 2 * POINT_LENGTH + tweak.len(),
    ));
    input.extend_from_slice(labels::PROOF_NONCE_INFO);
    input.extend_from_slice(blinded);
    input.extend_from_slice(transformed);
    input.extend_from_slice(tweak);

    let mut mac = Zeroizing::new([0u8; MAC_LENGTH]);
    crypto::hmac_sha512(&private_key[..], &input, &mut mac)?;
    let nonce = crypto::scalar_reduce(&mac);
    if is_all_zero(&nonce[..]) {
        return Err(PythiaError::CryptoError);
    }
    Ok(nonce)
}

/// Proves that `transformed = blinded · w` and `public_key = G · w` share `w`.
///
/// # Errors
///
/// Returns [`PythiaError::CryptoError`] if a group operation fails, which only
/// happens for inputs that were not validated beforehand.
pub fn prove(
    private_key: &[u8; SCALAR_LENGTH],
    public_key: &[u8; POINT_LENGTH],
    blinded: &[u8; POINT_LENGTH],
    transformed: &[u8; POINT_LENGTH],
    tweak: &[u8],
) -> PythiaResult<Proof> {
    let nonce = proof_nonce(private_key, blinded, transformed, tweak)?;

    let commitment_base = crypto::scalarmult_base(&nonce)?;
    let mut commitment_blinded = [0u8; POINT_LENGTH];
    crypto::scalar_mult(&nonce, blinded, &mut commitment_blinded)?;

    let c = challenge(
        public_key,
        blinded,
        transformed,
        &commitment_base,
        &commitment_blinded,
        tweak,
    );
    let cw = crypto::scalar_mul(&c, private_key);
    let u = crypto::scalar_sub(&nonce, &cw);

    Ok(Proof { c: *c, u: *u })
}

/// Checks a proof using public material only.
///
/// Every argument arrives as raw bytes so that length and encoding faults are
/// classified here instead of at the caller.
///
/// # Errors
///
/// Returns the [`VerificationFailure`] describing why the proof was rejected.
pub fn verify(
    transformed: &[u8],
    blinded: &[u8],
    tweak: &[u8],
    public_key: &[u8],
    proof_c: &[u8],
    proof_u: &[u8],
) -> Result<(), VerificationFailure> {
    let transformed =
        crypto::decode_point(transformed).map_err(|_| VerificationFailure::MalformedTransformedValue)?;
    let blinded =
        crypto::decode_point(blinded).map_err(|_| VerificationFailure::MalformedBlindedValue)?;
    let public_key =
        crypto::decode_point(public_key).map_err(|_| VerificationFailure::MalformedPublicKey)?;
    let c = decode_proof_scalar(proof_c)?;
    let u = decode_proof_scalar(proof_u)?;

    let fault = |_: PythiaError| VerificationFailure::ComputationFault;

    let mut c_times_key = [0u8; POINT_LENGTH];
    crypto::scalar_mult(&c, &public_key, &mut c_times_key).map_err(fault)?;
    let u_times_base = crypto::scalarmult_base(&u).map_err(fault)?;
    let commitment_base = crypto::point_add(&u_times_base, &c_times_key).map_err(fault)?;

    let mut c_times_transformed = [0u8; POINT_LENGTH];
    crypto::scalar_mult(&c, &transformed, &mut c_times_transformed).map_err(fault)?;
    let mut u_times_blinded = [0u8; POINT_LENGTH];
    crypto::scalar_mult(&u, &blinded, &mut u_times_blinded).map_err(fault)?;
    let commitment_blinded =
        crypto::point_add(&u_times_blinded, &c_times_transformed).map_err(fault)?;

    let expected = challenge(
        &public_key,
        &blinded,
        &transformed,
        &commitment_base,
        &commitment_blinded,
        tweak,
    );

    if constant_time_eq(&expected[..], &c) {
        Ok(())
    } else {
        Err(VerificationFailure::ProofMismatch)
    }
}

fn decode_proof_scalar(bytes: &[u8]) -> Result<[u8; SCALAR_LENGTH], VerificationFailure> {
    let scalar: [u8; SCALAR_LENGTH] = bytes
        .try_into()
        .map_err(|_| VerificationFailure::MalformedProof)?;
    if !crypto::is_canonical_scalar(&scalar) {
        return Err(VerificationFailure::MalformedProof);
    }
    Ok(scalar)
}
