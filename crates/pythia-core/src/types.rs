// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a Ristretto255 scalar (blinding secret, private key, proof scalar) in bytes.
pub const SCALAR_LENGTH: usize = 32;
/// Length of a compressed Ristretto255 group element in bytes.
pub const POINT_LENGTH: usize = 32;
/// Length of a SHA-512 digest in bytes.
pub const HASH_LENGTH: usize = 64;
/// Length of an HMAC-SHA-512 tag in bytes.
pub const MAC_LENGTH: usize = 64;
/// Length of the intermediate seed derived from the master secret.
pub const TRANSFORMATION_SEED_LENGTH: usize = 32;
/// Length of a generated salt in bytes.
pub const SALT_LENGTH: usize = 32;
/// Maximum accepted length of a master secret in bytes.
pub const MAX_MASTER_SECRET_LENGTH: usize = 1024;

/// Length of a blinded value.
pub const BLINDED_VALUE_LENGTH: usize = POINT_LENGTH;
/// Length of a transformed value.
pub const TRANSFORMED_VALUE_LENGTH: usize = POINT_LENGTH;
/// Length of a deblinded value.
pub const DEBLINDED_VALUE_LENGTH: usize = POINT_LENGTH;
/// Length of a transformation public key.
pub const TRANSFORMATION_PUBLIC_KEY_LENGTH: usize = POINT_LENGTH;
/// Length of a blinding secret.
pub const BLINDING_SECRET_LENGTH: usize = SCALAR_LENGTH;
/// Length of an update token.
pub const UPDATE_TOKEN_LENGTH: usize = SCALAR_LENGTH;
/// Length of a serialized proof (`C || U`).
pub const PROOF_LENGTH: usize = 2 * SCALAR_LENGTH;

const _: () = assert!(SCALAR_LENGTH == POINT_LENGTH);
const _: () = assert!(SCALAR_LENGTH == 32);
const _: () = assert!(HASH_LENGTH == 64);
const _: () = assert!(MAC_LENGTH == HASH_LENGTH);
const _: () = assert!(TRANSFORMATION_SEED_LENGTH <= MAC_LENGTH);
const _: () = assert!(PROOF_LENGTH == 64);
const _: () = assert!(SALT_LENGTH == 32);

/// Domain-separation labels for every hash and HMAC invocation.
pub mod labels {
    /// Context prefix for hash-to-group of secrets.
    pub const HASH_TO_GROUP_CONTEXT: &[u8] = b"PYTHIA-RISTRETTO255-v1/HashToGroup";
    /// Info string used when deriving the transformation seed from the master secret.
    pub const TRANSFORMATION_SEED_INFO: &[u8] = b"PYTHIA-RISTRETTO255-v1/TransformationSeed";
    /// Info string used when deriving per-tweak transformation keys.
    pub const TRANSFORMATION_KEY_INFO: &[u8] = b"PYTHIA-RISTRETTO255-v1/TransformationKey";
    /// Info string for deterministic proof nonces.
    pub const PROOF_NONCE_INFO: &[u8] = b"PYTHIA-RISTRETTO255-v1/ProofNonce";
    /// Context prefix for the Fiat-Shamir challenge.
    pub const PROOF_CHALLENGE_CONTEXT: &[u8] = b"PYTHIA-RISTRETTO255-v1/ProofChallenge";
    /// Context prefix for identity key pair derivation.
    pub const IDENTITY_KEY_CONTEXT: &[u8] = b"PYTHIA-RISTRETTO255-v1/IdentityKey";
}

/// Enumerates all error conditions that can arise during Pythia operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PythiaError {
    /// The random source could not supply entropy.
    #[error("randomness unavailable")]
    RandomnessUnavailable,
    /// An input parameter has an invalid value or length.
    #[error("invalid input parameter")]
    InvalidInput,
    /// A point encoding is malformed, non-canonical or the identity.
    #[error("invalid group element encoding")]
    InvalidPoint,
    /// The blinded value is malformed or the group identity.
    #[error("invalid blinded value")]
    InvalidBlindedValue,
    /// The blinding secret is zero or not a canonical scalar.
    #[error("invalid blinding secret")]
    InvalidBlindingSecret,
    /// The update token has the wrong length, is non-canonical or zero.
    #[error("invalid update token")]
    InvalidUpdateToken,
    /// The master secret is empty or too long.
    #[error("invalid master secret")]
    InvalidMasterSecret,
    /// A low-level cryptographic primitive returned an error code.
    #[error("cryptographic operation failed")]
    CryptoError,
}

impl PythiaError {
    /// Converts this error variant into a negative `i32` status code suitable for C FFI.
    pub fn to_c_int(self) -> i32 {
        match self {
            PythiaError::RandomnessUnavailable => -1,
            PythiaError::InvalidInput => -2,
            PythiaError::InvalidPoint => -3,
            PythiaError::InvalidBlindedValue => -4,
            PythiaError::InvalidBlindingSecret => -5,
            PythiaError::InvalidUpdateToken => -6,
            PythiaError::InvalidMasterSecret => -7,
            PythiaError::CryptoError => -8,
        }
    }

    /// Returns `true` for faults that abort the call outright: an unavailable
    /// random source, or a caller that bypassed a required precondition.
    ///
    /// Everything else is an input validation failure. None of the errors are
    /// retryable: the same input reproduces the same fault.
    pub fn is_fatal(self) -> bool {
        matches!(
            self,
            PythiaError::RandomnessUnavailable
                | PythiaError::InvalidBlindedValue
                | PythiaError::InvalidBlindingSecret
                | PythiaError::CryptoError
        )
    }
}

/// Convenience alias for `Result<T, PythiaError>`.
pub type PythiaResult<T> = Result<T, PythiaError>;

/// A heap-allocated byte buffer that is zeroized on drop.
///
/// The `Debug` implementation redacts the contents.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecureBytes(Vec<u8>);

impl SecureBytes {
    /// Creates a buffer by copying the given slice.
    pub fn from_slice(data: &[u8]) -> Self {
        Self(data.to_vec())
    }

    /// Returns an immutable reference to the underlying bytes.
    pub fn data(&self) -> &[u8] {
        &self.0
    }

    /// Returns the number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the buffer contains no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Deref for SecureBytes {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SecureBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for SecureBytes {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl std::fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureBytes([REDACTED; {}])", self.0.len())
    }
}

/// The scalar `r` used to blind a secret. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct BlindingSecret([u8; BLINDING_SECRET_LENGTH]);

impl BlindingSecret {
    /// Wraps raw scalar bytes. Validation happens when the secret is used.
    pub fn from_bytes(bytes: [u8; BLINDING_SECRET_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Copies the secret out of a slice of exactly [`BLINDING_SECRET_LENGTH`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PythiaError::InvalidBlindingSecret`] on a length mismatch.
    pub fn from_slice(bytes: &[u8]) -> PythiaResult<Self> {
        let arr: [u8; BLINDING_SECRET_LENGTH] = bytes
            .try_into()
            .map_err(|_| PythiaError::InvalidBlindingSecret)?;
        Ok(Self(arr))
    }

    /// Returns the scalar encoding.
    pub fn as_bytes(&self) -> &[u8; BLINDING_SECRET_LENGTH] {
        &self.0
    }
}

impl std::fmt::Debug for BlindingSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BlindingSecret([REDACTED])")
    }
}

/// Scalar `Δ = w'_t · w_t⁻¹` migrating deblinded values to a new master secret.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct UpdateToken([u8; UPDATE_TOKEN_LENGTH]);

impl UpdateToken {
    /// Wraps raw scalar bytes. Validation happens when the token is applied.
    pub fn from_bytes(bytes: [u8; UPDATE_TOKEN_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Copies the token out of a slice of exactly [`UPDATE_TOKEN_LENGTH`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PythiaError::InvalidUpdateToken`] on a length mismatch.
    pub fn from_slice(bytes: &[u8]) -> PythiaResult<Self> {
        let arr: [u8; UPDATE_TOKEN_LENGTH] = bytes
            .try_into()
            .map_err(|_| PythiaError::InvalidUpdateToken)?;
        Ok(Self(arr))
    }

    /// Returns the scalar encoding.
    pub fn as_bytes(&self) -> &[u8; UPDATE_TOKEN_LENGTH] {
        &self.0
    }
}

impl std::fmt::Debug for UpdateToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("UpdateToken([REDACTED])")
    }
}

/// A proof that a transformation used the scalar behind a published public key.
///
/// `c` is the Fiat-Shamir challenge and `u` the response `k - c·w_t`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proof {
    pub c: [u8; SCALAR_LENGTH],
    pub u: [u8; SCALAR_LENGTH],
}

/// Compares two byte slices in constant time using libsodium's `sodium_memcmp`.
///
/// Returns `false` immediately if the lengths differ (length itself is not secret).
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    // SAFETY: Both pointers come from valid slices. Length equality is verified before the call.
    unsafe {
        libsodium_sys::sodium_memcmp(
            a.as_ptr() as *const _,
            b.as_ptr() as *const _,
            a.len(),
        ) == 0
    }
}

/// Returns `true` if every byte in `data` is zero, checked in constant time.
pub fn is_all_zero(data: &[u8]) -> bool {
    // SAFETY: Pointer comes from a valid slice.
    unsafe { libsodium_sys::sodium_is_zero(data.as_ptr(), data.len()) == 1 }
}
