// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use pythia_core::crypto;
use pythia_core::types::{
    Proof, PythiaError, PythiaResult, SecureBytes, MAX_MASTER_SECRET_LENGTH, SCALAR_LENGTH,
    TRANSFORMATION_PUBLIC_KEY_LENGTH, TRANSFORMED_VALUE_LENGTH,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Server-held secret from which every per-tweak transformation key is derived.
#[derive(Clone, Debug)]
pub struct MasterSecret(SecureBytes);

impl MasterSecret {
    /// # Errors
    ///
    /// Returns [`PythiaError::InvalidMasterSecret`] if `bytes` is empty or
    /// longer than [`MAX_MASTER_SECRET_LENGTH`].
    pub fn new(bytes: &[u8]) -> PythiaResult<Self> {
        if bytes.is_empty() || bytes.len() > MAX_MASTER_SECRET_LENGTH {
            return Err(PythiaError::InvalidMasterSecret);
        }
        Ok(Self(SecureBytes::from_slice(bytes)))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.data()
    }
}

/// Per-tweak pair `(w_t, W_t = G·w_t)`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct TransformationKeyPair {
    private_key: [u8; SCALAR_LENGTH],
    public_key: [u8; TRANSFORMATION_PUBLIC_KEY_LENGTH],
}

impl TransformationKeyPair {
    pub fn derive(master: &MasterSecret, tweak: &[u8]) -> PythiaResult<Self> {
        let private_key = crypto::derive_transformation_key(master.as_bytes(), tweak)?;
        let public_key = crypto::scalarmult_base(&private_key)?;
        Ok(Self {
            private_key: *private_key,
            public_key,
        })
    }

    pub fn private_key(&self) -> &[u8; SCALAR_LENGTH] {
        &self.private_key
    }

    pub fn public_key(&self) -> &[u8; TRANSFORMATION_PUBLIC_KEY_LENGTH] {
        &self.public_key
    }
}

impl std::fmt::Debug for TransformationKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformationKeyPair")
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key.len())
            .finish()
    }
}

/// Everything a transform returns to the client. All fields are public material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformResult {
    pub transformed_value: [u8; TRANSFORMED_VALUE_LENGTH],
    pub transformation_public_key: [u8; TRANSFORMATION_PUBLIC_KEY_LENGTH],
    pub proof: Proof,
}

/// Hardening server bound to one master secret.
#[derive(Clone, Debug)]
pub struct PythiaServer {
    master: MasterSecret,
}

impl PythiaServer {
    pub fn new(master: MasterSecret) -> Self {
        Self { master }
    }

    /// Convenience constructor validating raw master-secret bytes.
    pub fn from_bytes(master: &[u8]) -> PythiaResult<Self> {
        Ok(Self::new(MasterSecret::new(master)?))
    }

    /// Publishes `W_t` for `tweak` without performing a transformation.
    pub fn public_key(&self, tweak: &[u8]) -> PythiaResult<[u8; TRANSFORMATION_PUBLIC_KEY_LENGTH]> {
        let pair = TransformationKeyPair::derive(&self.master, tweak)?;
        Ok(*pair.public_key())
    }

    pub fn transform(&self, blinded_value: &[u8], tweak: &[u8]) -> PythiaResult<TransformResult> {
        crate::transformation::transform(blinded_value, tweak, &self.master)
    }

    /// Update token migrating values hardened under `self` to `next`.
    pub fn update_token_to(
        &self,
        next: &PythiaServer,
        tweak: &[u8],
    ) -> PythiaResult<pythia_core::types::UpdateToken> {
        crate::rotation::compute_update_token(&self.master, &next.master, tweak)
    }
}
