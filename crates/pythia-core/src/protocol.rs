// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use crate::crypto;
use crate::types::{Proof, PythiaError, PythiaResult, POINT_LENGTH, PROOF_LENGTH, SCALAR_LENGTH};

const PROOF_C_OFFSET: usize = 0;
const PROOF_U_OFFSET: usize = SCALAR_LENGTH;

pub struct ProofRef<'a> {
    pub c: &'a [u8],
    pub u: &'a [u8],
}

pub fn parse_proof(data: &[u8]) -> PythiaResult<ProofRef<'_>> {
    if data.len() != PROOF_LENGTH {
        return Err(PythiaError::InvalidInput);
    }
    Ok(ProofRef {
        c: &data[PROOF_C_OFFSET..PROOF_U_OFFSET],
        u: &data[PROOF_U_OFFSET..],
    })
}

pub fn write_proof(proof: &Proof, out: &mut [u8]) -> PythiaResult<()> {
    if out.len() < PROOF_LENGTH {
        return Err(PythiaError::InvalidInput);
    }
    out[PROOF_C_OFFSET..PROOF_U_OFFSET].copy_from_slice(&proof.c);
    out[PROOF_U_OFFSET..PROOF_LENGTH].copy_from_slice(&proof.u);
    Ok(())
}

impl Proof {
    /// Serializes the proof as `C || U`.
    pub fn to_bytes(&self) -> [u8; PROOF_LENGTH] {
        let mut out = [0u8; PROOF_LENGTH];
        out[PROOF_C_OFFSET..PROOF_U_OFFSET].copy_from_slice(&self.c);
        out[PROOF_U_OFFSET..].copy_from_slice(&self.u);
        out
    }

    /// Parses `C || U`, rejecting non-canonical scalars.
    pub fn from_bytes(data: &[u8]) -> PythiaResult<Self> {
        let view = parse_proof(data)?;
        Self::from_parts(view.c, view.u)
    }

    /// Builds a proof from separately transported `C` and `U` values.
    pub fn from_parts(c: &[u8], u: &[u8]) -> PythiaResult<Self> {
        let c: [u8; SCALAR_LENGTH] = c.try_into().map_err(|_| PythiaError::InvalidInput)?;
        let u: [u8; SCALAR_LENGTH] = u.try_into().map_err(|_| PythiaError::InvalidInput)?;
        if !crypto::is_canonical_scalar(&c) || !crypto::is_canonical_scalar(&u) {
            return Err(PythiaError::InvalidInput);
        }
        Ok(Self { c, u })
    }
}

/// Decodes a fixed-length point, mapping any fault to `err`.
pub fn read_point(data: &[u8], err: PythiaError) -> PythiaResult<[u8; POINT_LENGTH]> {
    crypto::decode_point(data).map_err(|_| err)
}
