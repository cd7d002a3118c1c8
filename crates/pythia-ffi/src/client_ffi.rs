// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use std::ptr;

use pythia_client::{
    blind, deblind, generate_key_pair, generate_salt, update_deblinded_bytes, verify_parts,
};
use pythia_core::types::{
    BlindingSecret, PythiaError, BLINDED_VALUE_LENGTH, BLINDING_SECRET_LENGTH,
    DEBLINDED_VALUE_LENGTH, POINT_LENGTH, SALT_LENGTH, SCALAR_LENGTH,
};

use crate::input_slice;

#[no_mangle]
pub unsafe extern "C" fn pythia_blind(
    secret: *const u8,
    secret_length: usize,
    blinded_out: *mut u8,
    blinded_length: usize,
    blinding_secret_out: *mut u8,
    blinding_secret_length: usize,
) -> i32 {
    if blinded_out.is_null()
        || blinded_length < BLINDED_VALUE_LENGTH
        || blinding_secret_out.is_null()
        || blinding_secret_length < BLINDING_SECRET_LENGTH
    {
        return PythiaError::InvalidInput.to_c_int();
    }
    let Some(secret) = input_slice(secret, secret_length) else {
        return PythiaError::InvalidInput.to_c_int();
    };

    match blind(secret) {
        Ok(result) => {
            ptr::copy_nonoverlapping(result.blinded_value.as_ptr(), blinded_out, BLINDED_VALUE_LENGTH);
            ptr::copy_nonoverlapping(
                result.blinding_secret.as_bytes().as_ptr(),
                blinding_secret_out,
                BLINDING_SECRET_LENGTH,
            );
            0
        }
        Err(e) => e.to_c_int(),
    }
}

/// Returns `1` if the proof verifies and `0` for any failure, including null
/// or wrongly sized buffers.
#[no_mangle]
pub unsafe extern "C" fn pythia_verify(
    transformed: *const u8,
    transformed_length: usize,
    blinded: *const u8,
    blinded_length: usize,
    tweak: *const u8,
    tweak_length: usize,
    public_key: *const u8,
    public_key_length: usize,
    proof_c: *const u8,
    proof_c_length: usize,
    proof_u: *const u8,
    proof_u_length: usize,
) -> i32 {
    let (Some(transformed), Some(blinded), Some(tweak), Some(public_key), Some(c), Some(u)) = (
        input_slice(transformed, transformed_length),
        input_slice(blinded, blinded_length),
        input_slice(tweak, tweak_length),
        input_slice(public_key, public_key_length),
        input_slice(proof_c, proof_c_length),
        input_slice(proof_u, proof_u_length),
    ) else {
        return 0;
    };
    i32::from(verify_parts(transformed, blinded, tweak, public_key, c, u))
}

#[no_mangle]
pub unsafe extern "C" fn pythia_deblind(
    transformed: *const u8,
    transformed_length: usize,
    blinding_secret: *const u8,
    blinding_secret_length: usize,
    deblinded_out: *mut u8,
    deblinded_length: usize,
) -> i32 {
    if transformed.is_null()
        || blinding_secret.is_null()
        || deblinded_out.is_null()
        || deblinded_length < DEBLINDED_VALUE_LENGTH
    {
        return PythiaError::InvalidInput.to_c_int();
    }
    let transformed = std::slice::from_raw_parts(transformed, transformed_length);
    let secret = std::slice::from_raw_parts(blinding_secret, blinding_secret_length);
    let secret = match BlindingSecret::from_slice(secret) {
        Ok(s) => s,
        Err(e) => return e.to_c_int(),
    };

    match deblind(transformed, &secret) {
        Ok(value) => {
            ptr::copy_nonoverlapping(value.as_ptr(), deblinded_out, DEBLINDED_VALUE_LENGTH);
            0
        }
        Err(e) => e.to_c_int(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn pythia_update_deblinded(
    deblinded: *const u8,
    deblinded_length: usize,
    update_token: *const u8,
    update_token_length: usize,
    updated_out: *mut u8,
    updated_length: usize,
) -> i32 {
    if deblinded.is_null()
        || update_token.is_null()
        || updated_out.is_null()
        || updated_length < DEBLINDED_VALUE_LENGTH
    {
        return PythiaError::InvalidInput.to_c_int();
    }
    let deblinded = std::slice::from_raw_parts(deblinded, deblinded_length);
    let token = std::slice::from_raw_parts(update_token, update_token_length);

    match update_deblinded_bytes(deblinded, token) {
        Ok(value) => {
            ptr::copy_nonoverlapping(value.as_ptr(), updated_out, DEBLINDED_VALUE_LENGTH);
            0
        }
        Err(e) => e.to_c_int(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn pythia_generate_salt(salt_out: *mut u8, salt_length: usize) -> i32 {
    if salt_out.is_null() || salt_length < SALT_LENGTH {
        return PythiaError::InvalidInput.to_c_int();
    }
    match generate_salt() {
        Ok(salt) => {
            ptr::copy_nonoverlapping(salt.as_ptr(), salt_out, SALT_LENGTH);
            0
        }
        Err(e) => e.to_c_int(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn pythia_generate_key_pair(
    seed: *const u8,
    seed_length: usize,
    private_key_out: *mut u8,
    private_key_length: usize,
    public_key_out: *mut u8,
    public_key_length: usize,
) -> i32 {
    if seed.is_null()
        || seed_length == 0
        || private_key_out.is_null()
        || private_key_length < SCALAR_LENGTH
        || public_key_out.is_null()
        || public_key_length < POINT_LENGTH
    {
        return PythiaError::InvalidInput.to_c_int();
    }
    let seed = std::slice::from_raw_parts(seed, seed_length);

    match generate_key_pair(seed) {
        Ok(pair) => {
            ptr::copy_nonoverlapping(pair.private_key.as_ptr(), private_key_out, SCALAR_LENGTH);
            ptr::copy_nonoverlapping(pair.public_key.as_ptr(), public_key_out, POINT_LENGTH);
            0
        }
        Err(e) => e.to_c_int(),
    }
}
