// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use std::ptr;

use pythia_core::protocol;
use pythia_core::types::{
    PythiaError, PROOF_LENGTH, TRANSFORMATION_PUBLIC_KEY_LENGTH, TRANSFORMED_VALUE_LENGTH,
    UPDATE_TOKEN_LENGTH,
};
use pythia_server::PythiaServer;

use crate::{input_slice, result_to_int};

struct ServerHandle {
    server: PythiaServer,
}

#[no_mangle]
pub unsafe extern "C" fn pythia_server_create(
    master_secret: *const u8,
    master_secret_length: usize,
    handle: *mut *mut std::ffi::c_void,
) -> i32 {
    if master_secret.is_null() || handle.is_null() {
        return PythiaError::InvalidInput.to_c_int();
    }
    let master = std::slice::from_raw_parts(master_secret, master_secret_length);
    let server = match PythiaServer::from_bytes(master) {
        Ok(s) => s,
        Err(e) => return e.to_c_int(),
    };
    let boxed = Box::new(ServerHandle { server });
    *handle = Box::into_raw(boxed) as *mut std::ffi::c_void;
    0
}

#[no_mangle]
pub unsafe extern "C" fn pythia_server_destroy(handle: *mut std::ffi::c_void) {
    if !handle.is_null() {
        drop(Box::from_raw(handle as *mut ServerHandle));
    }
}

#[no_mangle]
pub unsafe extern "C" fn pythia_server_get_public_key(
    handle: *const std::ffi::c_void,
    tweak: *const u8,
    tweak_length: usize,
    public_key_out: *mut u8,
    public_key_length: usize,
) -> i32 {
    if handle.is_null()
        || public_key_out.is_null()
        || public_key_length < TRANSFORMATION_PUBLIC_KEY_LENGTH
    {
        return PythiaError::InvalidInput.to_c_int();
    }
    let Some(tweak) = input_slice(tweak, tweak_length) else {
        return PythiaError::InvalidInput.to_c_int();
    };
    let ServerHandle { server } = &*(handle as *const ServerHandle);

    let result = server.public_key(tweak).map(|key| {
        ptr::copy_nonoverlapping(key.as_ptr(), public_key_out, TRANSFORMATION_PUBLIC_KEY_LENGTH);
    });
    result_to_int(result)
}

/// Writes the transformed value, the tweak's public key and the proof as
/// `C || U`.
#[no_mangle]
pub unsafe extern "C" fn pythia_transform(
    handle: *const std::ffi::c_void,
    blinded: *const u8,
    blinded_length: usize,
    tweak: *const u8,
    tweak_length: usize,
    transformed_out: *mut u8,
    transformed_length: usize,
    public_key_out: *mut u8,
    public_key_length: usize,
    proof_out: *mut u8,
    proof_length: usize,
) -> i32 {
    if handle.is_null()
        || transformed_out.is_null()
        || transformed_length < TRANSFORMED_VALUE_LENGTH
        || public_key_out.is_null()
        || public_key_length < TRANSFORMATION_PUBLIC_KEY_LENGTH
        || proof_out.is_null()
        || proof_length < PROOF_LENGTH
    {
        return PythiaError::InvalidInput.to_c_int();
    }
    let (Some(blinded), Some(tweak)) = (
        input_slice(blinded, blinded_length),
        input_slice(tweak, tweak_length),
    ) else {
        return PythiaError::InvalidInput.to_c_int();
    };
    let ServerHandle { server } = &*(handle as *const ServerHandle);

    match server.transform(blinded, tweak) {
        Ok(result) => {
            ptr::copy_nonoverlapping(
                result.transformed_value.as_ptr(),
                transformed_out,
                TRANSFORMED_VALUE_LENGTH,
            );
            ptr::copy_nonoverlapping(
                result.transformation_public_key.as_ptr(),
                public_key_out,
                TRANSFORMATION_PUBLIC_KEY_LENGTH,
            );
            let proof_buf = std::slice::from_raw_parts_mut(proof_out, proof_length);
            result_to_int(protocol::write_proof(&result.proof, proof_buf))
        }
        Err(e) => e.to_c_int(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn pythia_get_update_token(
    old_handle: *const std::ffi::c_void,
    new_handle: *const std::ffi::c_void,
    tweak: *const u8,
    tweak_length: usize,
    token_out: *mut u8,
    token_length: usize,
) -> i32 {
    if old_handle.is_null()
        || new_handle.is_null()
        || token_out.is_null()
        || token_length < UPDATE_TOKEN_LENGTH
    {
        return PythiaError::InvalidInput.to_c_int();
    }
    let Some(tweak) = input_slice(tweak, tweak_length) else {
        return PythiaError::InvalidInput.to_c_int();
    };
    let ServerHandle { server: old } = &*(old_handle as *const ServerHandle);
    let ServerHandle { server: new } = &*(new_handle as *const ServerHandle);

    let result = old.update_token_to(new, tweak).map(|token| {
        ptr::copy_nonoverlapping(token.as_bytes().as_ptr(), token_out, UPDATE_TOKEN_LENGTH);
    });
    result_to_int(result)
}
