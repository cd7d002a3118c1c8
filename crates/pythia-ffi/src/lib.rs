// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia FFI Bindings
// Licensed under the MIT License

//! C-compatible FFI bindings for the Ecliptix Pythia protocol.
//!
//! Client operations are stateless functions over fixed-length byte buffers.
//! The server is exposed through an opaque handle that owns the master secret.
//!
//! Functions return `0` on success or a negative error code on failure, except
//! [`pythia_verify`] which returns `1` for a valid proof and `0` otherwise.
//! Callers must invoke [`pythia_init`] once before any other function.

pub mod client_ffi;
pub mod server_ffi;

pub use client_ffi::*;
pub use server_ffi::*;

use pythia_core::types::PythiaResult;

pub(crate) fn result_to_int(r: PythiaResult<()>) -> i32 {
    match r {
        Ok(()) => 0,
        Err(e) => e.to_c_int(),
    }
}

/// Reads a caller buffer. A null pointer is accepted only for zero length.
pub(crate) unsafe fn input_slice<'a>(data: *const u8, length: usize) -> Option<&'a [u8]> {
    if length == 0 {
        return Some(&[]);
    }
    if data.is_null() {
        return None;
    }
    Some(std::slice::from_raw_parts(data, length))
}

#[no_mangle]
pub extern "C" fn pythia_init() -> i32 {
    result_to_int(pythia_core::crypto::init())
}
