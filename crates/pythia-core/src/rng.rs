// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

//! Process-wide default random source.
//!
//! Every operation that consumes randomness takes an explicit
//! `RngCore + CryptoRng` handle. [`SodiumRng`] is the default wiring: a
//! zero-sized handle over libsodium's `randombytes_buf`, which is safe to call
//! from any number of threads without external locking. Tests pass a seeded
//! generator instead.

use rand_core::{CryptoRng, Error, RngCore};

use crate::crypto;

/// Handle to libsodium's system random source.
#[derive(Clone, Copy, Debug, Default)]
pub struct SodiumRng;

impl SodiumRng {
    /// Returns the default handle. libsodium is initialized on first draw.
    pub fn new() -> Self {
        Self
    }
}

impl RngCore for SodiumRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.try_fill_bytes(dest) {
            panic!("system random source unavailable: {e}");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        crypto::init().map_err(Error::new)?;
        if dest.is_empty() {
            return Ok(());
        }
        // SAFETY: dest is a valid mutable slice; length matches dest.len().
        unsafe {
            libsodium_sys::randombytes_buf(dest.as_mut_ptr() as *mut _, dest.len());
        }
        Ok(())
    }
}

impl CryptoRng for SodiumRng {}
