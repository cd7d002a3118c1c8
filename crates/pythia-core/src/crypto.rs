// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

use std::sync::OnceLock;

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::types::{
    is_all_zero, labels, PythiaError, PythiaResult, HASH_LENGTH, MAC_LENGTH, POINT_LENGTH,
    SCALAR_LENGTH, TRANSFORMATION_SEED_LENGTH,
};

/// Ristretto255 group order ℓ = 2^252 + 27742317777372353535851937790883648493, little-endian.
const GROUP_ORDER: [u8; SCALAR_LENGTH] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// Upper bound on try-and-increment rounds when deriving a non-zero scalar.
const MAX_DERIVATION_ATTEMPTS: u16 = 255;

static SODIUM_INIT: OnceLock<i32> = OnceLock::new();

/// Initializes libsodium exactly once per process.
///
/// # Errors
///
/// Returns [`PythiaError::RandomnessUnavailable`] if libsodium fails to
/// initialize; its random source is unusable in that case.
pub fn init() -> PythiaResult<()> {
    // SAFETY: sodium_init is thread-safe and idempotent.
    let rc = *SODIUM_INIT.get_or_init(|| unsafe { libsodium_sys::sodium_init() });
    if rc < 0 {
        tracing::error!(rc, "libsodium initialization failed");
        return Err(PythiaError::RandomnessUnavailable);
    }
    Ok(())
}

/// Fills `buf` from `rng`.
///
/// # Errors
///
/// Returns [`PythiaError::InvalidInput`] if `buf` is empty.
/// Returns [`PythiaError::RandomnessUnavailable`] if the generator reports a failure.
pub fn random_bytes<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    buf: &mut [u8],
) -> PythiaResult<()> {
    if buf.is_empty() {
        return Err(PythiaError::InvalidInput);
    }
    rng.try_fill_bytes(buf).map_err(|e| {
        tracing::error!(error = %e, "random source failed to supply entropy");
        PythiaError::RandomnessUnavailable
    })
}

/// Draws a uniformly random, non-zero Ristretto255 scalar from `rng`.
///
/// 64 random bytes are reduced modulo ℓ so the bias is negligible. Loops until
/// a non-zero scalar is obtained (overwhelmingly likely on the first try).
///
/// # Errors
///
/// Returns [`PythiaError::RandomnessUnavailable`] if the generator fails.
pub fn random_nonzero_scalar<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
) -> PythiaResult<Zeroizing<[u8; SCALAR_LENGTH]>> {
    let mut wide = Zeroizing::new([0u8; HASH_LENGTH]);
    loop {
        random_bytes(rng, &mut wide[..])?;
        let scalar = scalar_reduce(&wide);
        if !is_all_zero(&scalar[..]) {
            return Ok(scalar);
        }
    }
}

/// Reduces a 64-byte value modulo the group order.
pub fn scalar_reduce(wide: &[u8; HASH_LENGTH]) -> Zeroizing<[u8; SCALAR_LENGTH]> {
    let mut out = Zeroizing::new([0u8; SCALAR_LENGTH]);
    // SAFETY: wide is 64 bytes, out is 32 bytes, as required by libsodium.
    unsafe {
        libsodium_sys::crypto_core_ristretto255_scalar_reduce(out.as_mut_ptr(), wide.as_ptr());
    }
    out
}

/// Returns `true` if `scalar` is the canonical encoding of a value below ℓ.
///
/// Runs in time independent of the scalar value.
pub fn is_canonical_scalar(scalar: &[u8; SCALAR_LENGTH]) -> bool {
    let mut borrow: u8 = 0;
    let mut equal: u8 = 1;
    for i in (0..SCALAR_LENGTH).rev() {
        let s = scalar[i] as i32;
        let l = GROUP_ORDER[i] as i32;
        borrow |= (((s - l) >> 8) as u8) & equal;
        equal &= ((((s ^ l) - 1) >> 8) & 1) as u8;
    }
    borrow != 0
}

/// Returns `true` if `scalar` is canonical and non-zero.
pub fn is_valid_nonzero_scalar(scalar: &[u8; SCALAR_LENGTH]) -> bool {
    is_canonical_scalar(scalar) & !is_all_zero(scalar)
}

/// Computes `a * b mod ℓ`.
pub fn scalar_mul(
    a: &[u8; SCALAR_LENGTH],
    b: &[u8; SCALAR_LENGTH],
) -> Zeroizing<[u8; SCALAR_LENGTH]> {
    let mut out = Zeroizing::new([0u8; SCALAR_LENGTH]);
    // SAFETY: All arrays are 32 bytes.
    unsafe {
        libsodium_sys::crypto_core_ristretto255_scalar_mul(out.as_mut_ptr(), a.as_ptr(), b.as_ptr());
    }
    out
}

/// Computes `a - b mod ℓ`.
pub fn scalar_sub(
    a: &[u8; SCALAR_LENGTH],
    b: &[u8; SCALAR_LENGTH],
) -> Zeroizing<[u8; SCALAR_LENGTH]> {
    let mut out = Zeroizing::new([0u8; SCALAR_LENGTH]);
    // SAFETY: All arrays are 32 bytes.
    unsafe {
        libsodium_sys::crypto_core_ristretto255_scalar_sub(out.as_mut_ptr(), a.as_ptr(), b.as_ptr());
    }
    out
}

/// Computes the modular inverse of a Ristretto255 scalar.
///
/// # Errors
///
/// Returns [`PythiaError::CryptoError`] if the scalar is zero or the inversion fails.
pub fn scalar_invert(scalar: &[u8; SCALAR_LENGTH]) -> PythiaResult<Zeroizing<[u8; SCALAR_LENGTH]>> {
    let mut result = Zeroizing::new([0u8; SCALAR_LENGTH]);
    // SAFETY: Both arrays are 32 bytes. Return code is checked.
    unsafe {
        if libsodium_sys::crypto_core_ristretto255_scalar_invert(
            result.as_mut_ptr(),
            scalar.as_ptr(),
        ) != 0
        {
            return Err(PythiaError::CryptoError);
        }
    }
    Ok(result)
}

/// Performs Ristretto255 scalar multiplication: `result = scalar * point`.
///
/// # Errors
///
/// Returns [`PythiaError::CryptoError`] if the point is not canonical or the
/// product is the identity element.
pub fn scalar_mult(
    scalar_bytes: &[u8; SCALAR_LENGTH],
    point_bytes: &[u8; POINT_LENGTH],
    result: &mut [u8; POINT_LENGTH],
) -> PythiaResult<()> {
    // SAFETY: All arrays are 32 bytes as required. Return code is checked.
    unsafe {
        if libsodium_sys::crypto_scalarmult_ristretto255(
            result.as_mut_ptr(),
            scalar_bytes.as_ptr(),
            point_bytes.as_ptr(),
        ) != 0
        {
            return Err(PythiaError::CryptoError);
        }
    }
    Ok(())
}

/// Computes the Ristretto255 base-point multiplication: `result = scalar * G`.
///
/// # Errors
///
/// Returns [`PythiaError::CryptoError`] if the scalar is zero modulo ℓ.
pub fn scalarmult_base(scalar: &[u8; SCALAR_LENGTH]) -> PythiaResult<[u8; POINT_LENGTH]> {
    let mut result = [0u8; POINT_LENGTH];
    // SAFETY: All arrays are 32 bytes as required. Return code is checked.
    unsafe {
        if libsodium_sys::crypto_scalarmult_ristretto255_base(result.as_mut_ptr(), scalar.as_ptr())
            != 0
        {
            return Err(PythiaError::CryptoError);
        }
    }
    Ok(result)
}

/// Adds two Ristretto255 group elements.
///
/// # Errors
///
/// Returns [`PythiaError::InvalidPoint`] if either encoding is invalid.
pub fn point_add(
    p: &[u8; POINT_LENGTH],
    q: &[u8; POINT_LENGTH],
) -> PythiaResult<[u8; POINT_LENGTH]> {
    let mut result = [0u8; POINT_LENGTH];
    // SAFETY: All arrays are 32 bytes. Return code is checked.
    unsafe {
        if libsodium_sys::crypto_core_ristretto255_add(result.as_mut_ptr(), p.as_ptr(), q.as_ptr())
            != 0
        {
            return Err(PythiaError::InvalidPoint);
        }
    }
    Ok(result)
}

/// Returns the encoding of the Ristretto255 generator `G`.
pub fn generator() -> [u8; POINT_LENGTH] {
    let mut one = [0u8; SCALAR_LENGTH];
    one[0] = 1;
    let mut result = [0u8; POINT_LENGTH];
    // SAFETY: Both arrays are 32 bytes; a scalar of one never yields the identity.
    unsafe {
        libsodium_sys::crypto_scalarmult_ristretto255_base(result.as_mut_ptr(), one.as_ptr());
    }
    result
}

/// Validates that `point` is a canonical, non-identity Ristretto255 group element.
///
/// # Errors
///
/// Returns [`PythiaError::InvalidPoint`] if `point` has the wrong length,
/// is the identity (all zeros), or is not a valid Ristretto255 encoding.
pub fn validate_ristretto_point(point: &[u8]) -> PythiaResult<()> {
    if point.len() != POINT_LENGTH {
        return Err(PythiaError::InvalidPoint);
    }
    if is_all_zero(point) {
        return Err(PythiaError::InvalidPoint);
    }
    // SAFETY: Pointer comes from a valid slice of POINT_LENGTH bytes.
    unsafe {
        if libsodium_sys::crypto_core_ristretto255_is_valid_point(point.as_ptr()) != 1 {
            return Err(PythiaError::InvalidPoint);
        }
    }
    Ok(())
}

/// Copies `point` into a fixed array after validating it.
///
/// # Errors
///
/// Same as [`validate_ristretto_point`].
pub fn decode_point(point: &[u8]) -> PythiaResult<[u8; POINT_LENGTH]> {
    validate_ristretto_point(point)?;
    let mut out = [0u8; POINT_LENGTH];
    out.copy_from_slice(point);
    Ok(out)
}

/// Maps a 64-byte uniform string to a Ristretto255 element (Elligator).
///
/// # Errors
///
/// Returns [`PythiaError::CryptoError`] if the mapping fails.
pub fn map_to_group(hash: &[u8; HASH_LENGTH]) -> PythiaResult<[u8; POINT_LENGTH]> {
    let mut point = [0u8; POINT_LENGTH];
    // SAFETY: hash is 64 bytes, point is 32 bytes. Return code is checked.
    unsafe {
        if libsodium_sys::crypto_core_ristretto255_from_hash(point.as_mut_ptr(), hash.as_ptr()) != 0
        {
            return Err(PythiaError::CryptoError);
        }
    }
    Ok(point)
}

/// Hashes the concatenation of `parts` to a scalar via SHA-512 and modular reduction.
pub fn hash_to_scalar(parts: &[&[u8]]) -> Zeroizing<[u8; SCALAR_LENGTH]> {
    let mut hash = Zeroizing::new([0u8; HASH_LENGTH]);
    sha512_multi(parts, &mut hash);
    scalar_reduce(&hash)
}

/// Computes HMAC-SHA-512 over `message` using the given `key`.
///
/// # Errors
///
/// Returns [`PythiaError::InvalidInput`] if `key` is empty.
/// Returns [`PythiaError::CryptoError`] if the HMAC init, update, or final step fails.
pub fn hmac_sha512(key: &[u8], message: &[u8], mac_out: &mut [u8; MAC_LENGTH]) -> PythiaResult<()> {
    if key.is_empty() {
        return Err(PythiaError::InvalidInput);
    }
    // SAFETY: State is initialized by _init before use. Return codes are checked.
    // The state is zeroized on every path to scrub the ipad/opad key material.
    unsafe {
        let mut state = std::mem::MaybeUninit::<libsodium_sys::crypto_auth_hmacsha512_state>::uninit();
        let state_ptr = state.as_mut_ptr();
        let ok = libsodium_sys::crypto_auth_hmacsha512_init(state_ptr, key.as_ptr(), key.len())
            == 0
            && libsodium_sys::crypto_auth_hmacsha512_update(
                state_ptr,
                message.as_ptr(),
                message.len() as u64,
            ) == 0
            && libsodium_sys::crypto_auth_hmacsha512_final(state_ptr, mac_out.as_mut_ptr()) == 0;
        libsodium_sys::sodium_memzero(
            state_ptr as *mut _,
            std::mem::size_of::<libsodium_sys::crypto_auth_hmacsha512_state>(),
        );
        if !ok {
            return Err(PythiaError::CryptoError);
        }
    }
    Ok(())
}

/// Derives the per-tweak transformation scalar `w_t` from a master secret.
///
/// First a transformation seed is extracted as
/// `HMAC-SHA-512(master_secret, TRANSFORMATION_SEED_INFO)[..32]`, then
/// `HMAC-SHA-512(seed, TRANSFORMATION_KEY_INFO || tweak || counter)` is reduced
/// modulo ℓ, incrementing the counter until the scalar is non-zero.
///
/// # Errors
///
/// Returns [`PythiaError::InvalidMasterSecret`] if `master_secret` is empty.
/// Returns [`PythiaError::CryptoError`] if no non-zero scalar is found or the
/// underlying HMAC operation fails.
pub fn derive_transformation_key(
    master_secret: &[u8],
    tweak: &[u8],
) -> PythiaResult<Zeroizing<[u8; SCALAR_LENGTH]>> {
    if master_secret.is_empty() {
        return Err(PythiaError::InvalidMasterSecret);
    }

    let mut seed_full = Zeroizing::new([0u8; MAC_LENGTH]);
    hmac_sha512(master_secret, labels::TRANSFORMATION_SEED_INFO, &mut seed_full)?;
    let mut seed = Zeroizing::new([0u8; TRANSFORMATION_SEED_LENGTH]);
    seed.copy_from_slice(&seed_full[..TRANSFORMATION_SEED_LENGTH]);

    let mut input = Zeroizing::new(Vec::with_capacity(
        labels::TRANSFORMATION_KEY_INFO.len() + tweak.len() + 1,
    ));
    input.extend_from_slice(labels::TRANSFORMATION_KEY_INFO);
    input.extend_from_slice(tweak);
    input.push(0u8);
    let counter_offset = input.len() - 1;

    let mut mac = Zeroizing::new([0u8; MAC_LENGTH]);
    for counter in 0..MAX_DERIVATION_ATTEMPTS {
        input[counter_offset] = counter as u8;
        hmac_sha512(&seed[..], &input, &mut mac)?;
        let key = scalar_reduce(&mac);
        if !is_all_zero(&key[..]) {
            return Ok(key);
        }
    }

    Err(PythiaError::CryptoError)
}

/// Derives a Ristretto255 key pair deterministically from a seed.
///
/// Hashes `IDENTITY_KEY_CONTEXT || seed` with SHA-512, reduces modulo the group
/// order to obtain the private scalar, and computes the corresponding public point.
///
/// # Errors
///
/// Returns [`PythiaError::InvalidInput`] if `seed` is empty or the derived scalar is zero.
pub fn derive_key_pair(
    seed: &[u8],
    private_key: &mut [u8; SCALAR_LENGTH],
    public_key: &mut [u8; POINT_LENGTH],
) -> PythiaResult<()> {
    if seed.is_empty() {
        return Err(PythiaError::InvalidInput);
    }

    let scalar = hash_to_scalar(&[labels::IDENTITY_KEY_CONTEXT, seed]);
    if is_all_zero(&scalar[..]) {
        return Err(PythiaError::InvalidInput);
    }

    *public_key = scalarmult_base(&scalar)?;
    private_key.copy_from_slice(&scalar[..]);
    Ok(())
}

/// Computes the SHA-512 digest of the concatenation of all `parts`.
///
/// Uses the streaming SHA-512 API to avoid allocating a contiguous buffer.
pub fn sha512_multi(parts: &[&[u8]], out: &mut [u8; HASH_LENGTH]) {
    // SAFETY: State is initialized by _init before use. Subsequent _update and _final
    // calls use the initialized state pointer.
    unsafe {
        let mut state = std::mem::MaybeUninit::<libsodium_sys::crypto_hash_sha512_state>::uninit();
        let state_ptr = state.as_mut_ptr();
        libsodium_sys::crypto_hash_sha512_init(state_ptr);
        for part in parts {
            libsodium_sys::crypto_hash_sha512_update(state_ptr, part.as_ptr(), part.len() as u64);
        }
        libsodium_sys::crypto_hash_sha512_final(state_ptr, out.as_mut_ptr());
        libsodium_sys::sodium_memzero(
            state_ptr as *mut _,
            std::mem::size_of::<libsodium_sys::crypto_hash_sha512_state>(),
        );
    }
}
