// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Pythia Verifiable Oblivious PRF
// Licensed under the MIT License

//! Core library for the Ecliptix Pythia verifiable oblivious PRF.
//!
//! Pythia hardens low-entropy secrets (passwords) with a server-held key that is
//! specialized per tweak (typically a user identifier). The client blinds its
//! secret, the server transforms the blinded element under the per-tweak key and
//! proves it did so correctly, and the client deblinds the result. The server
//! key can later be rotated with an update token that migrates every stored
//! deblinded value without involving the original secret.
//!
//! All group operations run over Ristretto255 through libsodium.
//!
//! # Crate layout
//!
//! * [`types`] -- shared constants, error types, and secure containers.
//! * [`crypto`] -- low-level primitives (libsodium wrappers, HMAC, key derivation).
//! * [`rng`] -- process-wide default random source.
//! * [`oprf`] -- blind / evaluate / deblind / update over Ristretto255.
//! * [`proof`] -- discrete-log-equality proof of correct transformation.
//! * [`protocol`] -- fixed-length encodings for values crossing the boundary.

/// Low-level cryptographic primitives wrapping libsodium.
pub mod crypto;
/// Oblivious PRF group operations over Ristretto255.
pub mod oprf;
/// Non-interactive proof of correct transformation.
pub mod proof;
/// Fixed-length encodings.
pub mod protocol;
pub mod rng;
/// Shared constants, error types, and secure containers.
pub mod types;
