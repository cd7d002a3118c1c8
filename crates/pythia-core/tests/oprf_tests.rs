use pythia_core::rng::SodiumRng;
use pythia_core::types::*;
use pythia_core::{crypto, oprf};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn direct(input: &[u8], key: &[u8; SCALAR_LENGTH]) -> [u8; POINT_LENGTH] {
    let mut h = [0u8; POINT_LENGTH];
    oprf::hash_to_group(input, &mut h).unwrap();
    let mut out = [0u8; POINT_LENGTH];
    crypto::scalar_mult(key, &h, &mut out).unwrap();
    out
}

#[test]
fn hash_to_group_produces_valid_point() {
    let mut point = [0u8; POINT_LENGTH];
    oprf::hash_to_group(b"pythia hash to group test", &mut point).unwrap();
    crypto::validate_ristretto_point(&point).unwrap();
}

#[test]
fn hash_to_group_deterministic() {
    let mut p1 = [0u8; POINT_LENGTH];
    let mut p2 = [0u8; POINT_LENGTH];
    oprf::hash_to_group(b"deterministic input", &mut p1).unwrap();
    oprf::hash_to_group(b"deterministic input", &mut p2).unwrap();
    assert_eq!(p1, p2);
}

#[test]
fn hash_to_group_different_inputs() {
    let mut p1 = [0u8; POINT_LENGTH];
    let mut p2 = [0u8; POINT_LENGTH];
    oprf::hash_to_group(b"input one", &mut p1).unwrap();
    oprf::hash_to_group(b"input two", &mut p2).unwrap();
    assert_ne!(p1, p2);
}

#[test]
fn hash_to_group_accepts_empty_input() {
    let mut p1 = [0u8; POINT_LENGTH];
    let mut p2 = [0u8; POINT_LENGTH];
    oprf::hash_to_group(b"", &mut p1).unwrap();
    oprf::hash_to_group(b"", &mut p2).unwrap();
    crypto::validate_ristretto_point(&p1).unwrap();
    assert_eq!(p1, p2);
}

#[test]
fn blind_produces_valid_output() {
    let mut blinded = [0u8; POINT_LENGTH];
    let mut blind_scalar = [0u8; SCALAR_LENGTH];
    oprf::blind(&mut SodiumRng, b"password to blind", &mut blinded, &mut blind_scalar).unwrap();

    crypto::validate_ristretto_point(&blinded).unwrap();
    assert!(crypto::is_valid_nonzero_scalar(&blind_scalar));
}

#[test]
fn blind_randomized() {
    let input = b"password to blind";
    let mut b1 = [0u8; POINT_LENGTH];
    let mut s1 = [0u8; SCALAR_LENGTH];
    let mut b2 = [0u8; POINT_LENGTH];
    let mut s2 = [0u8; SCALAR_LENGTH];
    oprf::blind(&mut SodiumRng, input, &mut b1, &mut s1).unwrap();
    oprf::blind(&mut SodiumRng, input, &mut b2, &mut s2).unwrap();

    assert_ne!(s1, s2);
    assert_ne!(b1, b2);
}

#[test]
fn blind_with_seeded_rng_is_reproducible() {
    let mut b1 = [0u8; POINT_LENGTH];
    let mut s1 = [0u8; SCALAR_LENGTH];
    let mut b2 = [0u8; POINT_LENGTH];
    let mut s2 = [0u8; SCALAR_LENGTH];
    oprf::blind(&mut ChaCha20Rng::seed_from_u64(5), b"pw", &mut b1, &mut s1).unwrap();
    oprf::blind(&mut ChaCha20Rng::seed_from_u64(5), b"pw", &mut b2, &mut s2).unwrap();
    assert_eq!(b1, b2);
    assert_eq!(s1, s2);
}

#[test]
fn evaluate_rejects_identity() {
    let key = crypto::derive_transformation_key(b"master", b"tweak").unwrap();
    let mut out = [0u8; POINT_LENGTH];
    assert_eq!(
        oprf::evaluate(&[0u8; POINT_LENGTH], &key, &mut out),
        Err(PythiaError::InvalidBlindedValue)
    );
    assert_eq!(out, [0u8; POINT_LENGTH]);
}

#[test]
fn evaluate_rejects_garbage() {
    let key = crypto::derive_transformation_key(b"master", b"tweak").unwrap();
    let mut out = [0u8; POINT_LENGTH];
    assert_eq!(
        oprf::evaluate(&[0xFF; POINT_LENGTH], &key, &mut out),
        Err(PythiaError::InvalidBlindedValue)
    );
}

#[test]
fn blind_evaluate_deblind_matches_direct_evaluation() {
    let input = b"correct horse";
    let key = crypto::derive_transformation_key(b"K1", b"user-42").unwrap();

    let mut blinded = [0u8; POINT_LENGTH];
    let mut blind_scalar = [0u8; SCALAR_LENGTH];
    oprf::blind(&mut SodiumRng, input, &mut blinded, &mut blind_scalar).unwrap();

    let mut evaluated = [0u8; POINT_LENGTH];
    oprf::evaluate(&blinded, &key, &mut evaluated).unwrap();

    let mut deblinded = [0u8; POINT_LENGTH];
    oprf::deblind(&evaluated, &blind_scalar, &mut deblinded).unwrap();

    assert_eq!(deblinded, direct(input, &key));
}

#[test]
fn deblind_rejects_zero_scalar() {
    let evaluated = crypto::generator();
    let mut out = [0u8; POINT_LENGTH];
    assert_eq!(
        oprf::deblind(&evaluated, &[0u8; SCALAR_LENGTH], &mut out),
        Err(PythiaError::InvalidBlindingSecret)
    );
}

#[test]
fn deblind_rejects_non_canonical_scalar() {
    let evaluated = crypto::generator();
    let mut out = [0u8; POINT_LENGTH];
    assert_eq!(
        oprf::deblind(&evaluated, &[0xFF; SCALAR_LENGTH], &mut out),
        Err(PythiaError::InvalidBlindingSecret)
    );
}

#[test]
fn deblind_rejects_invalid_point() {
    let r = crypto::random_nonzero_scalar(&mut SodiumRng).unwrap();
    let mut out = [0u8; POINT_LENGTH];
    assert_eq!(
        oprf::deblind(&[0xFF; POINT_LENGTH], &r, &mut out),
        Err(PythiaError::InvalidPoint)
    );
}

#[test]
fn update_token_moves_value_to_new_key() {
    let input = b"correct horse";
    let k1 = crypto::derive_transformation_key(b"K1", b"user-42").unwrap();
    let k2 = crypto::derive_transformation_key(b"K2", b"user-42").unwrap();

    let token = oprf::compute_update_token(&k1, &k2).unwrap();
    let mut updated = [0u8; POINT_LENGTH];
    oprf::apply_update_token(&direct(input, &k1), &token, &mut updated).unwrap();

    assert_eq!(updated, direct(input, &k2));
}

#[test]
fn update_token_is_value_independent() {
    let k1 = crypto::derive_transformation_key(b"K1", b"user-42").unwrap();
    let k2 = crypto::derive_transformation_key(b"K2", b"user-42").unwrap();
    let token = oprf::compute_update_token(&k1, &k2).unwrap();

    for input in [&b"alpha"[..], b"beta", b"gamma", b""] {
        let mut updated = [0u8; POINT_LENGTH];
        oprf::apply_update_token(&direct(input, &k1), &token, &mut updated).unwrap();
        assert_eq!(updated, direct(input, &k2));
    }
}

#[test]
fn update_tokens_compose_across_rotations() {
    let input = b"chained";
    let k1 = crypto::derive_transformation_key(b"K1", b"t").unwrap();
    let k2 = crypto::derive_transformation_key(b"K2", b"t").unwrap();
    let k3 = crypto::derive_transformation_key(b"K3", b"t").unwrap();

    let t12 = oprf::compute_update_token(&k1, &k2).unwrap();
    let t23 = oprf::compute_update_token(&k2, &k3).unwrap();

    let mut step = [0u8; POINT_LENGTH];
    let mut done = [0u8; POINT_LENGTH];
    oprf::apply_update_token(&direct(input, &k1), &t12, &mut step).unwrap();
    oprf::apply_update_token(&step, &t23, &mut done).unwrap();
    assert_eq!(done, direct(input, &k3));
}

#[test]
fn apply_update_token_rejects_malformed_tokens() {
    let value = crypto::generator();
    let mut out = [0u8; POINT_LENGTH];
    assert_eq!(
        oprf::apply_update_token(&value, &[0u8; SCALAR_LENGTH], &mut out),
        Err(PythiaError::InvalidUpdateToken)
    );
    assert_eq!(
        oprf::apply_update_token(&value, &[0xFF; SCALAR_LENGTH], &mut out),
        Err(PythiaError::InvalidUpdateToken)
    );
}

#[test]
fn compute_update_token_rejects_zero_key() {
    let k = crypto::derive_transformation_key(b"K1", b"t").unwrap();
    assert!(oprf::compute_update_token(&[0u8; SCALAR_LENGTH], &k).is_err());
    assert!(oprf::compute_update_token(&k, &[0u8; SCALAR_LENGTH]).is_err());
}
