use pythia_core::crypto;
use pythia_core::rng::SodiumRng;
use pythia_core::types::*;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

const GROUP_ORDER_HEX: &str = "edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010";

fn scalar_from_hex(s: &str) -> [u8; SCALAR_LENGTH] {
    hex::decode(s).unwrap().try_into().unwrap()
}

fn small_scalar(v: u8) -> [u8; SCALAR_LENGTH] {
    let mut s = [0u8; SCALAR_LENGTH];
    s[0] = v;
    s
}

#[test]
fn random_bytes_fills_buffer() {
    let mut buf = [0u8; 64];
    crypto::random_bytes(&mut SodiumRng, &mut buf).unwrap();
    assert!(!buf.iter().all(|&b| b == 0));
}

#[test]
fn random_bytes_empty_fails() {
    let mut buf = [];
    assert_eq!(
        crypto::random_bytes(&mut SodiumRng, &mut buf),
        Err(PythiaError::InvalidInput)
    );
}

#[test]
fn random_nonzero_scalar_is_canonical() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for _ in 0..64 {
        let s = crypto::random_nonzero_scalar(&mut rng).unwrap();
        assert!(crypto::is_valid_nonzero_scalar(&s));
    }
}

#[test]
fn random_nonzero_scalar_seeded_is_reproducible() {
    let a = crypto::random_nonzero_scalar(&mut ChaCha20Rng::seed_from_u64(42)).unwrap();
    let b = crypto::random_nonzero_scalar(&mut ChaCha20Rng::seed_from_u64(42)).unwrap();
    let c = crypto::random_nonzero_scalar(&mut ChaCha20Rng::seed_from_u64(43)).unwrap();
    assert_eq!(*a, *b);
    assert_ne!(*a, *c);
}

#[test]
fn generator_matches_ristretto255_basepoint() {
    let expected = "e2f2ae0a6abc4e71a884a961c500515f58e30b6aa582dd8db6a65945e08d2d76";
    assert_eq!(hex::encode(crypto::generator()), expected);
}

#[test]
fn canonical_scalar_boundaries() {
    let order = scalar_from_hex(GROUP_ORDER_HEX);
    let mut order_minus_one = order;
    order_minus_one[0] -= 1;

    assert!(crypto::is_canonical_scalar(&[0u8; SCALAR_LENGTH]));
    assert!(crypto::is_canonical_scalar(&order_minus_one));
    assert!(!crypto::is_canonical_scalar(&order));
    assert!(!crypto::is_canonical_scalar(&[0xFF; SCALAR_LENGTH]));

    assert!(!crypto::is_valid_nonzero_scalar(&[0u8; SCALAR_LENGTH]));
    assert!(crypto::is_valid_nonzero_scalar(&small_scalar(1)));
}

#[test]
fn scalar_invert_roundtrip() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let s = crypto::random_nonzero_scalar(&mut rng).unwrap();
    let inv = crypto::scalar_invert(&s).unwrap();
    let product = crypto::scalar_mul(&s, &inv);
    assert_eq!(*product, small_scalar(1));
}

#[test]
fn scalar_invert_zero_fails() {
    assert!(crypto::scalar_invert(&[0u8; SCALAR_LENGTH]).is_err());
}

#[test]
fn scalar_sub_then_add_back() {
    let a = small_scalar(9);
    let b = small_scalar(4);
    assert_eq!(*crypto::scalar_sub(&a, &b), small_scalar(5));
}

#[test]
fn scalar_mult_base_and_scalar_mult_consistent() {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let a = crypto::random_nonzero_scalar(&mut rng).unwrap();
    let b = crypto::random_nonzero_scalar(&mut rng).unwrap();

    let a_g = crypto::scalarmult_base(&a).unwrap();
    let mut ab_g = [0u8; POINT_LENGTH];
    crypto::scalar_mult(&b, &a_g, &mut ab_g).unwrap();

    let ab = crypto::scalar_mul(&a, &b);
    assert_eq!(crypto::scalarmult_base(&ab).unwrap(), ab_g);
}

#[test]
fn scalarmult_base_zero_fails() {
    assert!(crypto::scalarmult_base(&[0u8; SCALAR_LENGTH]).is_err());
}

#[test]
fn point_add_matches_scalar_addition() {
    let g = crypto::generator();
    let two_g = crypto::scalarmult_base(&small_scalar(2)).unwrap();
    assert_eq!(crypto::point_add(&g, &g).unwrap(), two_g);
}

#[test]
fn point_add_rejects_garbage() {
    let g = crypto::generator();
    assert_eq!(
        crypto::point_add(&g, &[0xFF; POINT_LENGTH]),
        Err(PythiaError::InvalidPoint)
    );
}

#[test]
fn validate_ristretto_point_rejects_identity() {
    let zero = [0u8; POINT_LENGTH];
    assert_eq!(
        crypto::validate_ristretto_point(&zero),
        Err(PythiaError::InvalidPoint)
    );
}

#[test]
fn validate_ristretto_point_rejects_garbage() {
    let garbage = [0xFF; POINT_LENGTH];
    assert!(crypto::validate_ristretto_point(&garbage).is_err());
}

#[test]
fn validate_ristretto_point_rejects_wrong_length() {
    let g = crypto::generator();
    assert!(crypto::validate_ristretto_point(&g[..31]).is_err());
    let mut long = g.to_vec();
    long.push(0);
    assert!(crypto::validate_ristretto_point(&long).is_err());
}

#[test]
fn validate_ristretto_point_accepts_generator() {
    crypto::validate_ristretto_point(&crypto::generator()).unwrap();
}

#[test]
fn hmac_sha512_deterministic_and_keyed() {
    let mut m1 = [0u8; MAC_LENGTH];
    let mut m2 = [0u8; MAC_LENGTH];
    let mut m3 = [0u8; MAC_LENGTH];
    crypto::hmac_sha512(b"key one", b"message", &mut m1).unwrap();
    crypto::hmac_sha512(b"key one", b"message", &mut m2).unwrap();
    crypto::hmac_sha512(b"key two", b"message", &mut m3).unwrap();
    assert_eq!(m1, m2);
    assert_ne!(m1, m3);
}

#[test]
fn hmac_sha512_rfc4231_case_2() {
    let mut mac = [0u8; MAC_LENGTH];
    crypto::hmac_sha512(b"Jefe", b"what do ya want for nothing?", &mut mac).unwrap();
    assert_eq!(
        hex::encode(mac),
        "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
         9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
    );
}

#[test]
fn hmac_sha512_empty_key_fails() {
    let mut mac = [0u8; MAC_LENGTH];
    assert!(crypto::hmac_sha512(b"", b"message", &mut mac).is_err());
}

#[test]
fn sha512_multi_split_matches_known_digest() {
    let expected = hex::decode(
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    )
    .unwrap();
    let mut single = [0u8; HASH_LENGTH];
    let mut split = [0u8; HASH_LENGTH];
    let whole: [&[u8]; 1] = [b"abc"];
    crypto::sha512_multi(&whole, &mut single);
    let parts: [&[u8]; 3] = [b"a", b"", b"bc"];
    crypto::sha512_multi(&parts, &mut split);
    assert_eq!(single.as_slice(), expected.as_slice());
    assert_eq!(single, split);
}

#[test]
fn derive_transformation_key_deterministic() {
    let k1 = crypto::derive_transformation_key(b"master", b"user-42").unwrap();
    let k2 = crypto::derive_transformation_key(b"master", b"user-42").unwrap();
    assert_eq!(*k1, *k2);
    assert!(crypto::is_valid_nonzero_scalar(&k1));
}

#[test]
fn derive_transformation_key_separates_tweaks_and_masters() {
    let base = crypto::derive_transformation_key(b"master", b"user-42").unwrap();
    let other_tweak = crypto::derive_transformation_key(b"master", b"user-43").unwrap();
    let other_master = crypto::derive_transformation_key(b"master2", b"user-42").unwrap();
    assert_ne!(*base, *other_tweak);
    assert_ne!(*base, *other_master);
}

#[test]
fn derive_transformation_key_accepts_empty_tweak() {
    let k = crypto::derive_transformation_key(b"master", b"").unwrap();
    assert!(crypto::is_valid_nonzero_scalar(&k));
}

#[test]
fn derive_transformation_key_empty_master_fails() {
    assert_eq!(
        crypto::derive_transformation_key(b"", b"user").map(|_| ()),
        Err(PythiaError::InvalidMasterSecret)
    );
}

#[test]
fn derive_key_pair_produces_valid_keys() {
    let seed = b"test seed for key derivation 123";
    let mut sk = [0u8; SCALAR_LENGTH];
    let mut pk = [0u8; POINT_LENGTH];
    crypto::derive_key_pair(seed, &mut sk, &mut pk).unwrap();

    assert!(crypto::is_valid_nonzero_scalar(&sk));
    crypto::validate_ristretto_point(&pk).unwrap();
    assert_eq!(crypto::scalarmult_base(&sk).unwrap(), pk);
}

#[test]
fn derive_key_pair_deterministic() {
    let seed = b"deterministic test seed!";
    let mut sk1 = [0u8; SCALAR_LENGTH];
    let mut pk1 = [0u8; POINT_LENGTH];
    let mut sk2 = [0u8; SCALAR_LENGTH];
    let mut pk2 = [0u8; POINT_LENGTH];

    crypto::derive_key_pair(seed, &mut sk1, &mut pk1).unwrap();
    crypto::derive_key_pair(seed, &mut sk2, &mut pk2).unwrap();

    assert_eq!(sk1, sk2);
    assert_eq!(pk1, pk2);
}

#[test]
fn derive_key_pair_empty_seed_fails() {
    let mut sk = [0u8; SCALAR_LENGTH];
    let mut pk = [0u8; POINT_LENGTH];
    assert!(crypto::derive_key_pair(b"", &mut sk, &mut pk).is_err());
}

#[test]
fn error_classification() {
    assert!(PythiaError::RandomnessUnavailable.is_fatal());
    assert!(PythiaError::InvalidBlindingSecret.is_fatal());
    assert!(PythiaError::InvalidBlindedValue.is_fatal());
    assert!(!PythiaError::InvalidUpdateToken.is_fatal());
    assert!(!PythiaError::InvalidPoint.is_fatal());
    assert_eq!(PythiaError::RandomnessUnavailable.to_c_int(), -1);
    assert!(PythiaError::CryptoError.to_c_int() < 0);
}

#[test]
fn secret_containers_redact_debug() {
    let secret = BlindingSecret::from_bytes([7u8; BLINDING_SECRET_LENGTH]);
    let token = UpdateToken::from_bytes([9u8; UPDATE_TOKEN_LENGTH]);
    let bytes = SecureBytes::from_slice(b"hunter2");
    assert!(!format!("{secret:?}").contains('7'));
    assert!(!format!("{token:?}").contains('9'));
    assert_eq!(format!("{bytes:?}"), "SecureBytes([REDACTED; 7])");
}

#[test]
fn constant_time_eq_semantics() {
    assert!(constant_time_eq(b"abc", b"abc"));
    assert!(!constant_time_eq(b"abc", b"abd"));
    assert!(!constant_time_eq(b"abc", b"ab"));
}
