use super::*;
use curve::{Affine, BigUint, order, sub_order};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

const WALLET_SEED: &str = "0xE20cF871f1646d8651ee9dC95AAB1d93160b3467Abc!12345";

fn dec(literal: &str) -> BigUint {
    BigUint::parse_bytes(literal.as_bytes(), 10).expect("decimal literal")
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn reference_order() -> OrderMessage {
    OrderMessage {
        exchange_id: 1,
        order_id: 0,
        account_id: 14,
        dual_auth_public_key_x: dec(
            "8809204123973366120824088099131781443029836489874324209184159313707575442374",
        ),
        dual_auth_public_key_y: dec(
            "13988417089423714365999155658785932995359651021112875121671679566610495100815",
        ),
        token_s: 1,
        token_b: 3,
        amount_s: dec("100000000000000000000"),
        amount_b: dec("200000000000000000000"),
        all_or_none: false,
        valid_since: 1562889050,
        valid_until: 1562924050,
        max_fee_bips: 20,
        buy: true,
    }
}

fn message(values: &[(u64, usize)]) -> Vec<bool> {
    let mut bits = BitArray::new();
    for &(value, width) in values {
        bits.add_number(value, width);
    }
    bits.into_bits()
}

#[test]
fn test_generate_key_pair_vector() {
    let key_pair = generate_key_pair(WALLET_SEED);
    assert_eq!(key_pair.secret_key_decimal(), "1268930117");
    assert_eq!(
        key_pair.public_key_x(),
        "15030727036724168751212480282500540869268142725392913493575803542173309367534"
    );
    assert_eq!(
        key_pair.public_key_y(),
        "21709653362655094841217318150615954140561437115749994376567240539798473592233"
    );
}

#[test]
fn test_generate_key_pair_seeds() {
    assert_eq!(generate_key_pair("seed one"), generate_key_pair("seed one"));
    assert_ne!(
        generate_key_pair("seed one").public_key(),
        generate_key_pair("seed two").public_key()
    );
}

#[test]
fn test_order_signature_vector() {
    let signed = reference_order().sign("1").expect("sign");
    let signature = &signed.signature;

    assert_eq!(
        signature.rx(),
        "7122635334927162986015367923980037101766714244725328513127295952534668914405"
    );
    assert_eq!(
        signature.ry(),
        "2280257599939635471664376964047379401861626275301003552145483264241287733368"
    );
    assert_eq!(
        signature.s_decimal(),
        "16970772901820232512732011461786056089500078926541109484130046165312890585770"
    );
    assert_eq!(
        signed.hash,
        dec("14930590989794238376051093612526800939983030422999495909979537035982070533836")
    );

    assert!(reference_order().verify(signature, &Affine::base8()));
}

#[test]
fn test_order_signature_s_reduced_mod_curve_order() {
    // S is reduced modulo the full curve order; this one is above subOrder
    // and must still verify
    let signed = reference_order().sign("1").expect("sign");
    assert!(signed.signature.s > *sub_order());
    assert!(signed.signature.s < *order());
    assert!(reference_order().verify(&signed.signature, &Affine::base8()));
}

#[test]
fn test_order_signature_packed() {
    let signed = reference_order().sign("1").expect("sign");
    let packed = signed.signature.pack().expect("pack");
    assert_eq!(
        hex(&packed),
        "78a03e9e7ad760ad9e6c7ec091364e941543927250c7c0f312ad02267f940a05\
         aac211c072c683a086daafabeefd95f8f7f6379f4dd18a98d67c234bf81d8525"
    );
    assert_eq!(Signature::unpack(&packed), Ok(signed.signature));
}

#[test]
fn test_prv2pub_vectors() {
    let zero = prv2pub(&[0u8; 32]);
    assert_eq!(
        zero.x.to_string(),
        "18057697356824442077232466372158681584034052106008764416499293813845052614124"
    );
    assert_eq!(
        zero.y.to_string(),
        "10017185220796843008723376379851712704740799122203974983435777823451921669257"
    );

    let mut one = [0u8; 32];
    one[0] = 1;
    let one = prv2pub(&one);
    assert_eq!(
        one.x.to_string(),
        "19813871566278506733056174737533404172827243659633950448384862712810715008332"
    );
    assert_eq!(
        one.y.to_string(),
        "3180541603119699959817393376365122033608605213357702061827396823752108142371"
    );

    let counting: Vec<u8> = (0u8..32).collect();
    let counting = prv2pub(&counting);
    assert_eq!(
        counting.x.to_string(),
        "2268395256910599460897892697239943848179492040311897609851230320099353033936"
    );
    assert_eq!(
        counting.y.to_string(),
        "9217815323460786745943996961543373976258339829943051917488168561595069386613"
    );
}

#[test]
fn test_derivations_are_distinct() {
    // the seed path and the raw-bytes path do not agree for the same key
    let mut prv = [0u8; 32];
    prv[0] = 1;
    assert_ne!(&prv2pub(&prv), KeyPair::from_secret_key(BigUint::from(1u32)).public_key());
}

#[test]
fn test_sign_is_deterministic() {
    let msg = message(&[(5, 8), (1000, 32)]);
    let a = sign("123456789", &msg).expect("sign");
    let b = sign("123456789", &msg).expect("sign");
    assert_eq!(a, b);

    let other = sign("123456789", &message(&[(6, 8), (1000, 32)])).expect("sign");
    assert_ne!(a.signature.r8, other.signature.r8);
}

#[test]
fn test_sign_verify() {
    let mut rng = StdRng::seed_from_u64(42);
    let key_pair = KeyPair::random(&mut rng);
    let msg = message(&[(1, 32), (2, 20), (3, 96)]);

    let signed = key_pair.sign(&msg).expect("sign");
    assert!(verify(&msg, &signed.signature, key_pair.public_key()));
}

#[test]
fn test_sign_verify_empty_message() {
    let key_pair = generate_key_pair(WALLET_SEED);
    let signed = key_pair.sign(&[]).expect("sign");
    assert!(verify(&[], &signed.signature, key_pair.public_key()));
}

#[test]
fn test_sign_from_decimal_matches_key_pair() {
    let key_pair = generate_key_pair(WALLET_SEED);
    let msg = message(&[(77, 7)]);
    let by_string = sign(&key_pair.secret_key_decimal(), &msg).expect("sign");
    let by_key = key_pair.sign(&msg).expect("sign");
    assert_eq!(by_string, by_key);
}

#[test]
fn test_verify_rejects_wrong_message() {
    let key_pair = generate_key_pair(WALLET_SEED);
    let msg = message(&[(10, 8), (11, 8), (12, 8)]);
    let signed = key_pair.sign(&msg).expect("sign");

    let wrong_msg = message(&[(10, 8), (11, 8), (13, 8)]);
    assert!(!verify(&wrong_msg, &signed.signature, key_pair.public_key()));

    // 508 + 24 bits leave a one-bit final window: an appended zero collides
    // in the challenge hash, an appended one does not
    let mut padded = msg.clone();
    padded.push(false);
    assert!(verify(&padded, &signed.signature, key_pair.public_key()));

    let mut longer = msg.clone();
    longer.push(true);
    assert!(!verify(&longer, &signed.signature, key_pair.public_key()));
}

#[test]
fn test_verify_rejects_wrong_key() {
    let mut rng = StdRng::seed_from_u64(42);
    let key_pair = KeyPair::random(&mut rng);
    let msg = message(&[(21, 8), (22, 8), (23, 8)]);
    let signed = key_pair.sign(&msg).expect("sign");

    let wrong = KeyPair::random(&mut rng);
    assert!(!verify(&msg, &signed.signature, wrong.public_key()));
}

#[test]
fn test_verify_rejects_tampered_signature() {
    let key_pair = generate_key_pair(WALLET_SEED);
    let msg = message(&[(99, 16)]);
    let signed = key_pair.sign(&msg).expect("sign");

    let mut bad_s = signed.signature.clone();
    bad_s.s += 1u32;
    assert!(!verify(&msg, &bad_s, key_pair.public_key()));

    let mut bad_r = signed.signature.clone();
    bad_r.r8 = bad_r.r8.double();
    assert!(!verify(&msg, &bad_r, key_pair.public_key()));

    let mut off_curve = signed.signature.clone();
    off_curve.r8 = Affine::new(off_curve.r8.x.clone(), off_curve.r8.x.clone());
    assert!(!verify(&msg, &off_curve, key_pair.public_key()));
}

#[test]
fn test_verify_rejects_single_bit_flips() {
    let mut rng = StdRng::seed_from_u64(7);
    let key_pair = KeyPair::random(&mut rng);
    let msg = message(&[(0xdead_beef, 32), (42, 20), (3, 8)]);
    let signed = key_pair.sign(&msg).expect("sign");
    let packed_sig = signed.signature.pack().expect("pack");
    let packed_key = key_pair.public_key().pack();
    assert!(verify(&msg, &signed.signature, key_pair.public_key()));

    // R8 occupies bits 0..256 of the packed signature, S the rest; cover
    // the sign bit of R8 and the top bit of S explicitly
    let mut sig_bits: Vec<usize> = (0..24).map(|_| rng.random_range(0..512)).collect();
    sig_bits.extend([255, 511]);
    for bit in sig_bits {
        let mut flipped = packed_sig;
        flipped[bit / 8] ^= 1 << (bit % 8);
        if let Ok(tampered) = Signature::unpack(&flipped) {
            assert!(
                !verify(&msg, &tampered, key_pair.public_key()),
                "signature bit {bit} flipped"
            );
        }
    }

    let mut key_bits: Vec<usize> = (0..12).map(|_| rng.random_range(0..256)).collect();
    key_bits.push(255);
    for bit in key_bits {
        let mut flipped = packed_key;
        flipped[bit / 8] ^= 1 << (bit % 8);
        if let Ok(tampered) = Affine::unpack(&flipped) {
            assert!(
                !verify(&msg, &signed.signature, &tampered),
                "public key bit {bit} flipped"
            );
        }
    }

    for _ in 0..12 {
        let bit = rng.random_range(0..msg.len());
        let mut flipped = msg.clone();
        flipped[bit] = !flipped[bit];
        assert!(
            !verify(&flipped, &signed.signature, key_pair.public_key()),
            "message bit {bit} flipped"
        );
    }
}

#[test]
fn test_verify_rejects_oversized_message() {
    let key_pair = generate_key_pair(WALLET_SEED);
    let signed = key_pair.sign(&[true]).expect("sign");
    let too_long = vec![true; 4000];
    assert!(!verify(&too_long, &signed.signature, key_pair.public_key()));
}

#[test]
fn test_longest_message() {
    // 2976 bits of hash input minus the two coordinates
    let msg = vec![true; 2976 - 2 * constants::COORDINATE_BITS];
    let key_pair = generate_key_pair(WALLET_SEED);
    let signed = key_pair.sign(&msg).expect("sign");
    assert!(verify(&msg, &signed.signature, key_pair.public_key()));
}

#[test]
fn test_serde_round_trips() {
    let key_pair = generate_key_pair(WALLET_SEED);
    let signed = reference_order().sign("1").expect("sign");

    let bytes = bincode::serialize(&key_pair).expect("serialize key pair");
    let decoded: KeyPair = bincode::deserialize(&bytes).expect("deserialize key pair");
    assert_eq!(decoded, key_pair);

    let bytes = bincode::serialize(&signed.signature).expect("serialize signature");
    let decoded: Signature = bincode::deserialize(&bytes).expect("deserialize signature");
    assert_eq!(decoded, signed.signature);

    let json = serde_json::to_value(&signed.signature).expect("to json");
    assert_eq!(
        json["s"],
        "16970772901820232512732011461786056089500078926541109484130046165312890585770"
    );
    assert_eq!(
        json["r8"]["x"],
        "7122635334927162986015367923980037101766714244725328513127295952534668914405"
    );

    let json = serde_json::to_string(&reference_order()).expect("to json");
    let decoded: OrderMessage = serde_json::from_str(&json).expect("from json");
    assert_eq!(decoded, reference_order());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_sign_verify(seed in any::<u64>(), value in any::<u64>(), width in 1usize..=64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let key_pair = KeyPair::random(&mut rng);
        let msg = message(&[(value, width)]);

        let signed = key_pair.sign(&msg).expect("sign");
        prop_assert!(verify(&msg, &signed.signature, key_pair.public_key()));

        let packed = signed.signature.pack().expect("pack");
        let unpacked = Signature::unpack(&packed).expect("unpack");
        prop_assert!(verify(&msg, &unpacked, key_pair.public_key()));
    }
}
