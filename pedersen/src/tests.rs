use super::*;
use crate::constants::{BITS_PER_SEGMENT, MAX_INPUT_BITS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_bits(rng: &mut StdRng, len: usize) -> Vec<bool> {
    (0..len).map(|_| rng.random()).collect()
}

#[test]
fn test_known_vectors() {
    let cases: [(Vec<bool>, &str); 4] = [
        (
            vec![true],
            "701180683093905258530000416312173905143705164287229837569246091312136574306",
        ),
        (
            vec![true, false, true],
            "21187062188745369963716405328945101183404659236128804506128958095263671921311",
        ),
        (
            vec![false; BITS_PER_SEGMENT],
            "11027187153823489641205052262858596806442405890901222588038165506750360773907",
        ),
        (
            vec![true; MAX_INPUT_BITS],
            "20881564569276965690767653412581007343978003035869624462131151876139815424583",
        ),
    ];

    for (bits, expected) in cases {
        let digest = hash_bits(&bits).expect("within capacity");
        assert_eq!(digest.to_string(), expected, "input of {} bits", bits.len());
    }
}

#[test]
fn test_deterministic() {
    let mut rng = StdRng::seed_from_u64(42);
    let bits = random_bits(&mut rng, 1368);
    assert_eq!(hash_bits(&bits), hash_bits(&bits));
}

#[test]
fn test_result_is_valid_point() {
    let mut rng = StdRng::seed_from_u64(3);
    let bits = random_bits(&mut rng, 700);
    let point = hash_to_point(&bits).expect("within capacity");
    assert!(point.is_valid());
}

#[test]
fn test_single_bit_flip_changes_hash() {
    let mut rng = StdRng::seed_from_u64(42);
    for len in [1usize, 3, 185, 186, 187, 860, 1368, MAX_INPUT_BITS - 1, MAX_INPUT_BITS] {
        let bits = random_bits(&mut rng, len);
        let digest = hash_bits(&bits).expect("within capacity");

        for _ in 0..4 {
            let i = rng.random_range(0..len);
            let mut flipped = bits.clone();
            flipped[i] = !flipped[i];
            assert_ne!(
                hash_bits(&flipped).expect("within capacity"),
                digest,
                "flipping bit {i} of {len} left the hash unchanged"
            );
        }
    }
}

#[test]
fn test_trailing_zero_in_partial_window_collides() {
    // a trailing window [1] and [1, 0] both weigh +2, so the hash does not
    // separate these lengths
    let bits = vec![true, false, true, true];
    let mut longer = bits.clone();
    longer.push(false);
    assert_eq!(hash_bits(&bits), hash_bits(&longer));

    longer.push(false);
    assert_eq!(hash_bits(&bits), hash_bits(&longer));
}

#[test]
fn test_trailing_sign_bit_changes_hash() {
    // the appended bit completes the window and lands in its sign position
    let bits = vec![true, false, true, true, false];
    let mut longer = bits.clone();
    longer.push(true);
    assert_ne!(hash_bits(&bits), hash_bits(&longer));
}

#[test]
fn test_capacity_boundary() {
    assert!(hash_bits(&vec![false; MAX_INPUT_BITS]).is_ok());
    assert!(matches!(
        hash_bits(&vec![false; MAX_INPUT_BITS + 1]),
        Err(PedersenError::InputTooLong { .. })
    ));
}
