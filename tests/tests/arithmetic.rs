//! Big-integer substrate: precision floor, inverse properties, hard-problem helpers

use nhdss_algorithms::hard_problem::{self_power_table, solve_self_power, solve_transcendental};
use nhdss_api::ErrorKind;
use nhdss_common::math_common::{gcd, mod_inverse, mod_pow, mod_pow_signed};
use num_bigint_dig::{BigInt, BigUint};
use num_traits::{Num, One, Zero};
use proptest::prelude::*;

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

#[test]
fn mod_pow_precision_floor() {
    let m = (BigUint::one() << 521usize) - BigUint::one();
    let base = BigUint::from_str_radix("123456789abcdef0fedcba9876543210123456789abcdef", 16).unwrap();
    let exp = (BigUint::one() << 300usize) + big(12345);
    let expected = BigUint::from_str_radix(
        "1094f04b4d0425c66fa7cadd12223e98f06b3700d94b92eb6f1a7862f1dc34c1\
         4e554666ce7dc9c9ecc409d215036bc06551b78faf4f62a04b2fdccb688e9345250",
        16,
    )
    .unwrap();

    let result = mod_pow(&base, &exp, &m).unwrap();
    assert_eq!(result, expected);
    assert!(result.bits() > 256);
}

#[test]
fn mod_pow_negative_exponent() {
    // 3^-1 = 5 (mod 7), 5^2 = 4
    let m = big(7);
    assert_eq!(mod_pow_signed(&big(3), &BigInt::from(-1), &m).unwrap(), big(5));
    assert_eq!(mod_pow_signed(&big(3), &BigInt::from(-2), &m).unwrap(), big(4));
    assert_eq!(mod_pow_signed(&big(3), &BigInt::from(2), &m).unwrap(), big(2));

    let err = mod_pow_signed(&big(4), &BigInt::from(-1), &big(8)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoInverse);
}

#[test]
fn mod_inverse_rejects_non_coprime() {
    let err = mod_inverse(&big(4), &big(8)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoInverse);
    assert_eq!(mod_inverse(&big(0), &big(7)).unwrap_err().kind(), ErrorKind::NoInverse);
    assert_eq!(mod_inverse(&big(3), &big(1)).unwrap_err().kind(), ErrorKind::NoInverse);
}

#[test]
fn zero_modulus_is_invalid_input() {
    let err = mod_pow(&big(2), &big(3), &BigUint::zero()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

fn biguint_bytes() -> impl Strategy<Value = BigUint> {
    prop::collection::vec(any::<u8>(), 1..48).prop_map(|bytes| BigUint::from_bytes_be(&bytes))
}

proptest! {
    #[test]
    fn mod_inverse_is_an_inverse(a in biguint_bytes(), m in biguint_bytes()) {
        prop_assume!(m > BigUint::one());
        match mod_inverse(&a, &m) {
            Ok(inv) => {
                prop_assert!(inv < m);
                prop_assert_eq!((&a * &inv) % &m, BigUint::one());
            }
            Err(err) => {
                prop_assert_eq!(err.kind(), ErrorKind::NoInverse);
                prop_assert!(!gcd(&a, &m).is_one());
            }
        }
    }

    #[test]
    fn mod_pow_matches_repeated_multiplication(base in 1u64..10_000, exp in 0u32..64, m in 2u64..1_000_000) {
        let mut expected = BigUint::one() % big(m);
        for _ in 0..exp {
            expected = (expected * big(base)) % big(m);
        }
        prop_assert_eq!(mod_pow(&big(base), &BigUint::from(exp), &big(m)).unwrap(), expected);
    }
}

#[test]
fn self_power_search() {
    let table = self_power_table(23, 10).unwrap();
    assert_eq!(table[4], (5, 20));

    let found = solve_self_power(20, 23).unwrap();
    assert_eq!(found.solution, Some(5));
    assert_eq!(found.attempts, 5);

    let missing = solve_self_power(7, 23).unwrap();
    assert_eq!(missing.solution, None);
    assert_eq!(missing.attempts, 22);

    assert!(solve_self_power(1, 101).is_err());
}

#[test]
fn transcendental_search() {
    assert_eq!(solve_transcendental(2, 3, 23).unwrap(), vec![18]);
    assert_eq!(solve_transcendental(3, 2, 47).unwrap(), vec![32, 40, 46]);
    assert!(solve_transcendental(2, 3, 53).is_err());
}
