//! Completeness, binding and non-malleability over realistic domain sizes

use nhdss_algorithms::CurveDomain;
use nhdss_api::DssScheme;
use nhdss_sign::{EcSignature, EllipticCurveDss, FfSignature, FiniteFieldDss};
use nhdss_tests::fixtures::{ff_generated, flip_bit, rng, MESSAGES};
use num_bigint_dig::BigUint;
use num_traits::One;

#[test]
fn finite_field_completeness() {
    let mut rng = rng(0xff01);
    for bits in [64, 128, 256] {
        let domain = ff_generated(bits, bits as u64);
        assert_eq!(domain.bit_length(), bits);
        for _ in 0..3 {
            let (pk, sk) = FiniteFieldDss::keypair(&domain, &mut rng).unwrap().value;
            for message in MESSAGES {
                let (sig, _) = FiniteFieldDss::sign(&domain, message, &sk, &mut rng).unwrap().value;
                let verified = FiniteFieldDss::verify(&domain, message, &sig, &pk).unwrap();
                assert!(verified.value.is_valid, "{} bits, {:?}", bits, message);
            }
        }
    }
}

#[test]
fn elliptic_curve_completeness() {
    let mut rng = rng(0xec01);
    for curve in [CurveDomain::p192().unwrap(), CurveDomain::p256().unwrap()] {
        let (pk, sk) = EllipticCurveDss::keypair(&curve, &mut rng).unwrap().value;
        for message in MESSAGES {
            let (sig, _) = EllipticCurveDss::sign(&curve, message, &sk, &mut rng).unwrap().value;
            let verified = EllipticCurveDss::verify(&curve, message, &sig, &pk).unwrap();
            assert!(verified.value.is_valid, "{}, {:?}", curve.name(), message);
        }
    }
}

#[test]
fn finite_field_binding() {
    let mut rng = rng(0xff02);
    let domain = ff_generated(128, 7);
    let (pk, sk) = FiniteFieldDss::keypair(&domain, &mut rng).unwrap().value;
    let message = b"binding";
    let (sig, _) = FiniteFieldDss::sign(&domain, message, &sk, &mut rng).unwrap().value;

    for bit in 0..message.len() * 8 {
        let flipped = flip_bit(message, bit);
        let verified = FiniteFieldDss::verify(&domain, &flipped, &sig, &pk).unwrap();
        assert!(!verified.value.is_valid, "bit {} accepted", bit);
    }
}

#[test]
fn elliptic_curve_binding() {
    let mut rng = rng(0xec02);
    let curve = CurveDomain::p192().unwrap();
    let (pk, sk) = EllipticCurveDss::keypair(&curve, &mut rng).unwrap().value;
    let message = b"binding";
    let (sig, _) = EllipticCurveDss::sign(&curve, message, &sk, &mut rng).unwrap().value;

    for bit in 0..message.len() * 8 {
        let flipped = flip_bit(message, bit);
        let verified = EllipticCurveDss::verify(&curve, &flipped, &sig, &pk).unwrap();
        assert!(!verified.value.is_valid, "bit {} accepted", bit);
    }
}

#[test]
fn finite_field_component_mutations() {
    let mut rng = rng(0xff03);
    let domain = ff_generated(128, 9);
    let (pk, sk) = FiniteFieldDss::keypair(&domain, &mut rng).unwrap().value;
    let (sig, _) = FiniteFieldDss::sign(&domain, b"mutate", &sk, &mut rng).unwrap().value;
    let (p, q) = (domain.p(), domain.q());
    let one = BigUint::one();

    let bump = |v: &BigUint, m: &BigUint| {
        let next = (v + &one) % m;
        if next == BigUint::from(0u32) {
            one.clone()
        } else {
            next
        }
    };
    let mutations = [
        FfSignature { r: bump(&sig.r, p), ..sig.clone() },
        FfSignature { s: bump(&sig.s, q), ..sig.clone() },
        FfSignature { z: bump(&sig.z, p), ..sig.clone() },
    ];
    for mutated in mutations.iter() {
        // a mutated component may leave the valid range; that is rejected too
        let valid = FiniteFieldDss::verify(&domain, b"mutate", mutated, &pk)
            .map(|v| v.value.is_valid)
            .unwrap_or(false);
        assert!(!valid, "{:?}", mutated);
    }
}

#[test]
fn elliptic_curve_component_mutations() {
    let mut rng = rng(0xec03);
    let curve = CurveDomain::p192().unwrap();
    let (pk, sk) = EllipticCurveDss::keypair(&curve, &mut rng).unwrap().value;
    let (sig, _) = EllipticCurveDss::sign(&curve, b"mutate", &sk, &mut rng).unwrap().value;
    let one = BigUint::one();

    let mutations = [
        EcSignature { r: curve.add(&sig.r, curve.base()), ..sig.clone() },
        EcSignature { s: (&sig.s + &one) % curve.order(), ..sig.clone() },
        EcSignature { z: curve.add(&sig.z, curve.base()), ..sig.clone() },
        EcSignature { r: curve.negate(&sig.r), ..sig.clone() },
    ];
    for mutated in mutations.iter() {
        let valid = EllipticCurveDss::verify(&curve, b"mutate", mutated, &pk)
            .map(|v| v.value.is_valid)
            .unwrap_or(false);
        assert!(!valid, "{:?}", mutated);
    }
}

#[test]
fn wrong_key_is_rejected() {
    let mut rng = rng(0x0b);
    let domain = ff_generated(128, 11);
    let (_, sk) = FiniteFieldDss::keypair(&domain, &mut rng).unwrap().value;
    let (other_pk, _) = FiniteFieldDss::keypair(&domain, &mut rng).unwrap().value;
    let (sig, _) = FiniteFieldDss::sign(&domain, b"key", &sk, &mut rng).unwrap().value;
    assert!(!FiniteFieldDss::verify(&domain, b"key", &sig, &other_pk).unwrap().value.is_valid);

    let curve = CurveDomain::p256().unwrap();
    let (_, sk) = EllipticCurveDss::keypair(&curve, &mut rng).unwrap().value;
    let (other_pk, _) = EllipticCurveDss::keypair(&curve, &mut rng).unwrap().value;
    let (sig, _) = EllipticCurveDss::sign(&curve, b"key", &sk, &mut rng).unwrap().value;
    assert!(!EllipticCurveDss::verify(&curve, b"key", &sig, &other_pk).unwrap().value.is_valid);
}

#[test]
fn op_counts_are_reported() {
    let mut rng = rng(0x0c);
    let domain = ff_generated(64, 13);
    let keys = FiniteFieldDss::keypair(&domain, &mut rng).unwrap();
    assert!(keys.op_counts.exponentiations >= 2);
    let (pk, sk) = keys.value;

    let signed = FiniteFieldDss::sign(&domain, b"count", &sk, &mut rng).unwrap();
    assert!(signed.op_counts.hashes >= 1);
    assert!(signed.op_counts.inversions >= 1);
    let (sig, _) = signed.value;

    let verified = FiniteFieldDss::verify(&domain, b"count", &sig, &pk).unwrap();
    assert_eq!(verified.op_counts.hashes, 2);
    assert_eq!(verified.op_counts.inversions, 2);
    assert_eq!(verified.op_counts.point_multiplications, 0);
}
