//! Toy-domain scenarios with known answers for both schemes

use nhdss_algorithms::Point;
use nhdss_api::{DssScheme, ErrorKind};
use nhdss_sign::{
    EcPublicKey, EcSignature, EllipticCurveDss, FfPublicKey, FfSignature, FiniteFieldDss,
};
use nhdss_tests::fixtures::{ec_toy, ff_toy, flip_bit, rng};
use nhdss_tests::vectors::{EC_OTHER_PUBLIC, EC_VECTORS, FF_VECTORS};
use num_bigint_dig::BigUint;

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

fn pt((x, y): (u64, u64)) -> Point {
    Point::affine(big(x), big(y))
}

#[test]
fn finite_field_toy_vectors() {
    let domain = ff_toy();
    for v in FF_VECTORS.iter() {
        let (pk, sk) = FiniteFieldDss::derive_keypair(&domain, &big(v.seed)).unwrap().value;
        assert_eq!(sk.expose(), &big(v.x));
        assert_eq!(pk.y(), &big(v.y));

        let (sig, trace) = FiniteFieldDss::sign_with_nonces(&domain, v.message, &sk, &big(v.k), &big(v.u))
            .unwrap()
            .value;
        assert_eq!(sig, FfSignature { r: big(v.r), s: big(v.s), z: big(v.z) });
        assert_eq!(trace.e, big(v.e));

        let verified = FiniteFieldDss::verify(&domain, v.message, &sig, &pk).unwrap().value;
        assert!(verified.is_valid);

        let flipped = flip_bit(v.message, v.rejected_flip);
        assert!(!FiniteFieldDss::verify(&domain, &flipped, &sig, &pk).unwrap().value.is_valid);
    }
}

#[test]
fn finite_field_toy_random_signing() {
    let domain = ff_toy();
    let mut rng = rng(467);
    let (pk, sk) = FiniteFieldDss::keypair(&domain, &mut rng).unwrap().value;

    // y * x^x == 1 (mod p)
    let x = sk.expose();
    assert_eq!((pk.y() * x.modpow(x, domain.p())) % domain.p(), big(1));

    for _ in 0..20 {
        let (sig, _) = FiniteFieldDss::sign(&domain, b"test", &sk, &mut rng).unwrap().value;
        assert!(FiniteFieldDss::verify(&domain, b"test", &sig, &pk).unwrap().value.is_valid);
    }
}

#[test]
fn elliptic_curve_toy_vectors() {
    let curve = ec_toy();
    for v in EC_VECTORS.iter() {
        let (pk, sk) = EllipticCurveDss::derive_keypair(&curve, &big(v.m)).unwrap().value;
        assert_eq!(sk.expose(), &pt(v.generator));
        assert_eq!(pk.point(), &pt(v.public));

        let (sig, trace) = EllipticCurveDss::sign_with_nonces(&curve, v.message, &sk, &big(v.k), &big(v.u))
            .unwrap()
            .value;
        assert_eq!(sig, EcSignature { r: pt(v.r), s: big(v.s), z: pt(v.z) });
        assert_eq!(trace.e, big(v.e));

        assert!(EllipticCurveDss::verify(&curve, v.message, &sig, &pk).unwrap().value.is_valid);

        let flipped = flip_bit(v.message, v.rejected_flip);
        assert!(!EllipticCurveDss::verify(&curve, &flipped, &sig, &pk).unwrap().value.is_valid);

        let other = EcPublicKey::new(pt(EC_OTHER_PUBLIC));
        assert!(!EllipticCurveDss::verify(&curve, v.message, &sig, &other).unwrap().value.is_valid);
    }
}

#[test]
fn elliptic_curve_toy_random_signing() {
    let curve = ec_toy();
    let mut rng = rng(97);
    let (pk, sk) = EllipticCurveDss::keypair(&curve, &mut rng).unwrap().value;
    assert!(curve.is_on_curve(sk.expose()));
    assert!(curve.is_on_curve(pk.point()));

    // P = (-π(G) mod n) * G
    let neg = curve.order() - curve.scalar_of(sk.expose());
    assert_eq!(&curve.mul(&neg, sk.expose()), pk.point());

    for _ in 0..20 {
        let (sig, _) = EllipticCurveDss::sign(&curve, b"hello", &sk, &mut rng).unwrap().value;
        assert!(EllipticCurveDss::verify(&curve, b"hello", &sig, &pk).unwrap().value.is_valid);
    }
}

#[test]
fn malformed_inputs_are_rejected_before_arithmetic() {
    let domain = ff_toy();
    let (pk, _) = FiniteFieldDss::derive_keypair(&domain, &big(5)).unwrap().value;
    let sig = FfSignature { r: big(500), s: big(1), z: big(1) };
    let err = FiniteFieldDss::verify(&domain, b"test", &sig, &pk).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = FiniteFieldDss::verify(
        &domain,
        b"test",
        &FfSignature { r: big(146), s: big(175), z: big(248) },
        &FfPublicKey::new(big(467)),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let curve = ec_toy();
    let (pk, _) = EllipticCurveDss::derive_keypair(&curve, &big(7)).unwrap().value;
    let off_curve = EcSignature { r: pt((1, 1)), s: big(44), z: pt((76, 33)) };
    let err = EllipticCurveDss::verify(&curve, b"hello", &off_curve, &pk).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
