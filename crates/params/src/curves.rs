//! Short Weierstrass curve parameters `y^2 = x^3 + a*x + b (mod p)`
//!
//! Values are big-endian hex strings; the algorithms crate parses them into
//! big integers and validates them when a curve domain is built.

/// Hex-encoded parameters of a prime-order curve group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    pub name: &'static str,
    pub p: &'static str,
    pub a: &'static str,
    pub b: &'static str,
    pub gx: &'static str,
    pub gy: &'static str,
    pub order: &'static str,
}

/// NIST P-192 (secp192r1)
pub const P192: CurveParams = CurveParams {
    name: "P-192",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFC",
    b: "64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1",
    gx: "188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012",
    gy: "07192B95FFC8DA78631011ED6B24CDD573F977A11E794811",
    order: "FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831",
};

/// NIST P-256 (secp256r1)
pub const P256: CurveParams = CurveParams {
    name: "P-256",
    p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    gx: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    gy: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    order: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
};

/// Toy curve `y^2 = x^3 - 3x + 5 (mod 97)` with base `(6, 3)` of order 53
///
/// The full group has 106 points; the base generates the prime-order
/// subgroup.
pub const TOY_97: CurveParams = CurveParams {
    name: "toy-97",
    p: "61",
    a: "5E",
    b: "05",
    gx: "06",
    gy: "03",
    order: "35",
};

/// Largest bit length served by P-192
pub const P192_BITS: usize = 192;

/// Largest bit length served by P-256
pub const P256_BITS: usize = 256;
