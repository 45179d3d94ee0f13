//! Request/response contract and session lifecycle through the service

use nhdss_api::{ErrorKind, Variant};
use nhdss_service::{
    DssService, ErrorResponse, GenerateKeysRequest, GenerateKeysResponse, SignResponse,
    VerifyRequest, VerifyResponse,
};
use nhdss_sign::Phase;
use nhdss_tests::fixtures::rng;
use serde_json::json;

#[test]
fn toy_vector_verifies_from_json() {
    let service = DssService::in_memory();
    let request: VerifyRequest = serde_json::from_value(json!({
        "message": "test",
        "signature": { "r": "146", "s": "175", "z": "248" },
        "public_key": { "y": "147" },
        "domain_params": { "p": "467", "q": "233" },
        "variant": "finite_field"
    }))
    .unwrap();

    let response = service.verify(&request).unwrap();
    assert!(response.is_valid);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["diagnostics"]["a"], "130");
    assert_eq!(json["diagnostics"]["b"], "130");
    assert_eq!(json["diagnostics"]["r_bar"], "146");
    assert_eq!(json["op_counts"]["hashes"], 2);
    assert!(json.get("session_op_counts").is_none());
}

#[test]
fn toy_curve_vector_verifies_from_json() {
    let service = DssService::in_memory();
    let domain = json!({
        "name": "toy-97",
        "p": "97", "a": "94", "b": "5", "order": "53",
        "base_point": { "x": "6", "y": "3" }
    });
    let request = |public_point: serde_json::Value| -> VerifyRequest {
        serde_json::from_value(json!({
            "message": "hello",
            "signature": {
                "r": { "x": "93", "y": "70" },
                "s": "44",
                "z": { "x": "76", "y": "33" }
            },
            "public_key": { "public_point": public_point },
            "domain_params": domain.clone(),
            "variant": "elliptic_curve"
        }))
        .unwrap()
    };

    let response = service.verify(&request(json!({ "x": "63", "y": "31" }))).unwrap();
    assert!(response.is_valid);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["diagnostics"]["lhs"], json!({ "x": "93", "y": "70" }));

    let response = service.verify(&request(json!({ "x": "52", "y": "1" }))).unwrap();
    assert!(!response.is_valid);

    // the identity is not a valid public point
    let err = service.verify(&request(json!("infinity"))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn full_session_over_json() {
    let service = DssService::in_memory();
    let mut rng = rng(2024);

    let request: GenerateKeysRequest =
        serde_json::from_str(r#"{"bit_length": 96, "variant": "finite_field"}"#).unwrap();
    let keys = service.generate_keys(&request, &mut rng).unwrap();
    let wire = serde_json::to_string(&keys).unwrap();
    let keys: GenerateKeysResponse = serde_json::from_str(&wire).unwrap();
    assert_eq!(keys.variant, Variant::FiniteField);

    let signed = service.sign_in_session(&keys.session_id, "hello", &mut rng).unwrap();
    let wire = serde_json::to_string(&signed).unwrap();
    let signed: SignResponse = serde_json::from_str(&wire).unwrap();
    assert!(signed.session_op_counts.is_some());

    // the same signature also checks out through the stateless path
    let stateless = service
        .verify(&VerifyRequest {
            message: "hello".into(),
            signature: signed.signature.clone(),
            public_key: keys.public_key.clone(),
            domain_params: keys.domain_params.clone(),
            variant: Variant::FiniteField,
        })
        .unwrap();
    assert!(stateless.is_valid);

    let verified: VerifyResponse = service
        .verify_in_session(&keys.session_id, "hello", &signed.signature)
        .unwrap();
    assert!(verified.is_valid);
    assert_eq!(service.session_phase(&keys.session_id).unwrap(), Phase::Verified);

    service.reset_session(&keys.session_id).unwrap();
    let err = service
        .verify_in_session(&keys.session_id, "hello", &signed.signature)
        .unwrap_err();
    let response = ErrorResponse::from(&err);
    assert_eq!(response.kind, ErrorKind::SessionNotFound);
    assert_eq!(
        serde_json::to_value(&response).unwrap()["kind"],
        "session_not_found"
    );
}

#[test]
fn malformed_requests_are_invalid_input() {
    let service = DssService::in_memory();
    let mut rng = rng(7);

    let bad_integer: VerifyRequest = serde_json::from_value(json!({
        "message": "test",
        "signature": { "r": "one", "s": "175", "z": "248" },
        "public_key": { "y": "147" },
        "domain_params": { "p": "467", "q": "233" },
        "variant": "finite_field"
    }))
    .unwrap();
    assert_eq!(service.verify(&bad_integer).unwrap_err().kind(), ErrorKind::InvalidInput);

    let mixed: VerifyRequest = serde_json::from_value(json!({
        "message": "test",
        "signature": { "r": "146", "s": "175", "z": "248" },
        "public_key": { "public_point": "infinity" },
        "domain_params": { "p": "467", "q": "233" },
        "variant": "finite_field"
    }))
    .unwrap();
    assert_eq!(service.verify(&mixed).unwrap_err().kind(), ErrorKind::InvalidInput);

    let unknown_variant = serde_json::from_str::<GenerateKeysRequest>(
        r#"{"bit_length": 64, "variant": "lattice"}"#,
    );
    assert!(unknown_variant.is_err());

    let too_large = GenerateKeysRequest {
        bit_length: 521,
        variant: Variant::EllipticCurve,
    };
    assert_eq!(
        service.generate_keys(&too_large, &mut rng).unwrap_err().kind(),
        ErrorKind::InvalidInput
    );
}

#[test]
fn sessions_are_independent() {
    let service = DssService::in_memory();
    let mut rng = rng(99);
    let request = GenerateKeysRequest {
        bit_length: 64,
        variant: Variant::FiniteField,
    };
    let first = service.generate_keys(&request, &mut rng).unwrap();
    let second = service.generate_keys(&request, &mut rng).unwrap();

    let signed = service.sign_in_session(&first.session_id, "m", &mut rng).unwrap();
    assert_eq!(service.session_phase(&second.session_id).unwrap(), Phase::KeysGenerated);

    // second session has not signed yet
    let err = service
        .verify_in_session(&second.session_id, "m", &signed.signature)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    service.reset_session(&first.session_id).unwrap();
    assert_eq!(service.session_phase(&second.session_id).unwrap(), Phase::KeysGenerated);
}
