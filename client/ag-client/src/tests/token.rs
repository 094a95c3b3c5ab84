use crate::error::ClientError;
use crate::tests::{make_token, sample_user};
use crate::token::decode_claims;

use base64::Engine as _;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use googletest::prelude::*;

const EXP: i64 = 1_900_000_000;

#[test]
fn given_issued_token_when_decoded_then_claims_extracted() {
    let user = sample_user();
    let token = make_token(&user, EXP);

    let claims = decode_claims(&token).unwrap();

    assert_eq!(claims.identity(), user);
    assert_that!(claims.exp, some(eq(EXP)));
    assert_that!(claims.iat, some(eq(EXP - 3600)));
}

#[test]
fn given_forged_signature_when_decoded_then_claims_still_extracted() {
    let user = sample_user();
    let token = make_token(&user, EXP).replace(".signature", ".not-a-real-signature");

    let claims = decode_claims(&token).unwrap();

    assert_that!(claims.email, eq(user.email.as_str()));
}

#[test]
fn given_padded_payload_when_decoded_then_padding_ignored() {
    let user = sample_user();
    let payload = URL_SAFE.encode(format!(
        r#"{{"id":"{}","name":"{}","email":"{}"}}"#,
        user.id, user.name, user.email
    ));
    let token = format!("h.{payload}.s");

    let claims = decode_claims(&token).unwrap();

    assert_eq!(claims.identity(), user);
    assert_that!(claims.exp, none());
}

#[test]
fn given_two_segments_when_decoded_then_token_error() {
    let result = decode_claims("header.payload");

    assert!(matches!(result, Err(ClientError::Token { .. })));
}

#[test]
fn given_non_base64_payload_when_decoded_then_token_error() {
    let result = decode_claims("h.!!!.s");

    assert!(matches!(result, Err(ClientError::Token { .. })));
}

#[test]
fn given_payload_without_claims_when_decoded_then_token_error() {
    let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"someone"}"#);

    let result = decode_claims(&format!("h.{payload}.s"));

    assert!(matches!(result, Err(ClientError::Token { .. })));
}

#[test]
fn given_exp_when_checked_then_expired_at_and_after_exp() {
    let claims = decode_claims(&make_token(&sample_user(), EXP)).unwrap();

    assert_that!(claims.is_expired_at(EXP - 1), eq(false));
    assert_that!(claims.is_expired_at(EXP), eq(true));
    assert_that!(claims.is_expired_at(EXP + 1), eq(true));
}
