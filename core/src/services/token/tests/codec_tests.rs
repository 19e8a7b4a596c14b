//! Unit tests for token issuance

use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Duration;

use super::{admin, alice, create_test_codec, t0, TEST_SECRET};
use crate::domain::entities::token::Claims;
use crate::errors::AuthError;
use crate::services::clock::ManualClock;
use crate::services::token::{TokenCodec, TokenServiceConfig};

fn decode_segment(segment: &str) -> serde_json::Value {
    let bytes = URL_SAFE_NO_PAD.decode(segment).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn test_issue_produces_compact_hs256_token() {
    let (codec, _) = create_test_codec();
    let token = codec.issue(&alice()).unwrap();

    let segments: Vec<&str> = token.split('.').collect();
    assert_eq!(segments.len(), 3);
    assert!(segments.iter().all(|s| !s.is_empty()));
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'));

    let header = decode_segment(segments[0]);
    assert_eq!(header["alg"], "HS256");

    let payload = decode_segment(segments[1]);
    assert_eq!(payload["sub"], "a@x.com");
    assert_eq!(payload["id"], 42);
    assert_eq!(payload["userName"], "alice");
    assert_eq!(payload["userType"], "CUSTOMER");
    assert_eq!(payload["iat"], t0().timestamp());
    assert_eq!(payload["exp"], t0().timestamp() + 1800);
}

#[test]
fn test_issue_is_deterministic_for_same_instant() {
    let (codec, _) = create_test_codec();
    assert_eq!(codec.issue(&alice()).unwrap(), codec.issue(&alice()).unwrap());
}

#[test]
fn test_ttl_is_thirty_minutes() {
    let (codec, clock) = create_test_codec();
    assert_eq!(codec.ttl_seconds(), 30 * 60);

    clock.advance(Duration::hours(5));
    let claims = codec.extractor().extract(&codec.issue(&admin()).unwrap()).unwrap();
    assert_eq!(claims.iat, (t0() + Duration::hours(5)).timestamp());
    assert_eq!(claims.exp, claims.iat + 1800);
}

#[test]
fn test_reissue_refreshes_timing_and_keeps_principal() {
    let (codec, clock) = create_test_codec();
    let original = codec.issue(&alice()).unwrap();

    clock.advance(Duration::minutes(20));
    let refreshed = codec.reissue(&original).unwrap();

    let claims = codec.extractor().extract(&refreshed).unwrap();
    assert_eq!(claims.iat, (t0() + Duration::minutes(20)).timestamp());
    assert_eq!(claims.exp, claims.iat + 1800);
    assert_eq!(codec.extractor().to_identity(&refreshed).unwrap(), alice());

    // The original would have lapsed by now, the refreshed one has not
    clock.advance(Duration::minutes(15));
    assert!(!codec.extractor().validate(&original));
    assert!(codec.extractor().validate(&refreshed));
}

#[test]
fn test_reissue_propagates_extractor_failures() {
    let (codec, clock) = create_test_codec();
    let token = codec.issue(&alice()).unwrap();

    assert_eq!(codec.reissue("garbage"), Err(AuthError::Malformed));
    assert_eq!(
        codec.reissue(&super::tamper_signature(&token, 3)),
        Err(AuthError::InvalidSignature)
    );

    clock.advance(Duration::minutes(31));
    assert_eq!(codec.reissue(&token), Err(AuthError::Expired));
}

#[test]
fn test_reissue_rejects_unknown_role() {
    let (codec, _) = create_test_codec();
    let mut claims = Claims::for_identity(&alice(), t0());
    claims.user_type = "CHEF".to_string();
    let token = codec.sign(&claims).unwrap();

    assert!(matches!(codec.reissue(&token), Err(AuthError::UnknownRole { .. })));
}

#[test]
fn test_codecs_with_different_secrets_do_not_interoperate() {
    let (codec, clock) = create_test_codec();
    let other = TokenCodec::new(
        &TokenServiceConfig::new(b"another-secret".to_vec()),
        Arc::new(clock.clone()),
    );

    let token = other.issue(&alice()).unwrap();
    assert_eq!(codec.extractor().extract(&token), Err(AuthError::InvalidSignature));
    assert!(other.extractor().validate(&token));
}

#[test]
fn test_shared_clock_drives_issue_and_verify() {
    let clock = ManualClock::new(t0());
    let codec = TokenCodec::new(&TokenServiceConfig::new(TEST_SECRET), Arc::new(clock.clone()));
    assert_eq!(codec.extractor().now(), t0());
    clock.advance(Duration::seconds(10));
    assert_eq!(codec.extractor().now(), t0() + Duration::seconds(10));
}
