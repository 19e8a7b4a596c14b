//! Tests for the token codec and claims extractor

mod codec_tests;

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::identity::{Identity, Role};
use crate::services::clock::ManualClock;
use crate::services::token::{TokenCodec, TokenServiceConfig};

pub(super) const TEST_SECRET: &[u8] = b"recipehub-test-secret-0123456789abcdef";

pub(super) fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub(super) fn create_test_codec() -> (TokenCodec, ManualClock) {
    let clock = ManualClock::new(t0());
    let codec = TokenCodec::new(&TokenServiceConfig::new(TEST_SECRET), Arc::new(clock.clone()));
    (codec, clock)
}

pub(super) fn alice() -> Identity {
    Identity::new(42, "alice", "a@x.com", Role::Customer)
}

pub(super) fn admin() -> Identity {
    Identity::new(1, "root", "root@recipehub.io", Role::Admin)
}

/// Replaces one character of the signature segment with a different one
pub(super) fn tamper_signature(token: &str, index_from_end: usize) -> String {
    let (message, signature) = token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = signature.chars().collect();
    let idx = chars.len() - 1 - index_from_end;
    chars[idx] = if chars[idx] == 'A' { 'B' } else { 'A' };
    format!("{}.{}", message, chars.into_iter().collect::<String>())
}
