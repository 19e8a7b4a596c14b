//! Shared fixtures for HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::{TimeZone, Utc};
use rh_core::{AuthCore, Identity, ManualClock, Role, TokenServiceConfig};

pub fn test_core() -> (web::Data<AuthCore>, ManualClock) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    let core = AuthCore::new(
        &TokenServiceConfig::new(b"api-test-secret-0123456789abcdef".to_vec()),
        Arc::new(clock.clone()),
    );
    (web::Data::new(core), clock)
}

pub fn alice() -> Identity {
    Identity::new(42, "alice", "a@x.com", Role::Customer)
}

pub fn admin() -> Identity {
    Identity::new(1, "root", "root@recipehub.io", Role::Admin)
}

pub fn bearer_for(core: &AuthCore, identity: &Identity) -> String {
    format!("Bearer {}", core.codec.issue(identity).unwrap())
}
