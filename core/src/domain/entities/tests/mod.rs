//! Tests for domain entities

mod identity_tests;
