//! Unit tests for the identity entity

use crate::domain::entities::identity::{Identity, Role};
use crate::errors::AuthError;

#[test]
fn test_role_wire_names() {
    assert_eq!(Role::Admin.as_str(), "ADMIN");
    assert_eq!(Role::Customer.to_string(), "CUSTOMER");
    assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
    assert_eq!("CUSTOMER".parse::<Role>().unwrap(), Role::Customer);
}

#[test]
fn test_unknown_role_is_rejected() {
    match "customer".parse::<Role>() {
        Err(AuthError::UnknownRole { role }) => assert_eq!(role, "customer"),
        other => panic!("expected UnknownRole, got {:?}", other),
    }
    assert!(matches!("MODERATOR".parse::<Role>(), Err(AuthError::UnknownRole { .. })));
    assert!(matches!("".parse::<Role>(), Err(AuthError::UnknownRole { .. })));
}

#[test]
fn test_role_serde_uses_wire_names() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    let role: Role = serde_json::from_str("\"CUSTOMER\"").unwrap();
    assert_eq!(role, Role::Customer);
}

#[test]
fn test_ownership() {
    let alice = Identity::new(42, "alice", "a@x.com", Role::Customer);
    assert!(alice.can_act_for(42));
    assert!(!alice.can_act_for(7));
    assert!(!alice.is_admin());

    let root = Identity::new(1, "root", "root@x.com", Role::Admin);
    assert!(root.can_act_for(42));
    assert!(root.is_admin());
}
