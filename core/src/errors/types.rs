//! Failure kinds of the authentication and authorization core
//!
//! Every kind is surfaced distinctly; mapping kinds to transport statuses
//! belongs to the presentation layer.

use thiserror::Error;

use crate::domain::entities::identity::Role;

/// Authentication and authorization failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing or malformed Authorization header")]
    MissingOrMalformedHeader,

    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Role {actual} does not satisfy required role {required}")]
    RoleMismatch { required: Role, actual: Role },

    #[error("Unknown role: {role}")]
    UnknownRole { role: String },

    #[error("Principal does not own this resource")]
    NotOwner,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl AuthError {
    /// Whether the caller must obtain a new token before retrying.
    ///
    /// `RoleMismatch`, `UnknownRole` and `NotOwner` describe a valid principal
    /// lacking privileges; a fresh token would not change the outcome.
    pub fn requires_reauthentication(&self) -> bool {
        !matches!(
            self,
            AuthError::RoleMismatch { .. } | AuthError::UnknownRole { .. } | AuthError::NotOwner
        )
    }

    /// Short stable name used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::MissingOrMalformedHeader => "missing_or_malformed_header",
            AuthError::Malformed => "malformed",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::Expired => "expired",
            AuthError::RoleMismatch { .. } => "role_mismatch",
            AuthError::UnknownRole { .. } => "unknown_role",
            AuthError::NotOwner => "not_owner",
            AuthError::TokenGenerationFailed => "token_generation_failed",
        }
    }
}

/// Result alias for the authentication core
pub type AuthResult<T> = Result<T, AuthError>;
