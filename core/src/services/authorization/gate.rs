//! Bearer header parsing and role/ownership decisions

use crate::domain::entities::identity::{Identity, Role};
use crate::errors::{AuthError, AuthResult};
use crate::services::token::ClaimsExtractor;

/// Authorization scheme prefix, including the separating space
pub const BEARER_PREFIX: &str = "Bearer ";

/// Single allow/deny decision point consulted by protected handlers.
///
/// Any token failure, expiry included, rejects before roles are compared.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    extractor: ClaimsExtractor,
}

impl AuthorizationGate {
    pub fn new(extractor: ClaimsExtractor) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &ClaimsExtractor {
        &self.extractor
    }

    /// Strips the `Bearer ` prefix from an `Authorization` header value
    pub fn bearer_token(header_value: Option<&str>) -> AuthResult<&str> {
        let token = header_value
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .ok_or(AuthError::MissingOrMalformedHeader)?;

        if token.is_empty() {
            return Err(AuthError::MissingOrMalformedHeader);
        }
        Ok(token)
    }

    /// Resolves the principal of a valid, unexpired bearer token
    pub fn authenticate(&self, header_value: Option<&str>) -> AuthResult<Identity> {
        let token = Self::bearer_token(header_value)?;
        self.extractor.to_identity(token)
    }

    /// Allows only principals holding exactly `required`
    pub fn require_role(&self, header_value: Option<&str>, required: Role) -> AuthResult<Identity> {
        let identity = self.authenticate(header_value)?;

        if identity.role != required {
            tracing::info!(
                user_id = identity.user_id,
                required = %required,
                actual = %identity.role,
                "role check rejected principal"
            );
            return Err(AuthError::RoleMismatch {
                required,
                actual: identity.role,
            });
        }
        Ok(identity)
    }

    /// Allows the owner of a resource, or an administrator
    pub fn require_owner(&self, header_value: Option<&str>, owner_id: i64) -> AuthResult<Identity> {
        let identity = self.authenticate(header_value)?;

        if !identity.can_act_for(owner_id) {
            tracing::info!(user_id = identity.user_id, owner_id, "ownership check rejected principal");
            return Err(AuthError::NotOwner);
        }
        Ok(identity)
    }
}
