//! Claims carried by a signed access token.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use rh_shared::ACCESS_TOKEN_TTL_MINUTES;

use super::identity::{Identity, Role};
use crate::errors::AuthError;

/// Access token lifetime
pub fn access_token_ttl() -> Duration {
    Duration::minutes(ACCESS_TOKEN_TTL_MINUTES)
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Subject (email)
    pub sub: String,

    /// User ID
    pub id: i64,

    /// Display name
    pub user_name: String,

    /// Role name, kept as a raw string until mapped to [`Role`]
    pub user_type: String,

    /// Issued at timestamp (seconds)
    pub iat: i64,

    /// Expiration timestamp (seconds), always `iat` plus the access token TTL
    pub exp: i64,
}

impl Claims {
    /// Creates the claim set for `identity` issued at `now`
    pub fn for_identity(identity: &Identity, now: DateTime<Utc>) -> Self {
        let iat = now.timestamp();
        Self {
            sub: identity.email.clone(),
            id: identity.user_id,
            user_name: identity.user_name.clone(),
            user_type: identity.role.as_str().to_string(),
            iat,
            exp: iat + access_token_ttl().num_seconds(),
        }
    }

    /// Whether the token has expired at `now`; the instant `exp` itself is expired
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Expiry instant, if representable
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Maps the role claim and rebuilds the principal
    pub fn to_identity(&self) -> Result<Identity, AuthError> {
        let role: Role = self.user_type.parse()?;
        Ok(Identity {
            user_id: self.id,
            user_name: self.user_name.clone(),
            email: self.sub.clone(),
            role,
        })
    }
}
