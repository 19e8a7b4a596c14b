//! Token issuance

use std::sync::Arc;

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{access_token_ttl, Claims};
use crate::errors::{AuthError, AuthResult};
use crate::services::clock::Clock;

use super::config::{TokenServiceConfig, ALGORITHM};
use super::extractor::ClaimsExtractor;

/// Issues signed access tokens for authenticated principals.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: Arc<EncodingKey>,
    clock: Arc<dyn Clock>,
    extractor: ClaimsExtractor,
}

impl TokenCodec {
    /// Creates a codec and the matching claims extractor over the same key
    pub fn new(config: &TokenServiceConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: Arc::new(EncodingKey::from_secret(config.secret())),
            extractor: ClaimsExtractor::new(config, Arc::clone(&clock)),
            clock,
        }
    }

    /// Extractor sharing this codec's key and clock
    pub fn extractor(&self) -> &ClaimsExtractor {
        &self.extractor
    }

    /// Lifetime of issued tokens in seconds
    pub fn ttl_seconds(&self) -> i64 {
        access_token_ttl().num_seconds()
    }

    /// Mints a token for `identity`, valid for the access token TTL from now
    pub fn issue(&self, identity: &Identity) -> AuthResult<String> {
        let claims = Claims::for_identity(identity, self.clock.now());
        let token = self.sign(&claims)?;
        tracing::debug!(
            user_id = identity.user_id,
            role = %identity.role,
            expires_at = ?claims.expires_at(),
            "issued access token"
        );
        Ok(token)
    }

    /// Mints a fresh token carrying the same principal as `token`.
    ///
    /// The presented token must be correctly signed, unexpired and carry a
    /// known role; its failure kind is propagated otherwise.
    pub fn reissue(&self, token: &str) -> AuthResult<String> {
        let identity = self.extractor.to_identity(token)?;
        self.issue(&identity)
    }

    pub(crate) fn sign(&self, claims: &Claims) -> AuthResult<String> {
        encode(&Header::new(ALGORITHM), claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "failed to sign access token");
            AuthError::TokenGenerationFailed
        })
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &ALGORITHM)
            .field("ttl_seconds", &self.ttl_seconds())
            .finish_non_exhaustive()
    }
}
