//! Signature verification and claim decoding

use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use jsonwebtoken::{crypto, decode_header, DecodingKey};

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::Claims;
use crate::errors::{AuthError, AuthResult};
use crate::services::clock::Clock;

use super::config::{TokenServiceConfig, ALGORITHM};

/// Parses compact tokens, verifies their signature and yields claims.
///
/// Signature and structure failures are reported separately from expiry so
/// callers can tell a stale token from a forged one. Expiry is judged
/// against the injected clock, never by `jsonwebtoken` itself.
#[derive(Clone)]
pub struct ClaimsExtractor {
    decoding_key: Arc<DecodingKey>,
    clock: Arc<dyn Clock>,
}

impl ClaimsExtractor {
    pub fn new(config: &TokenServiceConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            decoding_key: Arc::new(DecodingKey::from_secret(config.secret())),
            clock,
        }
    }

    /// Current instant according to the injected clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Verifies the signature and decodes the claims without checking expiry.
    ///
    /// A header naming any algorithm other than HS256 is `Malformed`; the
    /// signature is only computed once the header is accepted.
    pub fn extract(&self, token: &str) -> AuthResult<Claims> {
        let (message, signature) = split_compact(token)?;

        let header = decode_header(token).map_err(|e| {
            tracing::debug!(error = %e, "token header could not be decoded");
            AuthError::Malformed
        })?;
        if header.alg != ALGORITHM {
            tracing::debug!(alg = ?header.alg, "token signed with an unexpected algorithm");
            return Err(AuthError::Malformed);
        }

        match crypto::verify(signature, message.as_bytes(), &self.decoding_key, ALGORITHM) {
            Ok(true) => {}
            Ok(false) | Err(_) => {
                tracing::debug!("token signature verification failed");
                return Err(AuthError::InvalidSignature);
            }
        }

        decode_payload(message)
    }

    /// Whether a correctly signed token has passed its expiry.
    ///
    /// Signature and format failures are returned as errors; the predicate
    /// has no meaning for such tokens.
    pub fn is_expired(&self, token: &str) -> AuthResult<bool> {
        let claims = self.extract(token)?;
        Ok(claims.is_expired_at(self.now()))
    }

    /// Signature valid and not expired, preserving the failure reason
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        let claims = self.extract(token)?;
        if claims.is_expired_at(self.now()) {
            tracing::debug!(user_id = claims.id, expired_at = ?claims.expires_at(), "token expired");
            return Err(AuthError::Expired);
        }
        Ok(claims)
    }

    pub fn validate(&self, token: &str) -> bool {
        self.verify(token).is_ok()
    }

    /// Full reconstruction of the principal from a valid, unexpired token
    pub fn to_identity(&self, token: &str) -> AuthResult<Identity> {
        let claims = self.verify(token)?;
        claims.to_identity().map_err(|e| {
            tracing::warn!(user_id = claims.id, role = %claims.user_type, "token carries an unknown role");
            e
        })
    }
}

impl std::fmt::Debug for ClaimsExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimsExtractor")
            .field("algorithm", &ALGORITHM)
            .finish_non_exhaustive()
    }
}

/// Splits `header.payload.signature` into the signed message and the signature
fn split_compact(token: &str) -> AuthResult<(&str, &str)> {
    if token.split('.').count() != 3 {
        return Err(AuthError::Malformed);
    }
    token.rsplit_once('.').ok_or(AuthError::Malformed)
}

/// Decodes the claims segment of an already verified `header.payload` message
fn decode_payload(message: &str) -> AuthResult<Claims> {
    let (_, payload) = message.split_once('.').ok_or(AuthError::Malformed)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|e| {
        tracing::debug!(error = %e, "token payload is not base64url");
        AuthError::Malformed
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::debug!(error = %e, "token claims could not be decoded");
        AuthError::Malformed
    })
}
