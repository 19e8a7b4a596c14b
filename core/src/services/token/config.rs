//! Configuration for the token services

use jsonwebtoken::Algorithm;
use rh_shared::config::auth::RECOMMENDED_SECRET_BYTES;
use rh_shared::JwtConfig;

use crate::errors::DomainError;

/// Signing algorithm; fixed for every token
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Raw key material for the token codec and claims extractor
#[derive(Clone)]
pub struct TokenServiceConfig {
    secret: Vec<u8>,
}

impl TokenServiceConfig {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Decodes the base64 secret from the shared JWT configuration
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let secret = config.decoded_secret()?;

        if config.is_using_default_secret() {
            tracing::warn!(issuer = %config.issuer, "using the default JWT secret, set JWT_SECRET");
        } else if secret.len() < RECOMMENDED_SECRET_BYTES {
            tracing::warn!(
                bytes = secret.len(),
                recommended = RECOMMENDED_SECRET_BYTES,
                "JWT secret is shorter than recommended"
            );
        }

        Ok(Self::new(secret))
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &ALGORITHM)
            .finish()
    }
}
