//! # RecipeHub Core
//!
//! Stateless authentication and authorization core of the RecipeHub
//! backend: HS256 bearer-token issuance, claim verification and the
//! authorization gate consulted by protected operations.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{access_token_ttl, Claims, Identity, Role};
pub use errors::{AuthError, AuthResult, DomainError, DomainResult};
pub use services::{
    AuthorizationGate, ClaimsExtractor, Clock, ManualClock, SystemClock, TokenCodec,
    TokenServiceConfig, BEARER_PREFIX,
};

use std::sync::Arc;

use rh_shared::JwtConfig;

/// Token codec and authorization gate built over one secret and one clock
#[derive(Debug, Clone)]
pub struct AuthCore {
    pub codec: TokenCodec,
    pub gate: AuthorizationGate,
}

impl AuthCore {
    pub fn new(config: &TokenServiceConfig, clock: Arc<dyn Clock>) -> Self {
        let codec = TokenCodec::new(config, clock);
        let gate = AuthorizationGate::new(codec.extractor().clone());
        Self { codec, gate }
    }

    /// Builds the core from startup configuration with the wall clock
    pub fn from_jwt_config(config: &JwtConfig) -> DomainResult<Self> {
        let config = TokenServiceConfig::from_jwt_config(config)?;
        Ok(Self::new(&config, Arc::new(SystemClock)))
    }
}
