//! Authentication configuration: the bearer-token signing secret

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Lifetime of every access token, in minutes. Not configurable.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 30;

/// Base64 of `development-secret-please-change-in-production`
const DEFAULT_SECRET: &str = "ZGV2ZWxvcG1lbnQtc2VjcmV0LXBsZWFzZS1jaGFuZ2UtaW4tcHJvZHVjdGlvbg==";

/// Below this many decoded bytes HMAC-SHA256 keys are considered weak
pub const RECOMMENDED_SECRET_BYTES: usize = 32;

/// JWT signing configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric HMAC secret, base64 encoded (standard alphabet)
    pub secret: String,

    /// Issuer name reported in logs
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            issuer: default_issuer(),
        }
    }
}

// Keeps the secret out of logs and panic messages
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl JwtConfig {
    /// Create a JWT configuration from an already base64 encoded secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create a JWT configuration by encoding raw secret bytes
    pub fn from_raw_secret(secret: impl AsRef<[u8]>) -> Self {
        Self::new(STANDARD.encode(secret))
    }

    /// Decode the configured secret into raw key bytes
    pub fn decoded_secret(&self) -> Result<Vec<u8>, ConfigError> {
        let bytes = STANDARD.decode(self.secret.trim())?;
        if bytes.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(bytes)
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,
}

fn default_issuer() -> String {
    String::from("recipehub")
}
