//! Shared utilities and common types for RecipeHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and layered loading
//! - Tracing subscriber bootstrap
//! - Error response structures and codes

pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, CorsConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig, ACCESS_TOKEN_TTL_MINUTES,
};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use logging::init_tracing;
