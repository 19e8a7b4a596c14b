//! Token service module for JWT management
//!
//! - `TokenCodec` issues and re-issues HS256 access tokens
//! - `ClaimsExtractor` verifies signatures, decodes claims and checks expiry
//! - `TokenServiceConfig` holds the decoded signing secret

mod codec;
mod config;
mod extractor;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::{TokenServiceConfig, ALGORITHM};
pub use extractor::ClaimsExtractor;
