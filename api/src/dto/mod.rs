pub mod auth;

pub use auth::{IdentityResponse, TokenResponse};
