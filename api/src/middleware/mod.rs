pub mod auth;
pub mod cors;

pub use auth::{authorize_owner, AdminUser, AuthenticatedUser, JwtAuth};
pub use cors::create_cors;
