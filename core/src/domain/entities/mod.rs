//! Domain entities of the authentication core.

pub mod identity;
pub mod token;

#[cfg(test)]
mod tests;

pub use identity::{Identity, Role};
pub use token::{access_token_ttl, Claims};
