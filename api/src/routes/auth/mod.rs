//! Authentication route handlers
//!
//! Credential checking at login and registration lives with the user
//! management service; these endpoints only operate on issued tokens.

pub mod me;
pub mod refresh;

pub use me::me;
pub use refresh::refresh;
