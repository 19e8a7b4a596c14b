//! Domain layer containing the principal and token claim types.

pub mod entities;

pub use entities::*;
