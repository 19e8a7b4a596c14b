//! Authorization gate consulted by every protected operation

mod gate;


pub use gate::{AuthorizationGate, BEARER_PREFIX};
