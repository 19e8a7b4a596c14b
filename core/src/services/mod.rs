//! Business services of the authentication core.

pub mod authorization;
pub mod clock;
pub mod token;

// Re-export commonly used types
pub use authorization::{AuthorizationGate, BEARER_PREFIX};
pub use clock::{Clock, ManualClock, SystemClock};
pub use token::{ClaimsExtractor, TokenCodec, TokenServiceConfig};
