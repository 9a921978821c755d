//! Authentication adapters.
//!
//! - `SharedPasswordGate` + `SignedSessionValidator` - simple feature set
//! - `OidcSessionValidator` - full feature set
//! - `MockSessionValidator` - tests

mod mock;
mod oidc;
mod password_gate;
mod signed_session;

pub use mock::MockSessionValidator;
pub use oidc::{OidcConfig, OidcSessionValidator};
pub use password_gate::SharedPasswordGate;
pub use signed_session::{IssuedSession, SignedSessionValidator};
