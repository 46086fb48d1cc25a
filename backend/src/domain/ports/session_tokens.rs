//! Port for stateless, signed session tokens.

use crate::domain::SessionIdentity;

use super::define_port_error;

define_port_error! {
    /// Failures raised while issuing or verifying session tokens.
    pub enum SessionTokenError {
        /// The token could not be signed.
        Encode { message: String } => "session token could not be issued: {message}",
        /// The token is malformed, tampered with, or signed with another key.
        Invalid { message: String } => "session token rejected: {message}",
    }
}

/// Issues and verifies self-contained session tokens carrying the user's
/// email. Tokens have no expiry and no server-side record.
#[cfg_attr(test, mockall::automock)]
pub trait SessionTokens: Send + Sync {
    /// Sign a token for `identity`.
    fn issue(&self, identity: &SessionIdentity) -> Result<String, SessionTokenError>;

    /// Verify `token` and decode the identity it carries.
    fn verify(&self, token: &str) -> Result<SessionIdentity, SessionTokenError>;
}
