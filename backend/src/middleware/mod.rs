//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route: trace
//! identifiers, form method override, and the session cookie guard.

pub mod method_override;
pub mod session_guard;
pub mod trace;

pub use method_override::MethodOverride;
pub use session_guard::{AuthenticatedUser, RequireSession, SESSION_COOKIE};
pub use trace::Trace;
