//! Session cookie construction.
//!
//! The session is stateless: the `token` cookie carries the signed token and
//! logging out only asks the browser to drop it.

use actix_web::cookie::{Cookie, SameSite};

use crate::middleware::SESSION_COOKIE;

/// Attributes applied to the session cookie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCookieConfig {
    /// Mark the cookie `Secure`; enable behind TLS.
    pub secure: bool,
}

impl SessionCookieConfig {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Cookie carrying a freshly issued token.
    pub fn issue(&self, token: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, token)
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .finish()
    }

    /// Removal cookie that expires the session in the browser.
    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE, "")
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn issued_cookie_is_http_only_on_root_path(#[case] secure: bool) {
        let cookie = SessionCookieConfig::new(secure).issue("signed".to_owned());

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "signed");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(secure));
    }

    #[rstest]
    fn removal_cookie_is_expired_and_empty() {
        let cookie = SessionCookieConfig::default().removal();

        assert_eq!(cookie.name(), "token");
        assert!(cookie.value().is_empty());
        assert_eq!(cookie.max_age(), Some(actix_web::cookie::time::Duration::ZERO));
    }
}
