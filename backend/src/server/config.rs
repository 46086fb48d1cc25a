//! HTTP server configuration object.

use std::net::SocketAddr;

use blog::outbound::crypto::DEFAULT_BCRYPT_COST;
use blog::outbound::persistence::DbPool;
use zeroize::Zeroizing;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) token_secret: Zeroizing<Vec<u8>>,
    pub(crate) cookie_secure: bool,
    pub(crate) bcrypt_cost: u32,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration with in-memory stores and default cookie
    /// and hashing settings.
    #[must_use]
    pub fn new(token_secret: Zeroizing<Vec<u8>>, bind_addr: SocketAddr) -> Self {
        Self {
            token_secret,
            cookie_secure: false,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            bind_addr,
            db_pool: None,
        }
    }

    /// Mark the session cookie `Secure`.
    #[must_use]
    pub fn with_cookie_secure(mut self, cookie_secure: bool) -> Self {
        self.cookie_secure = cookie_secure;
        self
    }

    /// Override the bcrypt work factor.
    #[must_use]
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Attach a database connection pool.
    ///
    /// When provided, the server uses the Diesel adapters for every store
    /// instead of the in-memory ones.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
