//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `BLOG_*` environment variables, and an
//! optional configuration file, in the usual OrthoConfig precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;
use zeroize::Zeroizing;

use crate::outbound::crypto::DEFAULT_BCRYPT_COST;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const EPHEMERAL_SECRET_BYTES: usize = 32;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Errors raised while turning raw settings into server parameters.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("bcrypt cost {0} is outside the supported range 4..=31")]
    BcryptCost(u32),
    #[error("BLOG_TOKEN_SECRET must be set in release builds")]
    MissingTokenSecret,
    #[error("BLOG_TOKEN_SECRET must not be blank")]
    BlankTokenSecret,
}

/// Configuration values for the blog server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOG")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. In-memory stores are used when absent.
    pub database_url: Option<String>,
    /// HS256 signing secret for session tokens.
    pub token_secret: Option<String>,
    /// Mark the session cookie `Secure`.
    #[ortho_config(default = false)]
    pub cookie_secure: bool,
    /// bcrypt work factor for new password hashes.
    pub bcrypt_cost: Option<u32>,
}

impl AppSettings {
    /// Parsed bind address, falling back to `0.0.0.0:3000`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| SettingsError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    /// Configured bcrypt cost, falling back to 10.
    pub fn bcrypt_cost(&self) -> Result<u32, SettingsError> {
        let cost = self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST);
        if (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            Ok(cost)
        } else {
            Err(SettingsError::BcryptCost(cost))
        }
    }

    /// Session token signing secret.
    ///
    /// Debug builds fall back to a random per-process secret, so sessions do
    /// not survive a restart. Release builds require an explicit secret.
    pub fn token_secret(&self) -> Result<Zeroizing<Vec<u8>>, SettingsError> {
        resolve_secret(self.token_secret.as_deref(), cfg!(debug_assertions))
    }
}

fn resolve_secret(
    configured: Option<&str>,
    allow_ephemeral: bool,
) -> Result<Zeroizing<Vec<u8>>, SettingsError> {
    match configured {
        Some(secret) if secret.trim().is_empty() => Err(SettingsError::BlankTokenSecret),
        Some(secret) => Ok(Zeroizing::new(secret.as_bytes().to_vec())),
        None if allow_ephemeral => {
            warn!("BLOG_TOKEN_SECRET not set; using an ephemeral signing secret (dev only)");
            let bytes: [u8; EPHEMERAL_SECRET_BYTES] = rand::random();
            Ok(Zeroizing::new(hex::encode(bytes).into_bytes()))
        }
        None => Err(SettingsError::MissingTokenSecret),
    }
}
