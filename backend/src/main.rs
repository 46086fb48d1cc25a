//! Backend entry-point: loads settings, prepares storage, and serves the blog.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use blog::inbound::http::health::HealthState;
use blog::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use blog::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let config = ServerConfig::new(
        settings.token_secret().map_err(std::io::Error::other)?,
        settings.bind_addr().map_err(std::io::Error::other)?,
    )
    .with_cookie_secure(settings.cookie_secure)
    .with_bcrypt_cost(settings.bcrypt_cost().map_err(std::io::Error::other)?);

    let config = match settings.database_url.as_deref() {
        Some(url) => {
            run_pending_migrations(url)
                .await
                .map_err(std::io::Error::other)?;
            let pool_config = PoolConfig::new(url);
            info!(database = %pool_config.redacted_url(), "using PostgreSQL stores");
            let pool = DbPool::new(pool_config)
                .await
                .map_err(std::io::Error::other)?;
            config.with_db_pool(pool)
        }
        None => {
            warn!("BLOG_DATABASE_URL not set; content is kept in memory only");
            config
        }
    };

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %config.bind_addr(), "starting blog server");
    create_server(health_state, config)?.await
}
