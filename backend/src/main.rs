//! Backend entry-point: configuration, migrations, and server startup.

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::server::{ServerConfig, create_server};

fn bind_addr_from_env() -> std::io::Result<SocketAddr> {
    let raw = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
    raw.parse()
        .map_err(|err| std::io::Error::other(format!("invalid BIND_ADDR {raw:?}: {err}")))
}

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

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;
    let bind_addr = bind_addr_from_env()?;

    run_pending_migrations(&database_url)
        .map_err(|err| std::io::Error::other(format!("apply migrations: {err}")))?;

    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(|err| std::io::Error::other(format!("build connection pool: {err}")))?;

    let config = ServerConfig::new(bind_addr).with_db_pool(pool);
    let server = create_server(config)?;
    info!(%bind_addr, "server started");

    server.await
}
