//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration binding the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the persistence adapters.
    ///
    /// Without a pool the server falls back to fixture ports, which only
    /// makes sense in tests.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// The socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    pub(crate) fn db_pool(&self) -> Option<&DbPool> {
        self.db_pool.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_is_absent_by_default() {
        let config = ServerConfig::new(([127, 0, 0, 1], 8080).into());
        assert!(config.db_pool().is_none());
        assert_eq!(config.bind_addr().port(), 8080);
    }
}
