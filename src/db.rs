use std::str::FromStr;

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
    PgPool,
};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::config::DbConfig;

/// Failure talking to the database.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database unreachable: {0}")]
    Connection(String),
    #[error("query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Connection(e.to_string()),
            other => StoreError::Query(other.to_string()),
        }
    }
}

/// Pooled handle on the Postgres store. Cheap to clone.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    fn options(cfg: &DbConfig) -> Result<(PgPoolOptions, PgConnectOptions), StoreError> {
        let mut connect = PgConnectOptions::from_str(&cfg.url)
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        if cfg.require_ssl {
            connect = connect.ssl_mode(PgSslMode::Require);
        }
        let pool = PgPoolOptions::new()
            .max_connections(cfg.max_connections)
            .acquire_timeout(cfg.acquire_timeout());
        Ok((pool, connect))
    }

    pub async fn connect(cfg: &DbConfig) -> Result<Self, StoreError> {
        let (pool, connect) = Self::options(cfg)?;
        let pool = pool.connect_with(connect).await?;
        info!(
            max_connections = cfg.max_connections,
            ssl = cfg.require_ssl,
            "database pool ready"
        );
        Ok(Self { pool })
    }

    /// Builds the pool without opening a connection; the first query connects.
    #[cfg(test)]
    pub fn connect_lazy(cfg: &DbConfig) -> Result<Self, StoreError> {
        let (pool, connect) = Self::options(cfg)?;
        Ok(Self {
            pool: pool.connect_lazy_with(connect),
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Acquires one connection, runs a trivial statement and releases it.
    pub async fn probe(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        debug!("database probe ok");
        Ok(())
    }

    pub async fn server_time(&self) -> Result<OffsetDateTime, StoreError> {
        let now = sqlx::query_scalar::<_, OffsetDateTime>("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;
        Ok(now)
    }
}
