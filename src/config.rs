use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    pub url: String,
    /// Require TLS towards the database (certificates are not verified).
    pub require_ssl: bool,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub db: DbConfig,
    pub jwt: JwtConfig,
    pub allowed_origins: Vec<String>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let db = DbConfig {
            url: std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            require_ssl: is_production(
                std::env::var("NODE_ENV").ok().as_deref(),
                std::env::var("VERCEL_ENV").ok().as_deref(),
            ),
            max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            acquire_timeout_secs: env_or("DB_ACQUIRE_TIMEOUT_SECS", 30),
        };
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            ttl_minutes: env_or("JWT_TTL_MINUTES", 60),
        };
        let allowed_origins = parse_origins(
            &std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".into()),
        );
        Ok(Self {
            db,
            jwt,
            allowed_origins,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_or("PORT", 3000),
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    parse_or(std::env::var(key).ok().as_deref(), default)
}

/// Unset or unparsable values fall back to `default`.
fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn is_production(node_env: Option<&str>, vercel_env: Option<&str>) -> bool {
    node_env == Some("production") || vercel_env.is_some_and(|v| !v.is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect()
}
