//! Redis key-value store
//!
//! [`KeyValueStore`] implementation over Redis.
//!
//! ## Features
//!
//! - Multiplexed async connections from a shared client
//! - `SET ... EX` expiry with the seconds figure forwarded verbatim
//! - `KEYS` scans with local glob-pattern validation
//!
//! ## Example
//!
//! ```ignore
//! use cachet_providers::store::RedisStore;
//!
//! let store = RedisStore::new("redis://localhost:6379")?;
//! // Or with host/port
//! let store = RedisStore::with_host_port("localhost", 6379)?;
//! ```

use crate::constants::{REDIS_DEFAULT_PORT, REDIS_URL_SCHEME};
use async_trait::async_trait;
use cachet_domain::error::{Error, Result};
use cachet_domain::ports::KeyValueStore;
use redis::{AsyncCommands, Client, RedisResult, aio::MultiplexedConnection};

/// Redis store
///
/// Uses multiplexed connections for efficient connection reuse.
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
    server: String,
}

impl RedisStore {
    /// Create a new Redis store with connection string
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::store_with_source(format!("Failed to create Redis client: {}", e), e)
        })?;

        Ok(Self {
            client,
            server: server_address(connection_string),
        })
    }

    /// Create a new Redis store with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("{}{}:{}", REDIS_URL_SCHEME, host, port))
    }

    /// Create a new Redis store on the default port
    pub fn with_host(host: &str) -> Result<Self> {
        Self::with_host_port(host, REDIS_DEFAULT_PORT)
    }

    /// Server address, without credentials
    pub fn server_address(&self) -> &str {
        &self.server
    }

    /// Get a connection from the pool
    async fn get_connection(&self) -> Result<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                Error::store_with_source(format!("Failed to get Redis connection: {}", e), e)
            })
    }
}

fn command_failed(command: &str, e: redis::RedisError) -> Error {
    Error::store_with_source(format!("Redis {} failed: {}", command, e), e)
}

/// `host:port/db` part of a connection string
fn server_address(connection_string: &str) -> String {
    let without_scheme = connection_string
        .split_once("://")
        .map_or(connection_string, |(_, rest)| rest);
    without_scheme
        .rsplit_once('@')
        .map_or(without_scheme, |(_, host)| host)
        .to_string()
}

/// Reject glob patterns Redis would not treat as intended
///
/// Catches an unclosed `[` class and a dangling `\` escape.
pub fn validate_pattern(pattern: &str) -> Result<()> {
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return Err(Error::invalid_pattern(pattern, "dangling escape"));
                }
            }
            '[' => loop {
                match chars.next() {
                    Some(']') => break,
                    Some('\\') => {
                        if chars.next().is_none() {
                            return Err(Error::invalid_pattern(pattern, "dangling escape"));
                        }
                    }
                    Some(_) => {}
                    None => {
                        return Err(Error::invalid_pattern(
                            pattern,
                            "unclosed character class",
                        ));
                    }
                }
            },
            _ => {}
        }
    }
    Ok(())
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.get_connection().await?;

        conn.get::<_, Option<Vec<u8>>>(key)
            .await
            .map_err(|e| command_failed("GET", e))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut conn = self.get_connection().await?;

        let result: RedisResult<()> = conn.set(key, value.as_slice()).await;
        result.map_err(|e| command_failed("SET", e))
    }

    async fn set_with_expiry(&self, key: &str, value: Vec<u8>, seconds: i64) -> Result<()> {
        let mut conn = self.get_connection().await?;

        // Plain SET ... EX keeps zero and negative figures intact for the
        // server to judge.
        let result: RedisResult<()> = redis::cmd("SET")
            .arg(key)
            .arg(value.as_slice())
            .arg("EX")
            .arg(seconds)
            .query_async(&mut conn)
            .await;
        result.map_err(|e| command_failed("SET EX", e))
    }

    async fn delete(&self, key: &str) -> Result<u64> {
        let mut conn = self.get_connection().await?;

        let deleted: RedisResult<u64> = conn.del(key).await;
        deleted.map_err(|e| command_failed("DEL", e))
    }

    async fn exists(&self, key: &str) -> Result<u64> {
        let mut conn = self.get_connection().await?;

        let exists: RedisResult<u64> = conn.exists(key).await;
        exists.map_err(|e| command_failed("EXISTS", e))
    }

    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>> {
        validate_pattern(pattern)?;
        let mut conn = self.get_connection().await?;

        let keys: RedisResult<Vec<String>> = conn.keys(pattern).await;
        keys.map_err(|e| command_failed("KEYS", e))
    }

    fn store_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("server", &self.server)
            .finish()
    }
}
