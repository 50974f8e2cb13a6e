//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Enumerated settings that fail to parse
//! fall back to their defaults.

use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::Context;

use crate::domain::notification_hub::DEFAULT_INBOX_CAPACITY;

/// How `place_book` pulls the requested book out of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolRetrieval {
    /// Remove the first matching book directly; other books keep their order.
    #[default]
    Direct,
    /// Cycle non-matching books from the front of the pool to the back until
    /// the match surfaces.
    Requeue,
}

impl FromStr for PoolRetrieval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "requeue" => Ok(Self::Requeue),
            other => Err(format!("unknown pool retrieval mode: {other}")),
        }
    }
}

/// What happens to the books on a shelf when the shelf is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShelfDeletePolicy {
    /// Books go back to the unplaced-book pool in shelf order.
    #[default]
    ReturnToPool,
    /// Books are dropped along with the shelf.
    Discard,
}

impl FromStr for ShelfDeletePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "return_to_pool" | "pool" => Ok(Self::ReturnToPool),
            "discard" => Ok(Self::Discard),
            other => Err(format!("unknown shelf delete policy: {other}")),
        }
    }
}

/// Behavioural switches for the library service.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibraryOptions {
    /// Pool retrieval mode used by `place_book`.
    pub pool_retrieval: PoolRetrieval,
    /// Fate of books on a deleted shelf.
    pub shelf_delete_policy: ShelfDeletePolicy,
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`LibraryConfig::from_env`].
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Capacity of the EventBus broadcast channel.
    pub event_bus_capacity: usize,

    /// Messages retained per reader inbox before the oldest is evicted.
    pub inbox_capacity: usize,

    /// Library behaviour switches.
    pub options: LibraryOptions,
}

impl LibraryConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let raw_addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("invalid LISTEN_ADDR: {raw_addr}"))?;

        let event_bus_capacity = parse_env("EVENT_BUS_CAPACITY", 10_000);
        let inbox_capacity = parse_env("INBOX_CAPACITY", DEFAULT_INBOX_CAPACITY);

        let options = LibraryOptions {
            pool_retrieval: parse_env("POOL_RETRIEVAL", PoolRetrieval::default()),
            shelf_delete_policy: parse_env("SHELF_DELETE_POLICY", ShelfDeletePolicy::default()),
        };

        Ok(Self {
            listen_addr,
            event_bus_capacity,
            inbox_capacity,
            options,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
