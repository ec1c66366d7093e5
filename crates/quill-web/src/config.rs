use std::env;
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "sqlite://quill.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Runtime configuration, read from `QUILL_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuillConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

impl QuillConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset variables fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let database_url =
            lookup("QUILL_DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let raw_addr = lookup("QUILL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid QUILL_BIND_ADDR {raw_addr:?}: {e}"))?;

        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}
