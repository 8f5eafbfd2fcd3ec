//! Environment-driven server configuration.

use macromap_market_data::DEFAULT_CACHE_TTL;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_CACHE_TTL_SECS: u64 = DEFAULT_CACHE_TTL.as_secs();

#[derive(Clone, Debug)]
pub struct Config {
    /// Socket address the server binds to.
    pub listen_addr: String,
    /// Directory served as the static frontend.
    pub static_dir: String,
    /// Market data cache lifetime, in seconds.
    pub cache_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr =
            std::env::var("MM_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let static_dir =
            std::env::var("MM_STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());
        let cache_ttl_secs = std::env::var("MM_CACHE_TTL_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_CACHE_TTL_SECS);

        Self {
            listen_addr,
            static_dir,
            cache_ttl_secs,
        }
    }
}
