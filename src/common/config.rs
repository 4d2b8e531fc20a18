use std::env;
use std::net::SocketAddr;

/// Application label embedded in every challenge message.
pub const APP_LABEL: &str = "MyApp";

pub const SEPOLIA_CHAIN_ID: u64 = 11155111;
pub const POLYGON_CHAIN_ID: u64 = 137;

/// Networks accepted by the network gate.
pub const ALLOWED_CHAINS: [u64; 2] = [SEPOLIA_CHAIN_ID, POLYGON_CHAIN_ID];

pub const DEFAULT_NONCE_TTL_SECS: u64 = 300;

/// Runtime configuration for the verifier service, loaded from the
/// environment with local-development defaults.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub nonce_ttl_secs: u64,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

        let nonce_ttl_secs = env::var("NONCE_TTL_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_NONCE_TTL_SECS);

        Self {
            bind_addr,
            nonce_ttl_secs,
        }
    }
}
