use std::time::Duration;

use alloy::primitives::{Address, B256};
use async_trait::async_trait;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wallet_auth_service::common::config::{APP_LABEL, SEPOLIA_CHAIN_ID};
use wallet_auth_service::common::error::RpcError;
use wallet_auth_service::dashboard::{self, ChainRpc, View};
use wallet_auth_service::flow::LoginFlow;
use wallet_auth_service::wallet::{ConnectionState, InMemoryWallet};

/// Canned chain RPC so the demo dashboard renders without a node.
struct StubRpc {
    count: u64,
}

#[async_trait]
impl ChainRpc for StubRpc {
    async fn read_counter(&self, _contract: Address) -> Result<u64, RpcError> {
        Ok(self.count)
    }

    async fn increment_counter(&self, _contract: Address) -> Result<B256, RpcError> {
        Ok(B256::ZERO)
    }

    async fn wait_for_receipt(&self, _tx: B256) -> Result<bool, RpcError> {
        Ok(true)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Get the verifier service URL from command line arguments or use default
    let verifier_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:3000".to_string());
    info!("using verifier service at {verifier_url}");

    let wallet = InMemoryWallet::random();
    let connection = ConnectionState::Connected {
        address: wallet.address(),
        chain_id: SEPOLIA_CHAIN_ID,
    };
    info!("demo wallet address: {}", wallet.address().to_checksum(None));

    let flow = LoginFlow::new(verifier_url, APP_LABEL);
    if let Err(err) = flow.login(&connection, &wallet).await {
        error!("login failed: {err}");
        return Err(err.into());
    }
    info!("login successful, redirecting to the dashboard");

    // Short pause before the "redirect", matching the login page pacing.
    tokio::time::sleep(Duration::from_secs(1)).await;

    let rpc = StubRpc { count: 7 };
    match dashboard::render(&connection, &rpc).await? {
        View::Content(view) => info!("\n{view}"),
        View::Message(text) => info!("{text}"),
        View::Hidden => {}
    }
    Ok(())
}
