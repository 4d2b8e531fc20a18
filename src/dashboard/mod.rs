//! Protected dashboard over the external chain-RPC collaborator.
//!
//! The counter contract itself lives on chain; this module only knows the
//! per-network deployment addresses and how to project a guarded view.

use alloy::primitives::{address, Address, B256};
use async_trait::async_trait;
use tracing::debug;

use crate::common::config::{POLYGON_CHAIN_ID, SEPOLIA_CHAIN_ID};
use crate::common::error::{DashboardError, RpcError};
use crate::gates::{evaluate_all, Gate, GateOutcome, NetworkGate, WalletGate};
use crate::wallet::ConnectionState;

/// Chain-RPC operations the dashboard needs: contract read, contract write,
/// and receipt waiting. Fixed external interface; tests substitute a fake.
#[async_trait]
pub trait ChainRpc: Send + Sync {
    async fn read_counter(&self, contract: Address) -> Result<u64, RpcError>;

    async fn increment_counter(&self, contract: Address) -> Result<B256, RpcError>;

    async fn wait_for_receipt(&self, tx: B256) -> Result<bool, RpcError>;
}

/// Counter deployment for the given chain, if one exists.
pub fn counter_address(chain_id: u64) -> Option<Address> {
    match chain_id {
        SEPOLIA_CHAIN_ID => Some(address!("5FbDB2315678afecb367f032d93F642f64180aa3")),
        POLYGON_CHAIN_ID => Some(address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512")),
        _ => None,
    }
}

pub fn chain_name(chain_id: u64) -> &'static str {
    match chain_id {
        SEPOLIA_CHAIN_ID => "Sepolia",
        POLYGON_CHAIN_ID => "Polygon",
        _ => "Unknown",
    }
}

/// Final render outcome of the guarded dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Hidden,
    Message(String),
    Content(String),
}

/// Renders the dashboard behind the composed wallet/network guard.
pub async fn render(state: &ConnectionState, rpc: &dyn ChainRpc) -> Result<View, RpcError> {
    let network = NetworkGate::default();
    let gates: [&dyn Gate; 2] = [&WalletGate, &network];

    match evaluate_all(&gates, state) {
        GateOutcome::Nothing => return Ok(View::Hidden),
        GateOutcome::Fallback(text) => return Ok(View::Message(text)),
        GateOutcome::Admit => {}
    }

    let (address, chain_id) = match state {
        ConnectionState::Connected { address, chain_id } => (*address, *chain_id),
        _ => return Ok(View::Hidden),
    };
    let contract = match counter_address(chain_id) {
        Some(contract) => contract,
        None => return Ok(View::Message("No counter contract on this network.".to_string())),
    };

    let count = rpc.read_counter(contract).await?;
    debug!(%contract, count, "read counter");

    Ok(View::Content(format!(
        "Dashboard\nWelcome: {}\nNetwork: {}\nCurrent Count: {count}",
        address.to_checksum(None),
        chain_name(chain_id),
    )))
}

/// Sends an increment transaction and waits for its receipt. Runs behind the
/// same guard as `render`; callers that are not admitted get no write path.
pub async fn increment(state: &ConnectionState, rpc: &dyn ChainRpc) -> Result<bool, DashboardError> {
    let network = NetworkGate::default();
    let gates: [&dyn Gate; 2] = [&WalletGate, &network];
    if evaluate_all(&gates, state) != GateOutcome::Admit {
        return Err(DashboardError::NotAuthorized);
    }

    let chain_id = state.chain_id().ok_or(DashboardError::NotAuthorized)?;
    let contract = counter_address(chain_id).ok_or(DashboardError::UnsupportedChain(chain_id))?;

    let tx = rpc.increment_counter(contract).await?;
    debug!(%contract, %tx, "increment submitted");
    Ok(rpc.wait_for_receipt(tx).await?)
}
