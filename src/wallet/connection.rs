use alloy::primitives::Address;
use tokio::sync::watch;

/// Status of the external wallet connector, carried as an explicit value.
///
/// Gates and the login flow take this as an argument instead of reaching
/// into ambient connector state, so every consumer sees the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Reconnecting,
    Connected { address: Address, chain_id: u64 },
}

impl ConnectionState {
    pub fn address(&self) -> Option<Address> {
        match self {
            ConnectionState::Connected { address, .. } => Some(*address),
            _ => None,
        }
    }

    pub fn chain_id(&self) -> Option<u64> {
        match self {
            ConnectionState::Connected { chain_id, .. } => Some(*chain_id),
            _ => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }
}

/// Publisher side of the wallet connection state.
///
/// The external connector drives transitions through `set`; interested
/// parties call `subscribe` and re-evaluate their gates whenever the
/// receiver reports a change.
pub struct WalletConnection {
    tx: watch::Sender<ConnectionState>,
}

impl WalletConnection {
    pub fn new(initial: ConnectionState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn set(&self, state: ConnectionState) {
        self.tx.send_replace(state);
    }

    pub fn current(&self) -> ConnectionState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.tx.subscribe()
    }
}
