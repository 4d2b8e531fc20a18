//! Render-blocking access predicates for protected views.
//!
//! Each gate owns one axis of admission control and either admits or names
//! what to render instead. Gates compose as an ordered list: the first
//! denial wins, so stacking N gates needs no nesting.

use crate::common::config::ALLOWED_CHAINS;
use crate::wallet::ConnectionState;

/// What a gate decides to render in place of the protected content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Predicate passed; continue to the next gate or the content itself.
    Admit,
    /// Render this text instead of the content.
    Fallback(String),
    /// Render nothing at all.
    Nothing,
}

pub trait Gate {
    fn evaluate(&self, state: &ConnectionState) -> GateOutcome;
}

/// Admits only when a wallet is connected. A pure projection of the
/// connector status; it holds no state of its own.
pub struct WalletGate;

impl Gate for WalletGate {
    fn evaluate(&self, state: &ConnectionState) -> GateOutcome {
        match state {
            ConnectionState::Connecting | ConnectionState::Reconnecting => {
                GateOutcome::Fallback("Checking wallet connection…".to_string())
            }
            ConnectionState::Disconnected => GateOutcome::Fallback(
                "Wallet required. Please connect your wallet to continue.".to_string(),
            ),
            ConnectionState::Connected { .. } => GateOutcome::Admit,
        }
    }
}

/// Admits only when the connected chain is on the allow-list. With no
/// connection at all it renders nothing, which is distinct from the
/// wrong-network warning.
pub struct NetworkGate {
    allowed: Vec<u64>,
}

impl NetworkGate {
    pub fn new(allowed: impl Into<Vec<u64>>) -> Self {
        Self {
            allowed: allowed.into(),
        }
    }
}

impl Default for NetworkGate {
    fn default() -> Self {
        Self::new(ALLOWED_CHAINS)
    }
}

impl Gate for NetworkGate {
    fn evaluate(&self, state: &ConnectionState) -> GateOutcome {
        match state.chain_id() {
            None => GateOutcome::Nothing,
            Some(chain_id) if self.allowed.contains(&chain_id) => GateOutcome::Admit,
            Some(_) => GateOutcome::Fallback(
                "Wrong network. Please switch to Sepolia or Polygon.".to_string(),
            ),
        }
    }
}

/// Runs the gates in order, short-circuiting on the first denial.
pub fn evaluate_all(gates: &[&dyn Gate], state: &ConnectionState) -> GateOutcome {
    for gate in gates {
        match gate.evaluate(state) {
            GateOutcome::Admit => continue,
            denied => return denied,
        }
    }
    GateOutcome::Admit
}

/// Projects a guarded view to its final text: the content when every gate
/// admits, a fallback when one denies, or nothing.
pub fn render_guarded(gates: &[&dyn Gate], state: &ConnectionState, content: &str) -> Option<String> {
    match evaluate_all(gates, state) {
        GateOutcome::Admit => Some(content.to_string()),
        GateOutcome::Fallback(text) => Some(text),
        GateOutcome::Nothing => None,
    }
}
