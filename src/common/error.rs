use thiserror::Error;

/// Errors from signature verification.
///
/// Cryptographically wrong but well-formed signatures are not errors; they
/// come back as `Ok(false)` from the verifier.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Errors from a wallet signer.
#[derive(Debug, Error)]
pub enum SigningError {
    #[error("user rejected the signing request")]
    Rejected,
    #[error("wallet signing failed: {0}")]
    Failed(String),
}

/// Errors surfaced to the user by the login flow. All of these are
/// recoverable by re-invoking the flow.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("no wallet connected")]
    WalletNotConnected,
    #[error("signing request was rejected or timed out")]
    WalletSigningRejected,
    #[error("wallet signing failed: {0}")]
    SigningFailed(String),
    #[error("signature verification failed")]
    VerificationFailed,
    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

/// Transport or execution failure reported by the chain RPC collaborator.
#[derive(Debug, Error)]
#[error("chain rpc error: {0}")]
pub struct RpcError(pub String);

/// Errors from guarded dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("wallet or network gate denied access")]
    NotAuthorized,
    #[error("no counter contract deployed for chain {0}")]
    UnsupportedChain(u64),
    #[error(transparent)]
    Rpc(#[from] RpcError),
}
