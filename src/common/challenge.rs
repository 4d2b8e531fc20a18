use alloy::primitives::Address;

/// Builds the text a wallet is asked to sign during login.
///
/// The verifier recomputes nothing: it receives this exact string back and
/// recovers the signer over it, so the format must stay byte-for-byte stable
/// between client and server.
pub fn challenge_message(label: &str, address: &Address, nonce: &str) -> String {
    format!(
        "Sign in to {label}\n\nWallet: {}\nNonce: {nonce}",
        address.to_checksum(None)
    )
}

/// Pulls the nonce back out of a signed challenge message.
pub fn extract_nonce(message: &str) -> Option<&str> {
    message
        .lines()
        .rev()
        .find_map(|line| line.strip_prefix("Nonce: "))
}
