use alloy::primitives::Address;
use async_trait::async_trait;

use crate::common::challenge::challenge_message;
use crate::common::error::SigningError;
use crate::common::types::VerifyRequest;
use crate::wallet::{InMemoryWallet, WalletSigner};

/// Creates a wallet backed by a fresh random key
pub fn test_wallet() -> InMemoryWallet {
    InMemoryWallet::random()
}

/// Builds a fully signed verify request for the given nonce
pub fn signed_verify_request(
    app_label: &str,
    wallet: &InMemoryWallet,
    nonce: &str,
) -> VerifyRequest {
    let message = challenge_message(app_label, &wallet.address(), nonce);
    let signature = wallet.sign_sync(&message).unwrap();
    VerifyRequest {
        address: wallet.address().to_checksum(None),
        message,
        signature,
    }
}

/// Wallet double whose owner always dismisses the signing prompt
pub struct RejectingWallet {
    address: Address,
}

impl RejectingWallet {
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

#[async_trait]
impl WalletSigner for RejectingWallet {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign_message(&self, _message: &str) -> Result<String, SigningError> {
        Err(SigningError::Rejected)
    }
}

/// Wallet double whose signing prompt never resolves
pub struct StalledWallet {
    address: Address,
}

impl StalledWallet {
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

#[async_trait]
impl WalletSigner for StalledWallet {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign_message(&self, _message: &str) -> Result<String, SigningError> {
        std::future::pending().await
    }
}
