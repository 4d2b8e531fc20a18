use alloy::primitives::{Address, Signature};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::{Signer, SignerSync};
use async_trait::async_trait;

use crate::common::error::SigningError;

/// Seam to the external wallet's "sign this text" operation.
///
/// Signing suspends until the user approves or rejects the prompt in their
/// wallet UI; implementations report a dismissal as `SigningError::Rejected`.
/// Signatures come back in Ethereum wire format: 0x-prefixed hex over the
/// 65-byte r||s||v encoding.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    fn address(&self) -> Address;

    async fn sign_message(&self, message: &str) -> Result<String, SigningError>;
}

/// Wallet backed by an in-process secp256k1 key. Used by the demo client and
/// tests; it never rejects a prompt.
pub struct InMemoryWallet {
    inner: PrivateKeySigner,
}

impl InMemoryWallet {
    pub fn random() -> Self {
        Self {
            inner: PrivateKeySigner::random(),
        }
    }

    pub fn address(&self) -> Address {
        self.inner.address()
    }

    pub fn sign_sync(&self, message: &str) -> Result<String, SigningError> {
        let signature = self
            .inner
            .sign_message_sync(message.as_bytes())
            .map_err(|e| SigningError::Failed(e.to_string()))?;
        Ok(encode_signature(&signature))
    }
}

#[async_trait]
impl WalletSigner for InMemoryWallet {
    fn address(&self) -> Address {
        self.inner.address()
    }

    async fn sign_message(&self, message: &str) -> Result<String, SigningError> {
        let signature = self
            .inner
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| SigningError::Failed(e.to_string()))?;
        Ok(encode_signature(&signature))
    }
}

fn encode_signature(signature: &Signature) -> String {
    format!("0x{}", hex::encode(signature.as_bytes()))
}
