//! Client-side login orchestration: nonce fetch, challenge construction,
//! wallet signing, server verification. Strictly sequential; no step starts
//! before the previous one resolves.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::common::challenge::challenge_message;
use crate::common::error::{LoginError, SigningError};
use crate::common::types::{NonceResponse, VerifyRequest, VerifySuccess};
use crate::wallet::{ConnectionState, WalletSigner};

const DEFAULT_SIGNING_TIMEOUT: Duration = Duration::from_secs(120);

pub struct LoginFlow {
    http: reqwest::Client,
    base_url: String,
    app_label: String,
    signing_timeout: Duration,
}

impl LoginFlow {
    pub fn new(base_url: impl Into<String>, app_label: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            app_label: app_label.into(),
            signing_timeout: DEFAULT_SIGNING_TIMEOUT,
        }
    }

    pub fn with_signing_timeout(mut self, timeout: Duration) -> Self {
        self.signing_timeout = timeout;
        self
    }

    /// Runs one login attempt end to end. Every failure is recoverable by
    /// calling `login` again, which starts over with a fresh nonce.
    pub async fn login(
        &self,
        connection: &ConnectionState,
        wallet: &dyn WalletSigner,
    ) -> Result<(), LoginError> {
        let address = connection.address().ok_or(LoginError::WalletNotConnected)?;

        let response = self
            .http
            .get(format!("{}/nonce", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        let NonceResponse { nonce } = response.json().await?;
        debug!(%nonce, "received login challenge nonce");

        let message = challenge_message(&self.app_label, &address, &nonce);

        // The wallet prompt can sit unanswered forever; bound the wait so a
        // dismissed prompt surfaces as a rejection instead of a hang.
        let signature =
            match tokio::time::timeout(self.signing_timeout, wallet.sign_message(&message)).await {
                Ok(Ok(signature)) => signature,
                Ok(Err(SigningError::Rejected)) => return Err(LoginError::WalletSigningRejected),
                Ok(Err(SigningError::Failed(reason))) => {
                    return Err(LoginError::SigningFailed(reason))
                }
                Err(_) => {
                    warn!("wallet signing prompt timed out");
                    return Err(LoginError::WalletSigningRejected);
                }
            };

        let response = self
            .http
            .post(format!("{}/verify", self.base_url))
            .json(&VerifyRequest {
                address: address.to_checksum(None),
                message,
                signature,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "verification rejected");
            return Err(LoginError::VerificationFailed);
        }
        let body: VerifySuccess = response.json().await?;
        if !body.success {
            return Err(LoginError::VerificationFailed);
        }

        info!(%address, "login verified");
        Ok(())
    }
}
