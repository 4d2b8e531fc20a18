use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use tokio::sync::Mutex;

/// Generates a fresh random challenge nonce: 16 bytes from the OS entropy
/// source, rendered as 32 lowercase hex characters.
///
/// Randomness source failure aborts the process; there is no recovery path.
pub fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// In-memory store of issued nonces.
///
/// A nonce is valid for one verification only: `consume` removes it, so a
/// replayed challenge fails even with a perfectly valid signature. Entries
/// older than the TTL are rejected and swept on the next issue.
pub struct NonceStore {
    ttl: Duration,
    issued: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl NonceStore {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl: Duration::seconds(ttl_secs as i64),
            issued: Mutex::new(HashMap::new()),
        }
    }

    /// Generates a nonce and records it as outstanding.
    pub async fn issue(&self) -> String {
        let nonce = generate_nonce();
        let now = Utc::now();

        let mut issued = self.issued.lock().await;
        issued.retain(|_, issued_at| now - *issued_at <= self.ttl);
        issued.insert(nonce.clone(), now);
        nonce
    }

    /// Removes the nonce, returning true only if it was issued by this store
    /// and has not expired. A second call with the same value returns false.
    pub async fn consume(&self, nonce: &str) -> bool {
        let mut issued = self.issued.lock().await;
        match issued.remove(nonce) {
            Some(issued_at) => Utc::now() - issued_at <= self.ttl,
            None => false,
        }
    }
}
