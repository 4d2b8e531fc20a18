use serde::{Deserialize, Serialize};

/// Response body for the nonce endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NonceResponse {
    pub nonce: String,
}

/// Request structure for the verify endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub address: String,
    pub message: String,
    pub signature: String,
}

/// Success body returned when a signature validates
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifySuccess {
    pub success: bool,
}

/// Error body returned when a request is rejected
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyFailure {
    pub error: String,
}
