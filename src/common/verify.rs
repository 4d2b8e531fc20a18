use alloy::primitives::{Address, Signature};

use crate::common::error::VerifyError;

/// Verifies that `signature` was produced by the key behind `address` over
/// exactly `message`.
///
/// Recovery runs over the EIP-191 personal-sign hash of the message bytes,
/// delegated to the audited secp256k1 implementation; nothing cryptographic
/// is hand-rolled here. Input that cannot be parsed at all is rejected as
/// `MalformedInput`; a well-formed signature that recovers to a different
/// address (or fails to recover) is simply invalid.
pub fn verify_signature(
    address: &str,
    message: &str,
    signature: &str,
) -> Result<bool, VerifyError> {
    let claimed: Address = address
        .parse()
        .map_err(|_| VerifyError::MalformedInput("invalid address".to_string()))?;

    let sig_hex = signature.strip_prefix("0x").unwrap_or(signature);
    let sig_bytes = hex::decode(sig_hex)
        .map_err(|_| VerifyError::MalformedInput("signature is not valid hex".to_string()))?;
    if sig_bytes.len() != 65 {
        return Err(VerifyError::MalformedInput(format!(
            "signature must be 65 bytes, got {}",
            sig_bytes.len()
        )));
    }

    let signature = Signature::try_from(sig_bytes.as_slice())
        .map_err(|_| VerifyError::MalformedInput("invalid signature encoding".to_string()))?;

    match signature.recover_address_from_msg(message) {
        Ok(recovered) => Ok(recovered == claimed),
        Err(_) => Ok(false),
    }
}
