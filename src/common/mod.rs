pub mod challenge;
pub mod config;
pub mod error;
pub mod nonce;
pub mod types;
pub mod verify;
