pub mod connection;
pub mod signer;

pub use connection::{ConnectionState, WalletConnection};
pub use signer::{InMemoryWallet, WalletSigner};
