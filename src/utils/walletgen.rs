use alloy::signers::local::PrivateKeySigner;

fn main() {
    // Throwaway key for local development and testing
    let signer = PrivateKeySigner::random();

    println!("Address:     {}", signer.address().to_checksum(None));
    println!("Private key: 0x{}", hex::encode(signer.to_bytes()));
}
