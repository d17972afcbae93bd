use std::path::Path;

use rsa_message_encryptor::common::keypair;
use rsa_message_encryptor::{DEFAULT_PRIVATE_KEY_PATH, DEFAULT_PUBLIC_KEY_PATH};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Destination paths can be overridden positionally
    let private_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PRIVATE_KEY_PATH.to_string());
    let public_path = std::env::args()
        .nth(2)
        .unwrap_or_else(|| DEFAULT_PUBLIC_KEY_PATH.to_string());

    // Generate a new RSA key pair and write both containers
    let public_key =
        keypair::generate_and_save_keys(Path::new(&private_path), Path::new(&public_path))?;

    println!("Private key saved to {}", private_path);
    println!("Public key saved to {}", public_path);
    println!(
        "Public key fingerprint: {}",
        keypair::public_key_fingerprint(&public_key)?
    );

    Ok(())
}
