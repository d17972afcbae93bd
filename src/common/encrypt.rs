//! Public-key loading and OAEP message encryption.

use std::fs;
use std::path::Path;

use rand::rngs::OsRng;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPublicKey};
use sha1::Sha1;
use tracing::debug;

use crate::common::container::Container;
use crate::common::error::{EncryptorError, Result};

/// Output size in bytes of the OAEP digest (SHA-1).
pub const OAEP_HASH_LEN: usize = 20;

/// Loads an RSA public key from a PEM-style container file.
///
/// The whole file is read before decoding. Only the first container block is
/// considered and its label is not checked; the payload must parse as a
/// PKCS#1 public key.
pub fn load_public_key(path: &Path) -> Result<RsaPublicKey> {
    let text = fs::read_to_string(path)?;
    let container = Container::decode(&text)?;
    let public_key =
        RsaPublicKey::from_pkcs1_der(&container.contents).map_err(EncryptorError::Parse)?;
    let bits = public_key.size() * 8;
    debug!(label = %container.label, bits, "loaded public key");
    Ok(public_key)
}

/// Longest message encryptable under `public_key` with OAEP over SHA-1.
pub fn max_message_len(public_key: &RsaPublicKey) -> usize {
    public_key.size().saturating_sub(2 * OAEP_HASH_LEN + 2)
}

/// Encrypts `message` under `public_key` with OAEP, using SHA-1 for both the
/// padding hash and the mask generation hash, and no label.
///
/// A fresh random seed is drawn on every call, so encrypting the same
/// message twice yields different ciphertexts. The ciphertext length always
/// equals the modulus size in bytes.
pub fn encrypt_message(public_key: &RsaPublicKey, message: &[u8]) -> Result<Vec<u8>> {
    let mut rng = OsRng;
    public_key
        .encrypt(&mut rng, Oaep::new::<Sha1>(), message)
        .map_err(EncryptorError::Encryption)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::container::{ContainerError, PUBLIC_KEY_LABEL};
    use crate::test_utils;
    use assert_matches::assert_matches;

    #[test]
    fn test_load_public_key_from_saved_container() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let dir = tempfile::tempdir()?;
        let (_, public_path) = test_utils::write_test_containers(dir.path());

        let public_key = load_public_key(&public_path)?;
        assert_eq!(public_key, test_utils::test_public_key());
        assert_eq!(public_key.size(), 256);
        Ok(())
    }

    #[test]
    fn test_load_public_key_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_public_key(&dir.path().join("absent.pem")).unwrap_err();
        assert_matches!(err, EncryptorError::Io(_));
    }

    #[test]
    fn test_load_public_key_rejects_unframed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.pem");
        fs::write(&path, "this is not a key container\n").unwrap();

        let err = load_public_key(&path).unwrap_err();
        assert_matches!(err, EncryptorError::Decoding(ContainerError::NoBlock));
        assert!(err.to_string().starts_with("failed to decode container"));
    }

    #[test]
    fn test_load_public_key_rejects_truncated_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated.pem");
        fs::write(
            &path,
            "-----BEGIN PUBLIC KEY-----\nAAA\n-----END PUBLIC KEY-----\n",
        )
        .unwrap();

        let err = load_public_key(&path).unwrap_err();
        assert_matches!(err, EncryptorError::Decoding(ContainerError::InvalidBase64(_)));
    }

    #[test]
    fn test_load_public_key_rejects_private_key_payload() {
        use rsa::pkcs1::EncodeRsaPrivateKey;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wrong-schema.pem");

        // A private-key DER under the public container label decodes as a
        // container but must not parse as a public key.
        let private_der = test_utils::test_keypair().to_pkcs1_der().unwrap();
        let container = Container::new(PUBLIC_KEY_LABEL, private_der.as_bytes().to_vec());
        fs::write(&path, container.encode()).unwrap();

        let err = load_public_key(&path).unwrap_err();
        assert_matches!(err, EncryptorError::Parse(_));
    }

    #[test]
    fn test_ciphertext_length_matches_modulus() {
        let public_key = test_utils::test_public_key();
        let ciphertext = encrypt_message(&public_key, b"secret data").unwrap();
        assert_eq!(ciphertext.len(), public_key.size());
    }

    #[test]
    fn test_encryption_is_randomized() {
        let private_key = test_utils::test_keypair();
        let public_key = test_utils::test_public_key();
        let message = b"secret data";

        let first = encrypt_message(&public_key, message).unwrap();
        let second = encrypt_message(&public_key, message).unwrap();
        assert_ne!(first, second);

        // Both ciphertexts still open to the original message.
        let opened_first = private_key.decrypt(Oaep::new::<Sha1>(), &first).unwrap();
        let opened_second = private_key.decrypt(Oaep::new::<Sha1>(), &second).unwrap();
        assert_eq!(opened_first, message);
        assert_eq!(opened_second, message);
    }

    #[test]
    fn test_message_length_boundary() {
        let public_key = test_utils::test_public_key();
        let limit = max_message_len(&public_key);
        assert_eq!(limit, 214);

        let at_limit = vec![0x5a; limit];
        assert!(encrypt_message(&public_key, &at_limit).is_ok());

        let over_limit = vec![0x5a; limit + 1];
        let err = encrypt_message(&public_key, &over_limit).unwrap_err();
        assert_matches!(err, EncryptorError::Encryption(rsa::Error::MessageTooLong));
        assert!(err.to_string().contains("message too long"));
    }
}
