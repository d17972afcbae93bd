//! Shared helpers for tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::common::keypair::{self, KEY_BITS};

static TEST_KEY: OnceLock<RsaPrivateKey> = OnceLock::new();

/// Returns a process-wide RSA keypair for tests. Generated once, because key
/// generation dominates test runtime otherwise.
pub fn test_keypair() -> &'static RsaPrivateKey {
    TEST_KEY.get_or_init(|| {
        let mut rng = OsRng;
        RsaPrivateKey::new(&mut rng, KEY_BITS).expect("failed to generate test key")
    })
}

/// Public half of [`test_keypair`].
pub fn test_public_key() -> RsaPublicKey {
    RsaPublicKey::from(test_keypair())
}

/// Writes the test keypair's two containers into `dir`, returning the
/// private and public paths.
pub fn write_test_containers(dir: &Path) -> (PathBuf, PathBuf) {
    let private_path = dir.join("private.pem");
    let public_path = dir.join("public.pem");

    let private_text = keypair::private_key_container(test_keypair()).unwrap();
    fs::write(&private_path, private_text).unwrap();

    let public_text = keypair::public_key_container(&test_public_key()).unwrap();
    fs::write(&public_path, public_text).unwrap();

    (private_path, public_path)
}
