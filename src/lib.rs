//! RSA keypair generation and OAEP message encryption over PEM-style
//! container files.
//!
//! [`common::keypair`] produces a 2048-bit RSA keypair and persists both
//! halves as textual containers; [`common::encrypt`] loads the public
//! container back and encrypts short messages with RSA-OAEP over SHA-1.
//! The two halves share only the container format in [`common::container`].

pub mod common;
pub mod test_utils;

/// Default location of the private key container.
pub const DEFAULT_PRIVATE_KEY_PATH: &str = "private.pem";

/// Default location of the public key container.
pub const DEFAULT_PUBLIC_KEY_PATH: &str = "public.pem";
