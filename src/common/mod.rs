pub mod container;
pub mod encrypt;
pub mod error;
pub mod keypair;
