//! PEM-style containers for RSA key material.
//!
//! A container frames a binary payload as line-wrapped base64 between
//! `-----BEGIN <LABEL>-----` and `-----END <LABEL>-----` marker lines. The
//! label and the payload schema together identify the key: see
//! [`PRIVATE_KEY_LABEL`] and [`PUBLIC_KEY_LABEL`].

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use thiserror::Error;

/// Label framing the private key container. The payload is the PKCS#1 DER
/// encoding of the private key.
pub const PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";

/// Label framing the public key container.
///
/// The payload under this label is the PKCS#1 DER encoding of the public
/// key, not the SubjectPublicKeyInfo structure that the `PUBLIC KEY` label
/// usually announces. Tools expecting the standard pairing will reject these
/// files. The pairing must stay as is so that containers this tool already
/// wrote keep loading; do not switch the payload schema without a migration
/// path for existing files.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

const BEGIN_PREFIX: &str = "-----BEGIN ";
const END_PREFIX: &str = "-----END ";
const MARKER_SUFFIX: &str = "-----";

/// Base64 body lines are wrapped at this width.
const LINE_WIDTH: usize = 64;

/// Errors from decoding a textual key container.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("could not find a container block")]
    NoBlock,

    #[error("container block {0:?} has no END marker")]
    UnterminatedBlock(String),

    #[error("invalid base64 in container body: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// A decoded container: the type label plus the binary payload it frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub label: String,
    pub contents: Vec<u8>,
}

impl Container {
    pub fn new(label: &str, contents: Vec<u8>) -> Self {
        Self {
            label: label.to_string(),
            contents,
        }
    }

    /// Renders the container as marker lines around a base64 body wrapped at
    /// 64 columns, with LF line endings throughout.
    pub fn encode(&self) -> String {
        let body = BASE64.encode(&self.contents);

        let mut out = String::new();
        out.push_str(BEGIN_PREFIX);
        out.push_str(&self.label);
        out.push_str(MARKER_SUFFIX);
        out.push('\n');

        // Base64 output is pure ASCII, so byte-indexed splits are safe.
        let mut rest = body.as_str();
        while !rest.is_empty() {
            let (line, tail) = rest.split_at(rest.len().min(LINE_WIDTH));
            out.push_str(line);
            out.push('\n');
            rest = tail;
        }

        out.push_str(END_PREFIX);
        out.push_str(&self.label);
        out.push_str(MARKER_SUFFIX);
        out.push('\n');
        out
    }

    /// Decodes the first container block found in `text`.
    ///
    /// Lines before the BEGIN marker and anything after the matching END
    /// marker are ignored.
    pub fn decode(text: &str) -> Result<Self, ContainerError> {
        let mut lines = text.lines();

        // Scan for the first BEGIN marker line.
        let label = loop {
            let line = lines.next().ok_or(ContainerError::NoBlock)?.trim();
            if let Some(rest) = line.strip_prefix(BEGIN_PREFIX) {
                if let Some(label) = rest.strip_suffix(MARKER_SUFFIX) {
                    break label.to_string();
                }
            }
        };

        // Collect body lines until the END marker matching the label.
        let end_marker = format!("{}{}{}", END_PREFIX, label, MARKER_SUFFIX);
        let mut body = String::new();
        loop {
            let line = lines
                .next()
                .ok_or_else(|| ContainerError::UnterminatedBlock(label.clone()))?
                .trim();
            if line == end_marker {
                break;
            }
            body.push_str(line);
        }

        let contents = BASE64.decode(body.as_bytes())?;
        Ok(Container { label, contents })
    }
}
