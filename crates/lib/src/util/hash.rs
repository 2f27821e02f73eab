//! Hashing utilities for artifact checksums and `RECORD` entries.
//!
//! This module provides:
//! - `ContentHash`: a 64-character hex SHA-256 of a whole artifact
//! - `RecordDigest`: the `sha256=<urlsafe-base64>` form wheels record per file
//! - `hash_file()` / `hash_bytes()`: helpers producing both

use std::fs;
use std::io::Read;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A full 64-character SHA256 hash for content verification.
///
/// # Format
///
/// The hash is a lowercase hexadecimal string (64 characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(pub String);

impl std::fmt::Display for ContentHash {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Digest and size of one archive member, as written to `RECORD`.
///
/// The digest is `sha256=` followed by the URL-safe base64 encoding of the
/// raw SHA-256, without padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDigest {
  pub digest: String,
  pub size: u64,
}

impl RecordDigest {
  pub fn of(data: &[u8]) -> Self {
    let raw = Sha256::digest(data);
    Self {
      digest: format!("sha256={}", URL_SAFE_NO_PAD.encode(raw)),
      size: data.len() as u64,
    }
  }
}

/// Error while reading a file to hash it.
#[derive(Debug, thiserror::Error)]
#[error("failed to read file {path}: {message}")]
pub struct HashError {
  pub path: String,
  pub message: String,
}

/// Hash a file's contents.
///
/// Returns the full 64-character SHA256 hash of the file.
pub fn hash_file(path: &Path) -> Result<ContentHash, HashError> {
  let to_err = |e: std::io::Error| HashError {
    path: path.display().to_string(),
    message: e.to_string(),
  };
  let mut file = fs::File::open(path).map_err(to_err)?;

  let mut hasher = Sha256::new();
  let mut buffer = [0u8; 8192];

  loop {
    let bytes_read = file.read(&mut buffer).map_err(to_err)?;
    if bytes_read == 0 {
      break;
    }
    hasher.update(&buffer[..bytes_read]);
  }

  Ok(ContentHash(hex::encode(hasher.finalize())))
}

/// Hash arbitrary bytes.
pub fn hash_bytes(data: &[u8]) -> ContentHash {
  ContentHash(hex::encode(Sha256::digest(data)))
}
