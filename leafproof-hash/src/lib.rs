// File: leafproof-hash/src/lib.rs
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;
use thiserror::Error;

pub const DIGEST_LEN: usize = 32; // SHA-256
pub const HEX_LEN: usize = DIGEST_LEN * 2;

/// A SHA-256 output. Node hashes concatenate digests as lowercase hex text,
/// never as raw bytes; see [`hash_pair`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Digest([u8; DIGEST_LEN]);

#[derive(Debug, Error, PartialEq)]
pub enum DigestParseError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },
}

impl Digest {
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self { Self(bytes) }
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] { &self.0 }
    pub fn to_hex(&self) -> String { hex::encode(self.0) }

    /// Parse a 64-char hex string. An optional `0x` prefix is accepted.
    pub fn from_hex(s: &str) -> Result<Self, DigestParseError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        let arr: [u8; DIGEST_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| DigestParseError::InvalidLength { expected: DIGEST_LEN, got: bytes.len() })?;
        Ok(Self(arr))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self { Self(bytes) }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] { &self.0 }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; HEX_LEN];
        // Buffer is exactly twice the digest length.
        hex::encode_to_slice(self.0, &mut buf).map_err(|_| fmt::Error)?;
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Digest({:x})", self) }
}

/// Leaf hash: SHA-256 over the raw record bytes.
#[inline]
pub fn hash_leaf(data: &[u8]) -> Digest {
    Digest(Sha256::digest(data).into())
}

/// Interior node hash: SHA-256 over `hex(left) || hex(right)`.
#[inline]
pub fn hash_pair(left: &Digest, right: &Digest) -> Digest {
    let mut buf = [0u8; HEX_LEN * 2];
    let (l, r) = buf.split_at_mut(HEX_LEN);
    // Both halves are HEX_LEN long, so encoding cannot fail.
    let _ = hex::encode_to_slice(left.0, l);
    let _ = hex::encode_to_slice(right.0, r);
    let mut hasher = Sha256::new();
    hasher.update(buf);
    Digest(hasher.finalize().into())
}
