//! Content digests for rules and source files.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

/// A 256-bit SHA-256 content digest.
///
/// Two inputs with the same `ContentDigest` are assumed to have identical
/// content. Every rule digest and source digest produced by the tooling is
/// one of these; the byte length and algorithm are fixed so digests remain
/// comparable across runs.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Computes the digest of a byte slice in one shot.
    pub fn of(data: &[u8]) -> Self {
        let mut acc = DigestAccumulator::new();
        acc.put(data);
        acc.finish()
    }

    /// Returns the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Constructs a digest from raw bytes, e.g. parsed from an input file.
    pub fn from_raw(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A streaming accumulator that feeds byte sequences into a digest in order.
///
/// The final digest is a pure function of the concatenated byte sequence,
/// so callers must feed contributions in a fixed order to get comparable
/// results.
pub struct DigestAccumulator {
    hasher: Sha256,
}

impl DigestAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }

    /// Feeds a byte slice into the accumulator.
    pub fn put(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Feeds an optional byte slice; absence contributes zero bytes.
    pub fn put_opt(&mut self, bytes: Option<&[u8]>) {
        if let Some(bytes) = bytes {
            self.hasher.update(bytes);
        }
    }

    /// Feeds another digest's raw bytes into the accumulator.
    pub fn put_digest(&mut self, digest: &ContentDigest) {
        self.hasher.update(digest.as_bytes());
    }

    /// Finalizes the accumulated bytes into a digest.
    pub fn finish(self) -> ContentDigest {
        ContentDigest(self.hasher.finalize().into())
    }
}

impl Default for DigestAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentDigest({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

/// Error returned when a hex string cannot be parsed as a [`ContentDigest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDigestError {
    /// Description of the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseDigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid content digest: {}", self.reason)
    }
}

impl std::error::Error for ParseDigestError {}

impl FromStr for ContentDigest {
    type Err = ParseDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseDigestError {
                reason: format!("expected 64 hex characters, got {}", s.len()),
            });
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseDigestError {
                reason: "non-hex characters".to_string(),
            });
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            // Hex-only input, so the slice is on char boundaries and parses.
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).map_err(|_| {
                ParseDigestError {
                    reason: format!("non-hex characters at offset {}", i * 2),
                }
            })?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for ContentDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct DigestVisitor;

impl Visitor<'_> for DigestVisitor {
    type Value = ContentDigest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a 64-character hex string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for ContentDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(DigestVisitor)
    }
}
