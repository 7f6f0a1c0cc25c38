//! Shared foundational types for the ripple build-impact tooling.
//!
//! This crate provides the content digest primitive: a fixed-size SHA-256
//! digest type and a streaming accumulator for building digests from an
//! ordered byte sequence.

#![warn(missing_docs)]

pub mod digest;

pub use digest::{ContentDigest, DigestAccumulator, ParseDigestError};
