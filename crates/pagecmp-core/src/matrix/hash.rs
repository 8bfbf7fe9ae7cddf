//! Content hashing
//!
//! SHA-256 over the concatenated rows of a matrix. Equal digests are taken
//! to mean pixel-identical matrices, so the comparison driver can skip the
//! per-pixel diff for pages that did not change.

use super::PixelMatrix;
use crate::error::Result;
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::io::Write;

/// Length in bytes of a matrix digest.
pub const DIGEST_LEN: usize = 32;

/// SHA-256 digest of a matrix's sample rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex rendering of the digest.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PixelMatrix {
    /// Compute the content digest of this matrix.
    ///
    /// The digest covers the exact bytes of every row, in row order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if writing a row into the
    /// hasher fails.
    pub fn digest(&self) -> Result<Digest> {
        let mut hasher = Sha256::new();
        for row in self.rows() {
            hasher.write_all(row)?;
        }
        Ok(Digest(hasher.finalize().into()))
    }

    /// Digest-based equality check.
    ///
    /// Matrices with different dimensions are never equal, even when their
    /// sample bytes happen to line up.
    pub fn same_content(&self, other: &PixelMatrix) -> Result<bool> {
        if self.dimensions() != other.dimensions() {
            return Ok(false);
        }
        Ok(self.digest()? == other.digest()?)
    }
}
