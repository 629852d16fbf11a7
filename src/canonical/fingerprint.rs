// Graph fingerprints
//
// A fingerprint is a fixed-width hash of a canonicalized adjacency encoding.
// Two facet graphs are colored-graph-isomorphic iff their fingerprints are
// equal, up to hash collisions; at 256 bits a collision between two
// non-isomorphic reference graphs is an accepted residual risk, not a
// detected condition.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A 256-bit fingerprint of a canonical graph encoding.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(pub [u8; 32]);

impl Fingerprint {
    /// Hash a canonical code sequence.
    ///
    /// The digest is domain-separated and length-prefixed so that the same
    /// byte sequence hashed in another context can never collide with a
    /// canonical code fingerprint.
    pub fn of_code(code: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"lattice-templates:canonical-code:v1");
        hasher.update((code.len() as u64).to_le_bytes());
        hasher.update(code);
        Self(hasher.finalize().into())
    }

    /// Returns the raw byte array.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First 8 bytes in hex are plenty for log output
        for byte in &self.0[..8] {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, "…")
    }
}
