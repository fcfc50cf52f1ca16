use anyhow::Result;

use crate::ContentHash;

/// Digest used to tell clipboard payloads apart. Not a security boundary.
pub trait ContentHashPort: Send + Sync {
    fn hash_bytes(&self, bytes: &[u8]) -> Result<ContentHash>;
}
