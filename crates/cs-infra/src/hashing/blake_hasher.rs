use anyhow::Result;
use cs_core::{ports::ContentHashPort, ContentHash, HashAlgorithm};

#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl ContentHashPort for Blake3Hasher {
    fn hash_bytes(&self, bytes: &[u8]) -> Result<ContentHash> {
        let hash = blake3::hash(bytes);
        Ok(ContentHash::new(HashAlgorithm::Blake3, *hash.as_bytes()))
    }
}
