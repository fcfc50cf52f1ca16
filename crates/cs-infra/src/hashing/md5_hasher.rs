use anyhow::Result;
use cs_core::{ports::ContentHashPort, ContentHash, HashAlgorithm};

/// 128-bit MD5 digest. Only used as a dedup key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Hasher;

impl ContentHashPort for Md5Hasher {
    fn hash_bytes(&self, bytes: &[u8]) -> Result<ContentHash> {
        let digest = md5::compute(bytes);
        Ok(ContentHash::new(HashAlgorithm::Md5, digest.0))
    }
}
