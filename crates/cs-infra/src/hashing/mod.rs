//! Content hashers used for clipboard dedup.

mod blake_hasher;
mod md5_hasher;

use std::sync::Arc;

use cs_core::{ports::ContentHashPort, HashAlgorithm};

pub use blake_hasher::Blake3Hasher;
pub use md5_hasher::Md5Hasher;

/// Picks the hasher adapter for a configured algorithm.
pub fn hasher_for(alg: HashAlgorithm) -> Arc<dyn ContentHashPort> {
    match alg {
        HashAlgorithm::Md5 => Arc::new(Md5Hasher),
        HashAlgorithm::Blake3 => Arc::new(Blake3Hasher),
    }
}
