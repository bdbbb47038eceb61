//! SHA-256 hashing for envelopes, transaction sets and network ids.

use lumen_types::{Hash256, NetworkId};
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> Hash256 {
    Hash256::new(Sha256::digest(data).into())
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha256_multi(parts: &[&[u8]]) -> Hash256 {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    Hash256::new(hasher.finalize().into())
}

/// The network id every signature payload is prefixed with.
pub fn network_id_hash(network: NetworkId) -> Hash256 {
    sha256(network.passphrase().as_bytes())
}
