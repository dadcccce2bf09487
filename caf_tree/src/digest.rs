use serde::{Deserialize, Serialize};

/// Content hash of a blob or tree as computed by the object store. 64 bytes, enough for SHA3-512.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct BlobDigest {
    // serde derives stop at 32-element arrays
    low: [u8; 32],
    high: [u8; 32],
}

impl BlobDigest {
    pub fn new(bytes: [u8; 64]) -> BlobDigest {
        let mut low = [0u8; 32];
        let mut high = [0u8; 32];
        low.copy_from_slice(&bytes[..32]);
        high.copy_from_slice(&bytes[32..]);
        BlobDigest { low, high }
    }
}
