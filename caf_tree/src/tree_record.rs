use crate::digest::BlobDigest;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum TreeRecordKind {
    /// file-like content
    Blob,
    /// a nested directory
    Tree,
}

/// One entry of a [`crate::tree::Tree`]. Only labels what the digest refers to; resolving it is up to the store.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct TreeRecord {
    kind: TreeRecordKind,
    digest: BlobDigest,
    name: String,
}

impl TreeRecord {
    pub fn new(kind: TreeRecordKind, digest: BlobDigest, name: String) -> TreeRecord {
        TreeRecord { kind, digest, name }
    }

    pub fn blob(digest: BlobDigest, name: &str) -> TreeRecord {
        TreeRecord::new(TreeRecordKind::Blob, digest, name.to_string())
    }

    pub fn tree(digest: BlobDigest, name: &str) -> TreeRecord {
        TreeRecord::new(TreeRecordKind::Tree, digest, name.to_string())
    }

    pub fn kind(&self) -> TreeRecordKind {
        self.kind
    }

    pub fn digest(&self) -> &BlobDigest {
        &self.digest
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_blob(&self) -> bool {
        self.kind == TreeRecordKind::Blob
    }

    pub fn is_tree(&self) -> bool {
        self.kind == TreeRecordKind::Tree
    }
}
