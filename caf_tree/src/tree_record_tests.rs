use crate::{
    digest::BlobDigest,
    tree_record::{TreeRecord, TreeRecordKind},
};
use pretty_assertions::assert_eq;

#[test_log::test]
fn test_blob_record() {
    let digest = BlobDigest::new([1u8; 64]);
    let record = TreeRecord::blob(digest, "readme.md");
    assert_eq!(TreeRecordKind::Blob, record.kind());
    assert_eq!(&digest, record.digest());
    assert_eq!("readme.md", record.name());
    assert!(record.is_blob());
    assert!(!record.is_tree());
}

#[test_log::test]
fn test_tree_record() {
    let digest = BlobDigest::new([2u8; 64]);
    let record = TreeRecord::tree(digest, "src");
    assert_eq!(
        TreeRecord::new(TreeRecordKind::Tree, digest, "src".to_string()),
        record
    );
    assert!(record.is_tree());
    assert!(!record.is_blob());
}

#[test_log::test]
fn test_records_differ_by_kind() {
    let digest = BlobDigest::new([3u8; 64]);
    assert_ne!(
        TreeRecord::blob(digest, "same"),
        TreeRecord::tree(digest, "same")
    );
}

#[test_log::test]
fn test_record_postcard_round_trip() {
    let record = TreeRecord::blob(BlobDigest::new([4u8; 64]), "a.txt");
    let serialized = postcard::to_allocvec(&record).unwrap();
    let deserialized: TreeRecord = postcard::from_bytes(&serialized).unwrap();
    assert_eq!(record, deserialized);
}
