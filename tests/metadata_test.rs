use std::fs;

use tempfile::TempDir;

use s3shard::metadata::{
    FileMetadata, MemoryMetadata, README_FN, SHARDING_FN, marker_contents, readme_contents,
};
use s3shard::{MetadataSource, ShardError, ShardIdentifier, read_shard_id, resolve_shard_id};

#[test]
fn test_file_metadata_missing_marker() -> s3shard::Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let source = FileMetadata::new(temp_dir.path());

    assert_eq!(source.get(SHARDING_FN)?, None);
    assert_eq!(read_shard_id(&source)?, None);
    assert_eq!(resolve_shard_id(&source, None)?, ShardIdentifier::default());
    assert_eq!(
        resolve_shard_id(&source, Some(ShardIdentifier::prefix(2)))?,
        ShardIdentifier::prefix(2)
    );
    Ok(())
}

#[test]
fn test_file_metadata_reads_written_marker() -> s3shard::Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let id = ShardIdentifier::suffix(4);
    fs::write(temp_dir.path().join(SHARDING_FN), marker_contents(&id))?;
    fs::write(temp_dir.path().join(README_FN), readme_contents(&id))?;

    let source = FileMetadata::new(temp_dir.path());
    assert_eq!(read_shard_id(&source)?, Some(id));
    assert_eq!(resolve_shard_id(&source, None)?, id);
    assert_eq!(resolve_shard_id(&source, Some(id))?, id);

    let readme = source.get(README_FN)?.unwrap();
    assert!(readme.contains("last 4 character(s)"));
    Ok(())
}

#[test]
fn test_file_metadata_directory_in_place_of_marker() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(SHARDING_FN)).unwrap();

    let source = FileMetadata::new(temp_dir.path());
    let err = read_shard_id(&source).unwrap_err();
    assert!(matches!(err, ShardError::Io(_)));
}

#[test]
fn test_malformed_marker_is_not_defaulted() {
    let source = MemoryMetadata::new();
    source.put(SHARDING_FN, "/repo/s3/shard/v1/sideways/2\n");

    let err = resolve_shard_id(&source, None).unwrap_err();
    match err {
        ShardError::Parse(e) => assert_eq!(e.reason(), "unknown function"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_mismatch_is_reported() {
    let source = MemoryMetadata::new();
    source.put(SHARDING_FN, marker_contents(&ShardIdentifier::next_to_last(2)));

    let err = resolve_shard_id(&source, Some(ShardIdentifier::prefix(2))).unwrap_err();
    match err {
        ShardError::ShardMismatch {
            persisted,
            requested,
        } => {
            assert_eq!(persisted, ShardIdentifier::next_to_last(2));
            assert_eq!(requested, ShardIdentifier::prefix(2));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_resolve_through_trait_object() -> s3shard::Result<()> {
    let source: Box<dyn MetadataSource> = Box::new(MemoryMetadata::new());
    assert_eq!(
        resolve_shard_id(source.as_ref(), None)?,
        ShardIdentifier::default()
    );
    Ok(())
}
