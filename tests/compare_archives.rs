mod common;

use common::{Entry, archive_bytes, archive_bytes_at, location, write_archive};
use std::sync::Arc;
use tempfile::TempDir;
use zipdiff::{
    ComparisonConfig, DiffError, EntryIndexBuilder, MemoryReader, compare_archives,
    compare_locations,
};

fn names<V>(map: &std::collections::BTreeMap<String, V>) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}

const A_CONTENT: &[u8] = &[b'a'; 2048];

#[tokio::test]
async fn test_same_archive_has_no_differences() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_archive(
        dir.path(),
        "one.jar",
        &archive_bytes(&[Entry::Dir("META-INF/"), Entry::File("A", A_CONTENT)]),
    );

    for (ignore_timestamps, compare_checksums) in
        [(false, true), (true, true), (false, false), (true, false)]
    {
        let config = ComparisonConfig::new()
            .with_ignore_timestamps(ignore_timestamps)
            .with_compare_checksums(compare_checksums);
        let result = compare_locations(&location(&path), &location(&path), &config)
            .await
            .unwrap();

        assert!(!result.has_differences());
        assert!(result.added().is_empty());
        assert!(result.removed().is_empty());
        assert!(result.changed().is_empty());
    }
}

#[tokio::test]
async fn test_distinct_files_with_same_entries_have_no_differences() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let entries = [Entry::File("A", A_CONTENT)];
    let first = write_archive(dir.path(), "a1.jar", &archive_bytes(&entries));
    let second = write_archive(dir.path(), "a2.jar", &archive_bytes(&entries));

    let result = compare_locations(
        &location(&first),
        &location(&second),
        &ComparisonConfig::default(),
    )
    .await
    .unwrap();

    assert!(!result.has_differences());
    assert_eq!(result.label1(), Some(location(&first).as_str()));
    assert_eq!(result.label2(), Some(location(&second).as_str()));
}

#[tokio::test]
async fn test_different_entries_are_added_and_removed() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let first = write_archive(dir.path(), "a.jar", &archive_bytes(&[Entry::File("A", A_CONTENT)]));
    let second = write_archive(dir.path(), "b.jar", &archive_bytes(&[Entry::File("B", &[b'b'; 2048])]));

    let result = compare_locations(
        &location(&first),
        &location(&second),
        &ComparisonConfig::default(),
    )
    .await
    .unwrap();

    assert!(result.has_differences());
    assert_eq!(names(result.removed()), vec!["A"]);
    assert_eq!(names(result.added()), vec!["B"]);
    assert!(result.changed().is_empty());
}

#[tokio::test]
async fn test_same_size_different_content_depends_on_crc() {
    let mut changed = A_CONTENT.to_vec();
    *changed.last_mut().unwrap() = b'b';
    let first = Arc::new(MemoryReader::new(archive_bytes(&[Entry::File("A", A_CONTENT)])));
    let second = Arc::new(MemoryReader::new(archive_bytes(&[Entry::File("A", &changed)])));

    let config = ComparisonConfig::default();
    let result = compare_archives(first.clone(), "1.jar", second.clone(), "2.jar", &config)
        .await
        .unwrap();
    assert_eq!(names(result.changed()), vec!["A"]);
    let (old, new) = &result.changed()["A"];
    assert_eq!(old.uncompressed_size, new.uncompressed_size);
    assert_ne!(old.checksum, new.checksum);

    let config = ComparisonConfig::new().with_compare_checksums(false);
    let result = compare_archives(first, "1.jar", second, "2.jar", &config)
        .await
        .unwrap();
    assert!(!result.has_differences());
}

#[tokio::test]
async fn test_timestamps_respect_config() {
    let first = Arc::new(MemoryReader::new(archive_bytes_at(&[Entry::File("A", A_CONTENT)], 0)));
    let second = Arc::new(MemoryReader::new(archive_bytes_at(&[Entry::File("A", A_CONTENT)], 10)));

    let result = compare_archives(
        first.clone(),
        "1.jar",
        second.clone(),
        "2.jar",
        &ComparisonConfig::default(),
    )
    .await
    .unwrap();
    assert_eq!(names(result.changed()), vec!["A"]);

    let config = ComparisonConfig::new().with_ignore_timestamps(true);
    let result = compare_archives(first, "1.jar", second, "2.jar", &config)
        .await
        .unwrap();
    assert!(!result.has_differences());
}

#[tokio::test]
async fn test_cvs_entries_are_ignored_when_requested() {
    let first = archive_bytes(&[Entry::File("A", A_CONTENT)]);
    let second = archive_bytes(&[Entry::File("A", A_CONTENT), Entry::File("CVS/Root", b"")]);

    let result = compare_archives(
        Arc::new(MemoryReader::new(first.clone())),
        "1.jar",
        Arc::new(MemoryReader::new(second.clone())),
        "2.jar",
        &ComparisonConfig::default(),
    )
    .await
    .unwrap();
    assert_eq!(names(result.added()), vec!["CVS/Root"]);

    let config = ComparisonConfig::new().with_ignore_vcs_files(true);
    let result = compare_archives(
        Arc::new(MemoryReader::new(first)),
        "1.jar",
        Arc::new(MemoryReader::new(second)),
        "2.jar",
        &config,
    )
    .await
    .unwrap();
    assert!(!result.has_differences());
    assert!(result.ignored().is_empty());
}

#[tokio::test]
async fn test_excluded_names_never_reported() {
    let first = archive_bytes(&[Entry::File("build.log", b"one"), Entry::File("keep", b"k")]);
    let second = archive_bytes(&[
        Entry::File("build.log", b"two, longer"),
        Entry::File("other.log", b"x"),
        Entry::File("keep", b"k"),
    ]);
    let config = ComparisonConfig::new()
        .with_exclusion_patterns([r".*\.log"])
        .unwrap();

    let result = compare_archives(
        Arc::new(MemoryReader::new(first)),
        "1.zip",
        Arc::new(MemoryReader::new(second)),
        "2.zip",
        &config,
    )
    .await
    .unwrap();
    assert!(!result.has_differences());
}

#[tokio::test]
async fn test_nested_change_is_reported_inside_the_container() {
    let inner_old = archive_bytes(&[Entry::File("E", b"version-1")]);
    let inner_new = archive_bytes(&[Entry::File("E", b"version-2")]);
    let first = archive_bytes(&[Entry::Dir("lib/"), Entry::Archive("inner.jar", inner_old)]);
    let second = archive_bytes(&[Entry::Dir("lib/"), Entry::Archive("inner.jar", inner_new)]);

    let config = ComparisonConfig::default();
    let index = EntryIndexBuilder::new(&config)
        .build_index(Arc::new(MemoryReader::new(first.clone())), "1.ear")
        .await
        .unwrap();
    assert!(index.contains("inner.jar"));
    assert!(index.contains("inner.jar/E"));

    let result = compare_archives(
        Arc::new(MemoryReader::new(first)),
        "1.ear",
        Arc::new(MemoryReader::new(second)),
        "2.ear",
        &config,
    )
    .await
    .unwrap();

    assert!(result.changed().contains_key("inner.jar/E"));
    assert!(result.added().is_empty());
    assert!(result.removed().is_empty());
}

#[tokio::test]
async fn test_missing_archive_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let present = write_archive(dir.path(), "a.zip", &archive_bytes(&[Entry::File("A", b"a")]));
    let missing = dir.path().join("missing.zip");

    let err = compare_locations(
        &location(&present),
        &location(&missing),
        &ComparisonConfig::default(),
    )
    .await
    .unwrap_err();

    match err {
        DiffError::ArchiveRead { archive, .. } => assert_eq!(archive, location(&missing)),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_corrupt_nested_archive_fails_the_comparison() {
    let good = archive_bytes(&[Entry::File("A", b"a")]);
    let bad = archive_bytes(&[Entry::Archive("lib.jar", b"PK but not really".to_vec())]);

    let err = compare_archives(
        Arc::new(MemoryReader::new(good)),
        "good.zip",
        Arc::new(MemoryReader::new(bad)),
        "bad.zip",
        &ComparisonConfig::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, DiffError::NestedArchiveRead { ref entry, .. } if entry == "lib.jar"));
}
