#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the recursive folder size walk

use hydro_utils::utils::fs::folder_size;
use std::fs;
use tempfile::TempDir;

fn dir_len(path: &std::path::Path) -> u64 {
    fs::symlink_metadata(path).expect("metadata").len()
}

#[test]
fn test_nested_tree_counts_files_and_directories() {
    let root = TempDir::new().expect("tempdir");
    let sub = root.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(root.path().join("a.txt"), [0u8; 10]).unwrap();
    fs::write(sub.join("b.txt"), [0u8; 5]).unwrap();

    let expected = dir_len(root.path()) + dir_len(&sub) + 15;
    assert_eq!(folder_size(root.path()).unwrap(), expected);
}

#[test]
fn test_single_file_is_its_own_size() {
    let root = TempDir::new().expect("tempdir");
    let file = root.path().join("only.bin");
    fs::write(&file, vec![1u8; 1234]).unwrap();
    assert_eq!(folder_size(&file).unwrap(), 1234);
}

#[test]
fn test_empty_directory_counts_itself() {
    let root = TempDir::new().expect("tempdir");
    assert_eq!(folder_size(root.path()).unwrap(), dir_len(root.path()));
}

#[test]
fn test_missing_path_is_zero() {
    let root = TempDir::new().expect("tempdir");
    assert_eq!(folder_size(root.path().join("nope")).unwrap(), 0);
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_not_followed() {
    let root = TempDir::new().expect("tempdir");
    let outside = TempDir::new().expect("tempdir");
    fs::write(outside.path().join("big.bin"), vec![0u8; 100_000]).unwrap();
    fs::write(root.path().join("small.txt"), [0u8; 3]).unwrap();
    std::os::unix::fs::symlink(outside.path(), root.path().join("link")).unwrap();

    let expected = dir_len(root.path()) + 3;
    assert_eq!(folder_size(root.path()).unwrap(), expected);
}
