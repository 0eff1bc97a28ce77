use std::fs;
use std::path::Path;

use depth_search::{
    build, find_large_file, iterative_deepening_search_by, BuildConfig, EntryKind, FsEntry,
    FsSizer, FsSource, LargeFileQuery, TreeNode,
};
use regex::Regex;
use tempfile::TempDir;

// root/
//   top.bin          40 bytes
//   l2/
//     mid.bin        40 bytes
//     l3/
//       deep.bin     40 bytes
//       l4/
//         tiny.txt   1 byte
fn create_test_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("top.bin"), [0u8; 40]).unwrap();
    fs::create_dir_all(root.join("l2/l3/l4")).unwrap();
    fs::write(root.join("l2/mid.bin"), [0u8; 40]).unwrap();
    fs::write(root.join("l2/l3/deep.bin"), [0u8; 40]).unwrap();
    fs::write(root.join("l2/l3/l4/tiny.txt"), [0u8; 1]).unwrap();
    temp
}

fn child<'a>(node: &'a TreeNode<FsEntry>, name: &str) -> Option<&'a TreeNode<FsEntry>> {
    node.children
        .iter()
        .find(|c| c.value.file_name() == Some(name))
}

fn snapshot(root: &Path, max_depth: u32) -> TreeNode<FsEntry> {
    build(&FsSource, &BuildConfig::new(root).max_depth(max_depth)).unwrap()
}

#[test]
fn builds_complete_tree() {
    let temp = create_test_tree();
    let tree = snapshot(temp.path(), 20);

    assert_eq!(tree.value, FsEntry::directory(temp.path()));
    assert_eq!(tree.len(), 8);
    assert_eq!(tree.height(), 4);

    let l2 = child(&tree, "l2").unwrap();
    assert_eq!(l2.value.kind, EntryKind::Directory);
    let mid = child(l2, "mid.bin").unwrap();
    assert_eq!(mid.value, FsEntry::file(temp.path().join("l2/mid.bin")));
    assert!(mid.is_leaf());
}

#[test]
fn depth_one_keeps_direct_files_only() {
    let temp = create_test_tree();
    let tree = snapshot(temp.path(), 1);
    assert_eq!(tree.len(), 2);
    assert!(child(&tree, "top.bin").is_some());
    assert!(child(&tree, "l2").is_none());
}

#[test]
fn no_node_deeper_than_max_depth() {
    let temp = create_test_tree();
    for max_depth in 1..=5 {
        let tree = snapshot(temp.path(), max_depth);
        assert!(tree.height() <= max_depth as usize);
    }
    let tree = snapshot(temp.path(), 2);
    let l2 = child(&tree, "l2").unwrap();
    assert!(child(l2, "mid.bin").is_some());
    assert!(child(l2, "l3").is_none());
}

#[test]
fn missing_root_is_a_childless_node() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");
    let tree = snapshot(&missing, 20);
    assert_eq!(tree, TreeNode::new(FsEntry::directory(&missing)));
}

#[test]
fn exclude_pattern_is_applied_to_names() {
    let temp = create_test_tree();
    let config = BuildConfig::new(temp.path()).exclude(Regex::new(r"\.bin$").unwrap());
    let tree = build(&FsSource, &config).unwrap();
    assert_eq!(tree.len(), 5);
    assert!(child(&tree, "top.bin").is_none());
}

#[test]
fn snapshot_serializes_paths_and_kinds() {
    let temp = create_test_tree();
    let tree = snapshot(temp.path(), 1);
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["value"]["kind"], "directory");
    assert_eq!(json["children"][0]["value"]["kind"], "file");
    assert_eq!(
        json["children"][0]["value"]["path"],
        temp.path().join("top.bin").to_str().unwrap()
    );
}

#[test]
fn large_file_respects_min_depth() {
    let temp = create_test_tree();
    let tree = snapshot(temp.path(), 20);

    assert_eq!(
        find_large_file(&tree, &FsSizer, 10, 1),
        Some(temp.path().join("top.bin").as_path())
    );
    assert_eq!(
        find_large_file(&tree, &FsSizer, 10, 2),
        Some(temp.path().join("l2/mid.bin").as_path())
    );
    assert_eq!(
        find_large_file(&tree, &FsSizer, 10, 3),
        Some(temp.path().join("l2/l3/deep.bin").as_path())
    );
    assert_eq!(find_large_file(&tree, &FsSizer, 10, 4), None);
    assert_eq!(find_large_file(&tree, &FsSizer, 40, 1), None);
}

#[test]
fn file_removed_after_build_is_skipped() {
    let temp = create_test_tree();
    let tree = snapshot(temp.path(), 20);
    fs::remove_file(temp.path().join("top.bin")).unwrap();

    let query = LargeFileQuery {
        min_size: 10,
        min_depth: 1,
    };
    assert_eq!(
        query.find(&tree, &FsSizer),
        Some(temp.path().join("l2/mid.bin").as_path())
    );
}

#[test]
fn find_by_name_reports_depth() {
    let temp = create_test_tree();
    let tree = snapshot(temp.path(), 20);
    let found = iterative_deepening_search_by(&tree, None, |entry| {
        entry.file_name() == Some("deep.bin")
    })
    .unwrap();
    assert_eq!(found.depth, 3);
    assert_eq!(found.value.path, temp.path().join("l2/l3/deep.bin"));

    assert!(iterative_deepening_search_by(&tree, Some(2), |entry| {
        entry.file_name() == Some("deep.bin")
    })
    .is_none());
    assert!(iterative_deepening_search_by(&tree, None, |entry| {
        entry.file_name() == Some("absent")
    })
    .is_none());
}
