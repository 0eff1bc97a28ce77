use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::error::SizeError;
use crate::source::FsEntry;
use crate::tree::TreeNode;

/// 1 GiB.
pub const DEFAULT_MIN_SIZE: u64 = 1024 * 1024 * 1024;
pub const DEFAULT_MIN_DEPTH: u32 = 5;

/// Looks up the size in bytes of a leaf path.
pub trait SizeQuery {
    fn size_of(&self, path: &Path) -> Result<u64, SizeError>;
}

/// [`SizeQuery`] backed by `std::fs::metadata`. Anything that is not a regular file is an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSizer;

impl SizeQuery for FsSizer {
    fn size_of(&self, path: &Path) -> Result<u64, SizeError> {
        let meta = fs::metadata(path).map_err(|e| SizeError::from_io(path, e))?;
        if !meta.is_file() {
            return Err(SizeError::NotAFile(path.to_path_buf()));
        }
        Ok(meta.len())
    }
}

/// Parameters of a large file search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LargeFileQuery {
    /// A file matches when its size is strictly greater than this.
    pub min_size: u64,
    /// Level (root is 1) from which a node's direct files start being sized.
    pub min_depth: u32,
}

impl Default for LargeFileQuery {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            min_depth: DEFAULT_MIN_DEPTH,
        }
    }
}

impl LargeFileQuery {
    pub fn find<'a, S: SizeQuery>(
        &self,
        root: &'a TreeNode<FsEntry>,
        sizer: &S,
    ) -> Option<&'a Path> {
        find_large_file(root, sizer, self.min_size, self.min_depth)
    }
}

/// Returns the path of the first file larger than `min_size` found in the direct children of a
/// node at level `min_depth` or deeper, the root being level 1.
///
/// Nodes are processed in pre-order. A node at or past `min_depth` has all of its direct files
/// sized before anything below it is looked at. A node above `min_depth` has none of its direct
/// files sized, only its subdirectories are descended into. The root itself is never sized.
/// Files whose size cannot be read are treated as too small.
pub fn find_large_file<'a, S: SizeQuery>(
    root: &'a TreeNode<FsEntry>,
    sizer: &S,
    min_size: u64,
    min_depth: u32,
) -> Option<&'a Path> {
    let mut stack = vec![(root, 1u32)];
    while let Some((node, level)) = stack.pop() {
        let child_level = level.saturating_add(1);
        if level >= min_depth {
            for child in node.children.iter().filter(|c| c.value.is_file()) {
                match sizer.size_of(&child.value.path) {
                    Ok(size) if size > min_size => {
                        info!("{} is {size} bytes at level {child_level}", child.value);
                        return Some(&child.value.path);
                    }
                    Ok(_) => {}
                    Err(err) => debug!("not sizing: {err}"),
                }
            }
        }
        stack.extend(
            node.children
                .iter()
                .rev()
                .filter(|c| !c.is_leaf())
                .map(|c| (c, child_level)),
        );
    }
    None
}
