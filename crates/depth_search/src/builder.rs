use log::{debug, warn};
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::source::{Entries, EntryKind, FsEntry, TreeSource};
use crate::tree::TreeNode;

/// Depth used when none is given, counted in levels with the root at level 1.
pub const DEFAULT_MAX_DEPTH: u32 = 20;

/// Represents config for building the tree.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// The path of the directory the tree is rooted at.
    pub path: PathBuf,
    /// Deepest level that gets a node. Directories below it are dropped, files directly inside
    /// the deepest directories are still attached.
    pub max_depth: u32,
    /// Entries whose file name matches are skipped along with everything below them.
    pub exclude: Option<Regex>,
}

impl BuildConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            exclude: None,
        }
    }

    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn exclude(mut self, pattern: Regex) -> Self {
        self.exclude = Some(pattern);
        self
    }
}

/// Builds a tree of the directory structure starting from `config.path`.
///
/// Returns `None` only when `config.max_depth` is 0. Any entry that cannot be read is left out and
/// its siblings are still visited; a root that cannot be listed yields a childless node, so an
/// empty subtree does not tell an empty directory apart from an unreadable one.
pub fn build<S: TreeSource>(source: &S, config: &BuildConfig) -> Option<TreeNode<FsEntry>> {
    build_at_level(
        source,
        &config.path,
        config.max_depth,
        1,
        config.exclude.as_ref(),
    )
}

struct Frame<'s> {
    node: TreeNode<FsEntry>,
    entries: Option<Entries<'s>>,
    level: u32,
}

fn open<'s, S: TreeSource>(source: &'s S, path: &Path, level: u32) -> Frame<'s> {
    let entries = match source.read_entries(path) {
        Ok(entries) => Some(entries),
        Err(err) => {
            skip(&err);
            None
        }
    };
    Frame {
        node: TreeNode::new(FsEntry::directory(path)),
        entries,
        level,
    }
}

fn skip(err: &SourceError) {
    if err.is_unavailable() {
        debug!("skipping {err}");
    } else {
        warn!("skipping {err}");
    }
}

fn is_excluded(exclude: Option<&Regex>, path: &Path) -> bool {
    match (exclude, path.file_name().and_then(|name| name.to_str())) {
        (Some(pattern), Some(name)) => pattern.is_match(name),
        _ => false,
    }
}

/// Same as [`build`] with the root treated as sitting at `level`.
///
/// Directories are kept on an explicit stack of open frames. A directory is attached to its
/// parent once all of its entries are consumed, which keeps children in listing order.
pub fn build_at_level<S: TreeSource>(
    source: &S,
    root_path: &Path,
    max_depth: u32,
    level: u32,
    exclude: Option<&Regex>,
) -> Option<TreeNode<FsEntry>> {
    if level > max_depth {
        return None;
    }
    let mut stack = vec![open(source, root_path, level)];
    loop {
        let top = stack.last_mut()?;
        match top.entries.as_mut().and_then(Iterator::next) {
            None => {
                let done = stack.pop()?;
                match stack.last_mut() {
                    Some(parent) => parent.node.add_child(done.node),
                    None => return Some(done.node),
                }
            }
            Some(Err(err)) => skip(&err),
            Some(Ok(entry)) => {
                if is_excluded(exclude, &entry.path) {
                    continue;
                }
                match entry.kind {
                    EntryKind::File => top.node.add_child(TreeNode::new(entry.into())),
                    EntryKind::Directory => {
                        let child_level = top.level.checked_add(1).filter(|l| *l <= max_depth);
                        if let Some(child_level) = child_level {
                            stack.push(open(source, &entry.path, child_level));
                        }
                    }
                }
            }
        }
    }
}
