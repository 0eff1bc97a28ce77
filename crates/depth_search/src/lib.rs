/*!
# Depth Search
Depth-bounded searches over trees, either assembled in memory or materialized from a directory hierarchy.

# Trees
- [`TreeNode`] is a labeled node owning an ordered list of children. The order of children is the order every search visits them in, so it decides which match comes first.
- [`build`] materializes a directory into a `TreeNode<FsEntry>` up to a maximum depth. Entries that vanish or cannot be read are skipped, an unreadable directory becomes a childless node. Nothing is ever reported as an error, the result is a best-effort snapshot.

# Searches
- [`iterative_deepening_search`] finds the shallowest node equal to a target by probing depth 0, 1, 2, ... . The bound is capped (by default at the height of the tree) so a missing target gives `None` instead of looping forever.
- [`find_large_file`] finds the first file larger than a size threshold among the direct children of nodes at or below a minimum level. Files of shallower nodes are never sized.

All traversals use an explicit stack, deep trees do not grow the call stack.

# Example
```
use depth_search::{iterative_deepening_search, TreeNode};

let root = TreeNode::new("root").with_children([
    TreeNode::new("folder1").with_children([TreeNode::new("file1.txt")]),
    TreeNode::new("folder2"),
]);
let found = iterative_deepening_search(&root, &"file1.txt", None).expect("file is in the tree");
assert_eq!(found.depth, 2);
```

```no_run
use depth_search::{build, BuildConfig, FsSizer, FsSource, LargeFileQuery};

let root = build(&FsSource, &BuildConfig::new("/mnt/media").max_depth(20)).expect("depth is not zero");
if let Some(path) = LargeFileQuery::default().find(&root, &FsSizer) {
    println!("{}", path.display());
}
```
*/

mod builder;
mod deepening;
mod error;
mod source;
mod threshold;
mod tree;

pub use builder::*;
pub use deepening::*;
pub use error::*;
pub use source::*;
pub use threshold::*;
pub use tree::*;
