use log::{debug, info};

use crate::tree::TreeNode;

/// A successful search: the matched label and the depth it was found at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found<'a, T> {
    pub value: &'a T,
    pub depth: usize,
}

/// Depth-limited probe. Only nodes exactly `depth` edges below `node` are tested, leftmost first.
///
/// Nodes above that depth are walked through without looking at their values.
pub fn probe<'a, T, F>(node: &'a TreeNode<T>, depth: usize, mut matches: F) -> Option<&'a T>
where
    F: FnMut(&T) -> bool,
{
    let mut stack = vec![(node, depth)];
    while let Some((node, remaining)) = stack.pop() {
        if remaining == 0 {
            if matches(&node.value) {
                return Some(&node.value);
            }
            continue;
        }
        // Reversed so the first child is popped first.
        stack.extend(node.children.iter().rev().map(|child| (child, remaining - 1)));
    }
    None
}

/// Iterative deepening search for a node whose value equals `target`.
///
/// Probes with bounds 0, 1, 2, ... and stops at the first hit, so the shallowest match wins and
/// ties at one depth go to the leftmost node. Every round re-walks the shallower levels.
///
/// `max_depth` caps the bound; `None` caps it at the height of the tree. Once the cap is passed the
/// search gives up and returns `None`.
pub fn iterative_deepening_search<'a, T: PartialEq>(
    root: &'a TreeNode<T>,
    target: &T,
    max_depth: Option<usize>,
) -> Option<Found<'a, T>> {
    iterative_deepening_search_by(root, max_depth, |value| value == target)
}

/// [`iterative_deepening_search`] with a predicate instead of equality.
pub fn iterative_deepening_search_by<'a, T, F>(
    root: &'a TreeNode<T>,
    max_depth: Option<usize>,
    mut matches: F,
) -> Option<Found<'a, T>>
where
    F: FnMut(&T) -> bool,
{
    // Nothing lies past the height, so a larger bound can only fail.
    let height = root.height();
    let ceiling = max_depth.map_or(height, |k| k.min(height));
    for depth in 0..=ceiling {
        debug!("probing depth {depth}");
        if let Some(value) = probe(root, depth, &mut matches) {
            info!("match found at depth {depth}");
            return Some(Found { value, depth });
        }
    }
    debug!("no match up to depth {ceiling}");
    None
}
