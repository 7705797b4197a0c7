//! Tri-state structural comparison of two path trees

use crate::tree::{NodeId, PathTree};
use crate::{Error, Result};

/// Outcome of comparing one path between a right and a left tree.
///
/// The handles point into the trees given to [`diff`] or [`diff_at`]. A path
/// present on both sides is `Same` even when neither side carries a payload
/// (pure directory markers); the sum shape makes a state with the wrong
/// combination of sides unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffEntry {
    /// Present in the right tree only.
    Added { right: NodeId },
    /// Present in both trees.
    Same { right: NodeId, left: NodeId },
    /// Present in the left tree only.
    Removed { left: NodeId },
}

/// Compare `right` against `left` over their whole extent.
///
/// The result is itself a [`PathTree`], keyed identically to the inputs, so
/// it can be traversed and rendered like any other tree. Swapping the
/// operands mirrors the result: every `Added` becomes `Removed` and `Same`
/// keeps both sides, exchanged.
pub fn diff<R, L>(right: &PathTree<R>, left: &PathTree<L>) -> Result<PathTree<DiffEntry>> {
    let mut result = PathTree::new();
    diff_subtrees(right, right.root(), left, Some(left.root()), &mut result)?;
    Ok(result)
}

/// Compare `right` against `left`, restricted to the subtree at `anchor`.
///
/// The anchor must resolve in `right`. Every ancestor of the anchor (the
/// anchor included) is reported as `Same` when `left` has the path and
/// `Added` when it does not, so a diff anchored deep in a tree still carries
/// the full parent-creation chain. Paths outside the anchor subtree never
/// appear in the result.
pub fn diff_at<R, L>(
    right: &PathTree<R>,
    left: &PathTree<L>,
    anchor: &str,
) -> Result<PathTree<DiffEntry>> {
    let start = right.get(anchor).ok_or_else(|| Error::AnchorNotFound {
        path: anchor.to_string(),
    })?;

    let mut result = PathTree::new();
    let mut chain = Vec::new();
    right.walk_ancestors(start, |path, id| chain.push((path.to_string(), id)));
    for (path, right_id) in chain {
        let entry = match left.get(&path) {
            None => DiffEntry::Added { right: right_id },
            Some(left_id) => DiffEntry::Same {
                right: right_id,
                left: left_id,
            },
        };
        result.insert_with(&path, entry)?;
    }

    diff_subtrees(right, start, left, left.get(anchor), &mut result)?;
    Ok(result)
}

fn diff_subtrees<R, L>(
    right: &PathTree<R>,
    right_from: NodeId,
    left: &PathTree<L>,
    left_from: Option<NodeId>,
    result: &mut PathTree<DiffEntry>,
) -> Result<()> {
    let mut present = Vec::new();
    right.traverse_from(right_from, |path, id| present.push((path.to_string(), id)));
    for (path, right_id) in present {
        let entry = match left.get(&path) {
            None => DiffEntry::Added { right: right_id },
            Some(left_id) => DiffEntry::Same {
                right: right_id,
                left: left_id,
            },
        };
        result.insert_with(&path, entry)?;
    }

    let Some(left_from) = left_from else {
        return Ok(());
    };
    let mut removed = Vec::new();
    left.traverse_from(left_from, |path, id| {
        if right.get(path).is_none() {
            removed.push((path.to_string(), id));
        }
    });
    for (path, left_id) in removed {
        result.insert_with(&path, DiffEntry::Removed { left: left_id })?;
    }
    Ok(())
}
