//! Tree rendering for human inspection

use crate::tree::{NodeId, PathTree};

/// Render the subtree at `from` using the same name-ordered pre-order
/// traversal the rest of the crate observes; there is no separate display
/// order.
///
/// When `from` is not the root, its ancestor chain is rendered first so the
/// output shows the full nesting. `annotate` may return a suffix that is
/// appended after a node's name.
pub fn render<T>(
    tree: &PathTree<T>,
    from: NodeId,
    annotate: impl Fn(NodeId) -> Option<String>,
) -> String {
    let mut out = String::new();
    let mut prefix = String::new();
    if !tree.is_root(from) {
        tree.walk_ancestors(from, |_, id| {
            out.push_str(&prefix);
            out.push_str("└─ ");
            out.push_str(tree.name(id));
            if let Some(note) = annotate(id) {
                out.push_str(&note);
            }
            out.push('\n');
            prefix.push_str("   ");
        });
    }
    render_children(tree, from, &prefix, &annotate, &mut out);
    out
}

fn render_children<T, F>(tree: &PathTree<T>, node: NodeId, prefix: &str, annotate: &F, out: &mut String)
where
    F: Fn(NodeId) -> Option<String>,
{
    let children: Vec<NodeId> = tree.children(node).collect();
    let last_index = children.len().saturating_sub(1);
    for (index, child) in children.into_iter().enumerate() {
        let last = index == last_index;
        out.push_str(prefix);
        out.push_str(if last { "└─ " } else { "├─ " });
        out.push_str(tree.name(child));
        if let Some(note) = annotate(child) {
            out.push_str(&note);
        }
        out.push('\n');
        let child_prefix = format!("{prefix}{}", if last { "   " } else { "│  " });
        render_children(tree, child, &child_prefix, annotate, out);
    }
}
