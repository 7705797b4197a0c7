//! Path-addressed tree with deterministic child ordering

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::{Error, Result};

/// Path separator used by [`PathTree`] paths.
pub const SEPARATOR: char = '/';

/// Handle to a node inside a [`PathTree`].
///
/// A handle is only meaningful for the tree that produced it. Nodes are never
/// removed, so a handle stays valid for the lifetime of its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct NodeData<T> {
    name: String,
    path: String,
    parent: Option<NodeId>,
    children: BTreeMap<String, NodeId>,
    payload: Option<T>,
}

/// Hierarchical structure addressed by slash-separated names, independent of
/// any real filesystem.
///
/// All nodes are owned by the tree's arena; parents hold their children in a
/// name-ordered map and every non-root node keeps a non-owning back-reference
/// to its parent. The lexicographic child order is structural: it fixes the
/// traversal order that every consumer (diffing, reconciliation, rendering)
/// observes.
///
/// A node's identity is its name plus the chain of ancestor names; payloads
/// are excluded. Once set, a payload can only be replaced through
/// [`PathTree::replace_payload`], never through insertion.
#[derive(Debug, Clone)]
pub struct PathTree<T> {
    nodes: Vec<NodeData<T>>,
}

impl<T> PathTree<T> {
    /// Create a tree holding only the root node, whose path is `/`.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                name: String::new(),
                path: SEPARATOR.to_string(),
                parent: None,
                children: BTreeMap::new(),
                payload: None,
            }],
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn node(&self, id: NodeId) -> &NodeData<T> {
        &self.nodes[id.0]
    }

    /// Name of the node; empty only for the root.
    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    /// Full path of the node; `/` for the root, otherwise the parent path
    /// joined with the node name.
    pub fn path(&self, id: NodeId) -> &str {
        &self.node(id).path
    }

    /// Parent of the node; `None` only for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Whether the node is the root.
    pub fn is_root(&self, id: NodeId) -> bool {
        self.node(id).parent.is_none()
    }

    /// Payload stored on the node, if any.
    pub fn payload(&self, id: NodeId) -> Option<&T> {
        self.node(id).payload.as_ref()
    }

    /// Whether the node carries a payload.
    pub fn has_payload(&self, id: NodeId) -> bool {
        self.node(id).payload.is_some()
    }

    /// Whether the node has child nodes.
    pub fn has_children(&self, id: NodeId) -> bool {
        !self.node(id).children.is_empty()
    }

    /// Children of the node, in lexicographic name order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id).children.values().copied()
    }

    /// Resolve a slash-separated path from the root.
    ///
    /// A leading separator is optional; the empty path and `/` resolve to the
    /// root. Returns `None` unless the full path resolves.
    pub fn get(&self, path: &str) -> Option<NodeId> {
        self.get_at(self.root(), path)
    }

    /// Resolve a slash-separated path relative to `from`.
    pub fn get_at(&self, from: NodeId, path: &str) -> Option<NodeId> {
        let mut current = from;
        for segment in segments(path) {
            current = *self.node(current).children.get(segment)?;
        }
        Some(current)
    }

    /// Insert `path`, creating every missing intermediate node without a
    /// payload.
    ///
    /// Returns the terminal node, or `None` if the full path already existed
    /// (idempotent no-op).
    pub fn insert(&mut self, path: &str) -> Result<Option<NodeId>> {
        let segs = validated_segments(path)?;
        if self.lookup(&segs).is_some() {
            return Ok(None);
        }
        Ok(Some(self.materialize(&segs)))
    }

    /// Insert `path` and set `payload` on the terminal node.
    ///
    /// If the terminal node exists without a payload, the payload is set on
    /// it. If it already carries a payload, `None` is returned and nothing
    /// changes; callers must treat that as a collision.
    pub fn insert_with(&mut self, path: &str, payload: T) -> Result<Option<NodeId>> {
        let segs = validated_segments(path)?;
        let node = self.materialize(&segs);
        if self.node(node).payload.is_some() {
            return Ok(None);
        }
        self.nodes[node.0].payload = Some(payload);
        Ok(Some(node))
    }

    /// Replace the payload of a node, returning the previous value.
    ///
    /// Reconciliation uses this to refresh remote records after an update;
    /// it is not an insertion and never creates nodes.
    pub fn replace_payload(&mut self, id: NodeId, payload: T) -> Option<T> {
        self.nodes[id.0].payload.replace(payload)
    }

    fn lookup(&self, segs: &[&str]) -> Option<NodeId> {
        let mut current = self.root();
        for seg in segs {
            current = *self.node(current).children.get(*seg)?;
        }
        Some(current)
    }

    fn materialize(&mut self, segs: &[&str]) -> NodeId {
        let mut current = self.root();
        for seg in segs {
            let existing = self.node(current).children.get(*seg).copied();
            current = match existing {
                Some(child) => child,
                None => self.new_child(current, seg),
            };
        }
        current
    }

    fn new_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        let path = {
            let data = self.node(parent);
            if data.parent.is_none() {
                format!("{}{}", SEPARATOR, name)
            } else {
                format!("{}{}{}", data.path, SEPARATOR, name)
            }
        };
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            name: name.to_string(),
            path,
            parent: Some(parent),
            children: BTreeMap::new(),
            payload: None,
        });
        self.nodes[parent.0].children.insert(name.to_string(), id);
        id
    }

    /// Visit the chain from the topmost non-root ancestor down to `id`
    /// itself, top-down.
    ///
    /// The root is never visited; walking from the root visits nothing.
    pub fn walk_ancestors(&self, id: NodeId, mut visit: impl FnMut(&str, NodeId)) {
        self.walk_ancestors_inner(id, &mut visit);
    }

    fn walk_ancestors_inner(&self, id: NodeId, visit: &mut impl FnMut(&str, NodeId)) {
        if let Some(parent) = self.node(id).parent {
            self.walk_ancestors_inner(parent, visit);
            visit(self.node(id).path.as_str(), id);
        }
    }

    /// Depth-first pre-order visit of every descendant of the root, children
    /// in name order.
    pub fn traverse(&self, mut visit: impl FnMut(&str, NodeId)) {
        self.traverse_inner(self.root(), &mut visit);
    }

    /// Depth-first pre-order visit of every descendant of `from`.
    ///
    /// `from` itself is not visited.
    pub fn traverse_from(&self, from: NodeId, mut visit: impl FnMut(&str, NodeId)) {
        self.traverse_inner(from, &mut visit);
    }

    fn traverse_inner(&self, from: NodeId, visit: &mut impl FnMut(&str, NodeId)) {
        for &child in self.node(from).children.values() {
            visit(self.node(child).path.as_str(), child);
            self.traverse_inner(child, visit);
        }
    }

    /// Structural equality between nodes of two independently built trees:
    /// equal iff their names and full ancestor chains match.
    pub fn structural_eq<U>(&self, id: NodeId, other: &PathTree<U>, other_id: NodeId) -> bool {
        self.structural_cmp(id, other, other_id) == Ordering::Equal
    }

    /// Structural ordering between nodes of two independently built trees.
    ///
    /// Ancestors order before descendants; siblings order by name. The
    /// comparison walks the full ancestor chain, so it never relies on the
    /// nodes sharing an arena.
    pub fn structural_cmp<U>(&self, id: NodeId, other: &PathTree<U>, other_id: NodeId) -> Ordering {
        match (self.node(id).parent, other.node(other_id).parent) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(parent), Some(other_parent)) => self
                .structural_cmp(parent, other, other_parent)
                .then_with(|| self.node(id).name.cmp(&other.node(other_id).name)),
        }
    }
}

impl<T> Default for PathTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn segments(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix(SEPARATOR).unwrap_or(path);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split(SEPARATOR).collect()
    }
}

fn validated_segments(path: &str) -> Result<Vec<&str>> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }
    let segs = segments(path);
    if segs.is_empty() || segs.iter().any(|seg| seg.is_empty()) {
        return Err(Error::EmptySegment {
            path: path.to_string(),
        });
    }
    Ok(segs)
}
