//! Arena of layout nodes and absolute origin propagation.
//!
//! Nodes live in a single vector and refer to each other by index. A node's
//! box origin is always its parent's absolute content-box top-left corner;
//! whenever a box moves or its content offset changes the new position is
//! pushed down the subtree, depth first, children in insertion order.

use log::trace;

use super::box_model::BoxLayout;
use super::intrinsic::IntrinsicSize;
use crate::error::{Error, Result};

/// Unique identifier for a node in a [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the layout tree.
#[derive(Debug)]
pub struct LayoutNode<T> {
    pub data: T,
    pub intrinsic: IntrinsicSize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    layout: Option<BoxLayout>,
}

impl<T> LayoutNode<T> {
    fn new(data: T, layout: Option<BoxLayout>) -> Self {
        Self {
            data,
            intrinsic: IntrinsicSize::default(),
            parent: None,
            children: Vec::new(),
            layout,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The node's box, or `None` if it does not take part in layout.
    pub fn layout(&self) -> Option<&BoxLayout> {
        self.layout.as_ref()
    }
}

/// Arena-based tree of layout nodes.
///
/// Offsets that position children (`content_top`, `content_left`) and box
/// origins can only be changed through the tree, so absolute positions are
/// never stale.
#[derive(Debug)]
pub struct LayoutTree<T> {
    nodes: Vec<LayoutNode<T>>,
}

impl<T> LayoutTree<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn alloc(&mut self, node: LayoutNode<T>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached node with a zeroed box.
    pub fn create_node(&mut self, data: T) -> NodeId {
        self.alloc(LayoutNode::new(data, Some(BoxLayout::new())))
    }

    /// Create a detached node that does not take part in layout.
    pub fn create_unboxed_node(&mut self, data: T) -> NodeId {
        self.alloc(LayoutNode::new(data, None))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&LayoutNode<T>> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut LayoutNode<T>> {
        self.nodes.get_mut(id.index())
    }

    fn node(&self, id: NodeId) -> Result<&LayoutNode<T>> {
        self.get(id).ok_or(Error::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode<T>> {
        self.get_mut(id).ok_or(Error::UnknownNode(id))
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or_default()
    }

    pub fn layout(&self, id: NodeId) -> Option<&BoxLayout> {
        self.get(id)?.layout.as_ref()
    }

    /// Mutable access to a node's box.
    ///
    /// Only fields that do not affect children (sizes, bottom/right offsets,
    /// visibility) are writable this way.
    pub fn layout_mut(&mut self, id: NodeId) -> Option<&mut BoxLayout> {
        self.get_mut(id)?.layout.as_mut()
    }

    pub fn intrinsic_mut(&mut self, id: NodeId) -> Option<&mut IntrinsicSize> {
        Some(&mut self.get_mut(id)?.intrinsic)
    }

    /// Append `child` as the last child of `parent`, moving it from its
    /// previous parent if it had one.
    ///
    /// The child (and its subtree) is positioned at the parent's content box.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(parent)?;
        self.node(child)?;
        if self.is_ancestor_or_self(child, parent) {
            return Err(Error::CyclicAppend { parent, child });
        }

        if let Some(old_parent) = self.nodes[child.index()].parent {
            self.nodes[old_parent.index()]
                .children
                .retain(|c| *c != child);
        }
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);

        if let Some(layout) = &self.nodes[parent.index()].layout {
            let top = layout.absolute_content_top();
            let left = layout.absolute_content_left();
            self.push_origin_top(child, top);
            self.push_origin_left(child, left);
        }
        Ok(())
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.nodes[id.index()].parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    /// Give a node a fresh box, positioned inside its parent's content box.
    pub fn attach_box(&mut self, id: NodeId) -> Result<()> {
        let (top, left) = match self.node(id)?.parent.and_then(|p| self.layout(p)) {
            Some(parent) => (
                parent.absolute_content_top(),
                parent.absolute_content_left(),
            ),
            None => (0, 0),
        };
        let mut layout = BoxLayout::new();
        layout.origin_top = top;
        layout.origin_left = left;
        self.node_mut(id)?.layout = Some(layout);
        self.propagate(id);
        Ok(())
    }

    /// Remove a node's box. Its subtree keeps its last positions.
    pub fn detach_box(&mut self, id: NodeId) -> Result<Option<BoxLayout>> {
        Ok(self.node_mut(id)?.layout.take())
    }

    /// Zero all geometry of a node's box, origin included, and push the
    /// cleared position to its children.
    pub fn reset_layout(&mut self, id: NodeId) -> Result<()> {
        let node = self.node_mut(id)?;
        let layout = node.layout.as_mut().ok_or(Error::NoLayout(id))?;
        *layout = BoxLayout::new();
        self.propagate(id);
        Ok(())
    }

    /// Set the offset of a node's content from the top of its box.
    pub fn set_content_top(&mut self, id: NodeId, value: i32) -> Result<()> {
        let layout = self.box_mut(id)?;
        layout.content_top = value;
        let absolute = layout.absolute_content_top();
        self.propagate_top(id, absolute);
        Ok(())
    }

    /// Set the offset of a node's content from the left of its box.
    pub fn set_content_left(&mut self, id: NodeId, value: i32) -> Result<()> {
        let layout = self.box_mut(id)?;
        layout.content_left = value;
        let absolute = layout.absolute_content_left();
        self.propagate_left(id, absolute);
        Ok(())
    }

    /// Move a box so its top edge is at the absolute position `value`.
    ///
    /// Normally only used on roots; descendants follow automatically.
    pub fn set_origin_top(&mut self, id: NodeId, value: i32) -> Result<()> {
        self.box_mut(id)?;
        self.push_origin_top(id, value);
        Ok(())
    }

    /// Move a box so its left edge is at the absolute position `value`.
    pub fn set_origin_left(&mut self, id: NodeId, value: i32) -> Result<()> {
        self.box_mut(id)?;
        self.push_origin_left(id, value);
        Ok(())
    }

    pub fn set_origin(&mut self, id: NodeId, top: i32, left: i32) -> Result<()> {
        self.set_origin_top(id, top)?;
        self.set_origin_left(id, left)
    }

    fn box_mut(&mut self, id: NodeId) -> Result<&mut BoxLayout> {
        self.node_mut(id)?
            .layout
            .as_mut()
            .ok_or(Error::NoLayout(id))
    }

    fn push_origin_top(&mut self, id: NodeId, value: i32) {
        let Some(layout) = self.nodes[id.index()].layout.as_mut() else {
            return;
        };
        if layout.origin_top == value {
            return;
        }
        layout.origin_top = value;
        let absolute = layout.absolute_content_top();
        trace!("{id:?} origin_top = {value}");
        self.propagate_top(id, absolute);
    }

    fn push_origin_left(&mut self, id: NodeId, value: i32) {
        let Some(layout) = self.nodes[id.index()].layout.as_mut() else {
            return;
        };
        if layout.origin_left == value {
            return;
        }
        layout.origin_left = value;
        let absolute = layout.absolute_content_left();
        trace!("{id:?} origin_left = {value}");
        self.propagate_left(id, absolute);
    }

    fn propagate_top(&mut self, id: NodeId, absolute: i32) {
        for i in 0..self.nodes[id.index()].children.len() {
            let child = self.nodes[id.index()].children[i];
            self.push_origin_top(child, absolute);
        }
    }

    fn propagate_left(&mut self, id: NodeId, absolute: i32) {
        for i in 0..self.nodes[id.index()].children.len() {
            let child = self.nodes[id.index()].children[i];
            self.push_origin_left(child, absolute);
        }
    }

    fn propagate(&mut self, id: NodeId) {
        if let Some(layout) = &self.nodes[id.index()].layout {
            let top = layout.absolute_content_top();
            let left = layout.absolute_content_left();
            self.propagate_top(id, top);
            self.propagate_left(id, left);
        }
    }

    /// All nodes of the subtree rooted at `root`, in depth-first pre-order.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.get(id) {
                order.push(id);
                // Push children in reverse order for left-to-right traversal
                stack.extend(node.children.iter().rev());
            }
        }
        order
    }
}

impl<T> Default for LayoutTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absolute(tree: &LayoutTree<&str>, id: NodeId) -> (i32, i32) {
        let layout = tree.layout(id).unwrap();
        (layout.absolute_content_top(), layout.absolute_content_left())
    }

    #[test]
    fn test_append_positions_child() {
        let mut tree = LayoutTree::new();
        let parent = tree.create_node("parent");
        let child = tree.create_node("child");
        tree.set_content_top(parent, 10).unwrap();
        tree.set_content_left(parent, 5).unwrap();

        tree.append(parent, child).unwrap();
        assert_eq!(tree.children(parent), &[child]);
        assert_eq!(tree.get(child).unwrap().parent(), Some(parent));
        assert_eq!(absolute(&tree, child), (10, 5));
    }

    #[test]
    fn test_offset_change_propagates() {
        let mut tree = LayoutTree::new();
        let parent = tree.create_node("parent");
        let child = tree.create_node("child");
        tree.append(parent, child).unwrap();
        tree.set_content_top(child, 1).unwrap();

        tree.set_content_top(parent, 10).unwrap();
        assert_eq!(absolute(&tree, child), (11, 0));
        assert_eq!(tree.layout(child).unwrap().origin_top(), 10);
    }

    #[test]
    fn test_unboxed_children_are_skipped() {
        let mut tree = LayoutTree::new();
        let parent = tree.create_node("parent");
        let ghost = tree.create_unboxed_node("ghost");
        let child = tree.create_node("child");
        tree.append(parent, ghost).unwrap();
        tree.append(parent, child).unwrap();

        tree.set_origin(parent, 3, 4).unwrap();
        assert!(tree.layout(ghost).is_none());
        assert_eq!(absolute(&tree, child), (3, 4));
        assert_eq!(tree.set_content_top(ghost, 1), Err(Error::NoLayout(ghost)));
    }

    #[test]
    fn test_reparenting() {
        let mut tree = LayoutTree::new();
        let a = tree.create_node("a");
        let b = tree.create_node("b");
        let child = tree.create_node("child");
        tree.set_origin(b, 50, 60).unwrap();
        tree.append(a, child).unwrap();
        tree.append(b, child).unwrap();

        assert!(tree.children(a).is_empty());
        assert_eq!(tree.children(b), &[child]);
        assert_eq!(absolute(&tree, child), (50, 60));
    }

    #[test]
    fn test_cyclic_append_is_rejected() {
        let mut tree = LayoutTree::new();
        let a = tree.create_node("a");
        let b = tree.create_node("b");
        tree.append(a, b).unwrap();
        assert_eq!(
            tree.append(b, a),
            Err(Error::CyclicAppend { parent: b, child: a })
        );
        assert!(tree.append(a, a).is_err());
    }

    #[test]
    fn test_unknown_node() {
        let mut tree: LayoutTree<&str> = LayoutTree::new();
        let a = tree.create_node("a");
        let missing = NodeId(7);
        assert_eq!(tree.append(a, missing), Err(Error::UnknownNode(missing)));
        assert_eq!(tree.set_content_left(missing, 1), Err(Error::UnknownNode(missing)));
    }

    #[test]
    fn test_reset_clears_and_propagates() {
        let mut tree = LayoutTree::new();
        let parent = tree.create_node("parent");
        let child = tree.create_node("child");
        tree.append(parent, child).unwrap();
        tree.set_origin(parent, 100, 100).unwrap();
        tree.set_content_top(parent, 10).unwrap();
        tree.layout_mut(parent).unwrap().content_width = 40;

        tree.reset_layout(parent).unwrap();
        assert_eq!(tree.layout(parent), Some(&BoxLayout::new()));
        assert_eq!(absolute(&tree, child), (0, 0));

        // Idempotent.
        tree.reset_layout(parent).unwrap();
        assert_eq!(absolute(&tree, child), (0, 0));
    }

    #[test]
    fn test_attach_box_uses_parent_position() {
        let mut tree = LayoutTree::new();
        let parent = tree.create_node("parent");
        let child = tree.create_unboxed_node("child");
        tree.append(parent, child).unwrap();
        tree.set_origin(parent, 7, 8).unwrap();

        tree.attach_box(child).unwrap();
        assert_eq!(absolute(&tree, child), (7, 8));

        let removed = tree.detach_box(child).unwrap();
        assert!(removed.is_some());
        assert!(tree.layout(child).is_none());
    }

    #[test]
    fn test_descendants_pre_order() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node("root");
        let a = tree.create_node("a");
        let a1 = tree.create_node("a1");
        let b = tree.create_node("b");
        tree.append(root, a).unwrap();
        tree.append(a, a1).unwrap();
        tree.append(root, b).unwrap();
        assert_eq!(tree.descendants(root), vec![root, a, a1, b]);
    }
}
