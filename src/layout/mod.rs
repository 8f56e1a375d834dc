//! Box geometry, intrinsic sizes and the tree that keeps absolute positions current.

mod box_model;
mod intrinsic;
mod tree;
mod viewport;

pub use box_model::BoxLayout;
pub use intrinsic::{AtLeast, DirtyLayout, IntrinsicChange, IntrinsicSize, SizeHint};
pub use tree::{LayoutNode, LayoutTree, NodeId};
pub use viewport::Viewport;
