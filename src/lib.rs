//! # boxstyle
//!
//! Validated style declarations and box geometry for row/column GUI layout.
//!
//! ## Features
//!
//! - Declare style properties with a [`Choices`] validator and an initial value
//! - Directional shorthands (`margin: 1 2` expands to four sides)
//! - Report every effective change to a rendering backend via an [`Applicator`]
//! - Box geometry whose absolute origin follows its parent through a [`LayoutTree`]
//! - Intrinsic sizes with minimum bounds ([`SizeHint::at_least`])
//!
//! ## Quick Start
//!
//! ```
//! use boxstyle::style::{StyleDeclaration, Value, node_style};
//!
//! let mut style = StyleDeclaration::new(node_style::schema());
//! style.set("margin", (5, 10)).unwrap();
//! style.set("display", "none").unwrap();
//!
//! assert_eq!(style.get("margin_left").unwrap(), Value::Int(10));
//! assert_eq!(style.to_string(), "display: none; margin-bottom: 5; margin-left: 10; margin-right: 10; margin-top: 5");
//! ```
//!
//! ## Positioning Boxes
//!
//! ```
//! use boxstyle::LayoutTree;
//!
//! let mut tree = LayoutTree::new();
//! let root = tree.create_node("root");
//! let child = tree.create_node("child");
//! tree.append(root, child).unwrap();
//!
//! tree.set_content_top(root, 10).unwrap();
//! tree.set_content_left(root, 5).unwrap();
//! assert_eq!(tree.layout(child).unwrap().absolute_content_top(), 10);
//! assert_eq!(tree.layout(child).unwrap().absolute_content_left(), 5);
//! ```

pub mod error;
pub mod layout;
pub mod style;

pub use error::{Error, Result};
pub use layout::{
    AtLeast, BoxLayout, DirtyLayout, IntrinsicChange, IntrinsicSize, LayoutNode, LayoutTree,
    NodeId, SizeHint, Viewport,
};
pub use style::{
    Applicator, Choices, Color, DirectionalProperty, Side, StyleDeclaration, StyleSchema, Value,
};
