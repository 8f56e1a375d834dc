//! Geometry of the box displaying one node.

use std::fmt;

/// Describe the layout of a box displaying a node.
///
/// Stored properties:
/// - `visible`: the node is rendered. An invisible node still takes up space.
/// - `content_width`, `content_height`: size of the content box.
/// - `content_top`, `content_left`: offset of the content from the box's
///   top/left edge.
/// - `content_bottom`, `content_right`: distance from the content's
///   bottom/right edge to the box's.
/// - origin: absolute position of the box's top-left corner. Maintained by
///   [`LayoutTree`](super::LayoutTree), which pushes it down to children.
///
/// Everything else is computed on demand from the stored values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxLayout {
    pub visible: bool,
    pub content_width: i32,
    pub content_height: i32,
    pub content_bottom: i32,
    pub content_right: i32,
    pub(super) content_top: i32,
    pub(super) content_left: i32,
    pub(super) origin_top: i32,
    pub(super) origin_left: i32,
}

impl BoxLayout {
    /// A visible, zero-sized box at the origin.
    pub fn new() -> Self {
        Self {
            visible: true,
            content_width: 0,
            content_height: 0,
            content_bottom: 0,
            content_right: 0,
            content_top: 0,
            content_left: 0,
            origin_top: 0,
            origin_left: 0,
        }
    }

    pub fn content_top(&self) -> i32 {
        self.content_top
    }

    pub fn content_left(&self) -> i32 {
        self.content_left
    }

    pub fn origin_top(&self) -> i32 {
        self.origin_top
    }

    pub fn origin_left(&self) -> i32 {
        self.origin_left
    }

    /// Overall width of the box.
    pub fn width(&self) -> i32 {
        self.content_left + self.content_width + self.content_right
    }

    /// Overall height of the box.
    pub fn height(&self) -> i32 {
        self.content_top + self.content_height + self.content_bottom
    }

    pub fn absolute_content_top(&self) -> i32 {
        self.origin_top + self.content_top
    }

    pub fn absolute_content_left(&self) -> i32 {
        self.origin_left + self.content_left
    }

    pub fn absolute_content_bottom(&self) -> i32 {
        self.origin_top + self.content_top + self.content_height
    }

    pub fn absolute_content_right(&self) -> i32 {
        self.origin_left + self.content_left + self.content_width
    }
}

impl Default for BoxLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoxLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Box ({}x{} @ {},{})>",
            self.content_width,
            self.content_height,
            self.absolute_content_left(),
            self.absolute_content_top()
        )
    }
}
