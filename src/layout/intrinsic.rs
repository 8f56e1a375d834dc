//! Intrinsic (natural, unconstrained) size of a node.

use std::fmt;
use std::rc::{Rc, Weak};

use log::trace;

/// Marks a value as a minimum bound rather than an exact measurement.
///
/// Two bounds are equal when their values are; a bound never equals an exact
/// value, even a numerically identical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtLeast<T>(pub T);

impl<T> AtLeast<T> {
    pub fn value(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for AtLeast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at least {}", self.0)
    }
}

/// An intrinsic width or height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeHint {
    Exact(i32),
    AtLeast(AtLeast<i32>),
}

impl SizeHint {
    pub fn at_least(value: i32) -> Self {
        SizeHint::AtLeast(AtLeast(value))
    }

    /// The numeric value, whether exact or a bound.
    pub fn value(&self) -> i32 {
        match self {
            SizeHint::Exact(v) | SizeHint::AtLeast(AtLeast(v)) => *v,
        }
    }

    pub fn is_minimum(&self) -> bool {
        matches!(self, SizeHint::AtLeast(_))
    }
}

impl From<i32> for SizeHint {
    fn from(value: i32) -> Self {
        SizeHint::Exact(value)
    }
}

impl From<AtLeast<i32>> for SizeHint {
    fn from(value: AtLeast<i32>) -> Self {
        SizeHint::AtLeast(value)
    }
}

impl fmt::Display for SizeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeHint::Exact(v) => write!(f, "{v}"),
            SizeHint::AtLeast(bound) => write!(f, "{bound}"),
        }
    }
}

/// Which intrinsic field changed, and its new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntrinsicChange {
    Width(Option<SizeHint>),
    Height(Option<SizeHint>),
    Ratio(Option<f64>),
}

impl IntrinsicChange {
    pub fn keyword(&self) -> &'static str {
        match self {
            IntrinsicChange::Width(_) => "intrinsic_width",
            IntrinsicChange::Height(_) => "intrinsic_height",
            IntrinsicChange::Ratio(_) => "intrinsic_ratio",
        }
    }
}

/// A layout object that caches results derived from intrinsic sizes.
pub trait DirtyLayout {
    /// Mark cached layout as stale because an intrinsic value changed.
    fn dirty(&self, change: IntrinsicChange);
}

/// Representation of the intrinsic size of a node.
///
/// `ratio` relates the two dimensions: `width = height * ratio`.
/// Every change is reported to the attached layout object, if it is still
/// alive.
#[derive(Default)]
pub struct IntrinsicSize {
    width: Option<SizeHint>,
    height: Option<SizeHint>,
    ratio: Option<f64>,
    layout: Option<Weak<dyn DirtyLayout>>,
}

impl IntrinsicSize {
    /// Create an unattached intrinsic size. Nothing is notified.
    pub fn new(width: Option<SizeHint>, height: Option<SizeHint>, ratio: Option<f64>) -> Self {
        Self {
            width,
            height,
            ratio,
            layout: None,
        }
    }

    /// Report future changes to `layout`. The layout is not kept alive.
    pub fn attach<L: DirtyLayout + 'static>(&mut self, layout: &Rc<L>) {
        let weak: Weak<L> = Rc::downgrade(layout);
        self.layout = Some(weak);
    }

    pub fn detach(&mut self) {
        self.layout = None;
    }

    pub fn is_attached(&self) -> bool {
        self.layout
            .as_ref()
            .is_some_and(|layout| layout.strong_count() > 0)
    }

    pub fn width(&self) -> Option<SizeHint> {
        self.width
    }

    pub fn height(&self) -> Option<SizeHint> {
        self.height
    }

    pub fn ratio(&self) -> Option<f64> {
        self.ratio
    }

    pub fn set_width(&mut self, value: Option<SizeHint>) {
        if self.width != value {
            self.width = value;
            self.notify(IntrinsicChange::Width(value));
        }
    }

    pub fn set_height(&mut self, value: Option<SizeHint>) {
        if self.height != value {
            self.height = value;
            self.notify(IntrinsicChange::Height(value));
        }
    }

    pub fn set_ratio(&mut self, value: Option<f64>) {
        if self.ratio != value {
            self.ratio = value;
            self.notify(IntrinsicChange::Ratio(value));
        }
    }

    fn notify(&self, change: IntrinsicChange) {
        if let Some(layout) = self.layout.as_ref().and_then(Weak::upgrade) {
            trace!("{} changed: {change:?}", change.keyword());
            layout.dirty(change);
        }
    }
}

impl fmt::Debug for IntrinsicSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntrinsicSize")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("ratio", &self.ratio)
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl fmt::Display for IntrinsicSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |hint: Option<SizeHint>| hint.map_or("none".to_string(), |h| h.to_string());
        write!(f, "({}, {})", show(self.width), show(self.height))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        changes: RefCell<Vec<IntrinsicChange>>,
    }

    impl DirtyLayout for Recorder {
        fn dirty(&self, change: IntrinsicChange) {
            self.changes.borrow_mut().push(change);
        }
    }

    #[test]
    fn test_at_least_equality() {
        assert_eq!(AtLeast(5), AtLeast(5));
        assert_ne!(AtLeast(5), AtLeast(6));
        assert_ne!(SizeHint::at_least(5), SizeHint::Exact(5));
        assert_eq!(SizeHint::at_least(5), SizeHint::from(AtLeast(5)));
        assert_eq!(AtLeast(5).to_string(), "at least 5");
    }

    #[test]
    fn test_changes_notify_layout() {
        let layout = Rc::new(Recorder::default());
        let mut size = IntrinsicSize::default();
        size.attach(&layout);

        size.set_width(Some(SizeHint::at_least(10)));
        size.set_height(Some(SizeHint::Exact(20)));
        size.set_ratio(Some(1.5));

        let changes = layout.changes.borrow();
        assert_eq!(
            *changes,
            vec![
                IntrinsicChange::Width(Some(SizeHint::at_least(10))),
                IntrinsicChange::Height(Some(SizeHint::Exact(20))),
                IntrinsicChange::Ratio(Some(1.5)),
            ]
        );
        assert_eq!(changes[0].keyword(), "intrinsic_width");
        assert_eq!(changes[2].keyword(), "intrinsic_ratio");
    }

    #[test]
    fn test_unchanged_values_are_silent() {
        let layout = Rc::new(Recorder::default());
        let mut size = IntrinsicSize::new(Some(SizeHint::Exact(10)), None, Some(2.0));
        size.attach(&layout);

        size.set_width(Some(SizeHint::Exact(10)));
        size.set_ratio(Some(2.0));
        assert!(layout.changes.borrow().is_empty());

        // Exact and minimum are different values.
        size.set_width(Some(SizeHint::at_least(10)));
        assert_eq!(layout.changes.borrow().len(), 1);
    }

    #[test]
    fn test_unattached_size_still_stores() {
        let mut size = IntrinsicSize::default();
        size.set_width(Some(SizeHint::Exact(3)));
        assert_eq!(size.width(), Some(SizeHint::Exact(3)));
        assert_eq!(size.to_string(), "(3, none)");
    }

    #[test]
    fn test_attach_accepts_concrete_layout() {
        let layout: Rc<Recorder> = Rc::new(Recorder::default());
        let mut size = IntrinsicSize::new(None, None, None);
        size.attach(&layout);
        size.set_ratio(Some(0.5));
        assert_eq!(Rc::strong_count(&layout), 1);
        assert_eq!(*layout.changes.borrow(), vec![IntrinsicChange::Ratio(Some(0.5))]);
    }

    #[test]
    fn test_dropped_layout_is_not_notified() {
        let layout = Rc::new(Recorder::default());
        let mut size = IntrinsicSize::default();
        size.attach(&layout);
        assert!(size.is_attached());
        drop(layout);
        assert!(!size.is_attached());
        size.set_height(Some(SizeHint::Exact(1)));
        assert_eq!(size.height(), Some(SizeHint::Exact(1)));
    }
}
