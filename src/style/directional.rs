//! Directional (top/right/bottom/left) shorthand properties.

use super::value::Value;
use crate::error::{Error, Result};

/// One side of a box, in shorthand order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides in CSS shorthand order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// The suffix substituted into a directional name template.
    pub fn suffix(self) -> &'static str {
        match self {
            Side::Top => "_top",
            Side::Right => "_right",
            Side::Bottom => "_bottom",
            Side::Left => "_left",
        }
    }
}

/// A composite property over four scalar properties.
///
/// The template contains a single `{}` placeholder which is replaced by a
/// side suffix to name each underlying property, and by nothing to name the
/// composite itself: `"border{}_width"` covers `border_top_width` etc. and is
/// itself called `border_width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionalProperty {
    name: String,
    sides: [String; 4],
}

impl DirectionalProperty {
    pub(crate) fn from_template(template: &str) -> Self {
        let expand = |suffix: &str| {
            if template.contains("{}") {
                template.replacen("{}", suffix, 1)
            } else {
                format!("{template}{suffix}")
            }
        };
        Self {
            name: expand(""),
            sides: Side::ALL.map(|side| expand(side.suffix())),
        }
    }

    /// The composite name, e.g. `padding`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying property name for one side.
    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Top => &self.sides[0],
            Side::Right => &self.sides[1],
            Side::Bottom => &self.sides[2],
            Side::Left => &self.sides[3],
        }
    }

    /// Underlying property names in (top, right, bottom, left) order.
    pub fn sides(&self) -> &[String; 4] {
        &self.sides
    }

    /// Expand a scalar or a 1-4 value tuple into per-side values.
    pub fn expand(&self, value: Value) -> Result<[Value; 4]> {
        match value {
            Value::Tuple(values) => {
                expand_shorthand_4(values).ok_or_else(|| Error::InvalidShorthand {
                    property: self.name.clone(),
                })
            }
            scalar => Ok([scalar.clone(), scalar.clone(), scalar.clone(), scalar]),
        }
    }
}

/// Expand 1-4 values to (top, right, bottom, left) following CSS shorthand rules.
///
/// 1 value: all sides
/// 2 values: top/bottom, left/right
/// 3 values: top, left/right, bottom
/// 4 values: top, right, bottom, left
pub fn expand_shorthand_4<T: Clone>(values: Vec<T>) -> Option<[T; 4]> {
    let mut values = values.into_iter();
    let expanded = match values.len() {
        1 => {
            let v = values.next()?;
            [v.clone(), v.clone(), v.clone(), v]
        }
        2 => {
            let (tb, lr) = (values.next()?, values.next()?);
            [tb.clone(), lr.clone(), tb, lr]
        }
        3 => {
            let (t, lr, b) = (values.next()?, values.next()?, values.next()?);
            [t, lr.clone(), b, lr]
        }
        4 => [values.next()?, values.next()?, values.next()?, values.next()?],
        _ => return None,
    };
    Some(expanded)
}
