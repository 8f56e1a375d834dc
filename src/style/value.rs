//! Raw and normalized style values.

use std::fmt;

use super::color::Color;

/// A style value, either as supplied by an author or as normalized by a
/// [`Choices`](super::Choices) validator.
///
/// `Int` and `Number` compare equal when they denote the same number, so
/// `Value::Int(1) == Value::Number(1.0)`.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The default sentinel: "use whatever the property defaults to".
    #[default]
    None,
    Str(String),
    Int(i64),
    Number(f64),
    Color(Color),
    /// Multiple values, used for directional shorthands.
    Tuple(Vec<Value>),
}

impl Value {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Int(a), Value::Number(b)) | (Value::Number(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Color(a), Value::Color(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("none"),
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            // Keep the decimal point: `1.0`, not `1`.
            Value::Number(n) => write!(f, "{n:?}"),
            Value::Color(c) => write!(f, "{c}"),
            Value::Tuple(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<Color> for Value {
    fn from(c: Color) -> Self {
        Value::Color(c)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Tuple(values)
    }
}

impl<const N: usize> From<[Value; N]> for Value {
    fn from(values: [Value; N]) -> Self {
        Value::Tuple(values.into())
    }
}

/// Implements `From<(A, B, ..)>` so shorthand tuples can be written inline.
macro_rules! tuple_value {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty: Into<Value>),+> From<($($ty,)+)> for Value {
            fn from(($($var,)+): ($($ty,)+)) -> Self {
                Value::Tuple(vec![$($var.into()),+])
            }
        }
    };
}

tuple_value!(A a);
tuple_value!(A a, B b);
tuple_value!(A a, B b, C c);
tuple_value!(A a, B b, C c, D d);
tuple_value!(A a, B b, C c, D d, E e);
