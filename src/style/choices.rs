//! Value validators for style properties.

use std::fmt;

use super::color::Color;
use super::value::Value;
use crate::error::{Error, Result};

/// The set of values a property accepts.
///
/// A validator combines a fixed set of constants with optional free-form
/// kinds. Validation tries, in order: the default sentinel, string, integer,
/// number, color, the literal `"none"` as the default sentinel, and finally
/// an exact match against the constants. A kind whose coercion fails falls
/// through to the next one.
///
/// ```
/// use boxstyle::style::{Choices, Value};
///
/// let choices = Choices::new(["auto"]).integer();
/// assert_eq!(choices.validate(&"12".into()).unwrap(), Value::Int(12));
/// assert_eq!(choices.validate(&"auto".into()).unwrap(), Value::from("auto"));
/// assert!(choices.validate(&"wide".into()).is_err());
/// assert_eq!(choices.to_string(), "auto, <integer>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Choices {
    constants: Vec<Value>,
    default: bool,
    string: bool,
    integer: bool,
    number: bool,
    color: bool,
}

impl Choices {
    /// Create a validator accepting exactly the given constants.
    pub fn new<I, V>(constants: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut unique: Vec<Value> = Vec::new();
        for constant in constants {
            let constant = constant.into();
            if !unique.contains(&constant) {
                unique.push(constant);
            }
        }
        Self {
            constants: unique,
            ..Self::default()
        }
    }

    /// Accept the default sentinel (`Value::None`, or the string `"none"`).
    pub fn default_value(mut self) -> Self {
        self.default = true;
        self
    }

    /// Accept any string, trimmed of surrounding whitespace.
    pub fn string(mut self) -> Self {
        self.string = true;
        self
    }

    /// Accept anything that coerces to an integer.
    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Accept anything that coerces to a floating point number.
    pub fn number(mut self) -> Self {
        self.number = true;
        self
    }

    /// Accept colors and strings that parse as colors.
    pub fn color(mut self) -> Self {
        self.color = true;
        self
    }

    pub fn constants(&self) -> &[Value] {
        &self.constants
    }

    /// Human-readable descriptions of every accepted option.
    ///
    /// Constants come first, lower-cased with `_` shown as `-` and sorted,
    /// followed by a placeholder for each enabled free-form kind.
    pub fn options(&self) -> Vec<String> {
        let mut options: Vec<String> = self
            .constants
            .iter()
            .map(|c| c.to_string().to_lowercase().replace('_', "-"))
            .collect();
        options.sort();
        if self.string {
            options.push("<string>".to_string());
        }
        if self.integer {
            options.push("<integer>".to_string());
        }
        if self.number {
            options.push("<number>".to_string());
        }
        if self.color {
            options.push("<color>".to_string());
        }
        options
    }

    /// Validate and normalize a raw value.
    pub fn validate(&self, value: &Value) -> Result<Value> {
        if self.default && value.is_none() {
            return Ok(Value::None);
        }
        if self.string
            && let Value::Str(s) = value
        {
            return Ok(Value::Str(s.trim().to_string()));
        }
        if self.integer
            && let Some(i) = coerce_integer(value)
        {
            return Ok(Value::Int(i));
        }
        if self.number
            && let Some(n) = coerce_number(value)
        {
            return Ok(Value::Number(n));
        }
        if self.color
            && let Some(c) = coerce_color(value)
        {
            return Ok(Value::Color(c));
        }
        if self.default && value.as_str() == Some("none") {
            return Ok(Value::None);
        }
        if let Some(constant) = self.constants.iter().find(|c| *c == value) {
            return Ok(constant.clone());
        }

        Err(Error::InvalidValue {
            value: value.to_string(),
        })
    }
}

impl fmt::Display for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.options().join(", "))
    }
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        Value::Number(n) if n.is_finite() => Some(n.trunc() as i64),
        Value::Str(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::Number(n) => Some(*n),
        Value::Str(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_color(value: &Value) -> Option<Color> {
    match value {
        Value::Color(c) => Some(*c),
        Value::Str(s) => Color::parse(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_takes_priority() {
        let choices = Choices::new(["a"])
            .default_value()
            .string()
            .integer()
            .number()
            .color();
        assert_eq!(choices.validate(&Value::None).unwrap(), Value::None);
    }

    #[test]
    fn test_none_rejected_without_default() {
        let choices = Choices::new(["a"]).string();
        assert!(choices.validate(&Value::None).is_err());
    }

    #[test]
    fn test_literal_none_is_default_sentinel() {
        let choices = Choices::new(["a"]).default_value();
        assert_eq!(choices.validate(&"none".into()).unwrap(), Value::None);

        // Without defaulting "none" is an ordinary constant.
        let choices = Choices::new(["none", "a"]);
        assert_eq!(choices.validate(&"none".into()).unwrap(), Value::from("none"));
        assert!(Choices::new(["a"]).validate(&"none".into()).is_err());
    }

    #[test]
    fn test_string_is_trimmed() {
        let choices = Choices::new(Vec::<Value>::new()).string();
        assert_eq!(choices.validate(&"  x  ".into()).unwrap(), Value::from("x"));
    }

    #[test]
    fn test_string_wins_over_integer() {
        let choices = Choices::new(Vec::<Value>::new()).string().integer();
        assert_eq!(choices.validate(&"5".into()).unwrap(), Value::from("5"));
        assert_eq!(choices.validate(&Value::Int(5)).unwrap(), Value::Int(5));
    }

    #[test]
    fn test_integer_coercion() {
        let choices = Choices::new(Vec::<Value>::new()).integer();
        assert_eq!(choices.validate(&" 42 ".into()).unwrap(), Value::Int(42));
        assert_eq!(choices.validate(&Value::Number(3.9)).unwrap(), Value::Int(3));
        assert!(choices.validate(&"3.5".into()).is_err());
        assert!(choices.validate(&Value::Color(Color::BLACK)).is_err());
    }

    #[test]
    fn test_number_coercion() {
        let choices = Choices::new(Vec::<Value>::new()).number();
        assert_eq!(choices.validate(&"1.5".into()).unwrap(), Value::Number(1.5));
        assert_eq!(choices.validate(&Value::Int(2)).unwrap(), Value::Number(2.0));
        assert!(choices.validate(&"wide".into()).is_err());
    }

    #[test]
    fn test_failed_coercion_falls_through_to_constants() {
        let choices = Choices::new(["auto", "fill"]).integer();
        assert_eq!(choices.validate(&"auto".into()).unwrap(), Value::from("auto"));
        assert_eq!(choices.validate(&"7".into()).unwrap(), Value::Int(7));
        let err = choices.validate(&"wide".into()).unwrap_err();
        assert!(err.to_string().contains("'wide'"));
    }

    #[test]
    fn test_color_coercion() {
        let choices = Choices::new(["auto"]).color();
        assert_eq!(
            choices.validate(&"#ff0000".into()).unwrap(),
            Value::Color(Color::rgb(255, 0, 0))
        );
        assert_eq!(
            choices.validate(&Value::Color(Color::WHITE)).unwrap(),
            Value::Color(Color::WHITE)
        );
        assert_eq!(choices.validate(&"auto".into()).unwrap(), Value::from("auto"));
        assert!(choices.validate(&"not-a-color".into()).is_err());
    }

    #[test]
    fn test_tuples_are_never_scalar_values() {
        let choices = Choices::new(["a"]).string().integer().number();
        assert!(choices.validate(&Value::from((1, 2))).is_err());
    }

    #[test]
    fn test_options_rendering() {
        let choices = Choices::new(["space_between", "Center", "none"])
            .string()
            .integer()
            .number()
            .color();
        assert_eq!(
            choices.to_string(),
            "center, none, space-between, <string>, <integer>, <number>, <color>"
        );
    }

    #[test]
    fn test_duplicate_constants_collapse() {
        let choices = Choices::new(["a", "a", "b"]);
        assert_eq!(choices.constants().len(), 2);
        assert_eq!(choices.to_string(), "a, b");
    }

    proptest! {
        #[test]
        fn prop_string_validation_trims(
            inner in "[a-z0-9][a-z0-9 ]{0,10}[a-z0-9]",
            left in " {0,4}",
            right in " {0,4}",
        ) {
            let choices = Choices::new(Vec::<Value>::new()).string();
            let raw = Value::from(format!("{left}{inner}{right}"));
            prop_assert_eq!(choices.validate(&raw).unwrap(), Value::from(inner));
        }

        #[test]
        fn prop_integers_roundtrip_through_strings(n in any::<i64>()) {
            let choices = Choices::new(Vec::<Value>::new()).integer();
            prop_assert_eq!(choices.validate(&Value::from(n.to_string())).unwrap(), Value::Int(n));
        }
    }
}
