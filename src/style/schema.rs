//! Property schemas: the set of properties a style declaration supports.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use super::choices::Choices;
use super::directional::DirectionalProperty;
use super::value::Value;
use crate::error::{Error, Result};

/// A simple validated property.
#[derive(Debug, Clone)]
pub struct PropertyDef {
    name: String,
    choices: Choices,
    initial: Value,
}

impl PropertyDef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn choices(&self) -> &Choices {
        &self.choices
    }

    /// The validated initial value, used whenever nothing has been set.
    pub fn initial(&self) -> &Value {
        &self.initial
    }
}

/// What a registered name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Entry {
    Property(usize),
    Directional(usize),
}

/// An immutable table of property definitions.
///
/// Built once with [`StyleSchema::builder`] and shared between every
/// declaration that uses it.
#[derive(Debug)]
pub struct StyleSchema {
    name: String,
    properties: Vec<PropertyDef>,
    directionals: Vec<DirectionalProperty>,
    index: HashMap<String, Entry>,
}

impl StyleSchema {
    pub fn builder(name: impl Into<String>) -> StyleSchemaBuilder {
        StyleSchemaBuilder {
            schema: StyleSchema {
                name: name.into(),
                properties: Vec::new(),
                directionals: Vec::new(),
                index: HashMap::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scalar properties in registration order.
    pub fn properties(&self) -> &[PropertyDef] {
        &self.properties
    }

    pub fn directionals(&self) -> &[DirectionalProperty] {
        &self.directionals
    }

    /// Look up a scalar property by (normalized) name.
    pub fn property(&self, name: &str) -> Option<&PropertyDef> {
        match self.index.get(&normalize_name(name))? {
            Entry::Property(i) => self.properties.get(*i),
            Entry::Directional(_) => None,
        }
    }

    /// Look up a directional property by (normalized) name.
    pub fn directional(&self, name: &str) -> Option<&DirectionalProperty> {
        match self.index.get(&normalize_name(name))? {
            Entry::Directional(i) => self.directionals.get(*i),
            Entry::Property(_) => None,
        }
    }

    /// Whether `name` is any registered property, scalar or directional.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&normalize_name(name))
    }

    pub(crate) fn entry(&self, name: &str) -> Result<Entry> {
        let name = normalize_name(name);
        self.index
            .get(&name)
            .copied()
            .ok_or(Error::UnknownProperty(name))
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        match self.index.get(name)? {
            Entry::Property(i) => Some(*i),
            Entry::Directional(_) => None,
        }
    }
}

/// Builder for [`StyleSchema`].
#[derive(Debug)]
pub struct StyleSchemaBuilder {
    schema: StyleSchema,
}

impl StyleSchemaBuilder {
    /// Register a simple validated property.
    ///
    /// The initial value is validated immediately; an invalid initial value
    /// is a programming error reported as [`Error::InvalidInitialValue`].
    pub fn validated(
        mut self,
        name: &str,
        choices: Choices,
        initial: impl Into<Value>,
    ) -> Result<Self> {
        let name = normalize_name(name);
        let initial = initial.into();
        let validated = choices
            .validate(&initial)
            .map_err(|_| Error::InvalidInitialValue {
                property: name.clone(),
                value: initial.to_string(),
            })?;

        let position = self.schema.properties.len();
        self.schema.properties.push(PropertyDef {
            name: name.clone(),
            choices,
            initial: validated,
        });
        self.schema.index.insert(name, Entry::Property(position));
        Ok(self)
    }

    /// Register a directional alias over four already registered properties.
    ///
    /// See [`DirectionalProperty`] for the template syntax.
    pub fn directional(mut self, template: &str) -> Result<Self> {
        let directional = DirectionalProperty::from_template(&normalize_name(template));
        for side in directional.sides() {
            if !matches!(self.schema.index.get(side), Some(Entry::Property(_))) {
                return Err(Error::UnknownProperty(side.clone()));
            }
        }

        let position = self.schema.directionals.len();
        self.schema
            .index
            .insert(directional.name().to_string(), Entry::Directional(position));
        self.schema.directionals.push(directional);
        Ok(self)
    }

    pub fn build(self) -> Arc<StyleSchema> {
        debug!(
            "built style schema '{}': {} properties, {} directional",
            self.schema.name,
            self.schema.properties.len(),
            self.schema.directionals.len()
        );
        Arc::new(self.schema)
    }
}

/// Canonical property name: hyphens become underscores.
pub fn normalize_name(name: &str) -> String {
    name.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Arc<StyleSchema> {
        StyleSchema::builder("test")
            .validated("int-prop", Choices::new(["auto"]).integer(), 0)
            .and_then(|b| b.validated("margin_top", Choices::new(["auto"]).integer(), 0))
            .and_then(|b| b.validated("margin_right", Choices::new(["auto"]).integer(), 0))
            .and_then(|b| b.validated("margin_bottom", Choices::new(["auto"]).integer(), 0))
            .and_then(|b| b.validated("margin_left", Choices::new(["auto"]).integer(), 0))
            .and_then(|b| b.directional("margin{}"))
            .unwrap()
            .build()
    }

    #[test]
    fn test_names_are_normalized() {
        let schema = schema();
        assert!(schema.contains("int_prop"));
        assert!(schema.contains("int-prop"));
        assert_eq!(schema.property("int-prop").unwrap().name(), "int_prop");
        assert!(schema.contains("margin"));
        assert!(schema.property("margin").is_none());
        assert!(schema.directional("margin").is_some());
    }

    #[test]
    fn test_initial_is_validated() {
        let schema = StyleSchema::builder("test")
            .validated("size", Choices::new(Vec::<Value>::new()).integer(), "12")
            .unwrap()
            .build();
        assert_eq!(schema.property("size").unwrap().initial(), &Value::Int(12));
    }

    #[test]
    fn test_invalid_initial_fails_build() {
        let err = StyleSchema::builder("test")
            .validated("display", Choices::new(["pack", "none"]), "grid")
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInitialValue {
                property: "display".to_string(),
                value: "grid".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_initial_needs_default() {
        let err = StyleSchema::builder("test")
            .validated("width", Choices::new(Vec::<Value>::new()).integer(), Value::None)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInitialValue { .. }));

        let ok = StyleSchema::builder("test").validated(
            "width",
            Choices::new(Vec::<Value>::new()).integer().default_value(),
            Value::None,
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_directional_requires_sides() {
        let err = StyleSchema::builder("test")
            .directional("padding{}")
            .unwrap_err();
        assert_eq!(err, Error::UnknownProperty("padding_top".to_string()));
    }

    #[test]
    fn test_unknown_entry() {
        let schema = schema();
        assert_eq!(
            schema.entry("no-such-thing").unwrap_err(),
            Error::UnknownProperty("no_such_thing".to_string())
        );
    }
}
