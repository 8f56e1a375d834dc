//! Style declarations: property values bound to a schema and a backend.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use super::schema::{Entry, StyleSchema, normalize_name};
use super::value::Value;
use crate::error::{Error, Result};

/// The backend side effect of a style change.
///
/// A rendering backend implements this to observe every effective change of
/// a property. Any `FnMut(&str, &Value)` closure is an applicator.
pub trait Applicator {
    fn apply(&mut self, property: &str, value: &Value);
}

impl<F> Applicator for F
where
    F: FnMut(&str, &Value),
{
    fn apply(&mut self, property: &str, value: &Value) {
        self(property, value)
    }
}

/// Storage for one property.
#[derive(Debug, Clone, PartialEq, Default)]
enum Slot {
    /// Nothing set; the schema's initial value is in effect.
    #[default]
    Initial,
    Explicit(Value),
}

/// A set of property values for one node.
///
/// Values are validated by the schema. Every change of a property's
/// effective value is reported to the bound [`Applicator`]; setting a value
/// equal to the current one is a no-op. An unbound declaration records values
/// without side effects.
pub struct StyleDeclaration {
    schema: Arc<StyleSchema>,
    slots: Vec<Slot>,
    applicator: Option<Box<dyn Applicator>>,
}

impl StyleDeclaration {
    /// Create a declaration with every property at its initial value.
    pub fn new(schema: Arc<StyleSchema>) -> Self {
        let slots = vec![Slot::Initial; schema.properties().len()];
        Self {
            schema,
            slots,
            applicator: None,
        }
    }

    /// Create a declaration bound to a backend.
    pub fn with_applicator(schema: Arc<StyleSchema>, applicator: impl Applicator + 'static) -> Self {
        let mut declaration = Self::new(schema);
        declaration.applicator = Some(Box::new(applicator));
        declaration
    }

    pub fn schema(&self) -> &Arc<StyleSchema> {
        &self.schema
    }

    /// Replace the bound backend.
    ///
    /// Nothing is applied to the new backend; call [`reapply`](Self::reapply)
    /// to push the current state to it.
    pub fn set_applicator(&mut self, applicator: Option<Box<dyn Applicator>>) {
        self.applicator = applicator;
    }

    pub fn has_applicator(&self) -> bool {
        self.applicator.is_some()
    }

    /// The effective value of a property.
    ///
    /// Directional properties return a 4-tuple in (top, right, bottom, left)
    /// order.
    pub fn get(&self, name: &str) -> Result<Value> {
        match self.schema.entry(name)? {
            Entry::Property(i) => Ok(self.effective(i).clone()),
            Entry::Directional(d) => {
                let values: Vec<Value> = self.schema.directionals()[d]
                    .sides()
                    .iter()
                    .map(|side| self.side_value(side))
                    .collect();
                Ok(Value::Tuple(values))
            }
        }
    }

    /// Set a property.
    ///
    /// Directional properties accept a scalar or a 1-4 value tuple.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        match self.schema.entry(name)? {
            Entry::Property(i) => self.set_property(i, value),
            Entry::Directional(d) => {
                let schema = Arc::clone(&self.schema);
                let directional = &schema.directionals()[d];
                let values = directional.expand(value)?;
                for (side, value) in directional.sides().iter().zip(values) {
                    let i = schema.position(side).ok_or_else(|| Error::UnknownProperty(side.clone()))?;
                    self.set_property(i, value)?;
                }
                Ok(())
            }
        }
    }

    /// Revert a property to its initial value.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        match self.schema.entry(name)? {
            Entry::Property(i) => self.delete_property(i),
            Entry::Directional(d) => {
                let schema = Arc::clone(&self.schema);
                for side in schema.directionals()[d].sides() {
                    if let Some(i) = schema.position(side) {
                        self.delete_property(i);
                    }
                }
            }
        }
        Ok(())
    }

    /// Set several properties. Names may use hyphens or underscores.
    ///
    /// Stops at the first unknown name or invalid value; earlier changes
    /// stay applied.
    pub fn update<I, K, V>(&mut self, changes: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (name, value) in changes {
            let name = normalize_name(name.as_ref());
            if !self.schema.contains(&name) {
                return Err(Error::UnknownProperty(name));
            }
            self.set(&name, value)?;
        }
        Ok(())
    }

    /// Whether a scalar property has an explicitly stored value.
    pub fn is_set(&self, name: &str) -> bool {
        self.schema
            .position(&normalize_name(name))
            .is_some_and(|i| matches!(self.slots[i], Slot::Explicit(_)))
    }

    /// Explicitly set properties and their values, in registration order.
    pub fn items(&self) -> Vec<(&str, &Value)> {
        self.schema
            .properties()
            .iter()
            .zip(&self.slots)
            .filter_map(|(def, slot)| match slot {
                Slot::Explicit(value) => Some((def.name(), value)),
                Slot::Initial => None,
            })
            .collect()
    }

    /// Names of explicitly set properties.
    pub fn keys(&self) -> BTreeSet<&str> {
        self.items().into_iter().map(|(name, _)| name).collect()
    }

    /// Apply every property's effective value to the backend again.
    pub fn reapply(&mut self) {
        let schema = Arc::clone(&self.schema);
        debug!(
            "reapplying {} properties of '{}'",
            schema.properties().len(),
            schema.name()
        );
        for (i, def) in schema.properties().iter().enumerate() {
            let value = self.effective(i).clone();
            self.apply(def.name(), &value);
        }
    }

    /// Duplicate the explicitly set properties onto a new declaration.
    ///
    /// The copy is bound to `applicator`, which sees each copied value as it
    /// is set.
    pub fn copy(&self, applicator: Option<Box<dyn Applicator>>) -> StyleDeclaration {
        let mut dup = StyleDeclaration::new(Arc::clone(&self.schema));
        dup.applicator = applicator;
        for (i, slot) in self.slots.iter().enumerate() {
            if let Slot::Explicit(value) = slot {
                // Already validated against the same schema.
                let result = dup.set_property(i, value.clone());
                debug_assert!(result.is_ok(), "re-validating a copied value failed: {result:?}");
            }
        }
        debug!("copied {} explicit properties", dup.items().len());
        dup
    }

    fn effective(&self, i: usize) -> &Value {
        match &self.slots[i] {
            Slot::Explicit(value) => value,
            Slot::Initial => self.schema.properties()[i].initial(),
        }
    }

    fn side_value(&self, side: &str) -> Value {
        self.schema
            .position(side)
            .map(|i| self.effective(i).clone())
            .unwrap_or_default()
    }

    fn set_property(&mut self, i: usize, value: Value) -> Result<()> {
        let schema = Arc::clone(&self.schema);
        let def = &schema.properties()[i];
        let value = def
            .choices()
            .validate(&value)
            .map_err(|_| Error::InvalidPropertyValue {
                property: def.name().to_string(),
                value: value.to_string(),
                options: def.choices().to_string(),
            })?;

        if value != *self.effective(i) {
            self.slots[i] = Slot::Explicit(value.clone());
            self.apply(def.name(), &value);
        }
        Ok(())
    }

    fn delete_property(&mut self, i: usize) {
        let schema = Arc::clone(&self.schema);
        let def = &schema.properties()[i];
        if let Slot::Explicit(previous) = std::mem::take(&mut self.slots[i])
            && previous != *def.initial()
        {
            self.apply(def.name(), def.initial());
        }
    }

    fn apply(&mut self, property: &str, value: &Value) {
        if let Some(applicator) = self.applicator.as_mut() {
            trace!("apply {property} = {value}");
            applicator.apply(property, value);
        }
    }
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut non_default: Vec<(String, &Value)> = self
            .items()
            .into_iter()
            .map(|(name, value)| (name.replace('_', "-"), value))
            .collect();
        non_default.sort_by(|a, b| a.0.cmp(&b.0));

        for (i, (name, value)) in non_default.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleDeclaration")
            .field("schema", &self.schema.name())
            .field("items", &self.items())
            .field("bound", &self.applicator.is_some())
            .finish()
    }
}
