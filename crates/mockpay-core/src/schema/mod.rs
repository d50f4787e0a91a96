//! Schema registry: the validation rules of every resource type.
//!
//! The registry is plain data. One generic [`Validator`](crate::validation::Validator)
//! interprets it, so adding a resource type or tightening a rule never needs
//! new code. Registries (de)serialize as a JSON array of schemas:
//!
//! ```json
//! [
//!   {
//!     "name": "coupon",
//!     "display_name": "Coupon",
//!     "required": [{ "field": "duration" }],
//!     "integers": [{ "field": "percent_off", "minimum": 0, "maximum": 100 }],
//!     "strings": ["name"],
//!     "inclusions": [{ "field": "duration", "values": ["forever", "once", "repeating"] }]
//!   }
//! ]
//! ```

use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SetupError;

pub mod currencies;
pub mod defaults;
pub mod rules;

pub use rules::{Inclusion, InclusionMessage, IntegerRule, MissingMessage, Reference, RequiredField};

/// Validation rules and defaults for one resource type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    /// Resource type name, e.g. `"plan"`
    pub name: String,
    /// Capitalized name used in messages, e.g. `"Plan"`
    pub display_name: String,
    /// Checked in order on create
    #[serde(default)]
    pub required: Vec<RequiredField>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub integers: Vec<IntegerRule>,
    #[serde(default)]
    pub inclusions: Vec<Inclusion>,
    /// Fields that must hold a string-to-string object
    #[serde(default)]
    pub maps: Vec<String>,
    /// Fields that must hold a string when present
    #[serde(default)]
    pub strings: Vec<String>,
    /// Fields that must hold a boolean when present
    #[serde(default)]
    pub booleans: Vec<String>,
    /// Values applied on create for absent fields
    #[serde(default)]
    pub defaults: Map<String, Value>,
}

impl Schema {
    /// An empty schema for `name`.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            required: Vec::new(),
            references: Vec::new(),
            integers: Vec::new(),
            inclusions: Vec::new(),
            maps: Vec::new(),
            strings: Vec::new(),
            booleans: Vec::new(),
            defaults: Map::new(),
        }
    }

    /// Require `field`, reported with the generic missing-param message.
    pub fn require(self, field: &str) -> Self {
        self.require_with(field, MissingMessage::Generic)
    }

    /// Require `field`, reported with `message`.
    pub fn require_with(mut self, field: &str, message: MissingMessage) -> Self {
        self.required.push(RequiredField {
            field: field.to_string(),
            message,
        });
        self
    }

    /// `field` must name an existing `resource` record.
    pub fn reference(mut self, field: &str, resource: &str) -> Self {
        self.references.push(Reference {
            field: field.to_string(),
            resource: resource.to_string(),
        });
        self
    }

    /// `field` only accepts whole numbers, optionally bounded below.
    pub fn integer(mut self, field: &str, minimum: Option<i64>) -> Self {
        self.integers.push(IntegerRule {
            field: field.to_string(),
            minimum,
            maximum: None,
        });
        self
    }

    /// `field` only accepts whole numbers within `range`.
    pub fn integer_in(mut self, field: &str, range: RangeInclusive<i64>) -> Self {
        self.integers.push(IntegerRule {
            field: field.to_string(),
            minimum: Some(*range.start()),
            maximum: Some(*range.end()),
        });
        self
    }

    pub fn inclusion(mut self, rule: Inclusion) -> Self {
        self.inclusions.push(rule);
        self
    }

    /// `field` must hold a string-to-string object.
    pub fn map(mut self, field: &str) -> Self {
        self.maps.push(field.to_string());
        self
    }

    /// `field` must hold a string.
    pub fn string(mut self, field: &str) -> Self {
        self.strings.push(field.to_string());
        self
    }

    /// `field` must hold `true` or `false`.
    pub fn boolean(mut self, field: &str) -> Self {
        self.booleans.push(field.to_string());
        self
    }

    /// Apply `value` on create when `field` is absent.
    pub fn default_value(mut self, field: &str, value: Value) -> Self {
        self.defaults.insert(field.to_string(), value);
        self
    }

    /// Returns whether an update may set `field` to null.
    ///
    /// Required fields and fields with a default must always hold a value.
    pub fn may_unset(&self, field: &str) -> bool {
        !self.defaults.contains_key(field) && !self.required.iter().any(|r| r.field == field)
    }

    /// Returns whether `field` is declared integer-only.
    pub fn is_integer(&self, field: &str) -> bool {
        self.integers.iter().any(|rule| rule.field == field)
    }
}

/// All schemas known to a fake API instance, keyed by resource type name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SchemaRegistry {
    schemas: Vec<Schema>,
}

impl SchemaRegistry {
    /// A registry with no resource types.
    pub fn empty() -> Self {
        Self {
            schemas: Vec::new(),
        }
    }

    /// Adds `schema`, replacing any schema registered under the same name.
    pub fn register(&mut self, schema: Schema) {
        match self.schemas.iter_mut().find(|s| s.name == schema.name) {
            Some(existing) => *existing = schema,
            None => self.schemas.push(schema),
        }
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, schema: Schema) -> Self {
        self.register(schema);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Schema> {
        self.schemas.iter()
    }

    /// Resource type names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.iter().map(|s| s.name.as_str())
    }

    /// Parses a registry from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, SetupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a registry file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| SetupError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks that the registry is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::Configuration` when a name is empty or repeated,
    /// a reference targets an unregistered resource type, or an inclusion
    /// rule allows no values.
    pub fn check(&self) -> Result<(), SetupError> {
        let mut seen = HashSet::new();
        for schema in &self.schemas {
            if schema.name.is_empty() {
                return Err(SetupError::configuration("Schema with empty name"));
            }
            if !seen.insert(schema.name.as_str()) {
                return Err(SetupError::configuration(format!(
                    "Duplicate schema for resource '{}'",
                    schema.name
                )));
            }
        }

        for schema in &self.schemas {
            for reference in &schema.references {
                if !seen.contains(reference.resource.as_str()) {
                    return Err(SetupError::configuration(format!(
                        "Field '{}' of '{}' references unknown resource '{}'",
                        reference.field, schema.name, reference.resource
                    )));
                }
            }
            for inclusion in &schema.inclusions {
                if inclusion.values.is_empty() {
                    return Err(SetupError::configuration(format!(
                        "Field '{}' of '{}' allows no values",
                        inclusion.field, schema.name
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for SchemaRegistry {
    /// The plan and product schemas of the remote service.
    fn default() -> Self {
        Self::empty()
            .with(defaults::product())
            .with(defaults::plan())
    }
}

impl<'a> IntoIterator for &'a SchemaRegistry {
    type Item = &'a Schema;
    type IntoIter = std::slice::Iter<'a, Schema>;

    fn into_iter(self) -> Self::IntoIter {
        self.schemas.iter()
    }
}

#[cfg(test)]
mod tests;
