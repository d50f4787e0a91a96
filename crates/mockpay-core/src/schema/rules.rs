//! Individual validation rules a [`Schema`](super::Schema) is built from.

use serde::{Deserialize, Serialize};

/// How a missing required field is reported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingMessage {
    /// "Missing required param: <field>."
    #[default]
    Generic,
    /// "<Type>s require an `<field>` parameter to be set."
    RequiresParameter,
}

/// A field that must be present and non-null on create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequiredField {
    pub field: String,
    #[serde(default)]
    pub message: MissingMessage,
}

/// A field whose value must be the ID of an existing record of `resource`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reference {
    pub field: String,
    pub resource: String,
}

/// A field that only accepts whole numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntegerRule {
    pub field: String,
    /// Smallest accepted value, if bounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    /// Largest accepted value, if bounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
}

/// How a value outside an [`Inclusion`] set is reported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InclusionMessage {
    /// "Invalid <field>: must be one of a, b, or c"
    #[default]
    OneOf,
    /// "Invalid <field>: <value>. Stripe currently supports these <field>s: a, b, c"
    Supported,
}

/// A field restricted to a closed set of string values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inclusion {
    pub field: String,
    pub values: Vec<String>,
    /// Compare lowercased input against the (lowercase) allowed values
    #[serde(default)]
    pub case_insensitive: bool,
    #[serde(default)]
    pub message: InclusionMessage,
}

impl Inclusion {
    /// Returns whether `value` belongs to the allowed set.
    pub fn contains(&self, value: &str) -> bool {
        if self.case_insensitive {
            let lowered = value.to_lowercase();
            self.values.iter().any(|v| *v == lowered)
        } else {
            self.values.iter().any(|v| v == value)
        }
    }

    /// Describes the allowed set the way the remote service does, for a
    /// rejected `value`.
    pub fn describe_rejection(&self, value: &str) -> String {
        match self.message {
            InclusionMessage::OneOf => {
                format!("Invalid {}: must be one of {}", self.field, one_of(&self.values))
            }
            InclusionMessage::Supported => {
                let shown = if self.case_insensitive {
                    value.to_lowercase()
                } else {
                    value.to_string()
                };
                format!(
                    "Invalid {field}: {shown}. Stripe currently supports these {noun}: {list}",
                    field = self.field,
                    noun = plural(&self.field),
                    list = self.values.join(", ")
                )
            }
        }
    }
}

/// "a", "a or b", "a, b, or c"
fn one_of(values: &[String]) -> String {
    match values {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
    }
}

/// English plural of a lowercase field noun.
pub(crate) fn plural(noun: &str) -> String {
    match noun.strip_suffix('y') {
        Some(stem) if !stem.ends_with(['a', 'e', 'i', 'o', 'u']) => format!("{stem}ies"),
        _ => format!("{noun}s"),
    }
}
