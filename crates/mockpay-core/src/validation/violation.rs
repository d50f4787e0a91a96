//! Validation failures and their translation into client-facing errors.

use crate::error::RequestError;
use crate::models::record::ID;
use crate::schema::rules::plural;
use crate::schema::{MissingMessage, Schema};

/// Why a request was rejected, before it is worded for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required field is absent or null
    Missing {
        field: String,
        message: MissingMessage,
    },
    /// A reference names a record that does not exist
    NoSuchReference {
        field: String,
        resource: String,
        id: String,
    },
    /// An integer-only field holds something else
    InvalidInteger { field: String, literal: String },
    /// An integer field is below its minimum
    BelowMinimum { field: String, minimum: i64 },
    /// An integer field is above its maximum
    AboveMaximum { field: String, maximum: i64 },
    /// A string field holds something else
    InvalidString { field: String, literal: String },
    /// A boolean field holds something else
    InvalidBoolean { field: String, literal: String },
    /// An update tried to null a field that must always hold a value
    CannotUnset { field: String },
    /// A map field is not a string-to-string object
    NotAMap { field: String },
    /// A closed-set field holds a value outside the set
    NotIncluded { field: String, value: String },
    /// A record with the requested ID is already stored
    AlreadyExists,
}

impl Violation {
    /// Words the violation exactly as the remote service would for `schema`.
    pub fn shape(self, schema: &Schema) -> RequestError {
        match self {
            Self::Missing {
                field,
                message: MissingMessage::Generic,
            } => {
                let message = format!("Missing required param: {field}.");
                RequestError::invalid(field).with_message(message)
            }
            Self::Missing {
                field,
                message: MissingMessage::RequiresParameter,
            } => {
                let message = format!(
                    "{} require {} `{field}` parameter to be set.",
                    plural(&schema.display_name),
                    article(&field)
                );
                RequestError::invalid(field).with_message(message)
            }
            Self::NoSuchReference { field, resource, id } => {
                RequestError::invalid(field).with_message(format!("No such {resource}: {id}"))
            }
            Self::InvalidInteger { field, literal } => {
                RequestError::invalid(field).with_message(format!("Invalid integer: {literal}"))
            }
            Self::BelowMinimum { field, minimum } => RequestError::invalid(field).with_message(
                format!("This value must be greater than or equal to {minimum}."),
            ),
            Self::AboveMaximum { field, maximum } => RequestError::invalid(field).with_message(
                format!("This value must be less than or equal to {maximum}."),
            ),
            Self::InvalidString { field, literal } => {
                RequestError::invalid(field).with_message(format!("Invalid string: {literal}"))
            }
            Self::InvalidBoolean { field, literal } => {
                RequestError::invalid(field).with_message(format!("Invalid boolean: {literal}"))
            }
            Self::CannotUnset { field } => {
                let message = format!(
                    "You passed an empty string for '{field}'. We assume empty values are an \
                     attempt to unset a parameter; however '{field}' cannot be unset. You should \
                     remove '{field}' from your request or supply a non-empty value."
                );
                RequestError::invalid(field).with_message(message)
            }
            Self::NotAMap { field } => RequestError::invalid(field).with_message("Invalid object"),
            Self::NotIncluded { field, value } => {
                let message = schema
                    .inclusions
                    .iter()
                    .find(|rule| rule.field == field)
                    .map(|rule| rule.describe_rejection(&value))
                    .unwrap_or_else(|| format!("Invalid {field}: {value}"));
                RequestError::invalid(field).with_message(message)
            }
            Self::AlreadyExists => RequestError::invalid(ID)
                .with_message(format!("{} already exists.", schema.display_name)),
        }
    }
}

fn article(word: &str) -> &'static str {
    if word.starts_with(['a', 'e', 'i', 'o', 'u']) {
        "an"
    } else {
        "a"
    }
}
