//! Generic schema-driven request validation.
//!
//! Create requests are checked in a fixed order and the first failure wins:
//!
//! 1. presence of required fields
//! 2. references to other resources
//! 3. field types: the `id`, integers and their bounds, strings, booleans
//!    and string maps
//! 4. closed-set fields
//! 5. uniqueness of the requested `id`
//!
//! Update requests only run steps 3 and 4, and only for the fields the patch
//! carries. A patch may null an optional field but not a required or
//! defaulted one.

use serde_json::Value;

use crate::models::record::{id_of, is_missing, ID};
use crate::models::{Params, Record};
use crate::schema::Schema;
use crate::store::StoreData;

pub mod violation;


pub use violation::Violation;

/// Outcome of a single validation step.
pub type Checked = Result<(), Violation>;

/// Checks request params against one resource type's schema.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    schema: &'a Schema,
}

impl<'a> Validator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Full validation of a create request against the current store.
    pub fn validate_create(&self, params: &Params, store: &StoreData) -> Checked {
        self.check_presence(params)?;
        self.check_references(params, store)?;
        check_id(params)?;
        self.check_types(params)?;
        self.check_inclusions(params)?;
        self.check_uniqueness(params, store)
    }

    /// Validation of the fields an update patch carries.
    pub fn validate_update(&self, patch: &Params) -> Checked {
        self.check_unset(patch)?;
        self.check_types(patch)?;
        self.check_inclusions(patch)
    }

    fn check_presence(&self, params: &Params) -> Checked {
        match self
            .schema
            .required
            .iter()
            .find(|required| is_missing(params, &required.field))
        {
            Some(required) => Err(Violation::Missing {
                field: required.field.clone(),
                message: required.message,
            }),
            None => Ok(()),
        }
    }

    fn check_references(&self, params: &Params, store: &StoreData) -> Checked {
        for reference in &self.schema.references {
            let Some(value) = params.get(&reference.field).filter(|v| !v.is_null()) else {
                continue;
            };
            let id = literal(value);
            if !store.contains(&reference.resource, &id) {
                return Err(Violation::NoSuchReference {
                    field: reference.field.clone(),
                    resource: reference.resource.clone(),
                    id,
                });
            }
        }
        Ok(())
    }

    fn check_types(&self, params: &Params) -> Checked {
        for rule in &self.schema.integers {
            let Some(value) = params.get(&rule.field).filter(|v| !v.is_null()) else {
                continue;
            };
            let Some(number) = whole_number(value) else {
                return Err(Violation::InvalidInteger {
                    field: rule.field.clone(),
                    literal: literal(value),
                });
            };
            if let Some(minimum) = rule.minimum.filter(|min| number < *min) {
                return Err(Violation::BelowMinimum {
                    field: rule.field.clone(),
                    minimum,
                });
            }
            if let Some(maximum) = rule.maximum.filter(|max| number > *max) {
                return Err(Violation::AboveMaximum {
                    field: rule.field.clone(),
                    maximum,
                });
            }
        }

        for field in &self.schema.strings {
            match params.get(field) {
                None | Some(Value::Null | Value::String(_)) => {}
                Some(other) => {
                    return Err(Violation::InvalidString {
                        field: field.clone(),
                        literal: literal(other),
                    })
                }
            }
        }

        for field in &self.schema.booleans {
            match params.get(field) {
                None | Some(Value::Null | Value::Bool(_)) => {}
                Some(other) => {
                    return Err(Violation::InvalidBoolean {
                        field: field.clone(),
                        literal: literal(other),
                    })
                }
            }
        }

        for field in &self.schema.maps {
            match params.get(field) {
                None | Some(Value::Null) => {}
                Some(Value::Object(map)) if map.values().all(Value::is_string) => {}
                Some(_) => {
                    return Err(Violation::NotAMap {
                        field: field.clone(),
                    })
                }
            }
        }
        Ok(())
    }

    fn check_unset(&self, patch: &Params) -> Checked {
        match patch
            .iter()
            .find(|(field, value)| value.is_null() && !self.schema.may_unset(field))
        {
            Some((field, _)) => Err(Violation::CannotUnset {
                field: field.clone(),
            }),
            None => Ok(()),
        }
    }

    fn check_inclusions(&self, params: &Params) -> Checked {
        for rule in &self.schema.inclusions {
            let Some(value) = params.get(&rule.field).filter(|v| !v.is_null()) else {
                continue;
            };
            let value = literal(value);
            if !rule.contains(&value) {
                return Err(Violation::NotIncluded {
                    field: rule.field.clone(),
                    value,
                });
            }
        }
        Ok(())
    }

    fn check_uniqueness(&self, params: &Params, store: &StoreData) -> Checked {
        match id_of(params) {
            Some(id) if store.contains(&self.schema.name, &id) => Err(Violation::AlreadyExists),
            _ => Ok(()),
        }
    }

    /// Rewrites every integer-only field of a validated record as an integer.
    pub fn normalize(&self, record: &mut Record) {
        for rule in &self.schema.integers {
            if let Some(value) = record.get_mut(&rule.field) {
                if let Some(number) = whole_number(value) {
                    *value = Value::from(number);
                }
            }
        }
    }
}

/// A supplied `id` must be a string or a number.
fn check_id(params: &Params) -> Checked {
    match params.get(ID) {
        None | Some(Value::Null | Value::String(_) | Value::Number(_)) => Ok(()),
        Some(other) => Err(Violation::InvalidString {
            field: ID.to_string(),
            literal: literal(other),
        }),
    }
}

/// The integer a value denotes, if it denotes one exactly.
///
/// Integral JSON numbers, floats without a fractional part, and decimal
/// strings are accepted; anything else is not an integer.
pub fn whole_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            let in_range = (i64::MIN as f64..i64::MAX as f64).contains(&f);
            (f.fract() == 0.0 && in_range).then_some(f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A value as it should appear inside a message: strings unquoted.
fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
