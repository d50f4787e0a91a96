//! Data models for the fake API's resources.
//!
//! Storage works on untyped [`Record`]s so that one generic validator and one
//! set of handlers serve every resource type registered in the schema
//! registry. The typed models here are views decoded from those records for
//! callers that know which resource they are dealing with.

pub mod plan;
pub mod product;
pub mod record;
pub mod responses;

#[cfg(test)]
mod tests;

pub use plan::{Interval, Plan};
pub use product::Product;
pub use record::{Params, Record};
pub use responses::{Deleted, List};
