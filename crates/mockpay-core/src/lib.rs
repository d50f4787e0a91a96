//! Core library for Mockpay, an in-memory stand-in for a payment provider's
//! billing API.
//!
//! Tests that would otherwise talk to the remote service create, retrieve,
//! update, delete and list plans and products against a [`FakeApi`]. Every
//! request is validated against a declarative [`Schema`] and rejected with
//! the same `invalid_request_error` shape the real service uses.
//!
//! # Layout
//!
//! - **Schemas** ([`schema`]): per-resource rules in data form
//! - **Validation** ([`validation`]): applies a schema to request params
//! - **Storage** ([`store`]): insertion-ordered tables and ID generation
//! - **Handlers** ([`api`]): the generic verbs, typed wrappers and
//!   [`Operation`] dispatch
//! - **Models and display** ([`models`], [`display`]): typed views of stored
//!   records and their markdown rendering
//!
//! # Quick Start
//!
//! ```rust
//! use mockpay_core::{FakeApiBuilder, params::{CreatePlan, CreateProduct, ListOptions}, Interval};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = FakeApiBuilder::new().build()?;
//!
//! api.create_product(&CreateProduct {
//!     id: Some("prod_abc123".to_string()),
//!     name: Some("My Product".to_string()),
//!     ..Default::default()
//! })?;
//!
//! let plan = api.create_plan(&CreatePlan {
//!     id: Some("gold".to_string()),
//!     product: Some("prod_abc123".to_string()),
//!     amount: Some(9900.into()),
//!     currency: Some("usd".to_string()),
//!     interval: Some(Interval::Month),
//!     ..Default::default()
//! })?;
//! println!("{plan}");
//!
//! let err = api
//!     .create_plan(&CreatePlan { id: Some("gold".to_string()), ..Default::default() })
//!     .unwrap_err();
//! assert_eq!(err.message(), "Plans require an `amount` parameter to be set.");
//!
//! assert_eq!(api.list_plans(&ListOptions::default())?.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod api;
pub mod display;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod params;
pub mod schema;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use api::{FakeApi, FakeApiBuilder, Operation};
pub use error::{RequestError, Result, SetupError};
pub use models::{Deleted, Interval, List, Params, Plan, Product, Record};
pub use params::{CreatePlan, CreateProduct, ListOptions, UpdatePlan, UpdateProduct};
pub use schema::{Schema, SchemaRegistry};
pub use store::RecordStore;
