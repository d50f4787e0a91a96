//! The fake API: request handlers over one record store.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Typed handlers  │    │ Resource ops    │    │  Record store   │
//! │ (plan_handlers,  │───▶│ (validate,      │───▶│  (tables + ID   │
//! │ product_handlers)│    │  shape, mutate) │    │   counters)     │
//! └──────────────────┘    └─────────────────┘    └─────────────────┘
//!          ▲                       ▲
//!          │                ┌──────┴──────┐
//!          │                │  dispatch   │
//!          │                │ (Operation) │
//!          │                └─────────────┘
//! ```
//!
//! - [`builder`]: configures a [`FakeApi`] from a schema registry
//! - [`resource_ops`]: the five generic verbs for any registered resource
//! - [`plan_handlers`] / [`product_handlers`]: typed wrappers
//! - [`dispatch`]: routes serialized [`Operation`]s to the generic verbs
//!
//! # Example
//!
//! ```rust
//! use mockpay_core::{FakeApi, params::{CreatePlan, CreateProduct}, Interval};
//!
//! let api = FakeApi::new();
//! api.create_product(&CreateProduct {
//!     id: Some("prod_1".to_string()),
//!     name: Some("My Product".to_string()),
//!     ..Default::default()
//! })?;
//!
//! let plan = api.create_plan(&CreatePlan {
//!     product: Some("prod_1".to_string()),
//!     amount: Some(9900.into()),
//!     currency: Some("usd".to_string()),
//!     interval: Some(Interval::Month),
//!     ..Default::default()
//! })?;
//! assert_eq!(plan.id, "test_plan_1");
//!
//! let err = api.retrieve_plan("nope").unwrap_err();
//! assert_eq!(err.http_status(), 404);
//! # Ok::<(), mockpay_core::RequestError>(())
//! ```

use log::info;

use crate::{
    error::{RequestError, Result},
    schema::{Schema, SchemaRegistry},
    store::{IdGenerator, RecordStore},
};

pub mod builder;
pub mod dispatch;
pub mod plan_handlers;
pub mod product_handlers;
pub mod resource_ops;


pub use builder::FakeApiBuilder;
pub use dispatch::Operation;

/// In-process stand-in for the remote payment API.
#[derive(Debug)]
pub struct FakeApi {
    registry: SchemaRegistry,
    store: RecordStore,
}

impl FakeApi {
    /// A fake with the built-in plan and product schemas.
    pub fn new() -> Self {
        Self::from_parts(SchemaRegistry::default(), IdGenerator::default())
    }

    pub(crate) fn from_parts(registry: SchemaRegistry, ids: IdGenerator) -> Self {
        Self {
            registry,
            store: RecordStore::with_id_generator(ids),
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// The underlying store, for seeding and inspecting records directly.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Forgets every record and restarts ID generation.
    pub fn reset(&self) {
        self.store.reset();
        info!("fake api reset");
    }

    pub(crate) fn schema(&self, resource: &str) -> Result<&Schema> {
        self.registry
            .get(resource)
            .ok_or_else(|| RequestError::unknown_resource(resource))
    }
}

impl Default for FakeApi {
    fn default() -> Self {
        Self::new()
    }
}
