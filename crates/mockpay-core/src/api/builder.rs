//! Builder for creating and configuring FakeApi instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::FakeApi;
use crate::{
    error::SetupError,
    schema::{Schema, SchemaRegistry},
    store::{ids::DEFAULT_PREFIX, IdGenerator},
};

/// Builder for creating and configuring FakeApi instances.
#[derive(Debug, Clone)]
pub struct FakeApiBuilder {
    registry: Option<SchemaRegistry>,
    schema_file: Option<PathBuf>,
    extra_schemas: Vec<Schema>,
    id_prefix: String,
}

impl FakeApiBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            registry: None,
            schema_file: None,
            extra_schemas: Vec::new(),
            id_prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Replaces the built-in registry.
    pub fn with_registry(mut self, registry: SchemaRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Loads the registry from a JSON file instead.
    ///
    /// Takes precedence over [`with_registry`](Self::with_registry).
    pub fn with_schema_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.schema_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Registers one more schema on top of the base registry.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.extra_schemas.push(schema);
        self
    }

    /// Sets the prefix of generated IDs (default `test`).
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Builds the configured fake.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::FileSystem` or `SetupError::Serialization` if the
    /// schema file cannot be read or parsed, and
    /// `SetupError::Configuration` if the resulting registry is inconsistent
    /// or the ID prefix is empty.
    pub fn build(self) -> Result<FakeApi, SetupError> {
        let mut registry = match (self.schema_file, self.registry) {
            (Some(path), _) => {
                debug!("loading schemas from {}", path.display());
                SchemaRegistry::load(&path)?
            }
            (None, Some(registry)) => registry,
            (None, None) => SchemaRegistry::default(),
        };
        for schema in self.extra_schemas {
            registry.register(schema);
        }
        registry.check()?;

        if self.id_prefix.is_empty() {
            return Err(SetupError::configuration("ID prefix must not be empty"));
        }

        Ok(FakeApi::from_parts(registry, IdGenerator::new(self.id_prefix)))
    }
}

impl Default for FakeApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}
