//! Generic create, retrieve, update, delete and list for any resource type.

use jiff::Timestamp;
use log::debug;
use serde_json::Value;

use super::FakeApi;
use crate::{
    error::{RequestError, Result},
    models::{
        record::{id_of, ENVELOPE_FIELDS, ID},
        Deleted, List, Params, Record,
    },
    params::ListOptions,
    validation::Validator,
};

impl FakeApi {
    /// Validates `params` and stores them as a new `resource` record.
    ///
    /// The stored record holds every supplied field, schema defaults for
    /// absent ones, and the `id`, `object`, `created` and `livemode`
    /// envelope fields. Nothing is stored when validation fails.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` for the first validation failure; `NotFound` if
    /// `resource` is not registered.
    pub fn create(&self, resource: &str, params: &Params) -> Result<Record> {
        self.create_as(resource, params, Ok)
    }

    /// Like [`create`](Self::create), but turns the record into the response
    /// with `view` before storing it, so a failing `view` stores nothing.
    pub(crate) fn create_as<T>(
        &self,
        resource: &str,
        params: &Params,
        view: impl FnOnce(Record) -> Result<T>,
    ) -> Result<T> {
        let schema = self.schema(resource)?;
        let validator = Validator::new(schema);

        let result = self.store.transaction(|data| -> Result<T> {
            validator
                .validate_create(params, data)
                .map_err(|violation| violation.shape(schema))?;

            let id = id_of(params).unwrap_or_else(|| data.next_id(resource));

            let mut record = schema.defaults.clone();
            for (field, value) in params {
                if ENVELOPE_FIELDS.contains(&field.as_str()) {
                    continue;
                }
                if value.is_null() && record.contains_key(field) {
                    continue;
                }
                record.insert(field.clone(), value.clone());
            }
            record.insert(ID.to_string(), Value::String(id.clone()));
            record.insert("object".to_string(), Value::String(resource.to_string()));
            record.insert("created".to_string(), Value::from(Timestamp::now().as_second()));
            record.insert("livemode".to_string(), Value::Bool(false));
            validator.normalize(&mut record);

            let response = view(record.clone())?;
            data.put(resource, &id, record);
            debug!("create {resource} {id}");
            Ok(response)
        });

        log_rejection("create", resource, &result);
        result
    }

    /// A copy of the `resource` record stored under `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` with the resource type as `param` if no such record exists.
    pub fn retrieve(&self, resource: &str, id: &str) -> Result<Record> {
        self.schema(resource)?;
        let result = self
            .store
            .get(resource, id)
            .ok_or_else(|| RequestError::not_found(resource, id));

        match &result {
            Ok(_) => debug!("retrieve {resource} {id}"),
            Err(e) => debug!("retrieve {resource} rejected: {e}"),
        }
        result
    }

    /// Overwrites the fields in `patch` on the stored record and returns the
    /// merged copy.
    ///
    /// Only the type and closed-set rules of the patched fields are checked,
    /// and required or defaulted fields cannot be nulled; references are not
    /// re-validated. Envelope fields in the patch are ignored.
    ///
    /// # Errors
    ///
    /// `NotFound` if no such record exists, `InvalidRequest` if a patched
    /// field breaks its rule.
    pub fn update(&self, resource: &str, id: &str, patch: &Params) -> Result<Record> {
        self.update_as(resource, id, patch, Ok)
    }

    /// Like [`update`](Self::update), but turns the merged record into the
    /// response with `view` before storing it.
    pub(crate) fn update_as<T>(
        &self,
        resource: &str,
        id: &str,
        patch: &Params,
        view: impl FnOnce(Record) -> Result<T>,
    ) -> Result<T> {
        let schema = self.schema(resource)?;
        let validator = Validator::new(schema);

        let result = self.store.transaction(|data| -> Result<T> {
            let mut record = data
                .get(resource, id)
                .ok_or_else(|| RequestError::not_found(resource, id))?;
            validator
                .validate_update(patch)
                .map_err(|violation| violation.shape(schema))?;

            for (field, value) in patch {
                if !ENVELOPE_FIELDS.contains(&field.as_str()) {
                    record.insert(field.clone(), value.clone());
                }
            }
            validator.normalize(&mut record);

            let response = view(record.clone())?;
            data.put(resource, id, record);
            debug!("update {resource} {id}");
            Ok(response)
        });

        log_rejection("update", resource, &result);
        result
    }

    /// Removes the `resource` record stored under `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` if no such record exists.
    pub fn delete(&self, resource: &str, id: &str) -> Result<Deleted> {
        self.schema(resource)?;
        let result = self
            .store
            .delete(resource, id)
            .map(|_| Deleted::new(resource, id))
            .ok_or_else(|| RequestError::not_found(resource, id));

        match &result {
            Ok(_) => debug!("delete {resource} {id}"),
            Err(e) => debug!("delete {resource} rejected: {e}"),
        }
        result
    }

    /// Records of `resource` in creation order, at most `options.limit`.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` for a zero limit; `NotFound` if `resource` is not
    /// registered.
    pub fn list(&self, resource: &str, options: &ListOptions) -> Result<List<Record>> {
        self.schema(resource)?;
        if options.limit == Some(0) {
            return Err(
                RequestError::invalid("limit").with_message("Invalid limit: must be at least 1.")
            );
        }

        let records = self.store.list(resource);
        let total = records.len();
        let data: Vec<Record> = match options.limit {
            Some(limit) => records.into_iter().take(limit).collect(),
            None => records.into_vec(),
        };
        let has_more = data.len() < total;

        debug!("list {resource}: {} of {total}", data.len());
        Ok(List::new(resource, data, has_more))
    }
}

fn log_rejection<T>(verb: &str, resource: &str, result: &Result<T>) {
    if let Err(e) = result {
        debug!("{verb} {resource} rejected: {e}");
    }
}
