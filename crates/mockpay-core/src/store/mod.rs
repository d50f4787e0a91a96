//! In-memory record store shared by every handler of a fake API instance.
//!
//! All tables and ID counters sit behind one mutex. Handlers run their
//! validate-then-mutate sequence inside [`RecordStore::transaction`], so two
//! concurrent creates can never both pass the uniqueness check for the same
//! ID, and a reference check always sees the table it references in the same
//! state as the write that follows.
//!
//! Every accessor returns detached copies; nothing handed out by the store
//! can be used to mutate it.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::info;

use crate::models::Record;

pub mod ids;
pub mod table;

pub use ids::IdGenerator;
pub use table::Table;

/// Tables and ID counters, as seen from inside a transaction.
#[derive(Debug, Default)]
pub struct StoreData {
    tables: HashMap<String, Table>,
    ids: IdGenerator,
}

impl StoreData {
    fn with_ids(ids: IdGenerator) -> Self {
        Self {
            tables: HashMap::new(),
            ids,
        }
    }

    /// Inserts or replaces a record, returning the replaced one.
    pub fn put(&mut self, resource: &str, id: &str, record: Record) -> Option<Record> {
        self.tables
            .entry(resource.to_string())
            .or_default()
            .put(id, record)
    }

    pub fn get(&self, resource: &str, id: &str) -> Option<Record> {
        self.tables.get(resource)?.get(id).cloned()
    }

    pub fn contains(&self, resource: &str, id: &str) -> bool {
        self.tables
            .get(resource)
            .is_some_and(|table| table.contains(id))
    }

    pub fn delete(&mut self, resource: &str, id: &str) -> Option<Record> {
        self.tables.get_mut(resource)?.remove(id)
    }

    /// Copies of all `resource` records in insertion order.
    pub fn list(&self, resource: &str) -> Records {
        Records(
            self.tables
                .get(resource)
                .map(|table| table.iter().cloned().collect())
                .unwrap_or_default(),
        )
    }

    pub fn len(&self, resource: &str) -> usize {
        self.tables.get(resource).map_or(0, Table::len)
    }

    /// Generates an ID for `resource` that no stored record uses.
    pub fn next_id(&mut self, resource: &str) -> String {
        loop {
            let id = self.ids.next(resource);
            if !self.contains(resource, &id) {
                return id;
            }
        }
    }

    pub fn reset(&mut self) {
        self.tables.clear();
        self.ids.reset();
    }
}

/// A finite, restartable sequence of record snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Records(Vec<Record>);

impl Records {
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<Record> {
        self.0
    }
}

impl IntoIterator for Records {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Records {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Thread-safe owner of all records of a fake API instance.
#[derive(Debug, Default)]
pub struct RecordStore {
    data: Mutex<StoreData>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose generated IDs come from `ids`.
    pub fn with_id_generator(ids: IdGenerator) -> Self {
        Self {
            data: Mutex::new(StoreData::with_ids(ids)),
        }
    }

    /// Runs `f` with exclusive access to every table and counter.
    pub fn transaction<T>(&self, f: impl FnOnce(&mut StoreData) -> T) -> T {
        f(&mut self.lock())
    }

    pub fn put(&self, resource: &str, id: &str, record: Record) -> Option<Record> {
        self.lock().put(resource, id, record)
    }

    pub fn get(&self, resource: &str, id: &str) -> Option<Record> {
        self.lock().get(resource, id)
    }

    pub fn contains(&self, resource: &str, id: &str) -> bool {
        self.lock().contains(resource, id)
    }

    pub fn delete(&self, resource: &str, id: &str) -> Option<Record> {
        self.lock().delete(resource, id)
    }

    pub fn list(&self, resource: &str) -> Records {
        self.lock().list(resource)
    }

    pub fn len(&self, resource: &str) -> usize {
        self.lock().len(resource)
    }

    pub fn next_id(&self, resource: &str) -> String {
        self.lock().next_id(resource)
    }

    /// Clears every table and restarts every ID counter in one step.
    pub fn reset(&self) {
        self.lock().reset();
        info!("record store reset");
    }

    // A panic while holding the lock cannot leave a table half-written:
    // every mutation is a single map operation.
    fn lock(&self) -> MutexGuard<'_, StoreData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
