//! Insertion-ordered record table for a single resource type.

use std::collections::{BTreeMap, HashMap};

use crate::models::Record;

#[derive(Debug, Clone)]
struct Row {
    seq: u64,
    record: Record,
}

/// Records of one resource type keyed by ID.
///
/// Iteration follows first insertion; replacing a record keeps its place.
#[derive(Debug, Clone, Default)]
pub struct Table {
    next_seq: u64,
    order: BTreeMap<u64, String>,
    rows: HashMap<String, Row>,
}

impl Table {
    /// Inserts or replaces the record stored under `id`, returning the old one.
    pub fn put(&mut self, id: &str, record: Record) -> Option<Record> {
        if let Some(row) = self.rows.get_mut(id) {
            return Some(std::mem::replace(&mut row.record, record));
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, id.to_string());
        self.rows.insert(id.to_string(), Row { seq, record });
        None
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.rows.get(id).map(|row| &row.record)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Record> {
        let row = self.rows.remove(id)?;
        self.order.remove(&row.seq);
        Some(row.record)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order
            .values()
            .filter_map(|id| self.rows.get(id).map(|row| &row.record))
    }
}
