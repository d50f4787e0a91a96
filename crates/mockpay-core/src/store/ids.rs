//! Deterministic ID generation for records created without an `id`.

use std::collections::HashMap;

use log::trace;

/// Default prefix of generated IDs.
pub const DEFAULT_PREFIX: &str = "test";

/// Hands out `<prefix>_<resource>_<n>` IDs with one counter per resource type.
///
/// Counters start at 1 and only go back to zero on [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    counters: HashMap<String, u64>,
}

impl IdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counters: HashMap::new(),
        }
    }

    /// The next ID for `resource`.
    pub fn next(&mut self, resource: &str) -> String {
        let counter = self.counters.entry(resource.to_string()).or_insert(0);
        *counter += 1;
        let id = format!("{}_{}_{}", self.prefix, resource, counter);
        trace!("generated id {id}");
        id
    }

    /// Number of IDs handed out for `resource` since the last reset.
    pub fn issued(&self, resource: &str) -> u64 {
        self.counters.get(resource).copied().unwrap_or(0)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Restart every counter from 1.
    pub fn reset(&mut self) {
        self.counters.clear();
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_per_resource() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next("plan"), "test_plan_1");
        assert_eq!(ids.next("plan"), "test_plan_2");
        assert_eq!(ids.next("product"), "test_product_1");
        assert_eq!(ids.issued("plan"), 2);
        assert_eq!(ids.issued("coupon"), 0);
    }

    #[test]
    fn test_reset_restarts_counters() {
        let mut ids = IdGenerator::new("fake");
        ids.next("plan");
        ids.next("plan");
        ids.reset();
        assert_eq!(ids.next("plan"), "fake_plan_1");
    }
}
