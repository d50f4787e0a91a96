//! Display implementations for the typed models.

use std::collections::BTreeMap;
use std::fmt;

use super::datetime::CreatedAt;
use crate::models::{Deleted, Interval, Plan, Product};

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self
            .nickname
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("(unnamed)");
        writeln!(f, "# {} ({})", label, self.id)?;
        writeln!(f)?;

        let every = if self.interval_count == 1 {
            self.interval.to_string()
        } else {
            format!("{} {}s", self.interval_count, self.interval)
        };
        writeln!(f, "- Amount: {} {} per {}", self.amount, self.currency, every)?;
        writeln!(f, "- Product: {}", self.product)?;
        if let Some(days) = self.trial_period_days {
            writeln!(f, "- Trial: {days} days")?;
        }
        writeln!(f, "- Active: {}", if self.active { "yes" } else { "no" })?;
        writeln!(f, "- Created: {}", CreatedAt(self.created))?;

        fmt_metadata(f, &self.metadata)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Active: {}", if self.active { "yes" } else { "no" })?;
        writeln!(f, "- Created: {}", CreatedAt(self.created))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        fmt_metadata(f, &self.metadata)
    }
}

impl fmt::Display for Deleted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted {} with ID: {}", self.object, self.id)
    }
}

fn fmt_metadata(f: &mut fmt::Formatter<'_>, metadata: &BTreeMap<String, String>) -> fmt::Result {
    if metadata.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n## Metadata")?;
    writeln!(f)?;
    for (key, value) in metadata {
        writeln!(f, "- {key}: {value}")?;
    }
    Ok(())
}
