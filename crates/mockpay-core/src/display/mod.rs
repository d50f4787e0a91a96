//! Markdown rendering of records for terminal output.
//!
//! - [`models`]: `Display` for [`Plan`](crate::Plan), [`Product`](crate::Product)
//!   and [`Deleted`](crate::Deleted)
//! - [`datetime`]: formatting of `created` timestamps
//!
//! Lists display each record in turn, or a placeholder when empty:
//!
//! ```rust
//! use mockpay_core::{FakeApi, params::ListOptions};
//!
//! let api = FakeApi::new();
//! let plans = api.list_plans(&ListOptions::default())?;
//! assert_eq!(plans.to_string(), "No plans found.\n");
//! # Ok::<(), mockpay_core::RequestError>(())
//! ```

use std::fmt;

use crate::models::List;

pub mod datetime;
pub mod models;

pub use datetime::CreatedAt;

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            // url is "/v1/<type>s"
            let noun = self.url.rsplit('/').next().unwrap_or("records");
            return writeln!(f, "No {noun} found.");
        }

        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
        }
        if self.has_more {
            writeln!(f)?;
            writeln!(f, "_More records available; raise the limit to see them._")?;
        }
        Ok(())
    }
}
