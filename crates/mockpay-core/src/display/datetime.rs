//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a record's `created` Unix-seconds value as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Values outside the representable range are shown as raw seconds.
pub struct CreatedAt(pub i64);

impl fmt::Display for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Timestamp::from_second(self.0) {
            Ok(ts) => write!(
                f,
                "{}",
                ts.to_zoned(TimeZone::UTC).strftime("%Y-%m-%d %H:%M:%S %Z")
            ),
            Err(_) => write!(f, "{}s", self.0),
        }
    }
}
