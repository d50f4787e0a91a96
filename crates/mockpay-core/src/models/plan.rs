//! Plan model definition and related functionality.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Billing interval of a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Day,
    Week,
    Month,
    Year,
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Interval::Day),
            "week" => Ok(Interval::Week),
            "month" => Ok(Interval::Month),
            "year" => Ok(Interval::Year),
            _ => Err(format!("Invalid interval: {s}")),
        }
    }
}

impl Interval {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
            Interval::Year => "year",
        }
    }
}

/// A stored plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier within the plan store
    pub id: String,

    /// Always `"plan"`
    #[serde(default)]
    pub object: String,

    /// ID of the product this plan prices
    pub product: String,

    /// Internal display label
    #[serde(default)]
    pub nickname: Option<String>,

    /// Legacy display label
    #[serde(default)]
    pub name: Option<String>,

    /// Price in the currency's minor unit
    pub amount: i64,

    /// Three-letter currency code, as supplied
    pub currency: String,

    pub interval: Interval,

    /// Number of intervals between billings
    #[serde(default = "default_interval_count")]
    pub interval_count: u32,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub metadata: BTreeMap<String, String>,

    #[serde(default)]
    pub trial_period_days: Option<u32>,

    /// Creation time in Unix seconds
    #[serde(default)]
    pub created: i64,

    #[serde(default)]
    pub livemode: bool,
}

fn default_interval_count() -> u32 {
    1
}
