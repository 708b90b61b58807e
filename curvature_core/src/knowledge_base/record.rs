//! Record definitions - entries in the knowledge base.

use curve_rules::RecordId;
use serde::{Deserialize, Serialize};

/// A named property source that input axes can bind to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,

    /// Human-readable name, shown when binding input axes.
    pub name: String,

    /// Value agents start with when a scenario is reset.
    #[serde(default, with = "curve_rules::real")]
    pub default_value: f64,
}

impl Record {
    /// Create a new record with a default value of zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            default_value: 0.0,
        }
    }

    /// Set the starting value.
    pub fn with_default(mut self, value: f64) -> Self {
        self.default_value = value;
        self
    }
}
