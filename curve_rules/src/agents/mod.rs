//! Agent state and the evaluation context handed to input resolvers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::inputs::RecordId;

/// Unique identifier for agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub Uuid);

impl AgentId {
    /// Create a new random agent ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in the 2D scenario space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    #[serde(with = "crate::real")]
    pub x: f64,
    #[serde(with = "crate::real")]
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Read access to knowledge base records needed while scoring.
pub trait RecordCatalog {
    /// Default value of a record, or `None` if it does not exist.
    fn record_default(&self, record: RecordId) -> Option<f64>;

    /// Every record with its default value.
    fn record_defaults(&self) -> Vec<(RecordId, f64)>;
}

/// Transient per-agent simulation state. Never persisted; rebuilt from the
/// knowledge base whenever a scenario is reset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgentState {
    pub position: Position,
    properties: HashMap<RecordId, f64>,
}

impl AgentState {
    /// Build fresh state at `position` with every record at its default.
    pub fn from_catalog(position: Position, catalog: &dyn RecordCatalog) -> Self {
        Self {
            position,
            properties: catalog.record_defaults().into_iter().collect(),
        }
    }

    /// Get the current value of a property.
    pub fn property(&self, record: RecordId) -> Option<f64> {
        self.properties.get(&record).copied()
    }

    /// Set the current value of a property.
    pub fn set_property(&mut self, record: RecordId, value: f64) {
        self.properties.insert(record, value);
    }

    /// Drop a cached property.
    pub fn remove_property(&mut self, record: RecordId) -> Option<f64> {
        self.properties.remove(&record)
    }

    /// Number of cached properties.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

/// The self/target pairing an input axis is resolved against.
#[derive(Clone, Copy)]
pub struct EvaluationContext<'a> {
    pub self_agent: &'a AgentState,
    pub target: Option<&'a AgentState>,
    pub records: &'a dyn RecordCatalog,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(self_agent: &'a AgentState, records: &'a dyn RecordCatalog) -> Self {
        Self {
            self_agent,
            target: None,
            records,
        }
    }

    /// Set the target agent.
    pub fn with_target(mut self, target: &'a AgentState) -> Self {
        self.target = Some(target);
        self
    }
}
