//! Input axes - named definitions of where a consideration reads its raw value.

mod parameters;

pub use parameters::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for knowledge base records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Create a new random record ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for input axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputAxisId(pub Uuid);

impl InputAxisId {
    /// Create a new random input axis ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InputAxisId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InputAxisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Built-in formulas available to computed input axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ComputedInput {
    #[default]
    DistanceToTarget,
}

impl ComputedInput {
    /// The fixed catalog of computed inputs.
    pub const CATALOG: [ComputedInput; 1] = [ComputedInput::DistanceToTarget];

    pub fn name(&self) -> &'static str {
        match self {
            ComputedInput::DistanceToTarget => "Distance to target",
        }
    }
}

/// What an input axis reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    /// A knowledge base property of the agent doing the scoring.
    SelfProperty,
    /// A knowledge base property of the current target.
    TargetProperty,
    /// A built-in formula over the self/target pairing.
    Computed(ComputedInput),
}

impl InputKind {
    /// Whether this kind binds to a knowledge base record.
    pub fn is_property(&self) -> bool {
        matches!(self, InputKind::SelfProperty | InputKind::TargetProperty)
    }
}

/// A named input definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputAxis {
    pub id: InputAxisId,
    pub name: String,
    pub kind: InputKind,
    /// Bound record for property kinds. Cleared when the record is deleted.
    pub record: Option<RecordId>,
}

impl InputAxis {
    /// Create an unbound self-property axis.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: InputAxisId::new(),
            name: name.into(),
            kind: InputKind::SelfProperty,
            record: None,
        }
    }

    /// Set the kind of this axis.
    pub fn with_kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Bind this axis to a knowledge base record.
    pub fn with_record(mut self, record: RecordId) -> Self {
        self.record = Some(record);
        self
    }

    /// Whether this axis has everything it needs to be resolved.
    pub fn is_bound(&self) -> bool {
        match self.kind {
            InputKind::SelfProperty | InputKind::TargetProperty => self.record.is_some(),
            InputKind::Computed(_) => true,
        }
    }
}
