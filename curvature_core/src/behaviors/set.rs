//! Behavior sets - named groups of enabled behaviors.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{add_member, remove_member, BehaviorId};

/// Unique identifier for behavior sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BehaviorSetId(pub Uuid);

impl BehaviorSetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BehaviorSetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BehaviorSetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reusable group of behaviors. Members are shared, not owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorSet {
    pub id: BehaviorSetId,
    pub name: String,
    pub enabled_behaviors: Vec<BehaviorId>,
}

impl BehaviorSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BehaviorSetId::new(),
            name: name.into(),
            enabled_behaviors: Vec::new(),
        }
    }

    /// Add a behavior to the set. Returns false if it was already a member.
    pub fn enable(&mut self, behavior: BehaviorId) -> bool {
        add_member(&mut self.enabled_behaviors, behavior)
    }

    /// Remove a behavior from the set. Returns false if it was not a member.
    pub fn disable(&mut self, behavior: BehaviorId) -> bool {
        remove_member(&mut self.enabled_behaviors, &behavior)
    }

    pub fn is_enabled(&self, behavior: BehaviorId) -> bool {
        self.enabled_behaviors.contains(&behavior)
    }
}
