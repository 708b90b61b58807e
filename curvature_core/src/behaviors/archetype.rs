//! Archetypes - agent templates referencing behavior sets.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{add_member, remove_member, BehaviorSetId};

/// Unique identifier for archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArchetypeId(pub Uuid);

impl ArchetypeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ArchetypeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub id: ArchetypeId,
    pub name: String,
    pub behavior_sets: Vec<BehaviorSetId>,
}

impl Archetype {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ArchetypeId::new(),
            name: name.into(),
            behavior_sets: Vec::new(),
        }
    }

    /// Attach a behavior set. Returns false if already attached.
    pub fn attach(&mut self, set: BehaviorSetId) -> bool {
        add_member(&mut self.behavior_sets, set)
    }

    /// Detach a behavior set. Returns false if it was not attached.
    pub fn detach(&mut self, set: BehaviorSetId) -> bool {
        remove_member(&mut self.behavior_sets, &set)
    }

    pub fn uses(&self, set: BehaviorSetId) -> bool {
        self.behavior_sets.contains(&set)
    }
}
