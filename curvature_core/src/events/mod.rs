//! Structural change events raised by the project graph.
//!
//! Events are queued in the order mutations happen and pulled by editors via
//! [`Project::drain_events`](crate::Project::drain_events). Nothing is pushed
//! into observer code while a mutation is in progress.

use curve_rules::{AgentId, ConsiderationId, InputAxisId, RecordId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::behaviors::{ArchetypeId, BehaviorId, BehaviorSetId};
use crate::scenario::ScenarioId;

/// The kinds of entity in a project graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Record,
    Input,
    Consideration,
    Behavior,
    BehaviorSet,
    Archetype,
    Scenario,
    Agent,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Record => "record",
            EntityKind::Input => "input axis",
            EntityKind::Consideration => "consideration",
            EntityKind::Behavior => "behavior",
            EntityKind::BehaviorSet => "behavior set",
            EntityKind::Archetype => "archetype",
            EntityKind::Scenario => "scenario",
            EntityKind::Agent => "agent",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Typed identity of any entity in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityRef {
    Record(RecordId),
    Input(InputAxisId),
    Consideration(ConsiderationId),
    Behavior(BehaviorId),
    BehaviorSet(BehaviorSetId),
    Archetype(ArchetypeId),
    Scenario(ScenarioId),
    Agent(AgentId),
}

impl EntityRef {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Record(_) => EntityKind::Record,
            EntityRef::Input(_) => EntityKind::Input,
            EntityRef::Consideration(_) => EntityKind::Consideration,
            EntityRef::Behavior(_) => EntityKind::Behavior,
            EntityRef::BehaviorSet(_) => EntityKind::BehaviorSet,
            EntityRef::Archetype(_) => EntityKind::Archetype,
            EntityRef::Scenario(_) => EntityKind::Scenario,
            EntityRef::Agent(_) => EntityKind::Agent,
        }
    }

    pub fn uuid(&self) -> Uuid {
        match self {
            EntityRef::Record(id) => id.0,
            EntityRef::Input(id) => id.0,
            EntityRef::Consideration(id) => id.0,
            EntityRef::Behavior(id) => id.0,
            EntityRef::BehaviorSet(id) => id.0,
            EntityRef::Archetype(id) => id.0,
            EntityRef::Scenario(id) => id.0,
            EntityRef::Agent(id) => id.0,
        }
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind(), self.uuid())
    }
}

/// A change editors may need to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectEvent {
    /// An entity was removed and every reference to it was cleared.
    Deleted(EntityRef),

    /// The dirty flag was set or cleared. Carries the new value.
    DirtyChanged(bool),

    /// Display names changed; cached labels should be rebuilt.
    RebuildNeeded,
}

impl ProjectEvent {
    /// The deleted entity, if this is a deletion event.
    pub fn deleted(&self) -> Option<EntityRef> {
        match self {
            ProjectEvent::Deleted(entity) => Some(*entity),
            _ => None,
        }
    }
}
