//! Scenarios - test beds of agents used to exercise behaviors.

use curve_rules::{AgentId, AgentState, Position, RecordCatalog, RecordId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::behaviors::ArchetypeId;

/// Unique identifier for scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenarioId(pub Uuid);

impl ScenarioId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScenarioId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An agent placed in a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,

    /// Template this agent draws behaviors from. Cleared when the archetype is deleted.
    pub archetype: Option<ArchetypeId>,

    /// Where the agent starts when the scenario is reset.
    pub start_position: Position,

    /// Live simulation state, rebuilt by [`Scenario::reset_agents`].
    #[serde(skip)]
    pub state: AgentState,
}

impl Agent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AgentId::new(),
            name: name.into(),
            archetype: None,
            start_position: Position::default(),
            state: AgentState::default(),
        }
    }

    pub fn with_archetype(mut self, archetype: ArchetypeId) -> Self {
        self.archetype = Some(archetype);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.start_position = position;
        self
    }

    /// Discard live state and start over from the knowledge base defaults.
    pub fn reset(&mut self, records: &dyn RecordCatalog) {
        self.state = AgentState::from_catalog(self.start_position, records);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub agents: Vec<Agent>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ScenarioId::new(),
            name: name.into(),
            agents: Vec::new(),
        }
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id == id)
    }

    /// Rebuild every agent's live state against `records`.
    pub fn reset_agents(&mut self, records: &dyn RecordCatalog) {
        for agent in &mut self.agents {
            agent.reset(records);
        }
    }

    /// Clear any archetype reference equal to `archetype`. Returns how many agents changed.
    pub(crate) fn clear_archetype(&mut self, archetype: ArchetypeId) -> usize {
        let mut cleared = 0;
        for agent in &mut self.agents {
            if agent.archetype == Some(archetype) {
                agent.archetype = None;
                cleared += 1;
            }
        }
        cleared
    }

    /// Drop a record from every agent's cached properties.
    pub(crate) fn forget_record(&mut self, record: RecordId) {
        for agent in &mut self.agents {
            agent.state.remove_property(record);
        }
    }
}
