//! Project - the root of the entity graph.
//!
//! The project exclusively owns the knowledge base and every top-level
//! collection. Cross references between entities are IDs resolved through
//! these collections, so clearing a reference is an explicit mutation.
//!
//! Mutations mark the project dirty and queue [`ProjectEvent`]s, which editors
//! pull with [`Project::drain_events`].

mod deletion;
mod editing;

use curve_rules::{
    AgentId, AgentState, ComputedInput, Consideration, ConsiderationId, EvaluationContext,
    InputAxis, InputAxisId, InputKind, InputResolver,
};
use std::collections::HashMap;

use crate::behaviors::{Archetype, ArchetypeId, Behavior, BehaviorId, BehaviorSet, BehaviorSetId};
use crate::config::ProjectConfig;
use crate::error::{ProjectError, Result};
use crate::events::{EntityKind, ProjectEvent};
use crate::knowledge_base::KnowledgeBase;
use crate::scenario::{Agent, Scenario, ScenarioId};

/// The root of a utility AI project.
#[derive(Debug, Clone)]
pub struct Project {
    pub(crate) name: String,
    pub(crate) knowledge_base: KnowledgeBase,
    pub(crate) archetypes: Vec<Archetype>,
    pub(crate) behaviors: Vec<Behavior>,
    pub(crate) behavior_sets: Vec<BehaviorSet>,
    pub(crate) inputs: Vec<InputAxis>,
    pub(crate) scenarios: Vec<Scenario>,

    /// Input axis name -> ID. Kept in sync on register, rename and delete.
    input_lookup: HashMap<String, InputAxisId>,

    dirty: bool,
    events: Vec<ProjectEvent>,
    config: ProjectConfig,
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

impl Project {
    /// Create an empty, clean project with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProjectConfig::default())
    }

    /// Create an empty, clean project.
    pub fn with_config(config: ProjectConfig) -> Self {
        Self {
            name: config.project_name.clone(),
            knowledge_base: KnowledgeBase::new(),
            archetypes: Vec::new(),
            behaviors: Vec::new(),
            behavior_sets: Vec::new(),
            inputs: Vec::new(),
            scenarios: Vec::new(),
            input_lookup: HashMap::new(),
            dirty: false,
            events: Vec::new(),
            config,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn inputs(&self) -> &[InputAxis] {
        &self.inputs
    }

    pub fn behaviors(&self) -> &[Behavior] {
        &self.behaviors
    }

    pub fn behavior_sets(&self) -> &[BehaviorSet] {
        &self.behavior_sets
    }

    pub fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    pub fn input(&self, id: InputAxisId) -> Option<&InputAxis> {
        self.inputs.iter().find(|i| i.id == id)
    }

    /// Find an input axis by its registered name.
    pub fn input_by_name(&self, name: &str) -> Option<&InputAxis> {
        self.input_lookup.get(name).and_then(|id| self.input(*id))
    }

    pub fn behavior(&self, id: BehaviorId) -> Option<&Behavior> {
        self.behaviors.iter().find(|b| b.id == id)
    }

    pub(crate) fn behavior_mut(&mut self, id: BehaviorId) -> Option<&mut Behavior> {
        self.behaviors.iter_mut().find(|b| b.id == id)
    }

    pub fn behavior_set(&self, id: BehaviorSetId) -> Option<&BehaviorSet> {
        self.behavior_sets.iter().find(|s| s.id == id)
    }

    pub fn archetype(&self, id: ArchetypeId) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.id == id)
    }

    pub fn scenario(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub(crate) fn scenario_mut(&mut self, id: ScenarioId) -> Option<&mut Scenario> {
        self.scenarios.iter_mut().find(|s| s.id == id)
    }

    pub fn consideration(&self, id: ConsiderationId) -> Option<&Consideration> {
        self.behaviors.iter().find_map(|b| b.consideration(id))
    }

    pub(crate) fn consideration_mut(&mut self, id: ConsiderationId) -> Option<&mut Consideration> {
        self.behaviors
            .iter_mut()
            .find_map(|b| b.consideration_mut(id))
    }

    /// The behavior that currently owns a consideration.
    pub fn owner_of(&self, consideration: ConsiderationId) -> Option<BehaviorId> {
        self.behaviors
            .iter()
            .find(|b| b.consideration(consideration).is_some())
            .map(|b| b.id)
    }

    /// Behavior sets that list `behavior` as a member.
    pub fn sets_enabling(&self, behavior: BehaviorId) -> Vec<&BehaviorSet> {
        self.behavior_sets
            .iter()
            .filter(|s| s.is_enabled(behavior))
            .collect()
    }

    /// Every behavior reachable from an archetype through its sets, without duplicates.
    pub fn archetype_behaviors(&self, archetype: ArchetypeId) -> Result<Vec<&Behavior>> {
        let archetype = self
            .archetype(archetype)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Archetype, archetype.0))?;

        let mut seen = Vec::new();
        for set in archetype
            .behavior_sets
            .iter()
            .filter_map(|id| self.behavior_set(*id))
        {
            for id in &set.enabled_behaviors {
                if !seen.contains(id) {
                    seen.push(*id);
                }
            }
        }

        Ok(seen.iter().filter_map(|id| self.behavior(*id)).collect())
    }

    // ------------------------------------------------------------------
    // Dirty tracking and events
    // ------------------------------------------------------------------

    /// Whether the project has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flag the project as modified.
    pub fn mark_dirty(&mut self) {
        self.set_dirty(true);
    }

    pub(crate) fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
        self.events.push(ProjectEvent::DirtyChanged(dirty));
    }

    pub(crate) fn push_event(&mut self, event: ProjectEvent) {
        self.events.push(event);
    }

    /// Events queued since the last drain, oldest first.
    pub fn pending_events(&self) -> &[ProjectEvent] {
        &self.events
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<ProjectEvent> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------
    // Input naming
    // ------------------------------------------------------------------

    /// Propose a name for a new input axis that no registered axis uses.
    ///
    /// Probes the configured base name, then `"<base> 2"`, `"<base> 3"`, ...
    pub fn generate_input_name(&self) -> String {
        let base = &self.config.new_input_name;
        let mut name = base.clone();
        let mut counter = 2;
        while self.input_lookup.contains_key(&name) {
            name = format!("{} {}", base, counter);
            counter += 1;
        }
        name
    }

    pub(crate) fn rebuild_input_lookup(&mut self) -> Result<()> {
        self.input_lookup.clear();
        for axis in &self.inputs {
            if self.input_lookup.insert(axis.name.clone(), axis.id).is_some() {
                return Err(ProjectError::DuplicateInputName(axis.name.clone()));
            }
        }
        Ok(())
    }

    /// Names of the data sources an axis of `kind` can bind to.
    ///
    /// Property kinds list knowledge base records; computed kinds list the
    /// built-in formula catalog.
    pub fn input_sources(&self, kind: InputKind) -> Vec<String> {
        if kind.is_property() {
            self.knowledge_base
                .record_names()
                .into_iter()
                .map(str::to_string)
                .collect()
        } else {
            ComputedInput::CATALOG
                .iter()
                .map(|c| c.name().to_string())
                .collect()
        }
    }

    // ------------------------------------------------------------------
    // Scoring
    // ------------------------------------------------------------------

    /// Live state of an agent in a scenario.
    pub fn agent_state(&self, scenario: ScenarioId, agent: AgentId) -> Option<&AgentState> {
        self.scenario(scenario)
            .and_then(|s| s.agent(agent))
            .map(|a| &a.state)
    }

    /// Mutable live state of an agent, for driving a simulation.
    ///
    /// Only the transient state is exposed; the agent's archetype reference
    /// is changed through [`Project::set_agent_archetype`].
    pub fn agent_state_mut(
        &mut self,
        scenario: ScenarioId,
        agent: AgentId,
    ) -> Option<&mut AgentState> {
        self.scenario_mut(scenario)
            .and_then(|s| s.agent_mut(agent))
            .map(|a| &mut a.state)
    }

    /// Score one consideration for `self_agent`, optionally against `target`.
    pub fn score_consideration(
        &self,
        consideration: ConsiderationId,
        resolver: &dyn InputResolver,
        self_agent: &AgentState,
        target: Option<&AgentState>,
    ) -> Result<f64> {
        let consideration = self
            .consideration(consideration)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Consideration, consideration.0))?;
        let context = self.context(self_agent, target);
        Ok(consideration.score(&self.inputs, resolver, &context)?)
    }

    /// Score a behavior for `self_agent`, optionally against `target`.
    pub fn score_behavior(
        &self,
        behavior: BehaviorId,
        resolver: &dyn InputResolver,
        self_agent: &AgentState,
        target: Option<&AgentState>,
    ) -> Result<f64> {
        let behavior = self
            .behavior(behavior)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Behavior, behavior.0))?;
        let context = self.context(self_agent, target);
        let score = behavior.score(&self.inputs, resolver, &context)?;
        tracing::debug!("Behavior '{}' scored {}", behavior.name, score);
        Ok(score)
    }

    fn context<'a>(
        &'a self,
        self_agent: &'a AgentState,
        target: Option<&'a AgentState>,
    ) -> EvaluationContext<'a> {
        let mut context = EvaluationContext::new(self_agent, &self.knowledge_base);
        context.target = target;
        context
    }

    /// Rebuild every agent's live state from the knowledge base.
    pub fn reset_scenarios(&mut self) {
        let Self {
            scenarios,
            knowledge_base,
            ..
        } = self;
        for scenario in scenarios.iter_mut() {
            scenario.reset_agents(&*knowledge_base);
        }
    }

    pub(crate) fn agent_mut(&mut self, scenario: ScenarioId, agent: AgentId) -> Result<&mut Agent> {
        self.scenario_mut(scenario)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Scenario, scenario.0))?
            .agent_mut(agent)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Agent, agent.0))
    }
}
