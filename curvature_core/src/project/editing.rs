//! Create, rename and rebind operations on the project graph.
//!
//! Every operation validates its references before mutating anything, so a
//! rejected call leaves the graph untouched.

use curve_rules::{
    AgentId, Consideration, ConsiderationId, InputAxis, InputAxisId, InputKind, RecordId,
    ResponseCurve,
};
use std::collections::HashSet;
use uuid::Uuid;

use super::Project;
use crate::behaviors::{Archetype, ArchetypeId, Behavior, BehaviorId, BehaviorSet, BehaviorSetId};
use crate::error::{ProjectError, Result};
use crate::events::{EntityKind, ProjectEvent};
use crate::knowledge_base::Record;
use crate::scenario::{Agent, Scenario, ScenarioId};

/// Reject a list that names the same ID twice.
fn check_distinct(kind: EntityKind, ids: impl IntoIterator<Item = Uuid>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ProjectError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

impl Project {
    /// Rename the project itself.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.renamed();
    }

    fn renamed(&mut self) {
        self.push_event(ProjectEvent::RebuildNeeded);
        self.mark_dirty();
    }

    // ------------------------------------------------------------------
    // Records
    // ------------------------------------------------------------------

    /// Append a record to the knowledge base.
    pub fn add_record(&mut self, record: Record) -> RecordId {
        tracing::debug!("Adding record '{}'", record.name);
        let id = self.knowledge_base.add_record(record);
        self.mark_dirty();
        id
    }

    pub fn rename_record(&mut self, id: RecordId, name: impl Into<String>) -> Result<()> {
        let record = self
            .knowledge_base
            .get_mut(id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Record, id.0))?;
        record.name = name.into();
        self.renamed();
        Ok(())
    }

    /// Change the value agents start with for a record.
    pub fn set_record_default(&mut self, id: RecordId, value: f64) -> Result<()> {
        let record = self
            .knowledge_base
            .get_mut(id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Record, id.0))?;
        record.default_value = value;
        self.mark_dirty();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Input axes
    // ------------------------------------------------------------------

    /// Register a new input axis. Its name must not be used by another axis.
    pub fn register_input(&mut self, axis: InputAxis) -> Result<InputAxisId> {
        if self.input_lookup.contains_key(&axis.name) {
            return Err(ProjectError::DuplicateInputName(axis.name));
        }
        if self.input(axis.id).is_some() {
            return Err(ProjectError::DuplicateId {
                kind: EntityKind::Input,
                id: axis.id.0,
            });
        }
        self.check_record(axis.record)?;

        tracing::debug!("Registering input axis '{}'", axis.name);
        let id = axis.id;
        self.input_lookup.insert(axis.name.clone(), id);
        self.inputs.push(axis);
        self.mark_dirty();
        Ok(id)
    }

    /// Register an unbound axis under a freshly generated name.
    pub fn create_input(&mut self) -> Result<InputAxisId> {
        let name = self.generate_input_name();
        self.register_input(InputAxis::new(name))
    }

    /// Rename an input axis, keeping names unique.
    ///
    /// Renaming to the axis's current name is a no-op rename that still
    /// requests a rebuild.
    pub fn rename_input(&mut self, id: InputAxisId, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let old = self
            .input(id)
            .map(|axis| axis.name.clone())
            .ok_or_else(|| ProjectError::not_found(EntityKind::Input, id.0))?;

        if old != name && self.input_lookup.contains_key(&name) {
            return Err(ProjectError::DuplicateInputName(name));
        }

        self.input_lookup.remove(&old);
        self.input_lookup.insert(name.clone(), id);
        if let Some(axis) = self.inputs.iter_mut().find(|a| a.id == id) {
            axis.name = name;
        }
        self.renamed();
        Ok(())
    }

    /// Change what an axis reads. Computed kinds drop any record binding.
    pub fn bind_input(
        &mut self,
        id: InputAxisId,
        kind: InputKind,
        record: Option<RecordId>,
    ) -> Result<()> {
        self.check_record(record)?;
        let axis = self
            .inputs
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Input, id.0))?;

        axis.kind = kind;
        axis.record = if kind.is_property() { record } else { None };
        self.mark_dirty();
        Ok(())
    }

    fn check_record(&self, record: Option<RecordId>) -> Result<()> {
        match record {
            Some(id) if !self.knowledge_base.contains(id) => {
                Err(ProjectError::dangling(EntityKind::Record, id.0))
            }
            _ => Ok(()),
        }
    }

    fn check_input(&self, input: Option<InputAxisId>) -> Result<()> {
        match input {
            Some(id) if self.input(id).is_none() => {
                Err(ProjectError::dangling(EntityKind::Input, id.0))
            }
            _ => Ok(()),
        }
    }

    // ------------------------------------------------------------------
    // Behaviors and considerations
    // ------------------------------------------------------------------

    /// Add a behavior together with any considerations it already holds.
    pub fn add_behavior(&mut self, behavior: Behavior) -> Result<BehaviorId> {
        if self.behavior(behavior.id).is_some() {
            return Err(ProjectError::DuplicateId {
                kind: EntityKind::Behavior,
                id: behavior.id.0,
            });
        }
        for consideration in &behavior.considerations {
            self.check_new_consideration(consideration)?;
        }
        check_distinct(
            EntityKind::Consideration,
            behavior.considerations.iter().map(|c| c.id.0),
        )?;

        tracing::debug!("Adding behavior '{}'", behavior.name);
        let id = behavior.id;
        self.behaviors.push(behavior);
        self.mark_dirty();
        Ok(id)
    }

    pub fn rename_behavior(&mut self, id: BehaviorId, name: impl Into<String>) -> Result<()> {
        let behavior = self
            .behavior_mut(id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Behavior, id.0))?;
        behavior.name = name.into();
        self.renamed();
        Ok(())
    }

    pub fn set_behavior_weight(&mut self, id: BehaviorId, weight: f64) -> Result<()> {
        let behavior = self
            .behavior_mut(id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Behavior, id.0))?;
        behavior.weight = weight;
        self.mark_dirty();
        Ok(())
    }

    /// Append a consideration to a behavior.
    pub fn add_consideration(
        &mut self,
        behavior: BehaviorId,
        consideration: Consideration,
    ) -> Result<ConsiderationId> {
        if self.behavior(behavior).is_none() {
            return Err(ProjectError::not_found(EntityKind::Behavior, behavior.0));
        }
        self.check_new_consideration(&consideration)?;

        let id = consideration.id;
        if let Some(owner) = self.behavior_mut(behavior) {
            owner.considerations.push(consideration);
        }
        self.mark_dirty();
        Ok(id)
    }

    fn check_new_consideration(&self, consideration: &Consideration) -> Result<()> {
        if self.consideration(consideration.id).is_some() {
            return Err(ProjectError::DuplicateId {
                kind: EntityKind::Consideration,
                id: consideration.id.0,
            });
        }
        self.check_input(consideration.input)
    }

    pub fn rename_consideration(
        &mut self,
        id: ConsiderationId,
        name: impl Into<String>,
    ) -> Result<()> {
        self.consideration_mut(id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Consideration, id.0))?
            .rename(name);
        self.renamed();
        Ok(())
    }

    /// Bind or unbind the input axis a consideration reads.
    pub fn set_consideration_input(
        &mut self,
        id: ConsiderationId,
        input: Option<InputAxisId>,
    ) -> Result<()> {
        self.check_input(input)?;
        self.consideration_mut(id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Consideration, id.0))?
            .input = input;
        self.mark_dirty();
        Ok(())
    }

    pub fn set_consideration_curve(&mut self, id: ConsiderationId, curve: ResponseCurve) -> Result<()> {
        self.consideration_mut(id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Consideration, id.0))?
            .curve
            .copy_from(&curve);
        self.mark_dirty();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Behavior sets
    // ------------------------------------------------------------------

    pub fn add_behavior_set(&mut self, set: BehaviorSet) -> Result<BehaviorSetId> {
        if self.behavior_set(set.id).is_some() {
            return Err(ProjectError::DuplicateId {
                kind: EntityKind::BehaviorSet,
                id: set.id.0,
            });
        }
        if let Some(missing) = set
            .enabled_behaviors
            .iter()
            .find(|b| self.behavior(**b).is_none())
        {
            return Err(ProjectError::dangling(EntityKind::Behavior, missing.0));
        }
        check_distinct(
            EntityKind::Behavior,
            set.enabled_behaviors.iter().map(|b| b.0),
        )?;

        let id = set.id;
        self.behavior_sets.push(set);
        self.mark_dirty();
        Ok(id)
    }

    pub fn rename_behavior_set(&mut self, id: BehaviorSetId, name: impl Into<String>) -> Result<()> {
        self.behavior_set_mut(id)?.name = name.into();
        self.renamed();
        Ok(())
    }

    /// Make a behavior a member of a set. Returns false if it already was.
    pub fn enable_behavior(&mut self, set: BehaviorSetId, behavior: BehaviorId) -> Result<bool> {
        if self.behavior(behavior).is_none() {
            return Err(ProjectError::not_found(EntityKind::Behavior, behavior.0));
        }
        let added = self.behavior_set_mut(set)?.enable(behavior);
        if added {
            self.mark_dirty();
        }
        Ok(added)
    }

    /// Remove a behavior from a set. Returns false if it was not a member.
    pub fn disable_behavior(&mut self, set: BehaviorSetId, behavior: BehaviorId) -> Result<bool> {
        let removed = self.behavior_set_mut(set)?.disable(behavior);
        if removed {
            self.mark_dirty();
        }
        Ok(removed)
    }

    fn behavior_set_mut(&mut self, id: BehaviorSetId) -> Result<&mut BehaviorSet> {
        self.behavior_sets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::BehaviorSet, id.0))
    }

    // ------------------------------------------------------------------
    // Archetypes
    // ------------------------------------------------------------------

    pub fn add_archetype(&mut self, archetype: Archetype) -> Result<ArchetypeId> {
        if self.archetype(archetype.id).is_some() {
            return Err(ProjectError::DuplicateId {
                kind: EntityKind::Archetype,
                id: archetype.id.0,
            });
        }
        if let Some(missing) = archetype
            .behavior_sets
            .iter()
            .find(|s| self.behavior_set(**s).is_none())
        {
            return Err(ProjectError::dangling(EntityKind::BehaviorSet, missing.0));
        }
        check_distinct(
            EntityKind::BehaviorSet,
            archetype.behavior_sets.iter().map(|s| s.0),
        )?;

        let id = archetype.id;
        self.archetypes.push(archetype);
        self.mark_dirty();
        Ok(id)
    }

    pub fn rename_archetype(&mut self, id: ArchetypeId, name: impl Into<String>) -> Result<()> {
        self.archetype_mut(id)?.name = name.into();
        self.renamed();
        Ok(())
    }

    /// Attach a behavior set to an archetype. Returns false if already attached.
    pub fn attach_behavior_set(&mut self, archetype: ArchetypeId, set: BehaviorSetId) -> Result<bool> {
        if self.behavior_set(set).is_none() {
            return Err(ProjectError::not_found(EntityKind::BehaviorSet, set.0));
        }
        let added = self.archetype_mut(archetype)?.attach(set);
        if added {
            self.mark_dirty();
        }
        Ok(added)
    }

    /// Detach a behavior set from an archetype. Returns false if it was not attached.
    pub fn detach_behavior_set(&mut self, archetype: ArchetypeId, set: BehaviorSetId) -> Result<bool> {
        let removed = self.archetype_mut(archetype)?.detach(set);
        if removed {
            self.mark_dirty();
        }
        Ok(removed)
    }

    fn archetype_mut(&mut self, id: ArchetypeId) -> Result<&mut Archetype> {
        self.archetypes
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Archetype, id.0))
    }

    // ------------------------------------------------------------------
    // Scenarios and agents
    // ------------------------------------------------------------------

    /// Add a scenario. Its agents are reset against the knowledge base.
    pub fn add_scenario(&mut self, mut scenario: Scenario) -> Result<ScenarioId> {
        if self.scenario(scenario.id).is_some() {
            return Err(ProjectError::DuplicateId {
                kind: EntityKind::Scenario,
                id: scenario.id.0,
            });
        }
        for agent in &scenario.agents {
            self.check_archetype(agent.archetype)?;
            self.check_new_agent(agent.id)?;
        }
        check_distinct(EntityKind::Agent, scenario.agents.iter().map(|a| a.id.0))?;

        scenario.reset_agents(&self.knowledge_base);
        let id = scenario.id;
        self.scenarios.push(scenario);
        self.mark_dirty();
        Ok(id)
    }

    pub fn rename_scenario(&mut self, id: ScenarioId, name: impl Into<String>) -> Result<()> {
        self.scenario_mut(id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Scenario, id.0))?
            .name = name.into();
        self.renamed();
        Ok(())
    }

    /// Place an agent in a scenario with fresh live state.
    pub fn add_agent(&mut self, scenario: ScenarioId, mut agent: Agent) -> Result<AgentId> {
        self.check_archetype(agent.archetype)?;
        self.check_new_agent(agent.id)?;

        agent.reset(&self.knowledge_base);
        let id = agent.id;
        self.scenario_mut(scenario)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Scenario, scenario.0))?
            .agents
            .push(agent);
        self.mark_dirty();
        Ok(id)
    }

    fn check_new_agent(&self, agent: AgentId) -> Result<()> {
        if self.scenarios.iter().any(|s| s.agent(agent).is_some()) {
            return Err(ProjectError::DuplicateId {
                kind: EntityKind::Agent,
                id: agent.0,
            });
        }
        Ok(())
    }

    pub fn rename_agent(
        &mut self,
        scenario: ScenarioId,
        agent: AgentId,
        name: impl Into<String>,
    ) -> Result<()> {
        self.agent_mut(scenario, agent)?.name = name.into();
        self.renamed();
        Ok(())
    }

    /// Point an agent at an archetype, or clear it with `None`.
    pub fn set_agent_archetype(
        &mut self,
        scenario: ScenarioId,
        agent: AgentId,
        archetype: Option<ArchetypeId>,
    ) -> Result<()> {
        self.check_archetype(archetype)?;
        self.agent_mut(scenario, agent)?.archetype = archetype;
        self.mark_dirty();
        Ok(())
    }

    fn check_archetype(&self, archetype: Option<ArchetypeId>) -> Result<()> {
        match archetype {
            Some(id) if self.archetype(id).is_none() => {
                Err(ProjectError::dangling(EntityKind::Archetype, id.0))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_duplicate_input_name_is_rejected() {
        let mut project = Project::new();
        project.register_input(InputAxis::new("Health")).unwrap();
        project.drain_events();

        let err = project.register_input(InputAxis::new("Health")).unwrap_err();
        assert!(matches!(err, ProjectError::DuplicateInputName(name) if name == "Health"));
        assert_eq!(project.inputs().len(), 1);
        assert!(project.pending_events().is_empty());
    }

    #[test]
    fn test_register_input_with_missing_record_is_rejected() {
        let mut project = Project::new();
        let err = project
            .register_input(InputAxis::new("Ghost").with_record(RecordId::new()))
            .unwrap_err();
        assert!(matches!(err, ProjectError::DanglingReference { kind: EntityKind::Record, .. }));
        assert!(project.inputs().is_empty());
        assert!(!project.is_dirty());
    }

    #[test]
    fn test_rename_input_updates_lookup() {
        let mut project = Project::new();
        let id = project.register_input(InputAxis::new("Health")).unwrap();

        project.rename_input(id, "Hit points").unwrap();
        assert_eq!(project.input(id).unwrap().name, "Hit points");
        assert_eq!(project.input_by_name("Hit points").unwrap().id, id);
        assert!(project.input_by_name("Health").is_none());

        // The old name is free again
        project.register_input(InputAxis::new("Health")).unwrap();
    }

    #[test]
    fn test_rename_input_to_taken_name_is_rejected() {
        let mut project = Project::new();
        let health = project.register_input(InputAxis::new("Health")).unwrap();
        project.register_input(InputAxis::new("Ammo")).unwrap();

        let err = project.rename_input(health, "Ammo").unwrap_err();
        assert!(matches!(err, ProjectError::DuplicateInputName(_)));
        assert_eq!(project.input(health).unwrap().name, "Health");
        assert_eq!(project.input_by_name("Health").unwrap().id, health);

        // Same name is allowed
        project.rename_input(health, "Health").unwrap();
    }

    #[test]
    fn test_rename_emits_rebuild_and_dirty() {
        let mut project = Project::new();
        let behavior = project.add_behavior(Behavior::new("Attack")).unwrap();
        project.drain_events();

        project.rename_behavior(behavior, "Strike").unwrap();
        assert_eq!(project.behavior(behavior).unwrap().name, "Strike");
        assert_eq!(
            project.drain_events(),
            vec![ProjectEvent::RebuildNeeded, ProjectEvent::DirtyChanged(true)]
        );
    }

    #[test]
    fn test_rename_consideration_keeps_binding() {
        let mut project = Project::new();
        let axis = project.register_input(InputAxis::new("Health")).unwrap();
        let behavior = project.add_behavior(Behavior::new("Heal")).unwrap();
        let curve = ResponseCurve::new(curve_rules::CurveKind::Logistic, 1.0, 2.0, 0.0, 0.0);
        let id = project
            .add_consideration(
                behavior,
                Consideration::new("Old").with_input(axis).with_curve(curve),
            )
            .unwrap();

        project.rename_consideration(id, "New").unwrap();
        let consideration = project.consideration(id).unwrap();
        assert_eq!(consideration.name, "New");
        assert_eq!(consideration.input, Some(axis));
        assert_eq!(consideration.curve, curve);
    }

    #[test]
    fn test_bind_input() {
        let mut project = Project::new();
        let health = project.add_record(Record::new("Health"));
        let axis = project.create_input().unwrap();

        project
            .bind_input(axis, InputKind::TargetProperty, Some(health))
            .unwrap();
        assert_eq!(project.input(axis).unwrap().record, Some(health));

        project
            .bind_input(
                axis,
                InputKind::Computed(curve_rules::ComputedInput::DistanceToTarget),
                Some(health),
            )
            .unwrap();
        assert!(project.input(axis).unwrap().record.is_none());
    }

    #[test]
    fn test_add_consideration_with_unknown_input_is_rejected() {
        let mut project = Project::new();
        let behavior = project.add_behavior(Behavior::new("Attack")).unwrap();

        let err = project
            .add_consideration(
                behavior,
                Consideration::new("Ghost").with_input(InputAxisId::new()),
            )
            .unwrap_err();
        assert!(matches!(err, ProjectError::DanglingReference { kind: EntityKind::Input, .. }));
        assert!(project.behavior(behavior).unwrap().considerations.is_empty());
    }

    #[test]
    fn test_membership_operations() {
        let mut project = Project::new();
        let attack = project.add_behavior(Behavior::new("Attack")).unwrap();
        let set = project.add_behavior_set(BehaviorSet::new("Combat")).unwrap();

        assert!(project.enable_behavior(set, attack).unwrap());
        assert!(!project.enable_behavior(set, attack).unwrap());
        assert!(project.behavior_set(set).unwrap().is_enabled(attack));

        assert!(project.disable_behavior(set, attack).unwrap());
        assert!(!project.disable_behavior(set, attack).unwrap());

        let missing = BehaviorId::new();
        assert!(matches!(
            project.enable_behavior(set, missing),
            Err(ProjectError::NotFound { kind: EntityKind::Behavior, .. })
        ));
    }

    #[test]
    fn test_add_agent_resets_state() {
        let mut project = Project::new();
        let health = project.add_record(Record::new("Health").with_default(0.9));
        let archetype = project.add_archetype(Archetype::new("Soldier")).unwrap();
        let scenario = project.add_scenario(Scenario::new("Duel")).unwrap();

        let agent = project
            .add_agent(scenario, Agent::new("Red").with_archetype(archetype))
            .unwrap();
        let state = project.agent_state(scenario, agent).unwrap();
        assert_eq!(state.property(health), Some(0.9));

        let err = project
            .add_agent(scenario, Agent::new("Blue").with_archetype(ArchetypeId::new()))
            .unwrap_err();
        assert!(matches!(err, ProjectError::DanglingReference { .. }));
    }

    #[test]
    fn test_add_behavior_with_repeated_consideration_is_rejected() {
        let mut project = Project::new();
        let aim = Consideration::new("Aim");
        let behavior = Behavior::new("Shoot")
            .with_consideration(aim.clone())
            .with_consideration(aim.clone());

        let err = project.add_behavior(behavior).unwrap_err();
        assert!(matches!(
            err,
            ProjectError::DuplicateId { kind: EntityKind::Consideration, id } if id == aim.id.0
        ));
        assert!(project.behaviors().is_empty());
        assert!(!project.is_dirty());
    }

    #[test]
    fn test_add_behavior_set_with_repeated_member_is_rejected() {
        let mut project = Project::new();
        let attack = project.add_behavior(Behavior::new("Attack")).unwrap();
        project.set_dirty(false);

        let mut set = BehaviorSet::new("Combat");
        set.enabled_behaviors = vec![attack, attack];
        let err = project.add_behavior_set(set).unwrap_err();
        assert!(matches!(
            err,
            ProjectError::DuplicateId { kind: EntityKind::Behavior, id } if id == attack.0
        ));
        assert!(project.behavior_sets().is_empty());
        assert!(!project.is_dirty());
    }

    #[test]
    fn test_add_archetype_with_repeated_set_is_rejected() {
        let mut project = Project::new();
        let combat = project.add_behavior_set(BehaviorSet::new("Combat")).unwrap();

        let mut archetype = Archetype::new("Soldier");
        archetype.behavior_sets = vec![combat, combat];
        let err = project.add_archetype(archetype).unwrap_err();
        assert!(matches!(
            err,
            ProjectError::DuplicateId { kind: EntityKind::BehaviorSet, .. }
        ));
        assert!(project.archetypes().is_empty());
    }

    #[test]
    fn test_add_scenario_with_repeated_agent_is_rejected() {
        let mut project = Project::new();
        let red = Agent::new("Red");
        let mut duel = Scenario::new("Duel");
        duel.agents = vec![red.clone(), red.clone()];

        let err = project.add_scenario(duel).unwrap_err();
        assert!(matches!(
            err,
            ProjectError::DuplicateId { kind: EntityKind::Agent, id } if id == red.id.0
        ));
        assert!(project.scenarios().is_empty());
    }

    #[test]
    fn test_add_scenario_with_agent_from_other_scenario_is_rejected() {
        let mut project = Project::new();
        let first = project.add_scenario(Scenario::new("Duel")).unwrap();
        let red = Agent::new("Red");
        project.add_agent(first, red.clone()).unwrap();

        let mut rematch = Scenario::new("Rematch");
        rematch.agents = vec![red];
        let err = project.add_scenario(rematch).unwrap_err();
        assert!(matches!(err, ProjectError::DuplicateId { kind: EntityKind::Agent, .. }));
        assert_eq!(project.scenarios().len(), 1);

        // What was accepted still reloads
        let loaded = Project::load(&project.save().unwrap()).unwrap();
        assert_eq!(loaded.scenarios().len(), 1);
    }

    #[test]
    fn test_set_agent_archetype() {
        let mut project = Project::new();
        let soldier = project.add_archetype(Archetype::new("Soldier")).unwrap();
        let scenario = project.add_scenario(Scenario::new("Duel")).unwrap();
        let agent = project.add_agent(scenario, Agent::new("Red")).unwrap();

        project.set_agent_archetype(scenario, agent, Some(soldier)).unwrap();
        assert_eq!(
            project.scenario(scenario).unwrap().agent(agent).unwrap().archetype,
            Some(soldier)
        );

        project.set_agent_archetype(scenario, agent, None).unwrap();
        assert!(project.scenario(scenario).unwrap().agent(agent).unwrap().archetype.is_none());
    }
}
