//! Cascading deletes.
//!
//! Each delete removes the entity from its owner and clears every reference to
//! it in one step:
//!
//! | Deleted       | Effect on dependents                                   |
//! |---------------|--------------------------------------------------------|
//! | Record        | input axes bound to it become unbound                  |
//! | Input axis    | considerations reading it become unbound               |
//! | Behavior      | removed from every behavior set                        |
//! | Behavior set  | removed from every archetype                           |
//! | Archetype     | agents using it lose their archetype                   |
//! | Scenario      | none                                                   |
//! | Consideration | removed from its owning behavior                       |
//! | Agent         | none                                                   |
//!
//! Single-valued references are set to `None`; membership lists drop the ID.
//! Every delete marks the project dirty and then queues
//! [`ProjectEvent::Deleted`]. Deleting an entity that is not in the project
//! fails with [`ProjectError::NotFound`] and changes nothing.

use curve_rules::{AgentId, Consideration, ConsiderationId, InputAxis, InputAxisId, RecordId};

use super::Project;
use crate::behaviors::{Archetype, ArchetypeId, Behavior, BehaviorId, BehaviorSet, BehaviorSetId};
use crate::error::{ProjectError, Result};
use crate::events::{EntityKind, EntityRef, ProjectEvent};
use crate::knowledge_base::Record;
use crate::scenario::{Agent, Scenario, ScenarioId};

impl Project {
    fn finish_delete(&mut self, entity: EntityRef) {
        tracing::debug!("Deleted {}", entity);
        self.mark_dirty();
        self.push_event(ProjectEvent::Deleted(entity));
    }

    /// Delete a knowledge base record, unbinding every axis that used it.
    pub fn delete_record(&mut self, id: RecordId) -> Result<Record> {
        let record = self
            .knowledge_base
            .remove_record(id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Record, id.0))?;

        for input in &mut self.inputs {
            if input.record == Some(id) {
                input.record = None;
            }
        }
        for scenario in &mut self.scenarios {
            scenario.forget_record(id);
        }

        self.finish_delete(EntityRef::Record(id));
        Ok(record)
    }

    /// Delete an input axis, unbinding every consideration that read it.
    pub fn delete_input(&mut self, id: InputAxisId) -> Result<InputAxis> {
        let index = self
            .inputs
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Input, id.0))?;
        let input = self.inputs.remove(index);
        self.input_lookup.remove(&input.name);

        for behavior in &mut self.behaviors {
            for consideration in &mut behavior.considerations {
                if consideration.input == Some(id) {
                    consideration.input = None;
                }
            }
        }

        self.finish_delete(EntityRef::Input(id));
        Ok(input)
    }

    /// Delete a behavior and drop it from every behavior set.
    pub fn delete_behavior(&mut self, id: BehaviorId) -> Result<Behavior> {
        let index = self
            .behaviors
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Behavior, id.0))?;
        let behavior = self.behaviors.remove(index);

        for set in &mut self.behavior_sets {
            set.disable(id);
        }

        self.finish_delete(EntityRef::Behavior(id));
        Ok(behavior)
    }

    /// Delete a behavior set and drop it from every archetype.
    pub fn delete_behavior_set(&mut self, id: BehaviorSetId) -> Result<BehaviorSet> {
        let index = self
            .behavior_sets
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::BehaviorSet, id.0))?;
        let set = self.behavior_sets.remove(index);

        for archetype in &mut self.archetypes {
            archetype.detach(id);
        }

        self.finish_delete(EntityRef::BehaviorSet(id));
        Ok(set)
    }

    /// Delete an archetype, clearing it from every agent in every scenario.
    pub fn delete_archetype(&mut self, id: ArchetypeId) -> Result<Archetype> {
        let index = self
            .archetypes
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Archetype, id.0))?;
        let archetype = self.archetypes.remove(index);

        for scenario in &mut self.scenarios {
            scenario.clear_archetype(id);
        }

        self.finish_delete(EntityRef::Archetype(id));
        Ok(archetype)
    }

    pub fn delete_scenario(&mut self, id: ScenarioId) -> Result<Scenario> {
        let index = self
            .scenarios
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Scenario, id.0))?;
        let scenario = self.scenarios.remove(index);

        self.finish_delete(EntityRef::Scenario(id));
        Ok(scenario)
    }

    /// Delete a consideration from whichever behavior owns it.
    pub fn delete_consideration(&mut self, id: ConsiderationId) -> Result<Consideration> {
        let consideration = self
            .behaviors
            .iter_mut()
            .find_map(|b| b.remove_consideration(id))
            .ok_or_else(|| ProjectError::not_found(EntityKind::Consideration, id.0))?;

        self.finish_delete(EntityRef::Consideration(id));
        Ok(consideration)
    }

    /// Remove an agent from a scenario.
    pub fn delete_agent(&mut self, scenario: ScenarioId, id: AgentId) -> Result<Agent> {
        let owner = self
            .scenario_mut(scenario)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Scenario, scenario.0))?;
        let index = owner
            .agents
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| ProjectError::not_found(EntityKind::Agent, id.0))?;
        let agent = owner.agents.remove(index);

        self.finish_delete(EntityRef::Agent(id));
        Ok(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_rules::{InputKind, Position};

    /// Two behaviors shared by two sets, two archetypes sharing one set, and a
    /// scenario with agents on both archetypes.
    struct Fixture {
        project: Project,
        health: RecordId,
        ammo: RecordId,
        health_axis: InputAxisId,
        ammo_axis: InputAxisId,
        attack: BehaviorId,
        flee: BehaviorId,
        attack_health: ConsiderationId,
        flee_health: ConsiderationId,
        flee_ammo: ConsiderationId,
        combat: BehaviorSetId,
        survival: BehaviorSetId,
        soldier: ArchetypeId,
        scout: ArchetypeId,
        scenario: ScenarioId,
        red: AgentId,
        blue: AgentId,
    }

    fn fixture() -> Fixture {
        let mut project = Project::new();

        let health = project.add_record(Record::new("Health").with_default(1.0));
        let ammo = project.add_record(Record::new("Ammo").with_default(0.5));

        let health_axis = project
            .register_input(InputAxis::new("Health").with_record(health))
            .unwrap();
        let ammo_axis = project
            .register_input(
                InputAxis::new("Target ammo")
                    .with_kind(InputKind::TargetProperty)
                    .with_record(ammo),
            )
            .unwrap();

        let attack_health = Consideration::new("Healthy enough").with_input(health_axis);
        let flee_health = Consideration::new("Hurt").with_input(health_axis);
        let flee_ammo = Consideration::new("Enemy armed").with_input(ammo_axis);
        let (attack_health_id, flee_health_id, flee_ammo_id) =
            (attack_health.id, flee_health.id, flee_ammo.id);

        let attack = project
            .add_behavior(Behavior::new("Attack").with_consideration(attack_health))
            .unwrap();
        let flee = project
            .add_behavior(
                Behavior::new("Flee")
                    .with_consideration(flee_health)
                    .with_consideration(flee_ammo),
            )
            .unwrap();

        let combat = project.add_behavior_set(BehaviorSet::new("Combat")).unwrap();
        let survival = project.add_behavior_set(BehaviorSet::new("Survival")).unwrap();
        project.enable_behavior(combat, attack).unwrap();
        project.enable_behavior(combat, flee).unwrap();
        project.enable_behavior(survival, flee).unwrap();

        let soldier = project.add_archetype(Archetype::new("Soldier")).unwrap();
        let scout = project.add_archetype(Archetype::new("Scout")).unwrap();
        project.attach_behavior_set(soldier, combat).unwrap();
        project.attach_behavior_set(soldier, survival).unwrap();
        project.attach_behavior_set(scout, survival).unwrap();

        let scenario = project.add_scenario(Scenario::new("Skirmish")).unwrap();
        let red = project
            .add_agent(
                scenario,
                Agent::new("Red")
                    .with_archetype(soldier)
                    .with_position(Position::new(0.0, 0.0)),
            )
            .unwrap();
        let blue = project
            .add_agent(
                scenario,
                Agent::new("Blue")
                    .with_archetype(scout)
                    .with_position(Position::new(3.0, 4.0)),
            )
            .unwrap();

        project.set_dirty(false);
        project.drain_events();

        Fixture {
            project,
            health,
            ammo,
            health_axis,
            ammo_axis,
            attack,
            flee,
            attack_health: attack_health_id,
            flee_health: flee_health_id,
            flee_ammo: flee_ammo_id,
            combat,
            survival,
            soldier,
            scout,
            scenario,
            red,
            blue,
        }
    }

    fn assert_deleted(project: &mut Project, entity: EntityRef) {
        assert!(project.is_dirty());
        assert_eq!(
            project.drain_events(),
            vec![ProjectEvent::DirtyChanged(true), ProjectEvent::Deleted(entity)]
        );
    }

    #[test]
    fn test_delete_record_unbinds_inputs() {
        let mut f = fixture();
        let before_ammo_axis = f.project.input(f.ammo_axis).cloned();

        let removed = f.project.delete_record(f.health).unwrap();
        assert_eq!(removed.name, "Health");
        assert!(!f.project.knowledge_base().contains(f.health));

        // Axis survives, unbound
        let axis = f.project.input(f.health_axis).unwrap();
        assert!(axis.record.is_none());
        assert_eq!(f.project.input(f.ammo_axis).cloned(), before_ammo_axis);

        let red = f.project.agent_state(f.scenario, f.red).unwrap();
        assert_eq!(red.property(f.health), None);
        assert_eq!(red.property(f.ammo), Some(0.5));

        assert_deleted(&mut f.project, EntityRef::Record(f.health));
    }

    #[test]
    fn test_delete_input_unbinds_considerations() {
        let mut f = fixture();

        let removed = f.project.delete_input(f.health_axis).unwrap();
        assert_eq!(removed.name, "Health");
        assert!(f.project.input(f.health_axis).is_none());
        assert!(f.project.input_by_name("Health").is_none());

        // Considerations survive in their behaviors, unbound
        assert!(f.project.consideration(f.attack_health).unwrap().input.is_none());
        assert!(f.project.consideration(f.flee_health).unwrap().input.is_none());
        assert_eq!(
            f.project.consideration(f.flee_ammo).unwrap().input,
            Some(f.ammo_axis)
        );

        assert_deleted(&mut f.project, EntityRef::Input(f.health_axis));
    }

    #[test]
    fn test_deleted_input_name_can_be_reused() {
        let mut f = fixture();
        f.project.delete_input(f.health_axis).unwrap();
        f.project.register_input(InputAxis::new("Health")).unwrap();
    }

    #[test]
    fn test_delete_behavior_removes_from_all_sets() {
        let mut f = fixture();

        f.project.delete_behavior(f.flee).unwrap();
        assert!(f.project.behavior(f.flee).is_none());
        assert_eq!(
            f.project.behavior_set(f.combat).unwrap().enabled_behaviors,
            vec![f.attack]
        );
        assert!(f
            .project
            .behavior_set(f.survival)
            .unwrap()
            .enabled_behaviors
            .is_empty());

        // Its considerations went with it
        assert!(f.project.consideration(f.flee_ammo).is_none());
        assert!(f.project.behavior(f.attack).is_some());

        assert_deleted(&mut f.project, EntityRef::Behavior(f.flee));
    }

    #[test]
    fn test_delete_behavior_set_removes_from_all_archetypes() {
        let mut f = fixture();

        f.project.delete_behavior_set(f.survival).unwrap();
        assert!(f.project.behavior_set(f.survival).is_none());
        assert_eq!(
            f.project.archetype(f.soldier).unwrap().behavior_sets,
            vec![f.combat]
        );
        assert!(f.project.archetype(f.scout).unwrap().behavior_sets.is_empty());

        // Member behaviors are shared, not owned
        assert!(f.project.behavior(f.flee).is_some());

        assert_deleted(&mut f.project, EntityRef::BehaviorSet(f.survival));
    }

    #[test]
    fn test_delete_archetype_clears_agents() {
        let mut f = fixture();

        f.project.delete_archetype(f.soldier).unwrap();
        let scenario = f.project.scenario(f.scenario).unwrap();
        assert!(scenario.agent(f.red).unwrap().archetype.is_none());
        assert_eq!(scenario.agent(f.blue).unwrap().archetype, Some(f.scout));
        assert_eq!(scenario.agents.len(), 2);

        assert_deleted(&mut f.project, EntityRef::Archetype(f.soldier));
    }

    #[test]
    fn test_delete_scenario() {
        let mut f = fixture();

        let removed = f.project.delete_scenario(f.scenario).unwrap();
        assert_eq!(removed.agents.len(), 2);
        assert!(f.project.scenarios().is_empty());
        assert_eq!(f.project.archetypes().len(), 2);

        assert_deleted(&mut f.project, EntityRef::Scenario(f.scenario));
    }

    #[test]
    fn test_delete_consideration() {
        let mut f = fixture();

        let removed = f.project.delete_consideration(f.flee_health).unwrap();
        assert_eq!(removed.name, "Hurt");
        let flee = f.project.behavior(f.flee).unwrap();
        assert_eq!(flee.considerations.len(), 1);
        assert_eq!(flee.considerations[0].id, f.flee_ammo);
        assert!(f.project.consideration(f.attack_health).is_some());

        assert_deleted(&mut f.project, EntityRef::Consideration(f.flee_health));
    }

    #[test]
    fn test_delete_agent() {
        let mut f = fixture();

        f.project.delete_agent(f.scenario, f.red).unwrap();
        let scenario = f.project.scenario(f.scenario).unwrap();
        assert!(scenario.agent(f.red).is_none());
        assert!(scenario.agent(f.blue).is_some());

        assert_deleted(&mut f.project, EntityRef::Agent(f.red));
    }

    fn assert_not_found<T>(result: Result<T>, expected: EntityKind) {
        match result {
            Err(ProjectError::NotFound { kind, .. }) => assert_eq!(kind, expected),
            Err(other) => panic!("expected missing {expected}, got {other}"),
            Ok(_) => panic!("expected missing {expected}, delete succeeded"),
        }
    }

    #[test]
    fn test_delete_missing_entity_fails_without_changes() {
        let mut f = fixture();
        let before = f.project.clone();
        let p = &mut f.project;

        assert_not_found(p.delete_record(RecordId::new()), EntityKind::Record);
        assert_not_found(p.delete_input(InputAxisId::new()), EntityKind::Input);
        assert_not_found(p.delete_behavior(BehaviorId::new()), EntityKind::Behavior);
        assert_not_found(p.delete_behavior_set(BehaviorSetId::new()), EntityKind::BehaviorSet);
        assert_not_found(p.delete_archetype(ArchetypeId::new()), EntityKind::Archetype);
        assert_not_found(p.delete_scenario(ScenarioId::new()), EntityKind::Scenario);
        assert_not_found(
            p.delete_consideration(ConsiderationId::new()),
            EntityKind::Consideration,
        );
        assert_not_found(p.delete_agent(f.scenario, AgentId::new()), EntityKind::Agent);
        assert_not_found(p.delete_agent(ScenarioId::new(), f.red), EntityKind::Scenario);

        assert!(!p.is_dirty());
        assert!(p.pending_events().is_empty());
        assert_eq!(p.knowledge_base(), before.knowledge_base());
        assert_eq!(p.inputs(), before.inputs());
        assert_eq!(p.behaviors(), before.behaviors());
        assert_eq!(p.behavior_sets(), before.behavior_sets());
        assert_eq!(p.archetypes(), before.archetypes());
        assert_eq!(p.scenarios(), before.scenarios());
        assert_eq!(p.input_by_name("Health").unwrap().id, f.health_axis);
    }

    #[test]
    fn test_delete_twice_fails_second_time() {
        let mut f = fixture();
        f.project.delete_behavior(f.attack).unwrap();
        f.project.set_dirty(false);
        f.project.drain_events();

        assert_not_found(f.project.delete_behavior(f.attack), EntityKind::Behavior);
        assert!(!f.project.is_dirty());
        assert!(f.project.pending_events().is_empty());
    }
}
