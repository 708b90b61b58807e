//! Persistence - saving and loading whole projects.
//!
//! A project is written as one JSON document. Every entity is stored exactly
//! once, in the table of the collection that owns it; everywhere else it is
//! referenced by ID. Loading builds an ID -> entity table per kind and checks
//! every reference against it, so a behavior listed by two behavior sets comes
//! back as one behavior both sets point at.
//!
//! Loading is all-or-nothing: any malformed, duplicated or dangling data fails
//! the whole call and no partial project is returned.

use curve_rules::InputAxis;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::behaviors::{Archetype, Behavior, BehaviorSet};
use crate::config::ProjectConfig;
use crate::error::{ProjectError, Result};
use crate::events::EntityKind;
use crate::knowledge_base::KnowledgeBase;
use crate::project::Project;
use crate::scenario::Scenario;

/// Version written into every project document.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct DocumentRef<'a> {
    version: u32,
    project: ProjectRef<'a>,
}

#[derive(Serialize)]
struct ProjectRef<'a> {
    name: &'a str,
    knowledge_base: &'a KnowledgeBase,
    inputs: &'a [InputAxis],
    behaviors: &'a [Behavior],
    behavior_sets: &'a [BehaviorSet],
    archetypes: &'a [Archetype],
    scenarios: &'a [Scenario],
}

#[derive(Deserialize)]
struct Header {
    version: u32,
}

#[derive(Deserialize)]
struct Document {
    project: ProjectData,
}

#[derive(Deserialize)]
struct ProjectData {
    name: String,
    knowledge_base: KnowledgeBase,
    inputs: Vec<InputAxis>,
    behaviors: Vec<Behavior>,
    behavior_sets: Vec<BehaviorSet>,
    archetypes: Vec<Archetype>,
    scenarios: Vec<Scenario>,
}

/// ID -> position table for one entity kind.
struct IdTable {
    kind: EntityKind,
    index: HashMap<Uuid, usize>,
}

impl IdTable {
    /// Build the table, rejecting IDs that appear twice.
    fn build(kind: EntityKind, ids: impl IntoIterator<Item = Uuid>) -> Result<Self> {
        let mut index = HashMap::new();
        for (position, id) in ids.into_iter().enumerate() {
            if index.insert(id, position).is_some() {
                return Err(ProjectError::DuplicateId { kind, id });
            }
        }
        Ok(Self { kind, index })
    }

    fn resolve(&self, id: Uuid) -> Result<usize> {
        self.index
            .get(&id)
            .copied()
            .ok_or(ProjectError::DanglingReference {
                kind: self.kind,
                id,
            })
    }

    fn resolve_optional(&self, id: Option<Uuid>) -> Result<()> {
        if let Some(id) = id {
            self.resolve(id)?;
        }
        Ok(())
    }

    /// Resolve a membership list. Each member may appear only once.
    fn resolve_members(&self, members: impl IntoIterator<Item = Uuid>) -> Result<()> {
        let mut seen = HashSet::new();
        for id in members {
            self.resolve(id)?;
            if !seen.insert(id) {
                return Err(ProjectError::DuplicateId {
                    kind: self.kind,
                    id,
                });
            }
        }
        Ok(())
    }
}

impl ProjectData {
    /// Check identity and referential integrity of the whole document.
    fn validate(&self) -> Result<()> {
        let records = IdTable::build(
            EntityKind::Record,
            self.knowledge_base.records().iter().map(|r| r.id.0),
        )?;
        let inputs = IdTable::build(EntityKind::Input, self.inputs.iter().map(|i| i.id.0))?;
        let behaviors = IdTable::build(EntityKind::Behavior, self.behaviors.iter().map(|b| b.id.0))?;
        IdTable::build(
            EntityKind::Consideration,
            self.behaviors
                .iter()
                .flat_map(|b| b.considerations.iter().map(|c| c.id.0)),
        )?;
        let sets = IdTable::build(
            EntityKind::BehaviorSet,
            self.behavior_sets.iter().map(|s| s.id.0),
        )?;
        let archetypes =
            IdTable::build(EntityKind::Archetype, self.archetypes.iter().map(|a| a.id.0))?;
        IdTable::build(EntityKind::Scenario, self.scenarios.iter().map(|s| s.id.0))?;
        IdTable::build(
            EntityKind::Agent,
            self.scenarios
                .iter()
                .flat_map(|s| s.agents.iter().map(|a| a.id.0)),
        )?;

        for input in &self.inputs {
            records.resolve_optional(input.record.map(|r| r.0))?;
        }
        for consideration in self.behaviors.iter().flat_map(|b| &b.considerations) {
            inputs.resolve_optional(consideration.input.map(|i| i.0))?;
        }
        for set in &self.behavior_sets {
            behaviors.resolve_members(set.enabled_behaviors.iter().map(|b| b.0))?;
        }
        for archetype in &self.archetypes {
            sets.resolve_members(archetype.behavior_sets.iter().map(|s| s.0))?;
        }
        for agent in self.scenarios.iter().flat_map(|s| &s.agents) {
            archetypes.resolve_optional(agent.archetype.map(|a| a.0))?;
        }

        Ok(())
    }
}

impl Project {
    /// Serialize the project without touching its dirty state.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let document = DocumentRef {
            version: FORMAT_VERSION,
            project: ProjectRef {
                name: &self.name,
                knowledge_base: &self.knowledge_base,
                inputs: &self.inputs,
                behaviors: &self.behaviors,
                behavior_sets: &self.behavior_sets,
                archetypes: &self.archetypes,
                scenarios: &self.scenarios,
            },
        };

        let bytes = if self.config().pretty {
            serde_json::to_vec_pretty(&document)?
        } else {
            serde_json::to_vec(&document)?
        };
        Ok(bytes)
    }

    /// Serialize the project and mark it clean.
    pub fn save(&mut self) -> Result<Vec<u8>> {
        let bytes = self.to_bytes()?;
        self.set_dirty(false);
        Ok(bytes)
    }

    /// Write the project to `path` and mark it clean.
    ///
    /// The document is written and synced to a temporary file in the same
    /// directory, then renamed into place, so a failed save leaves any
    /// existing file untouched.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(&bytes)?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;

        tracing::debug!("Saved project '{}' to {}", self.name, path.display());
        self.set_dirty(false);
        Ok(())
    }

    /// Restore a project from bytes produced by [`Project::save`].
    pub fn load(bytes: &[u8]) -> Result<Project> {
        Self::load_with_config(bytes, ProjectConfig::default())
    }

    /// Restore a project, applying `config` to the loaded graph.
    pub fn load_with_config(bytes: &[u8], config: ProjectConfig) -> Result<Project> {
        let header: Header = serde_json::from_slice(bytes)?;
        if header.version != FORMAT_VERSION {
            return Err(ProjectError::UnsupportedVersion(header.version));
        }

        let document: Document = serde_json::from_slice(bytes)?;
        let data = document.project;
        data.validate()?;

        let mut project = Project::with_config(config);
        project.name = data.name;
        project.knowledge_base = data.knowledge_base;
        project.inputs = data.inputs;
        project.behaviors = data.behaviors;
        project.behavior_sets = data.behavior_sets;
        project.archetypes = data.archetypes;
        project.scenarios = data.scenarios;
        project.rebuild_input_lookup()?;

        // Agent state is not persisted
        project.reset_scenarios();

        project.set_dirty(false);
        Ok(project)
    }

    /// Read a project from `path`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Project> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let project = Self::load(&bytes)?;
        tracing::debug!("Loaded project '{}' from {}", project.name, path.display());
        Ok(project)
    }
}
