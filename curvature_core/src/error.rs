//! Error types for project graph operations and persistence.

use curve_rules::RulesError;
use thiserror::Error;
use uuid::Uuid;

use crate::events::EntityKind;

/// Errors surfaced by the project graph.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("an input axis named '{0}' already exists")]
    DuplicateInputName(String),

    #[error("{kind} {id} is not part of this project")]
    NotFound { kind: EntityKind, id: Uuid },

    #[error("{kind} {id} appears more than once")]
    DuplicateId { kind: EntityKind, id: Uuid },

    #[error("reference to missing {kind} {id}")]
    DanglingReference { kind: EntityKind, id: Uuid },

    #[error("unsupported project document version {0}")]
    UnsupportedVersion(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Rules(#[from] RulesError),
}

impl ProjectError {
    pub(crate) fn not_found(kind: EntityKind, id: Uuid) -> Self {
        ProjectError::NotFound { kind, id }
    }

    pub(crate) fn dangling(kind: EntityKind, id: Uuid) -> Self {
        ProjectError::DanglingReference { kind, id }
    }
}

pub type Result<T> = std::result::Result<T, ProjectError>;
