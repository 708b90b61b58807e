//! # Curvature Core
//!
//! The project graph of the Curvature utility AI editor. This crate owns the
//! entities an editor manipulates, keeps references between them consistent,
//! and saves/loads whole projects.
//!
//! ## Core Components
//!
//! - **knowledge_base**: Named records that input axes bind to
//! - **behaviors**: Behaviors, behavior sets and archetypes
//! - **scenario**: Scenarios and the agents placed in them
//! - **project**: The root graph with cascading deletes and dirty tracking
//! - **persistence**: Identity-preserving JSON save/load
//! - **events**: Structural change events pulled by editors
//! - **config**: Project settings loadable from TOML
//!
//! ## Design Philosophy
//!
//! - **IDs, not pointers**: Cross references are typed IDs resolved through the owning collection
//! - **Pull-based notifications**: Mutations queue events; editors drain them when ready
//! - **All-or-nothing**: Rejected edits and failed loads leave existing state untouched

pub mod behaviors;
pub mod config;
pub mod error;
pub mod events;
pub mod knowledge_base;
pub mod persistence;
pub mod project;
pub mod scenario;

pub use behaviors::*;
pub use config::*;
pub use error::*;
pub use events::*;
pub use knowledge_base::*;
pub use persistence::*;
pub use project::*;
pub use scenario::*;
