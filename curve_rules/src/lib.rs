//! # Curve Rules
//!
//! The scoring rules of the Curvature utility AI model. This crate holds no
//! project state: it defines how a raw measurement becomes a utility score.
//!
//! ## Core Components
//!
//! - **curves**: Response curve math with mandatory sanitation into `[0, 1]`
//! - **inputs**: Input axes, knowledge base record identifiers, parameters
//! - **agents**: Transient agent state and the evaluation context
//! - **resolver**: The input resolution contract and a knowledge-backed resolver
//! - **considerations**: Input axis + curve scoring units and score aggregation
//! - **real**: Serde helpers for floats that may be NaN or infinite

pub mod agents;
pub mod considerations;
pub mod curves;
pub mod error;
pub mod inputs;
pub mod real;
pub mod resolver;

pub use agents::*;
pub use considerations::*;
pub use curves::*;
pub use error::*;
pub use inputs::*;
pub use resolver::*;
