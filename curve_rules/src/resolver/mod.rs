//! Input resolution - turning an input axis plus a context into a raw value.

use crate::agents::{AgentState, EvaluationContext};
use crate::inputs::{ComputedInput, InputAxis, InputKind, RecordId};

/// Resolves an input axis to a raw scalar for a given context.
///
/// Implementations dispatch on the axis kind. The raw value is fed to a
/// response curve, which takes care of normalization.
pub trait InputResolver {
    fn resolve(&self, axis: &InputAxis, context: &EvaluationContext<'_>) -> f64;
}

/// Resolver backed by agent property tables and knowledge base defaults.
///
/// - Self/target properties read the agent's cached value for the bound
///   record, falling back to the record default.
/// - Distance to target is the Euclidean distance between the two agents.
///
/// Anything that cannot be resolved (unbound axis, missing target, unknown
/// record) yields `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnowledgeResolver;

impl KnowledgeResolver {
    pub fn new() -> Self {
        Self
    }

    fn read_property(
        &self,
        axis: &InputAxis,
        agent: Option<&AgentState>,
        context: &EvaluationContext<'_>,
    ) -> f64 {
        let Some(record) = axis.record else {
            tracing::warn!("Input axis '{}' has no record bound", axis.name);
            return 0.0;
        };
        let Some(agent) = agent else {
            tracing::debug!("Input axis '{}' needs a target but none was given", axis.name);
            return 0.0;
        };
        self.property_or_default(agent, record, context)
    }

    fn property_or_default(
        &self,
        agent: &AgentState,
        record: RecordId,
        context: &EvaluationContext<'_>,
    ) -> f64 {
        agent
            .property(record)
            .or_else(|| context.records.record_default(record))
            .unwrap_or(0.0)
    }
}

impl InputResolver for KnowledgeResolver {
    fn resolve(&self, axis: &InputAxis, context: &EvaluationContext<'_>) -> f64 {
        match axis.kind {
            InputKind::SelfProperty => self.read_property(axis, Some(context.self_agent), context),
            InputKind::TargetProperty => self.read_property(axis, context.target, context),
            InputKind::Computed(ComputedInput::DistanceToTarget) => context
                .target
                .map(|target| context.self_agent.position.distance_to(&target.position))
                .unwrap_or(0.0),
        }
    }
}
