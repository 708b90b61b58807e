//! Behavior definitions.

use curve_rules::{
    compensated_product, Consideration, ConsiderationId, EvaluationContext, InputAxis,
    InputResolver,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BehaviorId(pub Uuid);

impl BehaviorId {
    /// Create a new random behavior ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BehaviorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BehaviorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate action scored from its considerations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Behavior {
    pub id: BehaviorId,
    pub name: String,

    /// Multiplier applied to the combined consideration score.
    #[serde(default = "default_weight", with = "curve_rules::real")]
    pub weight: f64,

    pub considerations: Vec<Consideration>,
}

fn default_weight() -> f64 {
    1.0
}

impl Behavior {
    /// Create a behavior with no considerations and unit weight.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BehaviorId::new(),
            name: name.into(),
            weight: default_weight(),
            considerations: Vec::new(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_consideration(mut self, consideration: Consideration) -> Self {
        self.considerations.push(consideration);
        self
    }

    pub fn consideration(&self, id: ConsiderationId) -> Option<&Consideration> {
        self.considerations.iter().find(|c| c.id == id)
    }

    pub fn consideration_mut(&mut self, id: ConsiderationId) -> Option<&mut Consideration> {
        self.considerations.iter_mut().find(|c| c.id == id)
    }

    /// Remove a consideration. Returns it if this behavior owned it.
    pub fn remove_consideration(&mut self, id: ConsiderationId) -> Option<Consideration> {
        let index = self.considerations.iter().position(|c| c.id == id)?;
        Some(self.considerations.remove(index))
    }

    /// Score every consideration, in order.
    pub fn consideration_scores(
        &self,
        inputs: &[InputAxis],
        resolver: &dyn InputResolver,
        context: &EvaluationContext<'_>,
    ) -> curve_rules::Result<Vec<f64>> {
        self.considerations
            .iter()
            .map(|c| c.score(inputs, resolver, context))
            .collect()
    }

    /// Weighted, compensated product of all consideration scores.
    ///
    /// Fails if any consideration is unbound.
    pub fn score(
        &self,
        inputs: &[InputAxis],
        resolver: &dyn InputResolver,
        context: &EvaluationContext<'_>,
    ) -> curve_rules::Result<f64> {
        let scores = self.consideration_scores(inputs, resolver, context)?;
        Ok(compensated_product(self.weight, &scores))
    }
}
