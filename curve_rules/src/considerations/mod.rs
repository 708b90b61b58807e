//! Considerations - one input axis run through one response curve.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agents::EvaluationContext;
use crate::curves::ResponseCurve;
use crate::error::{Result, RulesError};
use crate::inputs::{InputAxis, InputAxisId, InputParameter};
use crate::resolver::InputResolver;

/// Unique identifier for considerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsiderationId(pub Uuid);

impl ConsiderationId {
    /// Create a new random consideration ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConsiderationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConsiderationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single scoring unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consideration {
    pub id: ConsiderationId,
    pub name: String,

    /// The axis this consideration reads. Cleared when the axis is deleted.
    pub input: Option<InputAxisId>,

    pub curve: ResponseCurve,

    #[serde(default)]
    pub parameters: Vec<InputParameter>,
}

impl Consideration {
    /// Create an unbound consideration with a default linear curve.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ConsiderationId::new(),
            name: name.into(),
            input: None,
            curve: ResponseCurve::default(),
            parameters: Vec::new(),
        }
    }

    /// Bind to an input axis.
    pub fn with_input(mut self, input: InputAxisId) -> Self {
        self.input = Some(input);
        self
    }

    /// Set the response curve.
    pub fn with_curve(mut self, curve: ResponseCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Add a parameter slot.
    pub fn with_parameter(mut self, parameter: InputParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Change the display name. Curve and input binding are untouched.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&InputParameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// Score this consideration in `context`.
    ///
    /// The bound axis is looked up in `inputs`, resolved to a raw value and
    /// normalized by the curve. Scoring an unbound consideration is an error.
    pub fn score(
        &self,
        inputs: &[InputAxis],
        resolver: &dyn InputResolver,
        context: &EvaluationContext<'_>,
    ) -> Result<f64> {
        let input = self.input.ok_or(RulesError::UnboundInput {
            consideration: self.id,
        })?;
        let axis = inputs
            .iter()
            .find(|axis| axis.id == input)
            .ok_or(RulesError::UnknownInput {
                consideration: self.id,
                input,
            })?;

        let raw = resolver.resolve(axis, context);
        Ok(self.curve.compute(raw))
    }
}

/// Combine consideration scores into a behavior score.
///
/// Uses a compensated product so that behaviors with many considerations are
/// not penalized merely for having more factors. An empty list yields
/// `weight`.
pub fn compensated_product(weight: f64, scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return weight;
    }

    let compensation = 1.0 - 1.0 / scores.len() as f64;
    scores.iter().fold(weight, |total, &score| {
        let modification = (1.0 - score) * compensation;
        total * (score + modification * score)
    })
}
