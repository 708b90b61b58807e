//! Input parameters - named configurable slots attached to considerations.

use serde::{Deserialize, Serialize};

/// A parameter definition or a bound parameter value.
///
/// Schema variants describe what a slot accepts; value variants carry the
/// choice made for one consideration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputParameter {
    /// Slot accepting one of a fixed list of names.
    Enumeration {
        name: String,
        valid_values: Vec<String>,
    },
    /// Slot accepting a number within a range.
    Numeric {
        name: String,
        #[serde(with = "crate::real")]
        min: f64,
        #[serde(with = "crate::real")]
        max: f64,
        #[serde(with = "crate::real")]
        default: f64,
    },
    /// A chosen enumeration entry.
    EnumerationValue { name: String, value: String },
    /// A chosen number.
    NumericValue {
        name: String,
        #[serde(with = "crate::real")]
        value: f64,
    },
}

/// The readable current value of a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue<'a> {
    Text(&'a str),
    Number(f64),
    /// Schema slot with no value chosen.
    Unset,
}

impl InputParameter {
    pub fn enumeration(
        name: impl Into<String>,
        valid_values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        InputParameter::Enumeration {
            name: name.into(),
            valid_values: valid_values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn numeric(name: impl Into<String>, min: f64, max: f64, default: f64) -> Self {
        InputParameter::Numeric {
            name: name.into(),
            min,
            max,
            default,
        }
    }

    /// The stable name of the slot.
    pub fn name(&self) -> &str {
        match self {
            InputParameter::Enumeration { name, .. }
            | InputParameter::Numeric { name, .. }
            | InputParameter::EnumerationValue { name, .. }
            | InputParameter::NumericValue { name, .. } => name,
        }
    }

    /// The current value. Numeric schemas report their default.
    pub fn value(&self) -> ParameterValue<'_> {
        match self {
            InputParameter::Enumeration { .. } => ParameterValue::Unset,
            InputParameter::Numeric { default, .. } => ParameterValue::Number(*default),
            InputParameter::EnumerationValue { value, .. } => ParameterValue::Text(value),
            InputParameter::NumericValue { value, .. } => ParameterValue::Number(*value),
        }
    }

    /// Bind a numeric schema to a value, clamped into its range.
    ///
    /// Returns `None` for non-numeric slots.
    pub fn bind_numeric(&self, value: f64) -> Option<InputParameter> {
        match self {
            InputParameter::Numeric { name, min, max, .. } => Some(InputParameter::NumericValue {
                name: name.clone(),
                value: value.max(*min).min(*max),
            }),
            _ => None,
        }
    }

    /// Bind an enumeration schema to one of its valid values.
    ///
    /// Returns `None` if the slot is not an enumeration or `value` is not listed.
    pub fn bind_enumeration(&self, value: &str) -> Option<InputParameter> {
        match self {
            InputParameter::Enumeration { name, valid_values } if valid_values.iter().any(|v| v == value) => {
                Some(InputParameter::EnumerationValue {
                    name: name.clone(),
                    value: value.to_string(),
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_names_and_values() {
        let schema = InputParameter::numeric("Range", 0.0, 100.0, 25.0);
        assert_eq!(schema.name(), "Range");
        assert_eq!(schema.value(), ParameterValue::Number(25.0));

        let stance = InputParameter::enumeration("Stance", ["Aggressive", "Defensive"]);
        assert_eq!(stance.value(), ParameterValue::Unset);
    }

    #[test]
    fn test_bind_numeric_clamps() {
        let schema = InputParameter::numeric("Range", 0.0, 100.0, 25.0);
        let bound = schema.bind_numeric(250.0).unwrap();
        assert_eq!(bound.name(), "Range");
        assert_eq!(bound.value(), ParameterValue::Number(100.0));

        let stance = InputParameter::enumeration("Stance", ["Aggressive"]);
        assert!(stance.bind_numeric(1.0).is_none());
    }

    #[test]
    fn test_bind_enumeration() {
        let stance = InputParameter::enumeration("Stance", ["Aggressive", "Defensive"]);
        let bound = stance.bind_enumeration("Defensive").unwrap();
        assert_eq!(bound.value(), ParameterValue::Text("Defensive"));
        assert!(stance.bind_enumeration("Sleepy").is_none());
    }
}
