//! Errors raised while scoring.

use thiserror::Error;

use crate::considerations::ConsiderationId;
use crate::inputs::InputAxisId;

/// Precondition failures when scoring a consideration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("consideration {consideration} has no input axis bound")]
    UnboundInput { consideration: ConsiderationId },

    #[error("consideration {consideration} references unknown input axis {input}")]
    UnknownInput {
        consideration: ConsiderationId,
        input: InputAxisId,
    },
}

pub type Result<T> = std::result::Result<T, RulesError>;
