use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::spec::types::LogicType;
use crate::validate::Validator;

/// Flow control or constraint attached to a question or group.
///
/// `message` only survives construction for `constraint` logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LogicDraft")]
pub struct Logic {
    #[serde(rename = "type")]
    pub(crate) kind: LogicType,
    pub(crate) expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
}

impl Logic {
    pub fn new(kind: LogicType, expression: impl Into<String>) -> Result<Self, ValidationError> {
        Validator::standard().logic(LogicDraft {
            kind: Some(kind.as_str().to_string()),
            expression: Some(expression.into()),
            message: None,
        })
    }

    /// Constraint logic with the message shown when it fails.
    pub fn constraint(
        expression: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Validator::standard().logic(LogicDraft {
            kind: Some(LogicType::Constraint.as_str().to_string()),
            expression: Some(expression.into()),
            message: Some(message.into()),
        })
    }

    pub fn kind(&self) -> LogicType {
        self.kind
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Unvalidated logic as read from JSON, YAML or a table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LogicDraft {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Logic> for LogicDraft {
    fn from(logic: Logic) -> Self {
        Self {
            kind: Some(logic.kind.as_str().to_string()),
            expression: Some(logic.expression),
            message: logic.message,
        }
    }
}

impl TryFrom<LogicDraft> for Logic {
    type Error = ValidationError;

    fn try_from(draft: LogicDraft) -> Result<Self, Self::Error> {
        Validator::standard().logic(draft)
    }
}
