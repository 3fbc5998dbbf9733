use std::fmt;

use thiserror::Error;

/// The entity a validation rule was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Logic,
    Question,
    Group,
    Survey,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Logic => "logic",
            EntityKind::Question => "question",
            EntityKind::Group => "group",
            EntityKind::Survey => "survey",
        })
    }
}

/// The construction rule an entity broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    UnknownType,
    ReservedName,
    MissingRequired,
    AppearanceIncompatible,
    RepeatWithoutCount,
    InvalidValue,
    DuplicateName,
}

impl ValidationRule {
    /// Stable identifier for the rule.
    pub fn code(self) -> &'static str {
        match self {
            ValidationRule::UnknownType => "unknown_type",
            ValidationRule::ReservedName => "reserved_name",
            ValidationRule::MissingRequired => "missing_required",
            ValidationRule::AppearanceIncompatible => "appearance_incompatible",
            ValidationRule::RepeatWithoutCount => "repeat_without_count",
            ValidationRule::InvalidValue => "invalid_value",
            ValidationRule::DuplicateName => "duplicate_name",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValidationRule::UnknownType => "is not a known type",
            ValidationRule::ReservedName => "is a reserved name",
            ValidationRule::MissingRequired => "is required",
            ValidationRule::AppearanceIncompatible => "is not allowed for this type",
            ValidationRule::RepeatWithoutCount => "needs a repeat_count",
            ValidationRule::InvalidValue => "is not a valid value",
            ValidationRule::DuplicateName => "is already the name of another choice question",
        })
    }
}

/// Raised when an entity cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid {entity}{}: `{field}`{} {rule} ({})",
    describe_name(.name),
    describe_value(.value),
    .rule.code()
)]
pub struct ValidationError {
    pub entity: EntityKind,
    /// Name of the offending entity, when it got far enough to have one.
    pub name: Option<String>,
    pub field: &'static str,
    pub value: Option<String>,
    pub rule: ValidationRule,
}

impl ValidationError {
    pub fn new(entity: EntityKind, field: &'static str, rule: ValidationRule) -> Self {
        Self {
            entity,
            name: None,
            field,
            value: None,
            rule,
        }
    }

    pub fn with_name(mut self, name: Option<&str>) -> Self {
        if self.name.is_none() {
            self.name = name.map(str::to_string);
        }
        self
    }

    pub fn with_value(mut self, value: impl fmt::Display) -> Self {
        self.value = Some(value.to_string());
        self
    }
}

fn describe_name(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" `{}`", name),
        None => String::new(),
    }
}

fn describe_value(value: &Option<String>) -> String {
    match value {
        Some(value) => format!(" value {:?}", value),
        None => String::new(),
    }
}

/// Structural problems in a tabular source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceFormatError {
    #[error("workbook has no `{sheet}` sheet")]
    MissingSheet { sheet: String },
    #[error("survey row {row} has no `type`")]
    MissingType { row: usize },
    #[error("survey row {row}: cannot split type `{token}` into a type and a list name")]
    MalformedType { row: usize, token: String },
    #[error("survey row {row}: `{token}` does not close the open `begin {open}`")]
    MismatchedEnd {
        row: usize,
        token: String,
        open: String,
    },
    #[error("settings sheet has no rows")]
    EmptySettings,
    #[error("settings sheet has no `{column}`")]
    MissingSetting { column: &'static str },
}

/// Umbrella error for reading and writing surveys.
#[derive(Debug, Error)]
pub enum XlsFormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("survey row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: ValidationError,
    },
    #[error(transparent)]
    SourceFormat(#[from] SourceFormatError),
    #[error("sheet access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl XlsFormError {
    /// The validation failure behind this error, if any.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            XlsFormError::Validation(err) | XlsFormError::InvalidRow { source: err, .. } => {
                Some(err)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_entity_field_value_and_rule() {
        let err = ValidationError::new(EntityKind::Question, "name", ValidationRule::ReservedName)
            .with_name(Some("SELECT"))
            .with_value("SELECT");
        assert_eq!(
            err.to_string(),
            "invalid question `SELECT`: `name` value \"SELECT\" is a reserved name (reserved_name)"
        );
    }

    #[test]
    fn with_name_keeps_the_first_name() {
        let err = ValidationError::new(EntityKind::Group, "items", ValidationRule::InvalidValue)
            .with_name(Some("inner"))
            .with_name(Some("outer"));
        assert_eq!(err.name.as_deref(), Some("inner"));
    }
}
