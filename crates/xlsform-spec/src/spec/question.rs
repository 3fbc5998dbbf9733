use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::spec::choice::{Choice, Range};
use crate::spec::logic::{Logic, LogicDraft};
use crate::spec::types::{AppearanceAttribute, QuestionType};
use crate::validate::Validator;

/// A single answerable item of a survey.
///
/// Which optional fields may be set depends on `type`; see
/// [`crate::validate::FIELD_RULES`]. Values are only obtainable through the
/// validator, so every `Question` satisfies those rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuestionDraft")]
pub struct Question {
    #[serde(rename = "type")]
    pub(crate) kind: QuestionType,
    pub(crate) name: String,
    pub(crate) label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) logics: Option<Vec<Logic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) calculation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) range: Option<Range>,
    #[serde(rename = "accuracyThreshold", skip_serializing_if = "Option::is_none")]
    pub(crate) accuracy_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) choices: Option<Vec<Choice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) allow_other: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parameters: Option<BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) appearance_attributes: Option<AppearanceAttribute>,
}

impl Question {
    /// Starts a draft; finish it with [`QuestionDraft::build`].
    pub fn builder(
        kind: QuestionType,
        name: impl Into<String>,
        label: impl Into<String>,
    ) -> QuestionDraft {
        QuestionDraft::new(kind, name, label)
    }

    pub fn kind(&self) -> QuestionType {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn required(&self) -> Option<bool> {
        self.required
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn logics(&self) -> &[Logic] {
        self.logics.as_deref().unwrap_or_default()
    }

    pub fn calculation(&self) -> Option<&str> {
        self.calculation.as_deref()
    }

    pub fn range(&self) -> Option<&Range> {
        self.range.as_ref()
    }

    pub fn accuracy_threshold(&self) -> Option<f64> {
        self.accuracy_threshold
    }

    pub fn choices(&self) -> Option<&[Choice]> {
        self.choices.as_deref()
    }

    pub fn allow_other(&self) -> Option<bool> {
        self.allow_other
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn parameters(&self) -> Option<&BTreeMap<String, Value>> {
        self.parameters.as_ref()
    }

    pub fn appearance(&self) -> Option<AppearanceAttribute> {
        self.appearance_attributes
    }
}

/// Unvalidated question: the shape serde reads and builders fill in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuestionDraft {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logics: Option<Vec<LogicDraft>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    #[serde(
        rename = "accuracyThreshold",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub accuracy_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_other: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance_attributes: Option<String>,
}

impl QuestionDraft {
    pub fn new(kind: QuestionType, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.as_str().to_string()),
            name: Some(name.into()),
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn logic(mut self, logic: Logic) -> Self {
        self.logics.get_or_insert_with(Vec::new).push(logic.into());
        self
    }

    pub fn calculation(mut self, calculation: impl Into<String>) -> Self {
        self.calculation = Some(calculation.into());
        self
    }

    pub fn range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    pub fn accuracy_threshold(mut self, threshold: f64) -> Self {
        self.accuracy_threshold = Some(threshold);
        self
    }

    pub fn choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices
            .get_or_insert_with(Vec::new)
            .push(Choice::new(value, label));
        self
    }

    pub fn choices(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.choices
            .get_or_insert_with(Vec::new)
            .extend(choices);
        self
    }

    pub fn allow_other(mut self, allow_other: bool) -> Self {
        self.allow_other = Some(allow_other);
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn appearance(mut self, appearance: AppearanceAttribute) -> Self {
        self.appearance_attributes = Some(appearance.as_str().to_string());
        self
    }

    /// Validates the draft with the process-wide tables.
    pub fn build(self) -> Result<Question, ValidationError> {
        Validator::standard().question(self)
    }
}

impl From<Question> for QuestionDraft {
    fn from(question: Question) -> Self {
        Self {
            kind: Some(question.kind.as_str().to_string()),
            name: Some(question.name),
            label: Some(question.label),
            required: question.required,
            default: question.default,
            hint: question.hint,
            logics: question
                .logics
                .map(|logics| logics.into_iter().map(LogicDraft::from).collect()),
            calculation: question.calculation,
            range: question.range,
            accuracy_threshold: question.accuracy_threshold,
            choices: question.choices,
            allow_other: question.allow_other,
            file: question.file,
            parameters: question.parameters,
            appearance_attributes: question
                .appearance_attributes
                .map(|appearance| appearance.as_str().to_string()),
        }
    }
}

impl TryFrom<QuestionDraft> for Question {
    type Error = ValidationError;

    fn try_from(draft: QuestionDraft) -> Result<Self, Self::Error> {
        Validator::standard().question(draft)
    }
}
