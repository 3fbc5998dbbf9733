use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::spec::group::{Item, ItemDraft};
use crate::validate::Validator;

/// Root of a survey definition: a named, labelled, ordered item tree.
///
/// The tabular, JSON and YAML entry points live in [`crate::document`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SurveyDraft")]
pub struct Survey {
    pub(crate) name: String,
    pub(crate) label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) version: Option<String>,
    pub(crate) items: Vec<Item>,
}

impl Survey {
    pub fn builder(name: impl Into<String>, label: impl Into<String>) -> SurveyDraft {
        SurveyDraft::new(name, label)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of questions in the whole tree.
    pub fn question_count(&self) -> usize {
        fn count(items: &[Item]) -> usize {
            items
                .iter()
                .map(|item| match item {
                    Item::Question(_) => 1,
                    Item::Group(group) => count(group.items()),
                })
                .sum()
        }
        count(&self.items)
    }
}

/// Unvalidated survey, the document shape of the JSON and YAML forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SurveyDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemDraft>,
}

impl SurveyDraft {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn item(mut self, item: impl Into<ItemDraft>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn items<I>(mut self, items: impl IntoIterator<Item = I>) -> Self
    where
        I: Into<ItemDraft>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<Survey, ValidationError> {
        Validator::standard().survey(self)
    }
}

impl From<Survey> for SurveyDraft {
    fn from(survey: Survey) -> Self {
        Self {
            name: Some(survey.name),
            label: Some(survey.label),
            version: survey.version,
            items: survey.items.into_iter().map(ItemDraft::from).collect(),
        }
    }
}

impl TryFrom<SurveyDraft> for Survey {
    type Error = ValidationError;

    fn try_from(draft: SurveyDraft) -> Result<Self, Self::Error> {
        Validator::standard().survey(draft)
    }
}
