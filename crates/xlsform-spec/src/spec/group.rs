use std::fmt;

use schemars::JsonSchema;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::spec::logic::{Logic, LogicDraft};
use crate::spec::question::{Question, QuestionDraft};
use crate::spec::types::{AppearanceAttribute, GroupType};
use crate::validate::Validator;

/// Number of repetitions of a repeat group: a literal count or an expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RepeatCount {
    Count(u64),
    Expression(String),
}

impl From<u64> for RepeatCount {
    fn from(count: u64) -> Self {
        RepeatCount::Count(count)
    }
}

impl From<&str> for RepeatCount {
    fn from(expression: &str) -> Self {
        RepeatCount::Expression(expression.to_string())
    }
}

impl From<String> for RepeatCount {
    fn from(expression: String) -> Self {
        RepeatCount::Expression(expression)
    }
}

impl fmt::Display for RepeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatCount::Count(count) => count.fmt(f),
            RepeatCount::Expression(expression) => f.write_str(expression),
        }
    }
}

/// Ordered bundle of questions and nested groups, optionally repeating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GroupDraft")]
pub struct QuestionGroup {
    #[serde(rename = "type")]
    pub(crate) kind: GroupType,
    pub(crate) name: String,
    pub(crate) label: String,
    pub(crate) items: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) logics: Option<Vec<Logic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) repeat_count: Option<RepeatCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) appearance_attributes: Option<AppearanceAttribute>,
}

impl QuestionGroup {
    pub fn builder(name: impl Into<String>, label: impl Into<String>) -> GroupDraft {
        GroupDraft::new(name, label)
    }

    pub fn kind(&self) -> GroupType {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn logics(&self) -> &[Logic] {
        self.logics.as_deref().unwrap_or_default()
    }

    pub fn repeat_count(&self) -> Option<&RepeatCount> {
        self.repeat_count.as_ref()
    }

    pub fn appearance(&self) -> Option<AppearanceAttribute> {
        self.appearance_attributes
    }
}

/// Unvalidated group. `items` may hold drafts or already validated entities
/// converted back into drafts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GroupDraft {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemDraft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logics: Option<Vec<LogicDraft>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_count: Option<RepeatCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance_attributes: Option<String>,
}

impl GroupDraft {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn kind(mut self, kind: GroupType) -> Self {
        self.kind = Some(kind.as_str().to_string());
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

    pub fn logic(mut self, logic: Logic) -> Self {
        self.logics.get_or_insert_with(Vec::new).push(logic.into());
        self
    }

    pub fn repeat_count(mut self, count: impl Into<RepeatCount>) -> Self {
        self.repeat_count = Some(count.into());
        self
    }

    pub fn appearance(mut self, appearance: AppearanceAttribute) -> Self {
        self.appearance_attributes = Some(appearance.as_str().to_string());
        self
    }

    pub fn build(self) -> Result<QuestionGroup, ValidationError> {
        Validator::standard().group(self)
    }
}

impl From<QuestionGroup> for GroupDraft {
    fn from(group: QuestionGroup) -> Self {
        Self {
            kind: Some(group.kind.as_str().to_string()),
            name: Some(group.name),
            label: Some(group.label),
            items: group.items.into_iter().map(ItemDraft::from).collect(),
            logics: group
                .logics
                .map(|logics| logics.into_iter().map(LogicDraft::from).collect()),
            repeat_count: group.repeat_count,
            appearance_attributes: group
                .appearance_attributes
                .map(|appearance| appearance.as_str().to_string()),
        }
    }
}

impl TryFrom<GroupDraft> for QuestionGroup {
    type Error = ValidationError;

    fn try_from(draft: GroupDraft) -> Result<Self, Self::Error> {
        Validator::standard().group(draft)
    }
}

/// A node of the survey tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Question(Question),
    Group(QuestionGroup),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Question(question) => question.name(),
            Item::Group(group) => group.name(),
        }
    }

    pub fn as_question(&self) -> Option<&Question> {
        match self {
            Item::Question(question) => Some(question),
            Item::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&QuestionGroup> {
        match self {
            Item::Group(group) => Some(group),
            Item::Question(_) => None,
        }
    }
}

impl From<Question> for Item {
    fn from(question: Question) -> Self {
        Item::Question(question)
    }
}

impl From<QuestionGroup> for Item {
    fn from(group: QuestionGroup) -> Self {
        Item::Group(group)
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let draft = ItemDraft::deserialize(deserializer)?;
        Validator::standard()
            .item(draft)
            .map_err(de::Error::custom)
    }
}

/// Unvalidated tree node.
///
/// A map is read as a group when it has `items`, a group `type`, or a
/// `repeat_count` without any `type`; otherwise it is read as a question.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum ItemDraft {
    Group(GroupDraft),
    Question(QuestionDraft),
}

impl ItemDraft {
    fn looks_like_group(value: &Value) -> bool {
        let Some(map) = value.as_object() else {
            return false;
        };
        if map.contains_key("items") {
            return true;
        }
        match map.get("type").and_then(Value::as_str) {
            Some(kind) => kind.parse::<GroupType>().is_ok(),
            None => map.contains_key("repeat_count"),
        }
    }
}

impl<'de> Deserialize<'de> for ItemDraft {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if Self::looks_like_group(&value) {
            serde_json::from_value(value)
                .map(ItemDraft::Group)
                .map_err(de::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(ItemDraft::Question)
                .map_err(de::Error::custom)
        }
    }
}

impl From<QuestionDraft> for ItemDraft {
    fn from(draft: QuestionDraft) -> Self {
        ItemDraft::Question(draft)
    }
}

impl From<GroupDraft> for ItemDraft {
    fn from(draft: GroupDraft) -> Self {
        ItemDraft::Group(draft)
    }
}

impl From<Question> for ItemDraft {
    fn from(question: Question) -> Self {
        ItemDraft::Question(question.into())
    }
}

impl From<QuestionGroup> for ItemDraft {
    fn from(group: QuestionGroup) -> Self {
        ItemDraft::Group(group.into())
    }
}

impl From<Item> for ItemDraft {
    fn from(item: Item) -> Self {
        match item {
            Item::Question(question) => question.into(),
            Item::Group(group) => group.into(),
        }
    }
}
