use std::collections::BTreeSet;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{EntityKind, ValidationError, ValidationRule};
use crate::spec::group::{GroupDraft, Item, ItemDraft, QuestionGroup, RepeatCount};
use crate::spec::logic::{Logic, LogicDraft};
use crate::spec::question::{Question, QuestionDraft};
use crate::spec::choice::Choice;
use crate::spec::survey::{Survey, SurveyDraft};
use crate::spec::types::{
    AppearanceAttribute, AppearanceTarget, GroupType, LogicType, QuestionType,
};
use crate::tables::CompatTables;

/// Question fields whose legality depends on the question type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionalField {
    Calculation,
    Choices,
    AllowOther,
    AccuracyThreshold,
    File,
    Range,
}

impl ConditionalField {
    pub fn column(self) -> &'static str {
        match self {
            ConditionalField::Calculation => "calculation",
            ConditionalField::Choices => "choices",
            ConditionalField::AllowOther => "allow_other",
            ConditionalField::AccuracyThreshold => "accuracyThreshold",
            ConditionalField::File => "file",
            ConditionalField::Range => "range",
        }
    }

    fn is_set(self, draft: &QuestionDraft) -> bool {
        match self {
            ConditionalField::Calculation => draft.calculation.is_some(),
            ConditionalField::Choices => draft.choices.is_some(),
            ConditionalField::AllowOther => draft.allow_other.is_some(),
            ConditionalField::AccuracyThreshold => draft.accuracy_threshold.is_some(),
            ConditionalField::File => draft.file.is_some(),
            ConditionalField::Range => draft.range.is_some(),
        }
    }

    fn clear(self, draft: &mut QuestionDraft) {
        match self {
            ConditionalField::Calculation => draft.calculation = None,
            ConditionalField::Choices => draft.choices = None,
            ConditionalField::AllowOther => draft.allow_other = None,
            ConditionalField::AccuracyThreshold => draft.accuracy_threshold = None,
            ConditionalField::File => draft.file = None,
            ConditionalField::Range => draft.range = None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// Where a conditional field is legal and whether it must be present there.
/// Outside `types` the field is cleared.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: ConditionalField,
    pub types: &'static [QuestionType],
    pub presence: Presence,
}

pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: ConditionalField::Calculation,
        types: &[QuestionType::Calculate],
        presence: Presence::Required,
    },
    FieldRule {
        field: ConditionalField::Choices,
        types: QuestionType::WITH_CHOICES,
        presence: Presence::Required,
    },
    FieldRule {
        field: ConditionalField::AllowOther,
        types: QuestionType::WITH_CHOICES,
        presence: Presence::Optional,
    },
    FieldRule {
        field: ConditionalField::AccuracyThreshold,
        types: QuestionType::GEO,
        presence: Presence::Optional,
    },
    FieldRule {
        field: ConditionalField::File,
        types: QuestionType::FROM_FILE,
        presence: Presence::Required,
    },
    FieldRule {
        field: ConditionalField::Range,
        types: &[QuestionType::Range],
        presence: Presence::Required,
    },
];

/// Rules that apply to `kind`, split by presence.
pub fn rules_for(kind: QuestionType) -> impl Iterator<Item = (ConditionalField, Option<Presence>)> {
    FIELD_RULES.iter().map(move |rule| {
        let presence = rule.types.contains(&kind).then_some(rule.presence);
        (rule.field, presence)
    })
}

/// Turns drafts into entities. Every construction path (builders, serde,
/// decoded table rows) ends here.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'t> {
    tables: &'t CompatTables,
}

impl Validator<'static> {
    pub fn standard() -> Self {
        Self {
            tables: CompatTables::standard(),
        }
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'t> Validator<'t> {
    pub fn new(tables: &'t CompatTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'t CompatTables {
        self.tables
    }

    pub fn logic(&self, draft: LogicDraft) -> Result<Logic, ValidationError> {
        let kind: LogicType = parse_token(EntityKind::Logic, "type", draft.kind.as_deref())?;
        let expression = draft.expression.ok_or_else(|| {
            ValidationError::new(
                EntityKind::Logic,
                "expression",
                ValidationRule::MissingRequired,
            )
        })?;
        let message = match kind {
            LogicType::Constraint => draft.message,
            _ => None,
        };
        Ok(Logic {
            kind,
            expression,
            message,
        })
    }

    pub fn question(&self, draft: QuestionDraft) -> Result<Question, ValidationError> {
        let name = draft.name.clone();
        self.question_inner(draft)
            .map_err(|err| err.with_name(name.as_deref()))
    }

    fn question_inner(&self, mut draft: QuestionDraft) -> Result<Question, ValidationError> {
        const ENTITY: EntityKind = EntityKind::Question;

        // coercion
        let kind: QuestionType = parse_token(ENTITY, "type", draft.kind.as_deref())?;
        let name = required_name(ENTITY, draft.name.take())?;
        let label = blank_to_empty(required_text(ENTITY, "label", draft.label.take())?);
        let appearance = parse_optional(
            ENTITY,
            "appearance_attributes",
            draft.appearance_attributes.as_deref(),
        )?;
        let logics = self.logics(draft.logics.take())?;
        draft.default = non_blank(draft.default);
        draft.hint = non_blank(draft.hint);
        draft.calculation = non_blank(draft.calculation);
        draft.file = non_blank(draft.file);
        draft.choices = draft.choices.map(|choices| {
            choices
                .into_iter()
                .map(|choice| {
                    Choice::new(blank_to_empty(choice.value), blank_to_empty(choice.label))
                })
                .collect()
        });
        if let Some(threshold) = draft.accuracy_threshold
            && !threshold.is_finite()
        {
            return Err(
                ValidationError::new(ENTITY, "accuracyThreshold", ValidationRule::InvalidValue)
                    .with_value(threshold),
            );
        }

        // per-type field table
        for (field, presence) in rules_for(kind) {
            match presence {
                Some(Presence::Required) if !field.is_set(&draft) => {
                    return Err(ValidationError::new(
                        ENTITY,
                        field.column(),
                        ValidationRule::MissingRequired,
                    )
                    .with_value(kind));
                }
                Some(_) => {}
                None => field.clear(&mut draft),
            }
        }

        let mut parameters = draft.parameters.take().unwrap_or_default();
        if let Some(range) = draft.range {
            for (key, bound) in [("start", range.start), ("end", range.end), ("step", range.step)] {
                if !bound.is_finite() {
                    return Err(ValidationError::new(ENTITY, "range", ValidationRule::InvalidValue)
                        .with_value(bound));
                }
                parameters.insert(key.to_string(), Value::from(bound));
            }
        }

        // cross-field
        if let Some(appearance) = appearance {
            self.check_appearance(ENTITY, appearance, AppearanceTarget::Question(kind))?;
        }
        if self.tables.is_reserved(&name) {
            return Err(
                ValidationError::new(ENTITY, "name", ValidationRule::ReservedName)
                    .with_value(&name),
            );
        }

        Ok(Question {
            kind,
            name,
            label,
            required: draft.required,
            default: draft.default,
            hint: draft.hint,
            logics,
            calculation: draft.calculation,
            range: draft.range,
            accuracy_threshold: draft.accuracy_threshold,
            choices: draft.choices,
            allow_other: draft.allow_other,
            file: draft.file,
            parameters: (!parameters.is_empty()).then_some(parameters),
            appearance_attributes: appearance,
        })
    }

    pub fn group(&self, mut draft: GroupDraft) -> Result<QuestionGroup, ValidationError> {
        let items = std::mem::take(&mut draft.items)
            .into_iter()
            .map(|item| self.item(item))
            .collect::<Result<Vec<_>, _>>()?;
        self.seal_group(draft, items)
    }

    /// Validates a group header around items that are already valid.
    pub fn seal_group(
        &self,
        draft: GroupDraft,
        items: Vec<Item>,
    ) -> Result<QuestionGroup, ValidationError> {
        let name = draft.name.clone();
        self.group_inner(draft, items)
            .map_err(|err| err.with_name(name.as_deref()))
    }

    fn group_inner(
        &self,
        draft: GroupDraft,
        items: Vec<Item>,
    ) -> Result<QuestionGroup, ValidationError> {
        const ENTITY: EntityKind = EntityKind::Group;

        let mut kind: GroupType = match draft.kind.as_deref() {
            None => GroupType::default(),
            Some(token) => parse_token(ENTITY, "type", Some(token))?,
        };
        let name = required_name(ENTITY, draft.name)?;
        let label = blank_to_empty(required_text(ENTITY, "label", draft.label)?);
        let logics = self.logics(draft.logics)?;
        let appearance = parse_optional(
            ENTITY,
            "appearance_attributes",
            draft.appearance_attributes.as_deref(),
        )?;
        let repeat_count = normalize_repeat_count(draft.repeat_count);

        match (&repeat_count, kind) {
            (Some(_), _) => kind = GroupType::Repeat,
            (None, GroupType::Repeat) => {
                return Err(ValidationError::new(
                    ENTITY,
                    "repeat_count",
                    ValidationRule::RepeatWithoutCount,
                ));
            }
            (None, GroupType::Group) => {}
        }
        if let Some(appearance) = appearance {
            self.check_appearance(ENTITY, appearance, AppearanceTarget::GroupBegin)?;
        }

        Ok(QuestionGroup {
            kind,
            name,
            label,
            items,
            logics,
            repeat_count,
            appearance_attributes: appearance,
        })
    }

    pub fn item(&self, draft: ItemDraft) -> Result<Item, ValidationError> {
        match draft {
            ItemDraft::Question(question) => self.question(question).map(Item::Question),
            ItemDraft::Group(group) => self.group(group).map(Item::Group),
        }
    }

    pub fn survey(&self, mut draft: SurveyDraft) -> Result<Survey, ValidationError> {
        let items = std::mem::take(&mut draft.items)
            .into_iter()
            .map(|item| self.item(item))
            .collect::<Result<Vec<_>, _>>()?;
        self.seal_survey(draft, items)
    }

    /// Validates the survey header around items that are already valid.
    pub fn seal_survey(
        &self,
        draft: SurveyDraft,
        items: Vec<Item>,
    ) -> Result<Survey, ValidationError> {
        const ENTITY: EntityKind = EntityKind::Survey;
        let survey_name = draft.name.clone();
        let name = required_text(ENTITY, "name", draft.name)
            .and_then(|name| non_empty(ENTITY, "name", name))
            .map_err(|err| err.with_name(survey_name.as_deref()))?;
        let label = required_text(ENTITY, "label", draft.label)
            .map(blank_to_empty)
            .map_err(|err| err.with_name(survey_name.as_deref()))?;
        unique_choice_names(&items, &mut BTreeSet::new())?;
        Ok(Survey {
            name,
            label,
            version: non_blank(draft.version),
            items,
        })
    }

    fn logics(&self, drafts: Option<Vec<LogicDraft>>) -> Result<Option<Vec<Logic>>, ValidationError> {
        let logics = drafts
            .unwrap_or_default()
            .into_iter()
            .map(|draft| self.logic(draft))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((!logics.is_empty()).then_some(logics))
    }

    fn check_appearance(
        &self,
        entity: EntityKind,
        appearance: AppearanceAttribute,
        target: AppearanceTarget,
    ) -> Result<(), ValidationError> {
        if self.tables.allows(appearance, target) {
            return Ok(());
        }
        Err(ValidationError::new(
            entity,
            "appearance_attributes",
            ValidationRule::AppearanceIncompatible,
        )
        .with_value(format!("{} on {}", appearance, target)))
    }
}

fn parse_token<T: FromStr>(
    entity: EntityKind,
    field: &'static str,
    token: Option<&str>,
) -> Result<T, ValidationError> {
    let token =
        token.ok_or_else(|| ValidationError::new(entity, field, ValidationRule::MissingRequired))?;
    token
        .trim()
        .parse()
        .map_err(|_| ValidationError::new(entity, field, ValidationRule::UnknownType).with_value(token))
}

fn parse_optional<T: FromStr>(
    entity: EntityKind,
    field: &'static str,
    token: Option<&str>,
) -> Result<Option<T>, ValidationError> {
    match token.map(str::trim) {
        None | Some("") => Ok(None),
        Some(token) => token
            .parse()
            .map(Some)
            .map_err(|_| ValidationError::new(entity, field, ValidationRule::InvalidValue).with_value(token)),
    }
}

fn required_text(
    entity: EntityKind,
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    value.ok_or_else(|| ValidationError::new(entity, field, ValidationRule::MissingRequired))
}

fn non_empty(
    entity: EntityKind,
    field: &'static str,
    value: String,
) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(entity, field, ValidationRule::MissingRequired));
    }
    Ok(value)
}

/// Names double as column and choice list identifiers in the tabular form.
fn required_name(entity: EntityKind, value: Option<String>) -> Result<String, ValidationError> {
    let name = non_empty(entity, "name", required_text(entity, "name", value)?)?;
    if name.chars().any(char::is_whitespace) {
        return Err(
            ValidationError::new(entity, "name", ValidationRule::InvalidValue).with_value(&name),
        );
    }
    Ok(name)
}

/// Optional text is absent when it holds only whitespace, as a blank cell does.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Required text holding only whitespace reads back from a blank cell as `""`.
fn blank_to_empty(text: String) -> String {
    if text.trim().is_empty() {
        String::new()
    } else {
        text
    }
}

/// Choice lists are keyed by question name in the choices sheet, so two
/// choice questions anywhere in the tree cannot share a name.
fn unique_choice_names<'a>(
    items: &'a [Item],
    seen: &mut BTreeSet<&'a str>,
) -> Result<(), ValidationError> {
    for item in items {
        match item {
            Item::Group(group) => unique_choice_names(group.items(), seen)?,
            Item::Question(question)
                if QuestionType::WITH_CHOICES.contains(&question.kind())
                    && !seen.insert(question.name()) =>
            {
                return Err(ValidationError::new(
                    EntityKind::Question,
                    "name",
                    ValidationRule::DuplicateName,
                )
                .with_value(question.name())
                .with_name(Some(question.name())));
            }
            Item::Question(_) => {}
        }
    }
    Ok(())
}

fn normalize_repeat_count(count: Option<RepeatCount>) -> Option<RepeatCount> {
    match count? {
        RepeatCount::Count(count) => Some(RepeatCount::Count(count)),
        RepeatCount::Expression(expression) => {
            let trimmed = expression.trim();
            if trimmed.is_empty() {
                None
            } else if let Ok(count) = trimmed.parse::<u64>() {
                Some(RepeatCount::Count(count))
            } else {
                Some(RepeatCount::Expression(expression))
            }
        }
    }
}
