use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{EntityKind, SourceFormatError, ValidationError, ValidationRule, XlsFormError};
use crate::sheet::{Row, Table, Workbook, non_blank};
use crate::spec::choice::Choice;
use crate::spec::group::{GroupDraft, Item, RepeatCount};
use crate::spec::question::QuestionDraft;
use crate::spec::survey::{Survey, SurveyDraft};
use crate::validate::Validator;

/// Columns the decoder reads from the survey sheet.
pub const SURVEY_COLUMNS: &[&str] = &[
    "type",
    "name",
    "label",
    "required",
    "default",
    "hint",
    "logics",
    "calculation",
    "range",
    "accuracyThreshold",
    "allow_other",
    "file",
    "parameters",
    "appearance_attributes",
    "repeat_count",
];

const OR_OTHER: &str = "or_other";

/// What a survey row stands for, judged from its `type` cell.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RowKind<'a> {
    Begin(Option<&'a str>),
    End(&'a str),
    Question,
}

/// `begin`/`end` markers: `begin group`, `begin_repeat`, `end group`.
/// A bare `begin` opens a plain group; a bare `end` is the metadata question.
fn classify(type_cell: &str) -> RowKind<'_> {
    let mut words = type_cell.split_whitespace();
    let first = words.next().unwrap_or_default();
    let second = words.next();
    match (first, second) {
        ("begin", kind) => RowKind::Begin(kind),
        ("end", Some(kind)) => RowKind::End(kind),
        _ => {
            if let Some(kind) = first.strip_prefix("begin_") {
                RowKind::Begin(Some(kind))
            } else if let Some(kind) = first.strip_prefix("end_") {
                RowKind::End(kind)
            } else {
                RowKind::Question
            }
        }
    }
}

/// Choice lists keyed by list name, in sheet order.
fn choice_lists(choices: &Table) -> BTreeMap<String, Vec<Choice>> {
    let mut lists: BTreeMap<String, Vec<Choice>> = BTreeMap::new();
    for (index, row) in choices.rows().iter().enumerate() {
        let Some(list) = row.get("list_name") else {
            debug!(row = index + 1, "choices row without list_name skipped");
            continue;
        };
        lists.entry(list.clone()).or_default().push(Choice::new(
            row.get("name").cloned().unwrap_or_default(),
            row.get("label").cloned().unwrap_or_default(),
        ));
    }
    lists
}

/// A type cell split into its parts.
#[derive(Debug, PartialEq)]
struct TypeCell<'a> {
    root: &'a str,
    list: Option<&'a str>,
    or_other: bool,
}

fn split_type(row: usize, type_cell: &str) -> Result<TypeCell<'_>, SourceFormatError> {
    let words: Vec<&str> = type_cell.split_whitespace().collect();
    let malformed = || SourceFormatError::MalformedType {
        row,
        token: type_cell.to_string(),
    };
    let Some(&root) = words.first() else {
        return Err(SourceFormatError::MissingType { row });
    };

    let links_list = ["rank", "select_one", "select_multiple"]
        .iter()
        .any(|prefix| root.starts_with(prefix))
        && !root.contains("from_file");
    if links_list {
        return match words.as_slice() {
            [_, list] => Ok(TypeCell {
                root,
                list: Some(*list),
                or_other: false,
            }),
            [_, list, OR_OTHER] => Ok(TypeCell {
                root,
                list: Some(*list),
                or_other: true,
            }),
            _ => Err(malformed()),
        };
    }
    match words.as_slice() {
        [_] => Ok(TypeCell {
            root,
            list: None,
            or_other: false,
        }),
        // `select_one_from_file cities.csv`
        [_, file] if root.contains("from_file") => Ok(TypeCell {
            root,
            list: Some(*file),
            or_other: false,
        }),
        _ => Err(malformed()),
    }
}

fn invalid_cell(entity: EntityKind, field: &'static str, cell: &str) -> ValidationError {
    ValidationError::new(entity, field, ValidationRule::InvalidValue).with_value(cell)
}

fn flag_cell(entity: EntityKind, field: &'static str, cell: &str) -> Result<bool, ValidationError> {
    match cell.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Ok(true),
        "no" | "false" | "0" => Ok(false),
        _ => Err(invalid_cell(entity, field, cell)),
    }
}

fn json_cell<T: DeserializeOwned>(
    entity: EntityKind,
    field: &'static str,
    cell: &str,
) -> Result<T, ValidationError> {
    serde_json::from_str(cell).map_err(|_| invalid_cell(entity, field, cell))
}

fn repeat_count_cell(cell: &str) -> RepeatCount {
    match cell.trim().parse::<u64>() {
        Ok(count) => RepeatCount::Count(count),
        Err(_) => RepeatCount::Expression(cell.to_string()),
    }
}

/// Reads one survey row into a question draft, choice list attached.
fn question_draft(
    row: &Row,
    type_cell: TypeCell<'_>,
    lists: &BTreeMap<String, Vec<Choice>>,
) -> Result<QuestionDraft, ValidationError> {
    const ENTITY: EntityKind = EntityKind::Question;
    let text = |column: &str| row.get(column).cloned();

    let mut draft = QuestionDraft {
        kind: Some(type_cell.root.to_string()),
        name: text("name"),
        label: Some(text("label").unwrap_or_default()),
        default: text("default"),
        hint: text("hint"),
        calculation: text("calculation"),
        file: text("file"),
        appearance_attributes: text("appearance_attributes"),
        ..QuestionDraft::default()
    };
    if let Some(cell) = row.get("required") {
        draft.required = Some(flag_cell(ENTITY, "required", cell)?);
    }
    if let Some(cell) = row.get("allow_other") {
        draft.allow_other = Some(flag_cell(ENTITY, "allow_other", cell)?);
    }
    if let Some(cell) = row.get("accuracyThreshold") {
        let threshold = cell
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid_cell(ENTITY, "accuracyThreshold", cell))?;
        draft.accuracy_threshold = Some(threshold);
    }
    if let Some(cell) = row.get("logics") {
        draft.logics = Some(json_cell(ENTITY, "logics", cell)?);
    }
    if let Some(cell) = row.get("range") {
        draft.range = Some(json_cell(ENTITY, "range", cell)?);
    }
    if let Some(cell) = row.get("parameters") {
        draft.parameters = Some(json_cell(ENTITY, "parameters", cell)?);
    }

    match type_cell.list {
        Some(file) if type_cell.root.contains("from_file") => {
            if draft.file.is_none() {
                draft.file = Some(file.to_string());
            }
        }
        Some(list) => {
            draft.choices = Some(lists.get(list).cloned().unwrap_or_default());
        }
        None => {}
    }
    if type_cell.or_other && draft.allow_other.is_none() {
        draft.allow_other = Some(true);
    }
    Ok(draft)
}

/// Reads the header of a `begin` row.
fn group_draft(row: &Row, kind: Option<&str>) -> Result<GroupDraft, ValidationError> {
    const ENTITY: EntityKind = EntityKind::Group;
    let text = |column: &str| row.get(column).cloned();
    let logics = row
        .get("logics")
        .map(|cell| json_cell(ENTITY, "logics", cell))
        .transpose()?;
    Ok(GroupDraft {
        kind: kind.map(str::to_string),
        name: text("name"),
        label: Some(text("label").unwrap_or_default()),
        items: Vec::new(),
        logics,
        repeat_count: row.get("repeat_count").map(|cell| repeat_count_cell(cell)),
        appearance_attributes: text("appearance_attributes"),
    })
}

/// A group whose `end` row has not been reached yet.
struct OpenGroup {
    row: usize,
    kind: String,
    header: GroupDraft,
    items: Vec<Item>,
}

/// Rebuilds the item tree from the rows of a survey sheet.
struct TreeBuilder<'v, 't> {
    validator: &'v Validator<'t>,
    stack: Vec<OpenGroup>,
    items: Vec<Item>,
}

impl<'v, 't> TreeBuilder<'v, 't> {
    fn new(validator: &'v Validator<'t>) -> Self {
        Self {
            validator,
            stack: Vec::new(),
            items: Vec::new(),
        }
    }

    fn push(&mut self, item: Item) {
        match self.stack.last_mut() {
            Some(open) => open.items.push(item),
            None => self.items.push(item),
        }
    }

    fn begin(&mut self, row: usize, kind: Option<&str>, header: GroupDraft) {
        self.stack.push(OpenGroup {
            row,
            kind: kind.unwrap_or("group").to_string(),
            header,
            items: Vec::new(),
        });
    }

    fn end(&mut self, row: usize, kind: &str) -> Result<(), XlsFormError> {
        let Some(open) = self.stack.last() else {
            warn!(row, kind, "`end {}` without an open group ignored", kind);
            return Ok(());
        };
        if open.kind != kind {
            return Err(SourceFormatError::MismatchedEnd {
                row,
                token: format!("end {}", kind),
                open: open.kind.clone(),
            }
            .into());
        }
        self.close()
    }

    fn close(&mut self) -> Result<(), XlsFormError> {
        let Some(open) = self.stack.pop() else {
            return Ok(());
        };
        let group = self
            .validator
            .seal_group(open.header, open.items)
            .map_err(|source| XlsFormError::InvalidRow {
                row: open.row,
                source,
            })?;
        self.push(Item::Group(group));
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Item>, XlsFormError> {
        while let Some(open) = self.stack.last() {
            warn!(
                row = open.row,
                name = open.header.name.as_deref().unwrap_or_default(),
                "group not closed before the end of the survey sheet"
            );
            self.close()?;
        }
        Ok(self.items)
    }
}

/// Rebuilds the items of a survey sheet, linking choice lists.
pub fn decode_items(
    survey: &Table,
    choices: &Table,
    validator: &Validator<'_>,
) -> Result<Vec<Item>, XlsFormError> {
    let lists = choice_lists(&choices.compact());
    for column in survey.columns() {
        if !SURVEY_COLUMNS.contains(&column.as_str()) {
            debug!(column = column.as_str(), "unknown survey column ignored");
        }
    }

    let mut tree = TreeBuilder::new(validator);
    for (index, row) in survey.rows().iter().enumerate() {
        let row = non_blank(row);
        if row.is_empty() {
            continue;
        }
        let row_no = index + 1;
        let invalid = |source| XlsFormError::InvalidRow {
            row: row_no,
            source,
        };
        let type_cell = row
            .get("type")
            .map(|cell| cell.trim())
            .ok_or(SourceFormatError::MissingType { row: row_no })?;

        match classify(type_cell) {
            RowKind::Begin(kind) => {
                let header = group_draft(&row, kind).map_err(invalid)?;
                tree.begin(row_no, kind, header);
            }
            RowKind::End(kind) => tree.end(row_no, kind)?,
            RowKind::Question => {
                let cell = split_type(row_no, type_cell)?;
                let draft = question_draft(&row, cell, &lists).map_err(invalid)?;
                let question = validator.question(draft).map_err(invalid)?;
                tree.push(Item::Question(question));
            }
        }
    }
    tree.finish()
}

/// Reads name, label and version from the first settings row.
pub fn decode_settings(settings: &Table) -> Result<SurveyDraft, SourceFormatError> {
    let settings = settings.compact();
    let row = settings
        .rows()
        .first()
        .ok_or(SourceFormatError::EmptySettings)?;
    let name = row
        .get("form_id")
        .cloned()
        .ok_or(SourceFormatError::MissingSetting { column: "form_id" })?;
    Ok(SurveyDraft {
        name: Some(name),
        label: Some(row.get("form_title").cloned().unwrap_or_default()),
        version: row.get("version").cloned(),
        items: Vec::new(),
    })
}

pub fn decode_survey(workbook: &Workbook, validator: &Validator<'_>) -> Result<Survey, XlsFormError> {
    let items = decode_items(&workbook.survey, &workbook.choices, validator)?;
    let header = decode_settings(&workbook.settings)?;
    debug!(items = items.len(), "decoded survey sheet");
    Ok(validator.seal_survey(header, items)?)
}
