#![allow(missing_docs)]

pub mod csv_workbook;
pub mod decode;
pub mod document;
pub mod encode;
pub mod error;
mod reserved;
pub mod sheet;
pub mod spec;
pub mod tables;
pub mod validate;

pub use csv_workbook::CsvWorkbook;
pub use decode::{decode_items, decode_settings, decode_survey};
pub use encode::{encode_items, encode_settings, encode_survey};
pub use error::{EntityKind, SourceFormatError, ValidationError, ValidationRule, XlsFormError};
pub use sheet::{
    CHOICES_SHEET, MemoryWorkbook, Row, SETTINGS_SHEET, SURVEY_SHEET, SheetReader, SheetWriter,
    Table, Workbook,
};
pub use spec::{
    AppearanceAttribute, AppearanceTarget, Choice, GroupDraft, GroupType, Item, ItemDraft, Logic,
    LogicDraft, LogicType, Question, QuestionDraft, QuestionGroup, QuestionType, Range,
    RepeatCount, Survey, SurveyDraft, UnknownToken,
};
pub use tables::{BASE_APPEARANCE_COMBOS, CompatTables};
pub use validate::{ConditionalField, FIELD_RULES, FieldRule, Presence, Validator, rules_for};
