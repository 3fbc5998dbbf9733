//! Entry points for reading and writing whole surveys.
//!
//! Text forms (JSON, YAML, generic maps) are deserialized into a
//! [`SurveyDraft`] first and validated afterwards, so a broken survey surfaces
//! as a typed [`ValidationError`](crate::error::ValidationError) rather than a
//! serde message.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::csv_workbook::CsvWorkbook;
use crate::decode::decode_survey;
use crate::encode::encode_survey;
use crate::error::XlsFormError;
use crate::sheet::{SheetReader, SheetWriter, Workbook};
use crate::spec::survey::{Survey, SurveyDraft};
use crate::validate::Validator;

impl Survey {
    pub fn from_draft(draft: SurveyDraft) -> Result<Self, XlsFormError> {
        Ok(Validator::standard().survey(draft)?)
    }

    pub fn from_value(value: Value) -> Result<Self, XlsFormError> {
        Self::from_draft(serde_json::from_value(value)?)
    }

    pub fn to_value(&self) -> Result<Value, XlsFormError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, XlsFormError> {
        Self::from_draft(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, XlsFormError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, XlsFormError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_yaml(text: &str) -> Result<Self, XlsFormError> {
        Self::from_draft(serde_yaml::from_str(text)?)
    }

    pub fn to_yaml(&self) -> Result<String, XlsFormError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Flattens the survey into its `survey`, `choices` and `settings` sheets.
    pub fn to_workbook(&self) -> Result<Workbook, XlsFormError> {
        encode_survey(self)
    }

    pub fn from_workbook(workbook: &Workbook) -> Result<Self, XlsFormError> {
        Self::from_workbook_with(workbook, &Validator::standard())
    }

    /// Like [`Survey::from_workbook`], validating against custom tables.
    pub fn from_workbook_with(
        workbook: &Workbook,
        validator: &Validator<'_>,
    ) -> Result<Self, XlsFormError> {
        decode_survey(workbook, validator)
    }

    pub fn save(&self, writer: &mut impl SheetWriter) -> Result<(), XlsFormError> {
        self.to_workbook()?.write_to(writer)
    }

    pub fn parse(reader: &impl SheetReader) -> Result<Self, XlsFormError> {
        Self::from_workbook(&Workbook::read_from(reader)?)
    }

    pub fn save_to_yaml(&self, path: impl AsRef<Path>) -> Result<(), XlsFormError> {
        let path = path.as_ref();
        fs::write(path, self.to_yaml()?)?;
        debug!(path = %path.display(), "wrote yaml survey");
        Ok(())
    }

    pub fn parse_yaml_file(path: impl AsRef<Path>) -> Result<Self, XlsFormError> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }

    pub fn save_to_json(&self, path: impl AsRef<Path>) -> Result<(), XlsFormError> {
        let path = path.as_ref();
        fs::write(path, self.to_json_pretty()?)?;
        debug!(path = %path.display(), "wrote json survey");
        Ok(())
    }

    pub fn parse_json_file(path: impl AsRef<Path>) -> Result<Self, XlsFormError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Writes `survey.csv`, `choices.csv` and `settings.csv` into `dir`.
    pub fn save_to_csv_dir(&self, dir: impl AsRef<Path>) -> Result<(), XlsFormError> {
        self.save(&mut CsvWorkbook::new(dir.as_ref()))
    }

    pub fn parse_csv_dir(dir: impl AsRef<Path>) -> Result<Self, XlsFormError> {
        Self::parse(&CsvWorkbook::new(dir.as_ref()))
    }

    /// JSON Schema of the JSON/YAML document form.
    pub fn json_schema() -> Value {
        schemars::schema_for!(SurveyDraft).to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationRule;

    #[test]
    fn text_forms_report_typed_validation_errors() {
        let err = Survey::from_json(
            r#"{"name":"s","label":"S","items":[{"type":"text","name":"SELECT","label":"x"}]}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.validation().map(|err| err.rule),
            Some(ValidationRule::ReservedName)
        );
    }

    #[test]
    fn schema_describes_items() {
        let schema = Survey::json_schema();
        assert!(schema.to_string().contains("items"));
    }
}
