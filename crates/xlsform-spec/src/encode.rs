use serde::Serialize;
use tracing::debug;

use crate::error::XlsFormError;
use crate::sheet::{Table, Workbook};
use crate::spec::group::{Item, QuestionGroup};
use crate::spec::logic::Logic;
use crate::spec::question::Question;
use crate::spec::survey::Survey;

/// Ordered cells of one row before table shaping.
#[derive(Default)]
struct RowCells(Vec<(String, String)>);

impl RowCells {
    fn text(&mut self, column: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.0.push((column.to_string(), value.to_string()));
        }
        self
    }

    fn flag(&mut self, column: &str, value: Option<bool>) -> &mut Self {
        self.text(column, value.map(|flag| if flag { "yes" } else { "no" }))
    }

    fn number(&mut self, column: &str, value: Option<f64>) -> &mut Self {
        self.text(column, value.map(|number| number.to_string()).as_deref())
    }

    fn json<T: Serialize + ?Sized>(
        &mut self,
        column: &str,
        value: Option<&T>,
    ) -> Result<&mut Self, XlsFormError> {
        let cell = value.map(serde_json::to_string).transpose()?;
        Ok(self.text(column, cell.as_deref()))
    }

    fn logics(&mut self, logics: &[Logic]) -> Result<&mut Self, XlsFormError> {
        self.json("logics", (!logics.is_empty()).then_some(logics))
    }

    fn finish(self) -> Vec<(String, String)> {
        self.0
    }
}

#[derive(Default)]
struct Encoder {
    survey: Vec<Vec<(String, String)>>,
    choices: Vec<Vec<(String, String)>>,
}

impl Encoder {
    fn items(&mut self, items: &[Item]) -> Result<(), XlsFormError> {
        for item in items {
            match item {
                Item::Question(question) => self.question(question)?,
                Item::Group(group) => self.group(group)?,
            }
        }
        Ok(())
    }

    fn group(&mut self, group: &QuestionGroup) -> Result<(), XlsFormError> {
        let marker = |edge: &str| format!("{} {}", edge, group.kind());
        let header = |kind: String| -> Result<Vec<(String, String)>, XlsFormError> {
            let mut row = RowCells::default();
            row.text("type", Some(kind.as_str()))
                .text("name", Some(group.name()))
                .text("label", Some(group.label()))
                .logics(group.logics())?
                .text(
                    "appearance_attributes",
                    group.appearance().map(|appearance| appearance.as_str()),
                )
                .text(
                    "repeat_count",
                    group.repeat_count().map(ToString::to_string).as_deref(),
                );
            Ok(row.finish())
        };

        self.survey.push(header(marker("begin"))?);
        self.items(group.items())?;
        self.survey.push(header(marker("end"))?);
        Ok(())
    }

    fn question(&mut self, question: &Question) -> Result<(), XlsFormError> {
        let kind = question.kind();
        let type_cell = if kind.has_choices() {
            for choice in question.choices().unwrap_or_default() {
                let mut row = RowCells::default();
                row.text("list_name", Some(question.name()))
                    .text("name", Some(choice.value.as_str()))
                    .text("label", Some(choice.label.as_str()));
                self.choices.push(row.finish());
            }
            format!("{} {}", kind, question.name())
        } else {
            kind.to_string()
        };

        let mut row = RowCells::default();
        row.text("type", Some(type_cell.as_str()))
            .text("name", Some(question.name()))
            .text("label", Some(question.label()))
            .flag("required", question.required())
            .text("default", question.default())
            .text("hint", question.hint())
            .logics(question.logics())?
            .text("calculation", question.calculation())
            .json("range", question.range())?
            .number("accuracyThreshold", question.accuracy_threshold())
            .flag("allow_other", question.allow_other())
            .text("file", question.file())
            .json(
                "parameters",
                question.parameters().filter(|parameters| !parameters.is_empty()),
            )?
            .text(
                "appearance_attributes",
                question.appearance().map(|appearance| appearance.as_str()),
            );
        self.survey.push(row.finish());
        Ok(())
    }
}

/// Flattens items into survey and choices tables, depth first.
pub fn encode_items(items: &[Item]) -> Result<(Table, Table), XlsFormError> {
    let mut encoder = Encoder::default();
    encoder.items(items)?;
    debug!(
        survey_rows = encoder.survey.len(),
        choice_rows = encoder.choices.len(),
        "encoded survey items"
    );
    Ok((Table::shape(encoder.survey), Table::shape(encoder.choices)))
}

/// The single settings row of a survey.
pub fn encode_settings(survey: &Survey) -> Table {
    let mut row = RowCells::default();
    row.text("form_id", Some(survey.name()))
        .text("form_title", Some(survey.label()))
        .text("version", survey.version());
    Table::shape([row.finish()])
}

pub fn encode_survey(survey: &Survey) -> Result<Workbook, XlsFormError> {
    let (survey_table, choices) = encode_items(survey.items())?;
    Ok(Workbook {
        survey: survey_table,
        choices,
        settings: encode_settings(survey),
    })
}
