pub mod convert;
pub mod inspect;
pub mod schema;
pub mod validate;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use tracing::debug;
use xlsform_spec::{CsvWorkbook, Survey};

use crate::config::Settings;

/// On-disk survey representations.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    /// A directory holding survey.csv, choices.csv and settings.csv.
    Csv,
}

impl Format {
    /// Picks a format from the path: a directory or an extension-less path is a
    /// CSV workbook, otherwise the extension decides.
    pub fn detect(path: &Path) -> Result<Self> {
        if path.is_dir() {
            return Ok(Format::Csv);
        }
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Format::Yaml)
            }
            None => Ok(Format::Csv),
            Some(ext) => bail!(
                "cannot tell the format of {} from `.{}`; pass --from/--to",
                path.display(),
                ext
            ),
        }
    }

    pub fn resolve(explicit: Option<Format>, path: &Path) -> Result<Self> {
        match explicit {
            Some(format) => Ok(format),
            None => Self::detect(path),
        }
    }
}

pub fn load(path: &Path, format: Format, settings: &Settings) -> Result<Survey> {
    debug!(path = %path.display(), ?format, "loading survey");
    let survey = match format {
        Format::Json => Survey::parse_json_file(path),
        Format::Yaml => Survey::parse_yaml_file(path),
        Format::Csv => Survey::parse(&CsvWorkbook::new(path).with_delimiter(settings.delimiter)),
    };
    survey.with_context(|| format!("failed to load survey from {}", path.display()))
}

pub fn store(survey: &Survey, path: &Path, format: Format, settings: &Settings) -> Result<()> {
    debug!(path = %path.display(), ?format, "writing survey");
    let written = match format {
        Format::Json if settings.json_pretty => survey.save_to_json(path),
        Format::Json => survey
            .to_json()
            .and_then(|json| fs::write(path, json).map_err(Into::into)),
        Format::Yaml => survey.save_to_yaml(path),
        Format::Csv => survey.save(&mut CsvWorkbook::new(path).with_delimiter(settings.delimiter)),
    };
    written.with_context(|| format!("failed to write survey to {}", path.display()))
}
