use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

pub const LOG_ENV: &str = "XLSFORM_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Defaults read from `--config <file.toml>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub csv_delimiter: Option<char>,
    pub json_pretty: Option<bool>,
    pub log: Option<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }
}

/// Effective settings after flags, environment and config file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub delimiter: u8,
    pub json_pretty: bool,
    pub log: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: b',',
            json_pretty: true,
            log: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Values given on the command line; they win over everything else.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub delimiter: Option<char>,
    pub log: Option<String>,
}

impl Settings {
    pub fn resolve(
        overrides: Overrides,
        env_log: Option<String>,
        file: Option<ConfigFile>,
    ) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = Settings::default();

        let delimiter = match overrides.delimiter.or(file.csv_delimiter) {
            Some(delimiter) => ascii_delimiter(delimiter)?,
            None => defaults.delimiter,
        };
        let log = overrides
            .log
            .or(env_log.filter(|filter| !filter.trim().is_empty()))
            .or(file.log)
            .unwrap_or(defaults.log);

        Ok(Self {
            delimiter,
            json_pretty: file.json_pretty.unwrap_or(defaults.json_pretty),
            log,
        })
    }
}

fn ascii_delimiter(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() || delimiter == '"' || delimiter == '\n' {
        bail!("`{}` cannot be used as a CSV delimiter", delimiter.escape_default());
    }
    Ok(delimiter as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_win_over_environment_and_file() {
        let file = ConfigFile {
            csv_delimiter: Some(';'),
            json_pretty: Some(false),
            log: Some("info".into()),
        };
        let settings = Settings::resolve(
            Overrides {
                delimiter: Some('\t'),
                log: Some("debug".into()),
            },
            Some("trace".into()),
            Some(file.clone()),
        )
        .unwrap();
        assert_eq!(settings.delimiter, b'\t');
        assert_eq!(settings.log, "debug");
        assert!(!settings.json_pretty);

        let settings =
            Settings::resolve(Overrides::default(), Some("trace".into()), Some(file)).unwrap();
        assert_eq!(settings.delimiter, b';');
        assert_eq!(settings.log, "trace");
    }

    #[test]
    fn defaults_apply_without_any_source() {
        let settings = Settings::resolve(Overrides::default(), None, None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn non_ascii_delimiters_are_rejected() {
        let overrides = Overrides {
            delimiter: Some('§'),
            log: None,
        };
        assert!(Settings::resolve(overrides, None, None).is_err());
    }

    #[test]
    fn config_file_parses_from_toml() {
        let file: ConfigFile = toml::from_str("csv_delimiter = \";\"\njson_pretty = false\n").unwrap();
        assert_eq!(file.csv_delimiter, Some(';'));
        assert_eq!(file.json_pretty, Some(false));
        assert!(toml::from_str::<ConfigFile>("colour = true").is_err());
    }
}
