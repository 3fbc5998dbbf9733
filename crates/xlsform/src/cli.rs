use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cmd::{
    self, convert::ConvertArgs, inspect::InspectArgs, validate::ValidateArgs,
};
use crate::config::{ConfigFile, LOG_ENV, Overrides, Settings};
use crate::logging;

#[derive(Parser, Debug)]
#[command(
    name = "xlsform",
    about = "Convert and check XLSForm surveys",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// TOML file with defaults for the options below
    #[arg(long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Field delimiter of CSV workbooks
    #[arg(long = "delimiter", value_name = "CHAR", global = true)]
    delimiter: Option<char>,

    /// Log filter, e.g. `debug` or `xlsform_spec=trace`
    #[arg(long = "log", value_name = "FILTER", global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a survey between JSON, YAML and a CSV workbook directory
    Convert(ConvertArgs),
    /// Check that a survey is valid
    Validate(ValidateArgs),
    /// Print the item tree of a survey
    Inspect(InspectArgs),
    /// Print the JSON Schema of the JSON/YAML survey format
    Schema,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let file = self.config.as_deref().map(ConfigFile::load).transpose()?;
        Settings::resolve(
            Overrides {
                delimiter: self.delimiter,
                log: self.log.clone(),
            },
            std::env::var(LOG_ENV).ok(),
            file,
        )
    }
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    logging::init(&settings.log);
    match cli.command {
        Commands::Convert(args) => cmd::convert::run(args, &settings),
        Commands::Validate(args) => cmd::validate::run(args, &settings),
        Commands::Inspect(args) => cmd::inspect::run(args, &settings),
        Commands::Schema => cmd::schema::run(),
    }
}
