use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cmd::{self, Format};
use crate::config::Settings;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Survey to check
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
    /// Input format, detected from INPUT when omitted
    #[arg(long, value_enum)]
    pub from: Option<Format>,
}

pub fn run(args: ValidateArgs, settings: &Settings) -> Result<()> {
    let format = Format::resolve(args.from, &args.input)?;
    let survey = cmd::load(&args.input, format, settings)?;
    println!(
        "{}: valid ({} questions in {} top-level items)",
        survey.name(),
        survey.question_count(),
        survey.items().len()
    );
    Ok(())
}
