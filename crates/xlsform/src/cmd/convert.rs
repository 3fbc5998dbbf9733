use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cmd::{self, Format};
use crate::config::Settings;

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Survey to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
    /// Where to write the converted survey
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
    /// Input format, detected from INPUT when omitted
    #[arg(long, value_enum)]
    pub from: Option<Format>,
    /// Output format, detected from OUTPUT when omitted
    #[arg(long, value_enum)]
    pub to: Option<Format>,
}

pub fn run(args: ConvertArgs, settings: &Settings) -> Result<()> {
    let from = Format::resolve(args.from, &args.input)?;
    let to = Format::resolve(args.to, &args.output)?;
    let survey = cmd::load(&args.input, from, settings)?;
    cmd::store(&survey, &args.output, to, settings)?;
    println!(
        "converted {} ({} questions) to {}",
        args.input.display(),
        survey.question_count(),
        args.output.display()
    );
    Ok(())
}
