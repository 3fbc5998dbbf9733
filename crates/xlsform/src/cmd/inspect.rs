use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use xlsform_spec::{Item, Survey};

use crate::cmd::{self, Format};
use crate::config::Settings;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Survey to print
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
    /// Input format, detected from INPUT when omitted
    #[arg(long, value_enum)]
    pub from: Option<Format>,
}

pub fn run(args: InspectArgs, settings: &Settings) -> Result<()> {
    let format = Format::resolve(args.from, &args.input)?;
    let survey = cmd::load(&args.input, format, settings)?;
    print!("{}", render_tree(&survey));
    Ok(())
}

/// One line per item, indented by depth.
pub fn render_tree(survey: &Survey) -> String {
    let mut out = format!("{} \"{}\"", survey.name(), survey.label());
    if let Some(version) = survey.version() {
        let _ = write!(out, " v{version}");
    }
    out.push('\n');
    render_items(&mut out, survey.items(), 1);
    out
}

fn render_items(out: &mut String, items: &[Item], depth: usize) {
    let indent = "  ".repeat(depth);
    for item in items {
        match item {
            Item::Question(question) => {
                let _ = write!(out, "{indent}{} {}", question.kind(), question.name());
                if let Some(choices) = question.choices() {
                    let _ = write!(out, " [{} choices]", choices.len());
                }
                if question.required() == Some(true) {
                    out.push_str(" *");
                }
                out.push('\n');
            }
            Item::Group(group) => {
                let _ = write!(out, "{indent}{} {}", group.kind(), group.name());
                if let Some(count) = group.repeat_count() {
                    let _ = write!(out, " x {count}");
                }
                out.push('\n');
                render_items(out, group.items(), depth + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xlsform_spec::{Question, QuestionGroup, QuestionType};

    #[test]
    fn tree_shows_nesting_and_counts() {
        let survey = Survey::builder("census", "Census")
            .item(
                QuestionGroup::builder("people", "People")
                    .repeat_count("${size}")
                    .item(
                        Question::builder(QuestionType::SelectOne, "sex", "Sex")
                            .choice("f", "Female")
                            .choice("m", "Male")
                            .required(true),
                    ),
            )
            .build()
            .unwrap();
        assert_eq!(
            render_tree(&survey),
            "census \"Census\"\n  repeat people x ${size}\n    select_one sex [2 choices] *\n"
        );
    }
}
