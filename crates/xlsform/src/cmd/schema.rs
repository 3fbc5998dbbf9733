use anyhow::Result;
use xlsform_spec::Survey;

pub fn run() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Survey::json_schema())?);
    Ok(())
}
