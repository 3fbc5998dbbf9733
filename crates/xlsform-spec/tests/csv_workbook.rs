use std::fs;
use std::path::PathBuf;

use xlsform_spec::{CsvWorkbook, SheetReader, SourceFormatError, Survey, XlsFormError};

fn household() -> Survey {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/household.yaml");
    Survey::parse_yaml_file(path).expect("fixture is valid")
}

#[test]
fn csv_directory_roundtrip() {
    let survey = household();
    let dir = tempfile::tempdir().expect("tempdir");

    survey.save_to_csv_dir(dir.path()).expect("save csv");
    for sheet in ["survey", "choices", "settings"] {
        assert!(dir.path().join(format!("{sheet}.csv")).is_file(), "{sheet}.csv");
    }
    let settings = fs::read_to_string(dir.path().join("settings.csv")).expect("settings");
    assert_eq!(
        settings,
        "form_id,form_title,version\nhousehold_survey,Household Survey,2024.03\n"
    );

    assert_eq!(Survey::parse_csv_dir(dir.path()).expect("parse csv"), survey);
}

#[test]
fn json_cells_survive_csv_quoting() {
    let survey = household();
    let dir = tempfile::tempdir().expect("tempdir");
    survey.save_to_csv_dir(dir.path()).expect("save csv");

    let sheet = CsvWorkbook::new(dir.path())
        .read_sheet("survey")
        .expect("read")
        .expect("survey sheet");
    let logics = (0..sheet.len())
        .find_map(|row| sheet.cell(row, "logics").filter(|cell| cell.contains("constraint")))
        .expect("constraint logic cell");
    assert!(logics.starts_with(r#"[{"type":"constraint""#), "{logics}");
}

#[test]
fn custom_delimiter_roundtrip() {
    let survey = household();
    let dir = tempfile::tempdir().expect("tempdir");
    let mut book = CsvWorkbook::new(dir.path()).with_delimiter(b';');

    survey.save(&mut book).expect("save");
    let header = fs::read_to_string(book.sheet_path("choices")).expect("choices");
    assert!(header.starts_with("list_name;name;label\n"));
    assert_eq!(Survey::parse(&book).expect("parse"), survey);
}

#[test]
fn missing_csv_file_is_a_missing_sheet() {
    let dir = tempfile::tempdir().expect("tempdir");
    household().save_to_csv_dir(dir.path()).expect("save");
    fs::remove_file(dir.path().join("choices.csv")).expect("remove");

    let err = Survey::parse_csv_dir(dir.path()).expect_err("choices missing");
    assert!(matches!(
        err,
        XlsFormError::SourceFormat(SourceFormatError::MissingSheet { ref sheet }) if sheet == "choices"
    ));
}

#[test]
fn surveys_without_choices_write_an_empty_choices_file() {
    let survey = Survey::from_json(
        r#"{"name":"plain","label":"Plain","items":[{"type":"text","name":"q","label":"Q"}]}"#,
    )
    .expect("valid");
    let dir = tempfile::tempdir().expect("tempdir");
    survey.save_to_csv_dir(dir.path()).expect("save");

    assert_eq!(
        fs::read_to_string(dir.path().join("choices.csv")).expect("choices"),
        ""
    );
    assert_eq!(Survey::parse_csv_dir(dir.path()).expect("parse"), survey);
}
