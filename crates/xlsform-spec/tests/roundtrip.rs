use std::path::PathBuf;

use proptest::prelude::*;

use xlsform_spec::{
    Choice, GroupDraft, Item, ItemDraft, MemoryWorkbook, Question, QuestionGroup, QuestionType, Survey,
    Table,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn household() -> Survey {
    Survey::parse_yaml_file(fixture("household.yaml")).expect("fixture is valid")
}

fn column<'t>(table: &'t Table, name: &str) -> Vec<&'t str> {
    (0..table.len())
        .map(|row| table.cell(row, name).unwrap_or(""))
        .collect()
}

#[test]
fn map_roundtrip_preserves_survey() {
    let survey = household();
    let value = survey.to_value().expect("to value");
    assert_eq!(value["version"], "2024.03");
    assert_eq!(Survey::from_value(value).expect("from value"), survey);
}

#[test]
fn json_roundtrip_preserves_survey() {
    let survey = household();
    let compact = survey.to_json().expect("json");
    assert_eq!(Survey::from_json(&compact).expect("parse compact"), survey);
    let pretty = survey.to_json_pretty().expect("pretty json");
    assert_eq!(Survey::from_json(&pretty).expect("parse pretty"), survey);
}

#[test]
fn yaml_roundtrip_preserves_survey() {
    let survey = household();
    let yaml = survey.to_yaml().expect("yaml");
    assert_eq!(Survey::from_yaml(&yaml).expect("parse yaml"), survey);
}

#[test]
fn json_output_omits_absent_fields_in_declaration_order() {
    let survey = Survey::builder("s", "S")
        .item(
            Question::builder(QuestionType::Text, "q", "Q")
                .required(false)
                .build()
                .expect("valid"),
        )
        .build()
        .expect("valid");
    assert_eq!(
        survey.to_json().expect("json"),
        r#"{"name":"s","label":"S","items":[{"type":"text","name":"q","label":"Q","required":false}]}"#
    );
}

#[test]
fn table_roundtrip_preserves_survey() {
    let survey = household();
    let workbook = survey.to_workbook().expect("encode");

    assert_eq!(
        column(&workbook.survey, "type"),
        [
            "text",
            "select_one consent",
            "begin repeat",
            "integer",
            "begin group",
            "select_multiple symptoms",
            "range",
            "end group",
            "end repeat",
            "geopoint",
            "calculate",
            "select_one_from_file",
        ]
    );
    assert_eq!(column(&workbook.choices, "list_name"), ["consent", "consent", "symptoms", "symptoms"]);
    assert_eq!(workbook.settings.cell(0, "form_id"), Some("household_survey"));
    assert_eq!(workbook.settings.cell(0, "version"), Some("2024.03"));

    assert_eq!(Survey::from_workbook(&workbook).expect("decode"), survey);
}

#[test]
fn whitespace_only_text_survives_the_table_roundtrip() {
    let survey = Survey::builder("spaces", "  ")
        .item(
            Question::builder(QuestionType::Text, "q", " ")
                .hint("  ")
                .default_value("\t"),
        )
        .item(
            Question::builder(QuestionType::SelectOne, "pick", "Pick")
                .choices([Choice::new("a", " "), Choice::new("b", "B")]),
        )
        .item(QuestionGroup::builder("g", "   "))
        .build()
        .expect("valid");

    let Item::Question(question) = &survey.items()[0] else {
        panic!("expected a question");
    };
    assert_eq!(question.label(), "");
    assert_eq!(question.hint(), None);
    assert_eq!(question.default(), None);
    assert_eq!(survey.label(), "");

    let workbook = survey.to_workbook().expect("encode");
    assert_eq!(Survey::from_workbook(&workbook).expect("decode"), survey);
}

#[test]
fn survey_columns_appear_in_first_seen_order() {
    let workbook = household().to_workbook().expect("encode");
    let expected = [
        "type",
        "name",
        "label",
        "required",
        "hint",
        "appearance_attributes",
        "logics",
        "repeat_count",
        "allow_other",
        "range",
        "parameters",
        "accuracyThreshold",
        "calculation",
        "file",
    ];
    assert_eq!(workbook.survey.columns(), expected);
}

#[test]
fn one_group_with_two_questions_produces_three_sheets() {
    let group = QuestionGroup::builder("contact", "Contact")
        .item(
            Question::builder(QuestionType::Text, "full_name", "Full name")
                .build()
                .expect("text"),
        )
        .item(
            Question::builder(QuestionType::SelectOne, "color", "Favourite color")
                .choices([Choice::new("r", "Red"), Choice::new("g", "Green")])
                .build()
                .expect("select"),
        )
        .build()
        .expect("group");
    let survey = Survey::builder("intake", "Intake")
        .item(group)
        .build()
        .expect("survey");

    let mut book = MemoryWorkbook::new();
    survey.save(&mut book).expect("save");
    assert_eq!(
        book.sheet_names().collect::<Vec<_>>(),
        ["choices", "settings", "survey"]
    );

    let choices = book.sheet("choices").expect("choices sheet");
    assert_eq!(choices.columns(), ["list_name", "name", "label"]);
    assert_eq!(column(choices, "name"), ["r", "g"]);
    let rows = book.sheet("survey").expect("survey sheet");
    assert_eq!(
        column(rows, "type"),
        ["begin group", "text", "select_one color", "end group"]
    );

    let parsed = Survey::parse(&book).expect("parse");
    assert_eq!(parsed, survey);
    assert_eq!(
        parsed,
        Survey::parse_json_file(fixture("minimal.json")).expect("fixture")
    );
}

#[test]
fn file_forms_roundtrip() {
    let survey = household();
    let dir = tempfile::tempdir().expect("tempdir");

    let yaml = dir.path().join("survey.yaml");
    survey.save_to_yaml(&yaml).expect("save yaml");
    assert_eq!(Survey::parse_yaml_file(&yaml).expect("parse yaml"), survey);

    let json = dir.path().join("survey.json");
    survey.save_to_json(&json).expect("save json");
    assert_eq!(Survey::parse_json_file(&json).expect("parse json"), survey);
}

/// Shape of a generated item; names are assigned when the survey is built.
#[derive(Debug, Clone)]
enum Shape {
    Text {
        label: String,
        hint: Option<String>,
        required: Option<bool>,
    },
    Select {
        label: String,
        choices: Vec<(String, String)>,
        allow_other: Option<bool>,
    },
    Geo {
        label: String,
        threshold: Option<f64>,
    },
    Group {
        label: String,
        repeat: Option<u64>,
        children: Vec<Shape>,
    },
}

fn label() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[A-Za-z][A-Za-z0-9 ,.?']{0,15}",
        1 => "[ \t]{0,3}",
    ]
}

fn leaf() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (
            label(),
            proptest::option::of(label()),
            proptest::option::of(any::<bool>())
        )
            .prop_map(|(label, hint, required)| Shape::Text {
                label,
                hint,
                required
            }),
        (
            label(),
            proptest::collection::vec(("[a-z][a-z0-9_]{0,6}", label()), 0..4),
            proptest::option::of(any::<bool>())
        )
            .prop_map(|(label, choices, allow_other)| Shape::Select {
                label,
                choices,
                allow_other
            }),
        (label(), proptest::option::of(-1.0e6f64..1.0e6))
            .prop_map(|(label, threshold)| Shape::Geo { label, threshold }),
    ]
}

fn shape() -> impl Strategy<Value = Shape> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        (
            label(),
            proptest::option::of(0u64..20),
            proptest::collection::vec(inner, 0..4),
        )
            .prop_map(|(label, repeat, children)| Shape::Group {
                label,
                repeat,
                children,
            })
    })
}

fn drafts(shapes: &[Shape], next: &mut usize) -> Vec<ItemDraft> {
    shapes
        .iter()
        .map(|shape| {
            *next += 1;
            let name = format!("n{next}");
            match shape {
                Shape::Text {
                    label,
                    hint,
                    required,
                } => {
                    let mut draft = Question::builder(QuestionType::Text, name, label.clone());
                    draft.hint = hint.clone();
                    draft.required = *required;
                    draft.into()
                }
                Shape::Select {
                    label,
                    choices,
                    allow_other,
                } => {
                    let mut draft =
                        Question::builder(QuestionType::SelectOne, name, label.clone()).choices(
                            choices
                                .iter()
                                .map(|(value, label)| Choice::new(value.clone(), label.clone())),
                        );
                    draft.allow_other = *allow_other;
                    draft.into()
                }
                Shape::Geo { label, threshold } => {
                    let mut draft = Question::builder(QuestionType::Geopoint, name, label.clone());
                    draft.accuracy_threshold = *threshold;
                    draft.into()
                }
                Shape::Group {
                    label,
                    repeat,
                    children,
                } => {
                    let mut draft = GroupDraft::new(name, label.clone());
                    draft.repeat_count = repeat.map(Into::into);
                    draft.items = drafts(children, &mut *next);
                    draft.into()
                }
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn generated_surveys_roundtrip_through_tables(shapes in proptest::collection::vec(shape(), 0..6)) {
        let mut next = 0;
        let survey = Survey::builder("generated", "Generated")
            .items(drafts(&shapes, &mut next))
            .build()
            .expect("generated surveys are valid");
        let workbook = survey.to_workbook().expect("encode");
        prop_assert_eq!(&Survey::from_workbook(&workbook).expect("decode"), &survey);
        prop_assert_eq!(&Survey::from_yaml(&survey.to_yaml().expect("yaml")).expect("parse"), &survey);
    }
}
