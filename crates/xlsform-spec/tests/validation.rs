use serde_json::json;

use xlsform_spec::{
    AppearanceAttribute, BASE_APPEARANCE_COMBOS, Choice, CompatTables, EntityKind, GroupDraft, GroupType,
    Logic, LogicType, Question, QuestionDraft, QuestionGroup, QuestionType, Range, RepeatCount,
    Survey, ValidationRule, Validator,
};

/// A draft of `kind` carrying whatever that kind requires.
fn complete_draft(kind: QuestionType, name: &str) -> QuestionDraft {
    let draft = Question::builder(kind, name, "Label");
    match kind {
        QuestionType::Calculate => draft.calculation("1 + 1"),
        QuestionType::SelectOne | QuestionType::SelectMultiple | QuestionType::Rank => {
            draft.choice("a", "A")
        }
        QuestionType::SelectOneFromFile | QuestionType::SelectMultipleFromFile => {
            draft.file("cities.csv")
        }
        QuestionType::Range => draft.range(Range::new(0.0, 10.0, 1.0)),
        _ => draft,
    }
}

#[test]
fn reserved_names_are_rejected() {
    let err = Question::builder(QuestionType::Text, "SELECT", "Pick")
        .build()
        .expect_err("SELECT is reserved");
    assert_eq!(err.entity, EntityKind::Question);
    assert_eq!(err.field, "name");
    assert_eq!(err.rule, ValidationRule::ReservedName);
    assert_eq!(err.value.as_deref(), Some("SELECT"));

    Question::builder(QuestionType::Text, "select", "Pick")
        .build()
        .expect("reserved names are case sensitive");
}

#[test]
fn calculate_requires_a_calculation() {
    let err = Question::builder(QuestionType::Calculate, "total", "Total")
        .build()
        .expect_err("calculation missing");
    assert_eq!(err.field, "calculation");
    assert_eq!(err.rule, ValidationRule::MissingRequired);

    let question = Question::builder(QuestionType::Calculate, "total", "Total")
        .calculation("${a} + ${b}")
        .build()
        .expect("valid calculate");
    assert_eq!(question.calculation(), Some("${a} + ${b}"));
}

#[test]
fn choice_and_file_kinds_require_their_source() {
    let err = Question::builder(QuestionType::SelectOne, "color", "Color")
        .build()
        .expect_err("choices missing");
    assert_eq!(err.field, "choices");

    let err = Question::builder(QuestionType::SelectOneFromFile, "city", "City")
        .build()
        .expect_err("file missing");
    assert_eq!(err.field, "file");

    let err = Question::builder(QuestionType::Range, "score", "Score")
        .build()
        .expect_err("range missing");
    assert_eq!(err.field, "range");
}

#[test]
fn conditional_fields_are_cleared_outside_their_types() {
    let question = Question::builder(QuestionType::Text, "note_text", "Text")
        .calculation("1")
        .choice("a", "A")
        .allow_other(true)
        .file("list.csv")
        .range(Range::new(1.0, 5.0, 1.0))
        .accuracy_threshold(5.0)
        .build()
        .expect("extra fields are dropped, not rejected");
    assert_eq!(question.calculation(), None);
    assert_eq!(question.choices(), None);
    assert_eq!(question.allow_other(), None);
    assert_eq!(question.file(), None);
    assert_eq!(question.range(), None);
    assert_eq!(question.accuracy_threshold(), None);
    assert_eq!(question.parameters(), None);
}

#[test]
fn geo_questions_keep_their_accuracy_threshold() {
    let question = Question::builder(QuestionType::Geopoint, "location", "Where?")
        .accuracy_threshold(5.5)
        .build()
        .expect("valid geopoint");
    assert_eq!(question.accuracy_threshold(), Some(5.5));

    let err = Question::builder(QuestionType::Geopoint, "location", "Where?")
        .accuracy_threshold(f64::NAN)
        .build()
        .expect_err("threshold must be finite");
    assert_eq!(err.rule, ValidationRule::InvalidValue);
}

#[test]
fn range_bounds_are_copied_into_parameters() {
    let question = Question::builder(QuestionType::Range, "score", "Score")
        .range(Range::new(1.0, 10.0, 0.5))
        .parameter("tick_interval", 2)
        .build()
        .expect("valid range");
    let parameters = question.parameters().expect("parameters filled");
    assert_eq!(parameters["start"], json!(1.0));
    assert_eq!(parameters["end"], json!(10.0));
    assert_eq!(parameters["step"], json!(0.5));
    assert_eq!(parameters["tick_interval"], json!(2));
}

#[test]
fn appearance_must_suit_the_question_type() {
    Question::builder(QuestionType::Text, "story", "Story")
        .appearance(AppearanceAttribute::Multiline)
        .build()
        .expect("multiline text");

    let err = Question::builder(QuestionType::Integer, "age", "Age")
        .appearance(AppearanceAttribute::Multiline)
        .build()
        .expect_err("multiline integer");
    assert_eq!(err.field, "appearance_attributes");
    assert_eq!(err.rule, ValidationRule::AppearanceIncompatible);

    Question::builder(QuestionType::Date, "month", "Month")
        .appearance(AppearanceAttribute::MonthYear)
        .build()
        .expect("month-year date");
}

#[test]
fn hidden_appearance_suits_every_type() {
    for &kind in QuestionType::ALL {
        complete_draft(kind, "q")
            .appearance(AppearanceAttribute::Hidden)
            .build()
            .unwrap_or_else(|err| panic!("hidden on {kind}: {err}"));
    }
    QuestionGroup::builder("g", "G")
        .appearance(AppearanceAttribute::Hidden)
        .build()
        .expect("hidden group");
}

#[test]
fn unknown_tokens_are_rejected() {
    let draft = QuestionDraft {
        kind: Some("slider".into()),
        name: Some("q".into()),
        label: Some("Q".into()),
        ..QuestionDraft::default()
    };
    let err = Validator::standard().question(draft).expect_err("slider");
    assert_eq!(err.rule, ValidationRule::UnknownType);
    assert_eq!(err.value.as_deref(), Some("slider"));

    let draft = QuestionDraft {
        appearance_attributes: Some("sparkly".into()),
        ..Question::builder(QuestionType::Text, "q", "Q")
    };
    let err = Validator::standard().question(draft).expect_err("sparkly");
    assert_eq!(err.field, "appearance_attributes");
    assert_eq!(err.rule, ValidationRule::InvalidValue);
}

#[test]
fn names_must_be_single_words() {
    for name in ["", "  ", "two words"] {
        let err = Question::builder(QuestionType::Text, name, "Q")
            .build()
            .expect_err("bad name");
        assert_eq!(err.field, "name");
    }
}

#[test]
fn blank_text_and_empty_containers_become_absent() {
    let draft = QuestionDraft {
        default: Some(String::new()),
        hint: Some(String::new()),
        logics: Some(Vec::new()),
        parameters: Some(Default::default()),
        ..Question::builder(QuestionType::Text, "q", "Q")
    };
    let question = Validator::standard().question(draft).expect("valid");
    assert_eq!(question.default(), None);
    assert_eq!(question.hint(), None);
    assert!(question.logics().is_empty());
    assert_eq!(question.parameters(), None);
    assert_eq!(
        serde_json::to_value(&question).unwrap(),
        json!({"type": "text", "name": "q", "label": "Q"})
    );
}

#[test]
fn whitespace_only_text_reads_as_blank() {
    let question = Question::builder(QuestionType::SelectOne, "q", " \t")
        .hint("  ")
        .calculation(" ")
        .choice(" ", "  ")
        .build()
        .expect("valid");
    assert_eq!(question.label(), "");
    assert_eq!(question.hint(), None);
    assert_eq!(question.choices(), Some(&[Choice::new("", "")][..]));

    let group = QuestionGroup::builder("g", "  ").build().expect("valid group");
    assert_eq!(group.label(), "");
}

#[test]
fn choice_questions_need_distinct_names_across_the_tree() {
    let err = Survey::builder("s", "S")
        .item(Question::builder(QuestionType::SelectOne, "c", "First").choice("a", "A"))
        .item(
            QuestionGroup::builder("g", "G").item(
                Question::builder(QuestionType::SelectMultiple, "c", "Second").choice("b", "B"),
            ),
        )
        .build()
        .expect_err("shared choice list name");
    assert_eq!(err.entity, EntityKind::Question);
    assert_eq!(err.field, "name");
    assert_eq!(err.rule, ValidationRule::DuplicateName);
    assert_eq!(err.value.as_deref(), Some("c"));
    assert!(err.to_string().contains("duplicate_name"));

    Survey::builder("s", "S")
        .item(Question::builder(QuestionType::Text, "c", "Text"))
        .item(
            QuestionGroup::builder("g", "G")
                .item(Question::builder(QuestionType::SelectOne, "c", "Pick").choice("a", "A")),
        )
        .build()
        .expect("only choice questions share the choices sheet");
}

#[test]
fn logic_messages_only_survive_on_constraints() {
    let logic: Logic = serde_json::from_value(json!({
        "type": "relevant",
        "expression": "${age} > 18",
        "message": "ignored"
    }))
    .expect("valid logic");
    assert_eq!(logic.kind(), LogicType::Relevant);
    assert_eq!(logic.message(), None);

    let logic: Logic = serde_json::from_value(json!({
        "type": "constraint",
        "expression": ". < 120",
        "message": "too old"
    }))
    .expect("valid logic");
    assert_eq!(logic.message(), Some("too old"));

    let err = serde_json::from_value::<Logic>(json!({"type": "jump", "expression": "x"}))
        .expect_err("unknown logic type");
    assert!(err.to_string().contains("unknown_type"));
}

#[test]
fn logic_helpers_match_deserialized_logic() {
    let relevant = Logic::new(LogicType::Relevant, "${age} > 18").expect("valid logic");
    let parsed: Logic =
        serde_json::from_value(json!({"type": "relevant", "expression": "${age} > 18"}))
            .expect("valid logic");
    assert_eq!(relevant, parsed);

    let constraint = Logic::constraint(". < 120", "too old").expect("valid logic");
    assert_eq!(constraint.kind(), LogicType::Constraint);
    assert_eq!(constraint.message(), Some("too old"));
}

#[test]
fn repeat_type_and_count_go_together() {
    let group = QuestionGroup::builder("members", "Members")
        .kind(GroupType::Repeat)
        .repeat_count(3u64)
        .build()
        .expect("explicit repeat");
    assert_eq!(group.kind(), GroupType::Repeat);

    let err = QuestionGroup::builder("members", "Members")
        .kind(GroupType::Repeat)
        .build()
        .expect_err("repeat without count");
    assert_eq!(err.entity, EntityKind::Group);
    assert_eq!(err.rule, ValidationRule::RepeatWithoutCount);
    assert_eq!(err.name.as_deref(), Some("members"));

    let group = QuestionGroup::builder("members", "Members")
        .repeat_count("${household_size}")
        .build()
        .expect("count implies repeat");
    assert_eq!(group.kind(), GroupType::Repeat);
    assert_eq!(
        group.repeat_count(),
        Some(&RepeatCount::Expression("${household_size}".into()))
    );

    let group = QuestionGroup::builder("members", "Members")
        .repeat_count("5")
        .build()
        .expect("literal count");
    assert_eq!(group.repeat_count(), Some(&RepeatCount::Count(5)));
}

#[test]
fn group_appearance_is_checked_against_begin() {
    QuestionGroup::builder("page", "Page")
        .appearance(AppearanceAttribute::FieldList)
        .build()
        .expect("field-list group");

    let err = QuestionGroup::builder("page", "Page")
        .appearance(AppearanceAttribute::Multiline)
        .build()
        .expect_err("multiline group");
    assert_eq!(err.rule, ValidationRule::AppearanceIncompatible);
}

#[test]
fn nested_errors_name_the_innermost_entity() {
    let draft = GroupDraft::new("outer", "Outer").item(
        GroupDraft::new("inner", "Inner").item(Question::builder(
            QuestionType::Text,
            "FROM",
            "From",
        )),
    );
    let err = Validator::standard().group(draft).expect_err("reserved");
    assert_eq!(err.entity, EntityKind::Question);
    assert_eq!(err.name.as_deref(), Some("FROM"));
}

#[test]
fn injected_tables_replace_the_standard_ones() {
    let tables = CompatTables::new(["forbidden"], BASE_APPEARANCE_COMBOS.iter().copied());
    let validator = Validator::new(&tables);

    validator
        .question(Question::builder(QuestionType::Text, "SELECT", "Select"))
        .expect("SELECT is not reserved here");
    let err = validator
        .question(Question::builder(QuestionType::Text, "forbidden", "No"))
        .expect_err("injected word");
    assert_eq!(err.rule, ValidationRule::ReservedName);
}

#[test]
fn deserializing_an_entity_runs_the_validator() {
    let err = serde_json::from_value::<Survey>(json!({
        "name": "s",
        "label": "S",
        "items": [{"type": "text", "name": "SELECT", "label": "x"}]
    }))
    .expect_err("reserved name inside the tree");
    assert!(err.to_string().contains("reserved_name"), "{err}");

    let survey: Survey = serde_json::from_value(json!({
        "name": "s",
        "label": "S",
        "items": [
            {"name": "g", "label": "G", "items": [
                {"type": "integer", "name": "n", "label": "N"}
            ]}
        ]
    }))
    .expect("valid survey");
    assert_eq!(survey.question_count(), 1);
    assert!(survey.items()[0].as_group().is_some());
}

#[test]
fn surveys_need_a_name() {
    let err = Survey::builder("", "Untitled")
        .build()
        .expect_err("empty survey name");
    assert_eq!(err.entity, EntityKind::Survey);
    assert_eq!(err.rule, ValidationRule::MissingRequired);
}
