use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// A type token that does not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{token}`")]
pub struct UnknownToken {
    pub kind: &'static str,
    pub token: String,
}

/// Declares a closed set of XLSForm tokens with their textual forms.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownToken;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == token)
                    .ok_or_else(|| UnknownToken {
                        kind: $kind,
                        token: token.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = String::deserialize(deserializer)?;
                token.parse().map_err(de::Error::custom)
            }
        }
    };
}

token_enum! {
    /// Question kinds understood by XLSForm tooling.
    ///
    /// `End` is the metadata question recording when a submission was
    /// finished; group end markers in the survey sheet always carry a group
    /// kind (`end group`) and never decode to this variant.
    QuestionType ("question type") {
        Text => "text",
        Integer => "integer",
        Decimal => "decimal",
        Date => "date",
        Time => "time",
        DateTime => "dateTime",
        SelectOne => "select_one",
        SelectMultiple => "select_multiple",
        SelectOneFromFile => "select_one_from_file",
        SelectMultipleFromFile => "select_multiple_from_file",
        Rank => "rank",
        Range => "range",
        Note => "note",
        Geopoint => "geopoint",
        Geotrace => "geotrace",
        Geoshape => "geoshape",
        Image => "image",
        Audio => "audio",
        File => "file",
        Barcode => "barcode",
        Calculate => "calculate",
        Hidden => "hidden",
        Username => "username",
        Email => "email",
        Start => "start",
        End => "end",
        DeviceId => "deviceid",
    }
}

impl QuestionType {
    /// Kinds whose options live in the `choices` sheet under the question's name.
    pub const WITH_CHOICES: &'static [QuestionType] = &[
        QuestionType::Rank,
        QuestionType::SelectOne,
        QuestionType::SelectMultiple,
    ];

    pub const GEO: &'static [QuestionType] = &[
        QuestionType::Geopoint,
        QuestionType::Geotrace,
        QuestionType::Geoshape,
    ];

    pub const FROM_FILE: &'static [QuestionType] = &[
        QuestionType::SelectOneFromFile,
        QuestionType::SelectMultipleFromFile,
    ];

    pub fn has_choices(self) -> bool {
        Self::WITH_CHOICES.contains(&self)
    }
}

token_enum! {
    /// Kind of a question group.
    GroupType ("group type") {
        Group => "group",
        Repeat => "repeat",
    }
}

impl Default for GroupType {
    fn default() -> Self {
        GroupType::Group
    }
}

token_enum! {
    /// How a logic expression affects its question or group.
    LogicType ("logic type") {
        Trigger => "trigger",
        Skip => "skip",
        Relevant => "relevant",
        Constraint => "constraint",
    }
}

token_enum! {
    /// Presentation hints accepted in the `appearance` column.
    AppearanceAttribute ("appearance attribute") {
        Multiline => "multiline",
        Minimal => "minimal",
        Quick => "quick",
        NoCalendar => "no-calendar",
        MonthYear => "month-year",
        Year => "year",
        HorizontalCompact => "horizontal-compact",
        Horizontal => "horizontal",
        Likert => "likert",
        Compact => "compact",
        QuickCompact => "quickcompact",
        FieldList => "field-list",
        Label => "label",
        ListNolabel => "list-nolabel",
        TableList => "table-list",
        Signature => "signature",
        Draw => "draw",
        Map => "map",
        QuickMap => "quick map",
        MinimalCompact => "minimal compact",
        ImageMap => "image-map",
        Autocomplete => "autocomplete",
        PredictiveText => "predictivetext",
        NoPredictiveText => "nopredictivetext",
        WeekNumber => "week-number",
        Distress => "distress",
        Spinner => "spinner",
        Numbers => "numbers",
        Calculator => "calculator",
        ThousandsSep => "thousands-sep",
        NoTicks => "no-ticks",
        Annotate => "annotate",
        NewRear => "new-rear",
        NewFront => "new-front",
        Hidden => "hidden",
        Geocode => "geocode",
        HideInput => "hide-input",
        PressToLocate => "press-to-locate",
        Spike => "spike",
        SpikeFullMeasure => "spike-full-measure",
        SpikePointToPoint => "spike-point-to-point",
    }
}

/// What an appearance attribute is attached to: a question of some type, or
/// the `begin` row of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppearanceTarget {
    Question(QuestionType),
    GroupBegin,
}

impl AppearanceTarget {
    /// Every target, used to grant `hidden` everywhere.
    pub fn all() -> impl Iterator<Item = AppearanceTarget> {
        QuestionType::ALL
            .iter()
            .copied()
            .map(AppearanceTarget::Question)
            .chain(std::iter::once(AppearanceTarget::GroupBegin))
    }
}

impl fmt::Display for AppearanceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppearanceTarget::Question(kind) => kind.fmt(f),
            AppearanceTarget::GroupBegin => f.write_str("begin"),
        }
    }
}
