use std::collections::BTreeSet;

use once_cell::sync::Lazy;

use crate::reserved::RESERVED_NAMES;
use crate::spec::types::{AppearanceAttribute, AppearanceTarget, QuestionType};

/// Appearance attributes and the targets they are legal on, `hidden` excepted.
pub const BASE_APPEARANCE_COMBOS: &[(AppearanceAttribute, AppearanceTarget)] = {
    use AppearanceAttribute as A;
    use AppearanceTarget::{GroupBegin as Begin, Question as Q};
    use QuestionType as T;
    &[
        (A::Minimal, Q(T::SelectOne)),
        (A::Minimal, Q(T::SelectMultiple)),
        (A::Minimal, Q(T::Barcode)),
        (A::Minimal, Begin),
        (A::MinimalCompact, Begin),
        (A::Compact, Q(T::SelectOne)),
        (A::Compact, Q(T::SelectMultiple)),
        (A::Compact, Begin),
        (A::Horizontal, Q(T::SelectOne)),
        (A::Horizontal, Q(T::SelectMultiple)),
        (A::HorizontalCompact, Q(T::SelectOne)),
        (A::HorizontalCompact, Q(T::SelectMultiple)),
        (A::ImageMap, Q(T::SelectOne)),
        (A::ImageMap, Q(T::SelectMultiple)),
        (A::Autocomplete, Q(T::SelectOne)),
        (A::Likert, Q(T::SelectOne)),
        (A::Multiline, Q(T::Text)),
        (A::Multiline, Q(T::Image)),
        (A::Multiline, Q(T::File)),
        (A::PredictiveText, Q(T::Text)),
        (A::NoPredictiveText, Q(T::Text)),
        (A::Year, Q(T::Date)),
        (A::MonthYear, Q(T::Date)),
        (A::WeekNumber, Q(T::Date)),
        (A::Distress, Q(T::Integer)),
        (A::Spinner, Q(T::Integer)),
        (A::Spinner, Q(T::Decimal)),
        (A::Numbers, Q(T::Integer)),
        (A::Numbers, Q(T::Decimal)),
        (A::Calculator, Q(T::Integer)),
        (A::Calculator, Q(T::Decimal)),
        (A::ThousandsSep, Q(T::Decimal)),
        (A::NoTicks, Q(T::Range)),
        (A::Draw, Q(T::Image)),
        (A::Annotate, Q(T::Image)),
        (A::Signature, Q(T::Image)),
        (A::NewRear, Q(T::Image)),
        (A::NewFront, Q(T::Image)),
        (A::FieldList, Begin),
        (A::TableList, Begin),
        (A::Geocode, Q(T::Text)),
        (A::HideInput, Q(T::Geopoint)),
        (A::PressToLocate, Q(T::Geopoint)),
        (A::PressToLocate, Q(T::Geotrace)),
        (A::PressToLocate, Q(T::Geoshape)),
        (A::Spike, Q(T::Image)),
        (A::SpikeFullMeasure, Q(T::Image)),
        (A::SpikePointToPoint, Q(T::Image)),
    ]
};

static STANDARD: Lazy<CompatTables> = Lazy::new(|| {
    CompatTables::new(
        RESERVED_NAMES.iter().copied(),
        BASE_APPEARANCE_COMBOS.iter().copied(),
    )
});

/// Static relations consulted by the validator: names a question may not use
/// and the appearance/type pairs that are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatTables {
    reserved: BTreeSet<String>,
    appearance: BTreeSet<(AppearanceAttribute, AppearanceTarget)>,
}

impl CompatTables {
    /// Builds tables from a reserved-name list and an appearance allow-list.
    /// `hidden` is granted on every target regardless of `combos`.
    pub fn new<S>(
        reserved: impl IntoIterator<Item = S>,
        combos: impl IntoIterator<Item = (AppearanceAttribute, AppearanceTarget)>,
    ) -> Self
    where
        S: Into<String>,
    {
        let mut appearance: BTreeSet<_> = combos.into_iter().collect();
        appearance.extend(
            AppearanceTarget::all().map(|target| (AppearanceAttribute::Hidden, target)),
        );
        Self {
            reserved: reserved.into_iter().map(Into::into).collect(),
            appearance,
        }
    }

    /// The process-wide tables, built on first use.
    pub fn standard() -> &'static CompatTables {
        &STANDARD
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    pub fn allows(&self, attribute: AppearanceAttribute, target: AppearanceTarget) -> bool {
        self.appearance.contains(&(attribute, target))
    }

    pub fn reserved_len(&self) -> usize {
        self.reserved.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_hold_sql_tokens() {
        let tables = CompatTables::standard();
        assert!(tables.is_reserved("SELECT"));
        assert!(tables.is_reserved("WITHIN GROUP"));
        assert!(!tables.is_reserved("select"));
        assert!(tables.reserved_len() > 900);
    }

    #[test]
    fn hidden_is_allowed_everywhere() {
        let tables = CompatTables::new(Vec::<String>::new(), []);
        for target in AppearanceTarget::all() {
            assert!(tables.allows(AppearanceAttribute::Hidden, target));
        }
        assert!(!tables.allows(
            AppearanceAttribute::Multiline,
            AppearanceTarget::Question(QuestionType::Text)
        ));
    }

    #[test]
    fn dashed_attributes_are_found() {
        let tables = CompatTables::standard();
        assert!(tables.allows(
            AppearanceAttribute::MonthYear,
            AppearanceTarget::Question(QuestionType::Date)
        ));
        assert!(tables.allows(AppearanceAttribute::FieldList, AppearanceTarget::GroupBegin));
        assert!(!tables.allows(
            AppearanceAttribute::Multiline,
            AppearanceTarget::Question(QuestionType::Integer)
        ));
    }
}
