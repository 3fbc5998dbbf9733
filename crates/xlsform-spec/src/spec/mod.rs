pub mod choice;
pub mod group;
pub mod logic;
pub mod question;
pub mod survey;
pub mod types;

pub use choice::{Choice, Range};
pub use group::{GroupDraft, Item, ItemDraft, QuestionGroup, RepeatCount};
pub use logic::{Logic, LogicDraft};
pub use question::{Question, QuestionDraft};
pub use survey::{Survey, SurveyDraft};
pub use types::{
    AppearanceAttribute, AppearanceTarget, GroupType, LogicType, QuestionType, UnknownToken,
};
