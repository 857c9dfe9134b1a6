mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{
    CategoryCardVm, OptionFeedback, OptionVm, QuestionVm, QuizIntent, QuizVm, ResultsVm,
    RevealVm, ScreenKind, icon_glyph,
};
pub use time_fmt::format_datetime;
