mod answer;
mod category;
mod ids;
mod question;
mod summary;

pub use answer::Answer;
pub use category::{Category, CategoryError, CategoryIcon, CategoryName};
pub use ids::{ParseIdError, QuestionId};
pub use question::{Question, QuestionError};
pub use summary::{QuizSummary, QuizSummaryError};
