use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs at least two options, got {0}")]
    TooFewOptions(usize),

    #[error("option {index} cannot be blank")]
    BlankOption { index: usize },

    #[error("correct index {index} out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A fixed-choice question: prompt text, an ordered list of options, and the
/// index of the correct one.
///
/// The canonical catalog uses four options per question, but nothing here
/// depends on that count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the prompt is empty after
    /// trimming, `TooFewOptions` for fewer than two options, `BlankOption`
    /// if any option is blank, and `CorrectIndexOutOfRange` if
    /// `correct_index` does not index into `options`.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions(options.len()));
        }
        if let Some(index) = options.iter().position(|option| option.trim().is_empty()) {
            return Err(QuestionError::BlankOption { index });
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            id,
            text: text.trim().to_owned(),
            options,
            correct_index,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// True when `index` names the correct option.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn question_new_happy_path() {
        let q = Question::new(
            QuestionId::new(1),
            "What is the capital of France?",
            options(&["London", "Paris", "Berlin", "Madrid"]),
            1,
        )
        .unwrap();

        assert_eq!(q.id(), QuestionId::new(1));
        assert_eq!(q.text(), "What is the capital of France?");
        assert_eq!(q.option_count(), 4);
        assert_eq!(q.correct_index(), 1);
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn question_rejects_empty_text() {
        let err =
            Question::new(QuestionId::new(1), "   ", options(&["a", "b"]), 0).unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn question_rejects_too_few_options() {
        let err =
            Question::new(QuestionId::new(1), "Q", options(&["only"]), 0).unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions(1));
    }

    #[test]
    fn question_rejects_blank_option() {
        let err =
            Question::new(QuestionId::new(1), "Q", options(&["a", " "]), 0).unwrap_err();
        assert_eq!(err, QuestionError::BlankOption { index: 1 });
    }

    #[test]
    fn question_rejects_out_of_range_correct_index() {
        let err = Question::new(QuestionId::new(1), "Q", options(&["a", "b"]), 2).unwrap_err();
        assert_eq!(err, QuestionError::CorrectIndexOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn question_supports_non_four_option_counts() {
        let q = Question::new(QuestionId::new(1), "Q", options(&["a", "b", "c"]), 2).unwrap();
        assert_eq!(q.option_count(), 3);
        assert!(q.is_correct(2));
    }

    #[test]
    fn question_trims_text() {
        let q = Question::new(QuestionId::new(1), "  Q  ", options(&["a", "b"]), 0).unwrap();
        assert_eq!(q.text(), "Q");
    }
}
