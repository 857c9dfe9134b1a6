use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{Answer, CategoryName};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("summary needs at least one question")]
    Empty,

    #[error("answered {answered} questions but the category holds {total}")]
    CountMismatch { total: usize, answered: usize },

    #[error("correct count {correct} exceeds total {total}")]
    TooManyCorrect { total: usize, correct: usize },
}

/// Aggregate summary for a finished playthrough of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    category: CategoryName,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total_questions: usize,
    correct: usize,
}

impl QuizSummary {
    /// Build a summary from already-aggregated counts.
    ///
    /// # Errors
    ///
    /// Returns `QuizSummaryError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`, `Empty` for a zero question count, and
    /// `TooManyCorrect` if `correct > total_questions`.
    pub fn new(
        category: CategoryName,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        total_questions: usize,
        correct: usize,
    ) -> Result<Self, QuizSummaryError> {
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        if total_questions == 0 {
            return Err(QuizSummaryError::Empty);
        }
        if correct > total_questions {
            return Err(QuizSummaryError::TooManyCorrect {
                total: total_questions,
                correct,
            });
        }

        Ok(Self {
            category,
            started_at,
            completed_at,
            total_questions,
            correct,
        })
    }

    /// Build a summary from the session's answer log.
    ///
    /// # Errors
    ///
    /// Returns `QuizSummaryError::CountMismatch` if the log does not cover
    /// every question, plus the `new` validations.
    pub fn from_answers(
        category: CategoryName,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        total_questions: usize,
        answers: &[Answer],
    ) -> Result<Self, QuizSummaryError> {
        if answers.len() != total_questions {
            return Err(QuizSummaryError::CountMismatch {
                total: total_questions,
                answered: answers.len(),
            });
        }
        let correct = answers.iter().filter(|answer| answer.is_correct).count();

        Self::new(category, started_at, completed_at, total_questions, correct)
    }

    #[must_use]
    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.total_questions - self.correct
    }

    /// Share of correct answers as a whole percentage, rounded to nearest.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        {
            (self.correct as f64 / self.total_questions as f64 * 100.0).round() as u32
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;
    use crate::time::fixed_now;

    fn category() -> CategoryName {
        CategoryName::new("Math").unwrap()
    }

    fn answer(id: u32, is_correct: bool) -> Answer {
        Answer::new(QuestionId::new(id), 0, is_correct)
    }

    #[test]
    fn summary_counts_answers() {
        let now = fixed_now();
        let answers = vec![answer(1, true), answer(2, false), answer(3, true)];

        let summary = QuizSummary::from_answers(category(), now, now, 3, &answers).unwrap();

        assert_eq!(summary.total_questions(), 3);
        assert_eq!(summary.correct(), 2);
        assert_eq!(summary.incorrect(), 1);
        assert_eq!(summary.percentage(), 67);
    }

    #[test]
    fn summary_rejects_incomplete_log() {
        let now = fixed_now();
        let answers = vec![answer(1, true)];

        let err = QuizSummary::from_answers(category(), now, now, 3, &answers).unwrap_err();
        assert_eq!(
            err,
            QuizSummaryError::CountMismatch {
                total: 3,
                answered: 1
            }
        );
    }

    #[test]
    fn summary_rejects_inverted_time_range() {
        let now = fixed_now();
        let earlier = now - chrono::Duration::seconds(10);

        let err = QuizSummary::new(category(), now, earlier, 3, 1).unwrap_err();
        assert_eq!(err, QuizSummaryError::InvalidTimeRange);
    }

    #[test]
    fn summary_rejects_zero_questions() {
        let now = fixed_now();
        let err = QuizSummary::new(category(), now, now, 0, 0).unwrap_err();
        assert_eq!(err, QuizSummaryError::Empty);
    }

    #[test]
    fn summary_rejects_correct_above_total() {
        let now = fixed_now();
        let err = QuizSummary::new(category(), now, now, 2, 3).unwrap_err();
        assert_eq!(
            err,
            QuizSummaryError::TooManyCorrect {
                total: 2,
                correct: 3
            }
        );
    }

    #[test]
    fn percentage_rounds_to_nearest_whole() {
        let now = fixed_now();
        let one_of_three = QuizSummary::new(category(), now, now, 3, 1).unwrap();
        assert_eq!(one_of_three.percentage(), 33);

        let all = QuizSummary::new(category(), now, now, 3, 3).unwrap();
        assert_eq!(all.percentage(), 100);

        let none = QuizSummary::new(category(), now, now, 3, 0).unwrap();
        assert_eq!(none.percentage(), 0);
    }
}
