use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::model::{Answer, Category, Question, QuizSummary};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── ADVANCE OUTCOME ───────────────────────────────────────────────────────────
//

/// What happened after stepping past a revealed question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Another question is waiting.
    Continue,
    /// That was the last question; the playthrough is finished.
    Completed,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One playthrough of one category.
///
/// Walks the category's fixed question sequence, recording an `Answer` per
/// question and keeping the running score. The reveal state is ephemeral:
/// `Some(index)` between a committed answer and the following `advance`.
///
/// Single-owner by design; nothing here is shared or async.
pub struct QuizSession {
    category: Category,
    current: usize,
    score: usize,
    answers: Vec<Answer>,
    revealed: Option<usize>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a fresh playthrough of the given category.
    ///
    /// A validated `Category` always holds at least one question, so this
    /// cannot fail. `started_at` should come from the controller's clock to
    /// keep time deterministic.
    #[must_use]
    pub fn new(category: Category, started_at: DateTime<Utc>) -> Self {
        Self {
            category,
            current: 0,
            score: 0,
            answers: Vec::new(),
            revealed: None,
            started_at,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Current score: the number of correct answers committed so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Every answer committed so far, in question order.
    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Total number of questions in this playthrough.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.category.question_count()
    }

    /// Number of questions that have already been answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of questions not yet stepped past.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total_questions().saturating_sub(self.current)
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.category.question(self.current)
    }

    /// The option chosen for the current question, once revealed.
    #[must_use]
    pub fn revealed_option(&self) -> Option<usize> {
        self.revealed
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed.is_some()
    }

    /// Commit an answer for the current question and reveal its feedback.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after the last question,
    /// `SessionError::AlreadyRevealed` if this question was already
    /// answered, and `SessionError::InvalidOption` for an out-of-range
    /// index. All rejections leave the session untouched.
    pub fn submit_answer(&mut self, option_index: usize) -> Result<&Answer, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if self.revealed.is_some() {
            return Err(SessionError::AlreadyRevealed);
        }
        let question = self
            .current_question()
            .ok_or(SessionError::Completed)?;
        let len = question.option_count();
        if option_index >= len {
            return Err(SessionError::InvalidOption {
                index: option_index,
                len,
            });
        }

        let answer = Answer::new(question.id(), option_index, question.is_correct(option_index));
        if answer.is_correct {
            self.score += 1;
        }
        self.answers.push(answer);
        self.revealed = Some(option_index);

        self.answers.last().ok_or(SessionError::Completed)
    }

    /// Step past a revealed question.
    ///
    /// `now` should come from the controller's clock; it stamps
    /// `completed_at` when the last question is stepped past.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the playthrough is finished and
    /// `SessionError::NotRevealed` before an answer has been committed for
    /// the current question. The question index is unchanged on rejection.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<AdvanceOutcome, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if self.revealed.is_none() {
            return Err(SessionError::NotRevealed);
        }

        self.revealed = None;
        self.current += 1;
        if self.current >= self.total_questions() {
            self.completed_at = Some(now);
            Ok(AdvanceOutcome::Completed)
        } else {
            Ok(AdvanceOutcome::Continue)
        }
    }

    /// Build the results summary for a finished playthrough.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` while questions remain.
    pub fn build_summary(&self) -> Result<QuizSummary, SessionError> {
        let completed_at = self.completed_at.ok_or(SessionError::NotFinished)?;
        Ok(QuizSummary::from_answers(
            self.category.name().clone(),
            self.started_at,
            completed_at,
            self.total_questions(),
            &self.answers,
        )?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("category", &self.category.name().as_str())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("answers_len", &self.answers.len())
            .field("revealed", &self.revealed)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
