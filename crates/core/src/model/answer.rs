use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;

/// Record of a single committed answer.
///
/// Created exactly once per question when the user commits a choice and
/// never mutated afterwards; the session appends it to its answer log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub selected_index: usize,
    pub is_correct: bool,
}

impl Answer {
    #[must_use]
    pub fn new(question_id: QuestionId, selected_index: usize, is_correct: bool) -> Self {
        Self {
            question_id,
            selected_index,
            is_correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_creation_works() {
        let answer = Answer::new(QuestionId::new(3), 1, true);
        assert_eq!(answer.question_id, QuestionId::new(3));
        assert_eq!(answer.selected_index, 1);
        assert!(answer.is_correct);
    }
}
