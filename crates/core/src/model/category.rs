use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    EmptyName,

    #[error("category must hold at least one question")]
    NoQuestions,

    #[error("duplicate question id {0} within category")]
    DuplicateQuestionId(QuestionId),
}

//
// ─── CATEGORY NAME ─────────────────────────────────────────────────────────────
//

/// Validated category name (trimmed, non-empty). Unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a validated category name.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` if the name is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── CATEGORY ICON ─────────────────────────────────────────────────────────────
//

/// Opaque presentation handle for a category.
///
/// The core assigns no meaning to the variants; the presentation layer maps
/// them to whatever glyphs it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    MapPin,
    Calculator,
    Globe,
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// A named, fixed set of questions sharing a topic.
///
/// Immutable once built; the full catalog is fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: CategoryName,
    icon: CategoryIcon,
    questions: Vec<Question>,
}

impl Category {
    /// Creates a validated category.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::NoQuestions` for an empty question list and
    /// `CategoryError::DuplicateQuestionId` when two questions share an id.
    pub fn new(
        name: CategoryName,
        icon: CategoryIcon,
        questions: Vec<Question>,
    ) -> Result<Self, CategoryError> {
        if questions.is_empty() {
            return Err(CategoryError::NoQuestions);
        }
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(CategoryError::DuplicateQuestionId(question.id()));
            }
        }

        Ok(Self {
            name,
            icon,
            questions,
        })
    }

    // Accessors
    #[must_use]
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    #[must_use]
    pub fn icon(&self) -> CategoryIcon {
        self.icon
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions in this category. Always at least one.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn build_question(id: u32) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Q{id}"),
            vec!["a".to_string(), "b".to_string()],
            0,
        )
        .unwrap()
    }

    #[test]
    fn category_name_rejects_empty() {
        let err = CategoryName::new("   ").unwrap_err();
        assert_eq!(err, CategoryError::EmptyName);
    }

    #[test]
    fn category_name_trims() {
        let name = CategoryName::new("  Geography  ").unwrap();
        assert_eq!(name.as_str(), "Geography");
    }

    #[test]
    fn category_rejects_empty_question_list() {
        let name = CategoryName::new("Math").unwrap();
        let err = Category::new(name, CategoryIcon::Calculator, Vec::new()).unwrap_err();
        assert_eq!(err, CategoryError::NoQuestions);
    }

    #[test]
    fn category_rejects_duplicate_question_ids() {
        let name = CategoryName::new("Math").unwrap();
        let err = Category::new(
            name,
            CategoryIcon::Calculator,
            vec![build_question(1), build_question(1)],
        )
        .unwrap_err();
        assert_eq!(err, CategoryError::DuplicateQuestionId(QuestionId::new(1)));
    }

    #[test]
    fn category_happy_path() {
        let name = CategoryName::new("Math").unwrap();
        let category = Category::new(
            name,
            CategoryIcon::Calculator,
            vec![build_question(1), build_question(2)],
        )
        .unwrap();

        assert_eq!(category.name().as_str(), "Math");
        assert_eq!(category.icon(), CategoryIcon::Calculator);
        assert_eq!(category.question_count(), 2);
        assert_eq!(category.question(0).unwrap().id(), QuestionId::new(1));
        assert!(category.question(2).is_none());
    }
}
