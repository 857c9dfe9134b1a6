use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Category, CategoryError, CategoryIcon, CategoryName, Question, QuestionError, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must hold at least one category")]
    NoCategories,

    #[error("duplicate category name: {0}")]
    DuplicateCategory(String),

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Question(#[from] QuestionError),
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The quiz content store: every category with its questions, fixed for the
/// lifetime of the process.
///
/// Read-only after construction; share it by `Arc` across however many
/// sessions run against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Creates a catalog from a list of categories.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NoCategories` for an empty list and
    /// `CatalogError::DuplicateCategory` when two categories share a name.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::NoCategories);
        }
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.name().as_str().to_owned()) {
                return Err(CatalogError::DuplicateCategory(
                    category.name().as_str().to_owned(),
                ));
            }
        }

        Ok(Self { categories })
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks a category up by its (trimmed) name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        let name = name.trim();
        self.categories
            .iter()
            .find(|category| category.name().as_str() == name)
    }

    /// The compiled-in catalog the shipped app plays: Geography, Math and
    /// General knowledge, three four-option questions each.
    ///
    /// # Panics
    ///
    /// Panics if the builtin data fails validation, which would be a bug in
    /// this module.
    #[must_use]
    pub fn builtin() -> Self {
        builtin_catalog().expect("builtin catalog should be valid")
    }
}

fn question(
    id: u32,
    text: &str,
    options: [&str; 4],
    correct_index: usize,
) -> Result<Question, QuestionError> {
    Question::new(
        QuestionId::new(id),
        text,
        options.iter().map(ToString::to_string).collect(),
        correct_index,
    )
}

fn builtin_catalog() -> Result<Catalog, CatalogError> {
    let geography = Category::new(
        CategoryName::new("Geography")?,
        CategoryIcon::MapPin,
        vec![
            question(
                1,
                "What is the capital of France?",
                ["London", "Paris", "Berlin", "Madrid"],
                1,
            )?,
            question(
                2,
                "Which is the longest river?",
                ["Amazon", "Nile", "Yangtze", "Mississippi"],
                1,
            )?,
            question(
                3,
                "What is the largest ocean?",
                ["Atlantic", "Indian", "Pacific", "Arctic"],
                2,
            )?,
        ],
    )?;

    let math = Category::new(
        CategoryName::new("Math")?,
        CategoryIcon::Calculator,
        vec![
            question(1, "What is 2 + 2?", ["3", "4", "5", "6"], 1)?,
            question(2, "What is 5 * 3?", ["10", "15", "20", "25"], 1)?,
            question(3, "What is the square root of 16?", ["2", "4", "8", "16"], 1)?,
        ],
    )?;

    let general = Category::new(
        CategoryName::new("General")?,
        CategoryIcon::Globe,
        vec![
            question(1, "What color is the sky?", ["Green", "Blue", "Red", "Yellow"], 1)?,
            question(2, "How many days in a week?", ["5", "6", "7", "8"], 2)?,
            question(
                3,
                "What is the capital of Japan?",
                ["Seoul", "Beijing", "Tokyo", "Bangkok"],
                2,
            )?,
        ],
    )?;

    Catalog::new(vec![geography, math, general])
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
