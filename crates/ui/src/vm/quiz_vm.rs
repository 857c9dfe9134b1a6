use std::sync::Arc;

use quiz_core::model::CategoryIcon;
use quiz_core::{Catalog, Clock};
use services::{FlowError, QuizController, Screen};

use crate::vm::time_fmt::format_datetime;

//
// ─── INTENTS ───────────────────────────────────────────────────────────────────
//

/// Everything the view can ask the quiz to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    ChooseCategory(String),
    SelectOption(usize),
    Advance,
    Restart,
}

/// Which screen the view should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenKind {
    SelectCategory,
    Quiz,
    Results,
}

//
// ─── PER-SCREEN VIEW MODELS ────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCardVm {
    pub name: String,
    pub glyph: &'static str,
    pub question_count: usize,
}

/// Feedback styling for one option after the reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionFeedback {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    /// `Some` only after the reveal, and only on the correct option and a
    /// wrongly chosen one.
    pub feedback: Option<OptionFeedback>,
    pub chosen: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealVm {
    pub selected_index: usize,
    pub is_correct: bool,
    pub correct_label: String,
    pub is_last_question: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub category: String,
    pub glyph: &'static str,
    /// One-based, for display.
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<OptionVm>,
    pub reveal: Option<RevealVm>,
    pub score: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub category: String,
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
    pub percentage: u32,
    pub completed_at_str: String,
}

/// Map the opaque core icon handle to a glyph the view can print.
#[must_use]
pub fn icon_glyph(icon: CategoryIcon) -> &'static str {
    match icon {
        CategoryIcon::MapPin => "📍",
        CategoryIcon::Calculator => "🧮",
        CategoryIcon::Globe => "🌍",
    }
}

//
// ─── VM ────────────────────────────────────────────────────────────────────────
//

/// View model owning the quiz controller for one window.
///
/// The view talks to it exclusively through `QuizIntent`s and the mapped
/// per-screen structs; rejected intents leave the quiz untouched.
pub struct QuizVm {
    controller: QuizController,
}

impl QuizVm {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, clock: Clock) -> Self {
        Self {
            controller: QuizController::new(catalog, clock),
        }
    }

    /// Apply an intent from the view.
    ///
    /// # Errors
    ///
    /// Passes through the controller's rejection; callers are free to
    /// ignore it (the quiz state is unchanged either way).
    pub fn apply(&mut self, intent: QuizIntent) -> Result<(), FlowError> {
        match intent {
            QuizIntent::ChooseCategory(name) => self.controller.choose_category(&name),
            QuizIntent::SelectOption(index) => self.controller.submit_answer(index),
            QuizIntent::Advance => self.controller.advance(),
            QuizIntent::Restart => self.controller.restart(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> ScreenKind {
        match self.controller.screen() {
            Screen::SelectCategory => ScreenKind::SelectCategory,
            Screen::Quiz(_) => ScreenKind::Quiz,
            Screen::Results(_) => ScreenKind::Results,
        }
    }

    /// Cards for the category-selection grid, in catalog order.
    #[must_use]
    pub fn category_cards(&self) -> Vec<CategoryCardVm> {
        self.controller
            .catalog()
            .categories()
            .iter()
            .map(|category| CategoryCardVm {
                name: category.name().as_str().to_owned(),
                glyph: icon_glyph(category.icon()),
                question_count: category.question_count(),
            })
            .collect()
    }

    /// The current question, mapped for rendering. `None` off the quiz
    /// screen.
    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        let session = self.controller.session()?;
        let question = session.current_question()?;
        let revealed = session.revealed_option();
        let correct_index = question.correct_index();

        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let feedback = revealed.and_then(|selected| {
                    if index == correct_index {
                        Some(OptionFeedback::Correct)
                    } else if index == selected {
                        Some(OptionFeedback::Incorrect)
                    } else {
                        None
                    }
                });
                OptionVm {
                    index,
                    label: label.clone(),
                    feedback,
                    chosen: revealed == Some(index),
                }
            })
            .collect();

        let reveal = revealed.map(|selected| RevealVm {
            selected_index: selected,
            is_correct: selected == correct_index,
            correct_label: question.options()[correct_index].clone(),
            is_last_question: session.current_index() + 1 == session.total_questions(),
        });

        Some(QuestionVm {
            category: session.category().name().as_str().to_owned(),
            glyph: icon_glyph(session.category().icon()),
            number: session.current_index() + 1,
            total: session.total_questions(),
            text: question.text().to_owned(),
            options,
            reveal,
            score: session.score(),
        })
    }

    /// The results dashboard numbers. `None` off the results screen.
    #[must_use]
    pub fn results(&self) -> Option<ResultsVm> {
        let summary = self.controller.results()?;
        Some(ResultsVm {
            category: summary.category().as_str().to_owned(),
            correct: summary.correct(),
            incorrect: summary.incorrect(),
            total: summary.total_questions(),
            percentage: summary.percentage(),
            completed_at_str: format_datetime(summary.completed_at()),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_clock;

    fn build_vm() -> QuizVm {
        QuizVm::new(Arc::new(Catalog::builtin()), fixed_clock())
    }

    #[test]
    fn category_cards_cover_the_catalog() {
        let vm = build_vm();
        let cards = vm.category_cards();

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].name, "Geography");
        assert_eq!(cards[0].glyph, "📍");
        assert_eq!(cards[1].question_count, 3);
        assert_eq!(vm.screen(), ScreenKind::SelectCategory);
    }

    #[test]
    fn question_vm_maps_options_and_reveal() {
        let mut vm = build_vm();
        vm.apply(QuizIntent::ChooseCategory("Math".to_string())).unwrap();

        let question = vm.question().unwrap();
        assert_eq!(question.number, 1);
        assert_eq!(question.total, 3);
        assert_eq!(question.text, "What is 2 + 2?");
        assert_eq!(question.options.len(), 4);
        assert!(question.reveal.is_none());
        assert!(question.options.iter().all(|option| option.feedback.is_none()));

        vm.apply(QuizIntent::SelectOption(0)).unwrap();
        let question = vm.question().unwrap();
        let reveal = question.reveal.unwrap();
        assert!(!reveal.is_correct);
        assert_eq!(reveal.selected_index, 0);
        assert_eq!(reveal.correct_label, "4");
        assert!(!reveal.is_last_question);
        assert_eq!(question.options[0].feedback, Some(OptionFeedback::Incorrect));
        assert_eq!(question.options[1].feedback, Some(OptionFeedback::Correct));
        assert!(question.options[0].chosen);
        assert_eq!(question.options[2].feedback, None);
    }

    #[test]
    fn rejected_intents_change_nothing() {
        let mut vm = build_vm();
        assert!(vm.apply(QuizIntent::Advance).is_err());
        assert!(vm.apply(QuizIntent::Restart).is_err());
        assert_eq!(vm.screen(), ScreenKind::SelectCategory);

        vm.apply(QuizIntent::ChooseCategory("Math".to_string())).unwrap();
        vm.apply(QuizIntent::SelectOption(1)).unwrap();
        assert!(vm.apply(QuizIntent::SelectOption(2)).is_err());
        assert_eq!(vm.question().unwrap().score, 1);
    }

    #[test]
    fn results_vm_reports_the_dashboard_numbers() {
        let mut vm = build_vm();
        vm.apply(QuizIntent::ChooseCategory("Math".to_string())).unwrap();
        for choice in [1, 0, 1] {
            vm.apply(QuizIntent::SelectOption(choice)).unwrap();
            vm.apply(QuizIntent::Advance).unwrap();
        }

        assert_eq!(vm.screen(), ScreenKind::Results);
        let results = vm.results().unwrap();
        assert_eq!(results.category, "Math");
        assert_eq!(results.correct, 2);
        assert_eq!(results.incorrect, 1);
        assert_eq!(results.total, 3);
        assert_eq!(results.percentage, 67);
        assert!(!results.completed_at_str.is_empty());

        vm.apply(QuizIntent::Restart).unwrap();
        assert_eq!(vm.screen(), ScreenKind::SelectCategory);
        assert!(vm.results().is_none());
    }
}
