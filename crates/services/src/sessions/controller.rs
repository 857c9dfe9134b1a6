use std::sync::Arc;

use quiz_core::model::QuizSummary;
use quiz_core::{Catalog, Clock};

use super::service::{AdvanceOutcome, QuizSession};
use crate::error::FlowError;

//
// ─── SCREEN ────────────────────────────────────────────────────────────────────
//

/// The screen the quiz is currently on.
///
/// A sum type rather than a flag set: a quiz screen cannot exist without a
/// running session, and a results screen cannot exist without a finished
/// summary.
#[derive(Debug)]
pub enum Screen {
    SelectCategory,
    Quiz(QuizSession),
    Results(QuizSummary),
}

impl Screen {
    /// Short name for diagnostics and error reporting.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Screen::SelectCategory => "select-category",
            Screen::Quiz(_) => "quiz",
            Screen::Results(_) => "results",
        }
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Walks a user through category selection, the question sequence, and the
/// results screen.
///
/// Owns the only mutable quiz state in the program; the catalog it draws
/// from is shared read-only. Every entry point is synchronous and runs to
/// completion, and every rejection is a no-op.
pub struct QuizController {
    catalog: Arc<Catalog>,
    clock: Clock,
    screen: Screen,
}

impl QuizController {
    /// Create a controller on the category-selection screen.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, clock: Clock) -> Self {
        Self {
            catalog,
            clock,
            screen: Screen::SelectCategory,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The running session, when on the quiz screen.
    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        match &self.screen {
            Screen::Quiz(session) => Some(session),
            _ => None,
        }
    }

    /// The finished summary, when on the results screen.
    #[must_use]
    pub fn results(&self) -> Option<&QuizSummary> {
        match &self.screen {
            Screen::Results(summary) => Some(summary),
            _ => None,
        }
    }

    /// Start a playthrough of the named category.
    ///
    /// Valid only on the category-selection screen. The new session starts
    /// clean: zero score, empty answer log, first question, nothing
    /// revealed.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::WrongScreen` away from category selection and
    /// `FlowError::UnknownCategory` for a name the catalog does not hold.
    pub fn choose_category(&mut self, name: &str) -> Result<(), FlowError> {
        if !matches!(self.screen, Screen::SelectCategory) {
            return Err(FlowError::WrongScreen {
                operation: "choose_category",
                screen: self.screen.name(),
            });
        }
        let category = self
            .catalog
            .category(name)
            .ok_or_else(|| FlowError::UnknownCategory {
                name: name.trim().to_owned(),
            })?
            .clone();

        self.screen = Screen::Quiz(QuizSession::new(category, self.clock.now()));
        Ok(())
    }

    /// Commit an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::WrongScreen` off the quiz screen; session
    /// rejections (`AlreadyRevealed`, `InvalidOption`) pass through as
    /// `FlowError::Session`.
    pub fn submit_answer(&mut self, option_index: usize) -> Result<(), FlowError> {
        let Screen::Quiz(session) = &mut self.screen else {
            return Err(FlowError::WrongScreen {
                operation: "submit_answer",
                screen: self.screen.name(),
            });
        };
        session.submit_answer(option_index)?;
        Ok(())
    }

    /// Step past a revealed question; moves to the results screen after the
    /// last one.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::WrongScreen` off the quiz screen; a premature
    /// call passes through as `FlowError::Session(NotRevealed)`.
    pub fn advance(&mut self) -> Result<(), FlowError> {
        let now = self.clock.now();
        let Screen::Quiz(session) = &mut self.screen else {
            return Err(FlowError::WrongScreen {
                operation: "advance",
                screen: self.screen.name(),
            });
        };

        match session.advance(now)? {
            AdvanceOutcome::Continue => Ok(()),
            AdvanceOutcome::Completed => {
                let summary = session.build_summary()?;
                self.screen = Screen::Results(summary);
                Ok(())
            }
        }
    }

    /// Drop the finished playthrough and return to category selection.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::WrongScreen` away from the results screen.
    pub fn restart(&mut self) -> Result<(), FlowError> {
        if !matches!(self.screen, Screen::Results(_)) {
            return Err(FlowError::WrongScreen {
                operation: "restart",
                screen: self.screen.name(),
            });
        }
        self.screen = Screen::SelectCategory;
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use quiz_core::time::fixed_clock;

    fn build_controller() -> QuizController {
        QuizController::new(Arc::new(Catalog::builtin()), fixed_clock())
    }

    fn play_through(controller: &mut QuizController, choices: &[usize]) {
        for &choice in choices {
            controller.submit_answer(choice).unwrap();
            controller.advance().unwrap();
        }
    }

    #[test]
    fn starts_on_category_selection() {
        let controller = build_controller();
        assert!(matches!(controller.screen(), Screen::SelectCategory));
        assert!(controller.session().is_none());
        assert!(controller.results().is_none());
    }

    #[test]
    fn choosing_a_category_starts_a_clean_session() {
        let mut controller = build_controller();
        controller.choose_category("Math").unwrap();

        let session = controller.session().unwrap();
        assert_eq!(session.category().name().as_str(), "Math");
        assert_eq!(session.score(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_revealed());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut controller = build_controller();
        let err = controller.choose_category("History").unwrap_err();
        assert_eq!(
            err,
            FlowError::UnknownCategory {
                name: "History".to_string()
            }
        );
        assert!(matches!(controller.screen(), Screen::SelectCategory));
    }

    #[test]
    fn operations_on_the_wrong_screen_are_rejected() {
        let mut controller = build_controller();

        let err = controller.submit_answer(0).unwrap_err();
        assert!(matches!(
            err,
            FlowError::WrongScreen {
                operation: "submit_answer",
                screen: "select-category"
            }
        ));
        let err = controller.advance().unwrap_err();
        assert!(matches!(err, FlowError::WrongScreen { operation: "advance", .. }));
        let err = controller.restart().unwrap_err();
        assert!(matches!(err, FlowError::WrongScreen { operation: "restart", .. }));

        controller.choose_category("Math").unwrap();
        let err = controller.choose_category("General").unwrap_err();
        assert!(matches!(
            err,
            FlowError::WrongScreen {
                operation: "choose_category",
                screen: "quiz"
            }
        ));
        assert_eq!(controller.session().unwrap().category().name().as_str(), "Math");
    }

    #[test]
    fn session_rejections_pass_through() {
        let mut controller = build_controller();
        controller.choose_category("Math").unwrap();

        let err = controller.advance().unwrap_err();
        assert_eq!(err, FlowError::Session(SessionError::NotRevealed));

        controller.submit_answer(1).unwrap();
        let err = controller.submit_answer(1).unwrap_err();
        assert_eq!(err, FlowError::Session(SessionError::AlreadyRevealed));
    }

    #[test]
    fn full_playthrough_reaches_results() {
        let mut controller = build_controller();
        controller.choose_category("Math").unwrap();
        play_through(&mut controller, &[1, 1, 1]);

        let summary = controller.results().unwrap();
        assert_eq!(summary.correct(), 3);
        assert_eq!(summary.incorrect(), 0);
        assert_eq!(summary.percentage(), 100);
        assert_eq!(summary.category().as_str(), "Math");
    }

    #[test]
    fn restart_returns_to_a_clean_selection() {
        let mut controller = build_controller();
        controller.choose_category("Math").unwrap();
        play_through(&mut controller, &[0, 1, 0]);
        assert_eq!(controller.results().unwrap().correct(), 1);

        controller.restart().unwrap();
        assert!(matches!(controller.screen(), Screen::SelectCategory));

        controller.choose_category("General").unwrap();
        let session = controller.session().unwrap();
        assert_eq!(session.score(), 0);
        assert!(session.answers().is_empty());
    }
}
