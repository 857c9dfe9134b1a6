use crate::vm::QuizIntent;

use super::test_harness::setup_view_harness;

#[test]
fn select_screen_lists_builtin_categories() {
    let mut harness = setup_view_harness(None);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Select a Category"), "missing title in {html}");
    for name in ["Geography", "Math", "General"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
}

#[test]
fn choosing_a_category_shows_the_first_question() {
    let mut harness = setup_view_harness(None);
    harness.rebuild();

    harness.dispatch(QuizIntent::ChooseCategory("Math".to_string()));

    let html = harness.render();
    assert!(html.contains("Quiz Game - Math"), "missing header in {html}");
    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("What is 2 + 2?"), "missing question in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
}

#[test]
fn correct_answer_reveals_feedback_and_advance() {
    let mut harness = setup_view_harness(None);
    harness.rebuild();
    harness.dispatch(QuizIntent::ChooseCategory("Math".to_string()));

    harness.dispatch(QuizIntent::SelectOption(1));

    let html = harness.render();
    assert!(html.contains("Correct!"), "missing feedback in {html}");
    assert!(html.contains("Next Question"), "missing advance in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");
}

#[test]
fn wrong_answer_names_the_correct_option() {
    let mut harness = setup_view_harness(None);
    harness.rebuild();
    harness.dispatch(QuizIntent::ChooseCategory("Math".to_string()));

    harness.dispatch(QuizIntent::SelectOption(0));

    let html = harness.render();
    assert!(
        html.contains("Incorrect. The correct answer is 4"),
        "missing feedback in {html}"
    );
    assert!(html.contains("Score: 0"), "missing score in {html}");
}

#[test]
fn last_question_offers_results_instead_of_next() {
    let mut harness = setup_view_harness(None);
    harness.rebuild();
    harness.dispatch(QuizIntent::ChooseCategory("Math".to_string()));
    for _ in 0..2 {
        harness.dispatch(QuizIntent::SelectOption(1));
        harness.dispatch(QuizIntent::Advance);
    }

    harness.dispatch(QuizIntent::SelectOption(1));

    let html = harness.render();
    assert!(html.contains("View Results"), "missing results button in {html}");
}

#[test]
fn finishing_renders_the_dashboard_and_restart_returns() {
    let mut harness = setup_view_harness(None);
    harness.rebuild();
    harness.dispatch(QuizIntent::ChooseCategory("Math".to_string()));
    for choice in [1, 0, 1] {
        harness.dispatch(QuizIntent::SelectOption(choice));
        harness.dispatch(QuizIntent::Advance);
    }

    let html = harness.render();
    assert!(html.contains("Quiz Dashboard"), "missing dashboard in {html}");
    assert!(html.contains("Category: Math"), "missing category in {html}");
    assert!(html.contains("Completion: 67%"), "missing percentage in {html}");
    assert!(html.contains("Play Again"), "missing restart in {html}");

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Select a Category"), "missing selection in {html}");
}

#[test]
fn start_category_jumps_straight_into_the_quiz() {
    let mut harness = setup_view_harness(Some("General"));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Quiz Game - General"), "missing header in {html}");
    assert!(html.contains("What color is the sky?"), "missing question in {html}");
}

#[test]
fn rejected_intents_leave_the_screen_alone() {
    let mut harness = setup_view_harness(None);
    harness.rebuild();

    // Nothing to advance or restart yet; the view must stay on selection.
    harness.dispatch(QuizIntent::Advance);
    harness.dispatch(QuizIntent::Restart);

    let html = harness.render();
    assert!(html.contains("Select a Category"), "missing selection in {html}");
}
