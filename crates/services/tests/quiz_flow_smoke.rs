use std::sync::Arc;

use quiz_core::Catalog;
use quiz_core::time::fixed_clock;
use services::{QuizController, Screen};

fn play(controller: &mut QuizController, category: &str, choices: &[usize]) {
    controller.choose_category(category).unwrap();
    for &choice in choices {
        controller.submit_answer(choice).unwrap();
        controller.advance().unwrap();
    }
}

#[test]
fn math_all_correct_scores_full_marks() {
    let catalog = Arc::new(Catalog::builtin());
    let mut controller = QuizController::new(catalog, fixed_clock());

    play(&mut controller, "Math", &[1, 1, 1]);

    let summary = controller.results().expect("results screen");
    assert_eq!(summary.total_questions(), 3);
    assert_eq!(summary.correct(), 3);
    assert_eq!(summary.percentage(), 100);
}

#[test]
fn math_one_correct_scores_a_third() {
    let catalog = Arc::new(Catalog::builtin());
    let mut controller = QuizController::new(catalog, fixed_clock());

    play(&mut controller, "Math", &[0, 1, 0]);

    let summary = controller.results().expect("results screen");
    assert_eq!(summary.correct(), 1);
    assert_eq!(summary.incorrect(), 2);
    assert_eq!(summary.percentage(), 33);
}

#[test]
fn every_builtin_category_plays_through() {
    let catalog = Arc::new(Catalog::builtin());
    let names: Vec<String> = catalog
        .categories()
        .iter()
        .map(|category| category.name().as_str().to_owned())
        .collect();

    let mut controller = QuizController::new(Arc::clone(&catalog), fixed_clock());
    for name in names {
        controller.choose_category(&name).unwrap();
        let total = controller.session().unwrap().total_questions();
        for _ in 0..total {
            controller.submit_answer(0).unwrap();
            controller.advance().unwrap();
        }

        let summary = controller.results().expect("results screen");
        assert_eq!(summary.total_questions(), total);
        assert_eq!(
            usize::try_from(summary.percentage()).unwrap(),
            (summary.correct() * 100 + total / 2) / total
        );

        controller.restart().unwrap();
        assert!(matches!(controller.screen(), Screen::SelectCategory));
    }
}
