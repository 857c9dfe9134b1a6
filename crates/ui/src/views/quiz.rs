use dioxus::prelude::*;
use keyboard_types::{Code, Key};

use crate::context::AppContext;
use crate::vm::{
    CategoryCardVm, OptionFeedback, OptionVm, QuestionVm, QuizIntent, QuizVm, ResultsVm,
    ScreenKind,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The whole quiz in one screen: category grid, question sequence, results.
///
/// All quiz state lives in the `QuizVm` signal; the view only dispatches
/// intents and renders whatever screen the controller is on. Intents the
/// controller rejects are dropped without touching quiz state.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let start_category = ctx.start_category().map(ToOwned::to_owned);
    let vm = use_signal(move || {
        let mut vm = QuizVm::new(ctx.catalog(), ctx.clock());
        if let Some(name) = start_category {
            // The launcher validated the name against the catalog already.
            let _ = vm.apply(QuizIntent::ChooseCategory(name));
        }
        vm
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let _ = vm.write().apply(intent);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let question = {
            let guard = vm.read();
            guard.question()
        };
        let Some(question) = question else {
            return;
        };

        if evt.data.code() == Code::Space {
            if question.reveal.is_some() {
                evt.prevent_default();
                dispatch_intent.call(QuizIntent::Advance);
            }
            return;
        }
        if question.reveal.is_some() {
            return;
        }
        if let Key::Character(value) = evt.data.key() {
            if let Ok(digit) = value.parse::<usize>() {
                if (1..=question.options.len()).contains(&digit) {
                    evt.prevent_default();
                    dispatch_intent.call(QuizIntent::SelectOption(digit - 1));
                }
            }
        }
    });

    let vm_guard = vm.read();
    let screen = vm_guard.screen();
    let cards = vm_guard.category_cards();
    let question = vm_guard.question();
    let results = vm_guard.results();
    drop(vm_guard);

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            div { class: "quiz-card",
                match screen {
                    ScreenKind::SelectCategory => rsx! {
                        SelectCategoryPanel { cards, on_intent: dispatch_intent }
                    },
                    ScreenKind::Quiz => rsx! {
                        if let Some(question) = question {
                            QuestionPanel { question, on_intent: dispatch_intent }
                        }
                    },
                    ScreenKind::Results => rsx! {
                        if let Some(results) = results {
                            ResultsPanel { results, on_intent: dispatch_intent }
                        }
                    },
                }
            }
        }
    }
}

//
// ─── CATEGORY SELECTION ────────────────────────────────────────────────────────
//

#[component]
fn SelectCategoryPanel(
    cards: Vec<CategoryCardVm>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        header { class: "quiz-card__header",
            h2 { class: "quiz-card__title", "Select a Category" }
        }
        div { class: "quiz-card__body category-grid",
            for card in cards {
                CategoryButton { card, on_intent }
            }
        }
    }
}

#[component]
fn CategoryButton(card: CategoryCardVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let name = card.name.clone();
    rsx! {
        button {
            class: "category-button",
            id: "category-{card.name}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::ChooseCategory(name.clone())),
            span { class: "category-button__glyph", aria_hidden: "true", "{card.glyph}" }
            span { class: "category-button__name", "{card.name}" }
            span { class: "category-button__count", "{card.question_count} questions" }
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

#[component]
fn QuestionPanel(question: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let QuestionVm {
        category,
        glyph,
        number,
        total,
        text,
        options,
        reveal,
        score,
    } = question;
    let revealed = reveal.is_some();
    let progress_label = format!("Question {number} of {total}");

    rsx! {
        header { class: "quiz-card__header",
            h2 { class: "quiz-card__title", "{glyph} Quiz Game - {category}" }
            p { class: "quiz-card__context", "{progress_label}" }
        }
        div { class: "quiz-card__body",
            p { class: "question-text", "{text}" }
            div { class: "question-options",
                for option in options {
                    OptionButton { option, revealed, on_intent }
                }
            }
            if let Some(reveal) = reveal {
                div { class: "question-feedback", id: "question-feedback",
                    if reveal.is_correct {
                        p { "Correct!" }
                    } else {
                        p { "Incorrect. The correct answer is {reveal.correct_label}" }
                    }
                }
                button {
                    class: "btn btn-primary question-advance",
                    id: "question-advance",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Advance),
                    if reveal.is_last_question {
                        "View Results"
                    } else {
                        "Next Question"
                    }
                }
            }
        }
        footer { class: "quiz-card__footer",
            span { class: "quiz-footer__item", "Score: {score}" }
        }
    }
}

#[component]
fn OptionButton(
    option: OptionVm,
    revealed: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let class = match option.feedback {
        Some(OptionFeedback::Correct) => "option-button option-button--correct",
        Some(OptionFeedback::Incorrect) => "option-button option-button--incorrect",
        None => "option-button",
    };
    let index = option.index;
    let number = option.index + 1;

    rsx! {
        button {
            class: "{class}",
            id: "option-{number}",
            r#type: "button",
            disabled: revealed,
            onclick: move |_| on_intent.call(QuizIntent::SelectOption(index)),
            span { class: "option-button__key", "{number}" }
            span { class: "option-button__label", "{option.label}" }
            if option.chosen {
                span { class: "option-button__marker", aria_hidden: "true", "•" }
            }
        }
    }
}

//
// ─── RESULTS ───────────────────────────────────────────────────────────────────
//

#[component]
fn ResultsPanel(results: ResultsVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        header { class: "quiz-card__header",
            h2 { class: "quiz-card__title", "Quiz Dashboard" }
            p { class: "quiz-card__context", "Category: {results.category}" }
        }
        div { class: "quiz-card__body",
            div { class: "results-stats",
                div { class: "results-stat",
                    p { class: "results-stat__value results-stat__value--correct", "{results.correct}" }
                    p { class: "results-stat__label", "Correct" }
                }
                div { class: "results-stat",
                    p { class: "results-stat__value results-stat__value--incorrect", "{results.incorrect}" }
                    p { class: "results-stat__label", "Incorrect" }
                }
                div { class: "results-stat",
                    p { class: "results-stat__value", "{results.total}" }
                    p { class: "results-stat__label", "Total" }
                }
            }
            div { class: "results-completion",
                p { "Completion: {results.percentage}%" }
                div { class: "results-bar",
                    div {
                        class: "results-bar__fill",
                        style: "width: {results.percentage}%",
                    }
                }
            }
            p { class: "results-completed-at", "Completed: {results.completed_at_str}" }
            button {
                class: "btn btn-primary results-restart",
                id: "results-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Play Again"
            }
        }
    }
}

//
// ─── TEST HANDLES ──────────────────────────────────────────────────────────────
//

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
