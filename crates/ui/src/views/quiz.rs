use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{QuizScreen, QuizVm};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz = use_signal(|| ctx.take_content().and_then(QuizVm::from_material));

    use_effect(move || {
        if quiz.peek().is_none() {
            let _ = navigator.replace(Route::Dashboard {});
        }
    });

    let Some(snapshot) = quiz.read().clone() else {
        return rsx! {
            div { class: "page",
                p { class: "redirect-note", "No quiz to show. Returning to the dashboard..." }
            }
        };
    };

    let topic = snapshot.topic().to_string();

    match snapshot.screen() {
        QuizScreen::Complete(result) => rsx! {
            div { class: "page quiz-page",
                div { class: "quiz-card quiz-card--result",
                    h2 { "Quiz Complete!" }
                    p { "You scored" }
                    p { class: "quiz-score", "{result.score_label}" }
                    p { class: "quiz-percentage", "{result.percentage_label}" }
                    Link { class: "btn btn-primary", to: Route::Dashboard {}, "Create Another Quiz" }
                }
            }
        },
        QuizScreen::Question(question) => {
            let option_buttons = question.options.into_iter().map(|option| {
                let label = option.label.clone();
                let mut quiz = quiz;
                rsx! {
                    button {
                        key: "{option.label}",
                        class: "{option.class}",
                        r#type: "button",
                        disabled: option.disabled,
                        onclick: move |_| {
                            if let Some(vm) = quiz.write().as_mut() {
                                vm.select(&label);
                            }
                        },
                        "{option.label}"
                    }
                }
            });
            let mut quiz_for_next = quiz;

            rsx! {
                div { class: "page quiz-page",
                    div { class: "quiz-card",
                        p { class: "quiz-topic", "Topic: {topic}" }
                        p { class: "quiz-progress", "{question.progress_label}" }
                        h2 { class: "quiz-question", "{question.question}" }
                        div { class: "quiz-options", {option_buttons} }
                        if question.answered {
                            button {
                                class: "btn btn-dark",
                                r#type: "button",
                                onclick: move |_| {
                                    if let Some(vm) = quiz_for_next.write().as_mut() {
                                        vm.advance();
                                    }
                                },
                                "{question.next_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
