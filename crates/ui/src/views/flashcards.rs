use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::FlashcardVm;

#[component]
pub fn FlashcardsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut deck = use_signal(|| ctx.take_content().and_then(FlashcardVm::from_material));

    use_effect(move || {
        if deck.peek().is_none() {
            let _ = navigator.replace(Route::Dashboard {});
        }
    });

    let Some(snapshot) = deck.read().clone() else {
        return rsx! {
            div { class: "page",
                p { class: "redirect-note", "No flashcards to show. Returning to the dashboard..." }
            }
        };
    };
    let face = snapshot.face();
    let topic = snapshot.topic().to_string();

    rsx! {
        div { class: "page flashcards-page",
            header { class: "view-header",
                p { class: "view-subtitle", "Topic: {topic}" }
                h1 { class: "view-title", "Flashcards" }
                p { class: "flashcard-counter", "{face.counter_label}" }
            }
            button {
                class: "{face.face_class}",
                r#type: "button",
                onclick: move |_| {
                    if let Some(vm) = deck.write().as_mut() {
                        vm.flip();
                    }
                },
                p { class: "flashcard-text", "{face.text}" }
                span { class: "flashcard-hint", "{face.hint}" }
            }
            div { class: "flashcard-nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        if let Some(vm) = deck.write().as_mut() {
                            vm.prev();
                        }
                    },
                    "Previous"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        if let Some(vm) = deck.write().as_mut() {
                            vm.next();
                        }
                    },
                    "Next"
                }
            }
            Link { class: "back-link", to: Route::Dashboard {}, "Back to Dashboard" }
        }
    }
}
