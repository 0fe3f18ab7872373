use dioxus::prelude::*;
use dioxus_router::use_navigator;
use study_core::model::ContentType;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{generate_button_label, generation_error_message, route_for_content};

/// Topic entry and generator launcher.
#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut topic = use_signal(String::new);
    let busy = use_signal(|| None::<ContentType>);
    let error = use_signal(|| None::<String>);

    let generate = use_callback(move |content_type: ContentType| {
        let mut busy = busy;
        let mut error = error;
        if busy().is_some() {
            return;
        }
        let ctx = ctx.clone();
        let raw_topic = topic();
        busy.set(Some(content_type));
        error.set(None);
        spawn(async move {
            let result = ctx.content().generate(&raw_topic, content_type).await;
            busy.set(None);
            match result {
                Ok(content) => {
                    let route = route_for_content(&content);
                    ctx.stash_content(&raw_topic, content);
                    let _ = navigator.push(route);
                }
                Err(err) => error.set(Some(generation_error_message(&err))),
            }
        });
    });

    let in_flight = busy();
    let quiz_label = generate_button_label(ContentType::Quiz, in_flight);
    let flashcards_label = generate_button_label(ContentType::Flashcards, in_flight);

    rsx! {
        div { class: "page dashboard",
            div { class: "dashboard-card",
                h1 { "Welcome!" }
                p { class: "view-subtitle", "What would you like to study today?" }
                label { class: "sr-only", r#for: "topic", "Study Topic" }
                input {
                    id: "topic",
                    r#type: "text",
                    placeholder: "e.g., The Renaissance, Quantum Physics, Rust lifetimes",
                    value: "{topic}",
                    oninput: move |evt| topic.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                div { class: "dashboard-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: in_flight.is_some(),
                        onclick: move |_| generate.call(ContentType::Quiz),
                        "{quiz_label}"
                    }
                    button {
                        class: "btn btn-accent",
                        r#type: "button",
                        disabled: in_flight.is_some(),
                        onclick: move |_| generate.call(ContentType::Flashcards),
                        "{flashcards_label}"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: in_flight.is_some(),
                        onclick: move |_| {
                            let _ = navigator.push(Route::Assistant {});
                        },
                        "Ask Assistant"
                    }
                }
            }
        }
    }
}
