use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::map_transcript;

#[component]
pub fn AssistantView() -> Element {
    let ctx = use_context::<AppContext>();
    let chat = use_signal(|| ctx.new_chat_session());
    let mut input = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut chat = chat;
        if chat.read().is_pending() {
            return;
        }
        let Some(pending) = chat.write().begin(&input()) else {
            return;
        };
        input.set(String::new());
        spawn(async move {
            let result = pending.fetch().await;
            chat.write().complete(result);
        });
    };

    let bubbles = map_transcript(chat.read().transcript());
    let pending = chat.read().is_pending();

    rsx! {
        div { class: "page assistant-page",
            header { class: "view-header assistant-header",
                h1 { class: "view-title", "AI Assistant" }
                Link { class: "back-link", to: Route::Dashboard {}, "Back to Dashboard" }
            }
            div { class: "chat-log",
                for (index, bubble) in bubbles.into_iter().enumerate() {
                    div { key: "{index}", class: "{bubble.row_class}",
                        div {
                            class: "{bubble.bubble_class}",
                            dangerous_inner_html: "{bubble.html}",
                        }
                        span { class: "chat-time", "{bubble.time_label}" }
                    }
                }
                if pending {
                    div { class: "chat-row chat-row--assistant",
                        div { class: "chat-bubble chat-bubble--assistant chat-typing", "Typing..." }
                    }
                }
            }
            form { class: "chat-input", onsubmit: on_submit,
                input {
                    r#type: "text",
                    placeholder: "Ask anything about your topic...",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: pending, "Send" }
            }
        }
    }
}
