use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AuthState;
use crate::routes::Route;

const FEATURES: [(&str, &str); 3] = [
    (
        "AI-Powered Quizzes",
        "Instantly generate multiple-choice quizzes on any topic to test your knowledge.",
    ),
    (
        "Dynamic Flashcards",
        "Create digital flashcards in seconds for key terms, dates and concepts.",
    ),
    (
        "Personal AI Assistant",
        "Stuck on a problem? Ask the assistant for a clear, concise explanation.",
    ),
];

#[component]
pub fn LandingView() -> Element {
    let auth = use_context::<AuthState>();
    let signed_in = auth.is_signed_in();
    let (cta_route, cta_label) = if signed_in {
        (Route::Dashboard {}, "Go to Dashboard")
    } else {
        (Route::Register {}, "Start for Free")
    };

    rsx! {
        div { class: "page landing",
            section { class: "hero",
                h1 { "Supercharge Your Learning with AI" }
                p { class: "hero-lead",
                    "Generate quizzes, flashcards, and get instant answers from your personal AI tutor."
                }
                Link { class: "btn btn-primary btn-large", to: cta_route, "{cta_label}" }
            }
            section { class: "features",
                h2 { "Everything You Need to Succeed" }
                div { class: "feature-grid",
                    for (title, body) in FEATURES {
                        article { key: "{title}", class: "feature-card",
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }
        }
    }
}
