use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{AppContext, use_auth_state};
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_auth_state(&ctx);
    use_context_provider(|| auth);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "StudyAI" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
