use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};

use crate::context::{AppContext, AuthState};
use crate::views::{
    AssistantView, DashboardView, FlashcardsView, LandingView, LoginView, QuizView, RegisterView,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/", LandingView)] Landing {},
        #[route("/login", LoginView)] Login {},
        #[route("/register", RegisterView)] Register {},
        #[layout(Protected)]
            #[route("/dashboard", DashboardView)] Dashboard {},
            #[route("/dashboard/quiz", QuizView)] Quiz {},
            #[route("/dashboard/flashcards", FlashcardsView)] Flashcards {},
            #[route("/dashboard/assistant", AssistantView)] Assistant {},
}

impl Route {
    /// Views that need a signed-in user.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Dashboard {} | Route::Quiz {} | Route::Flashcards {} | Route::Assistant {}
        )
    }
}

/// Where to send the user instead of `route`, if anywhere.
#[must_use]
pub fn guard_redirect(route: &Route, authenticated: bool) -> Option<Route> {
    (route.requires_auth() && !authenticated).then_some(Route::Login {})
}

#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app",
            TopNav {}
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footer", "© StudyAI. All rights reserved." }
        }
    }
}

#[component]
fn TopNav() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let navigator = use_navigator();

    let on_logout = move |_| {
        let session = ctx.session();
        spawn(async move {
            session.logout().await;
            let _ = navigator.push(Route::Landing {});
        });
    };

    rsx! {
        header { class: "topnav",
            Link { class: "brand", to: Route::Landing {}, "StudyAI" }
            nav { class: "topnav-links",
                if auth.is_signed_in() {
                    Link { to: Route::Dashboard {}, "Dashboard" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: on_logout,
                        "Logout"
                    }
                } else {
                    Link { to: Route::Login {}, "Login" }
                    Link { class: "btn btn-primary", to: Route::Register {}, "Get Started" }
                }
            }
        }
    }
}

/// Layout for every `/dashboard` view; bounces anonymous users to `/login`.
#[component]
fn Protected() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let redirect = guard_redirect(&route, ctx.is_authenticated());

    let pending_redirect = redirect.clone();
    use_effect(move || {
        if let Some(target) = pending_redirect.clone() {
            let _ = navigator.replace(target);
        }
    });

    if redirect.is_some() {
        return rsx! {
            p { class: "redirect-note", "Please log in to continue." }
        };
    }

    rsx! {
        section { class: "dashboard-shell",
            header { class: "dashboard-header",
                span { class: "dashboard-title", "StudyAI Dashboard" }
            }
            Outlet::<Route> {}
        }
    }
}
