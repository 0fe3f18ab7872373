use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let session = ctx.session();
        let email_value = email();
        let password_value = password();
        busy.set(true);
        error.set(None);
        spawn(async move {
            let result = session.login(&email_value, &password_value).await;
            busy.set(false);
            match result {
                Ok(_) => {
                    let _ = navigator.push(Route::Dashboard {});
                }
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    };

    rsx! {
        div { class: "page auth-page",
            div { class: "auth-card",
                h1 { "Welcome Back!" }
                p { class: "auth-subtitle", "Enter your credentials to sign in" }
                form { class: "auth-form", onsubmit: on_submit,
                    label { r#for: "login-email", "Email" }
                    input {
                        id: "login-email",
                        r#type: "email",
                        placeholder: "johnsmith@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    if let Some(message) = error() {
                        p { class: "form-error", "{message}" }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "SIGNING IN..." } else { "LOGIN NOW" }
                    }
                }
                p { class: "auth-switch",
                    "Don't have an account yet? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
