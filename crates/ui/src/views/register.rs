use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;

/// Sign-up form; a successful registration signs the user straight in.
#[component]
pub fn RegisterView() -> Element {
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
            let result = session
                .register_and_login(&email_value, &password_value)
                .await;
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
                h1 { "Create your account" }
                p { class: "auth-subtitle", "Enter your information to register" }
                form { class: "auth-form", onsubmit: on_submit,
                    label { r#for: "register-email", "Email" }
                    input {
                        id: "register-email",
                        r#type: "email",
                        placeholder: "johnsmith@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    label { r#for: "register-password", "Password" }
                    input {
                        id: "register-password",
                        r#type: "password",
                        placeholder: "At least 8 characters",
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
                        if busy() { "CREATING ACCOUNT..." } else { "REGISTER NOW" }
                    }
                }
                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
