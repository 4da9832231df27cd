use api::Registration;
use dioxus::prelude::*;

use crate::components::Input;
use crate::dialog::OkCancelDialog;
use crate::session::use_services;

/// Sign-up dialog. Registration never touches the session: the backend sends
/// a verification email, and the user signs in separately once verified.
/// Field checks, password match included, are the backend's job.
#[component]
pub fn RegisterDialog(on_close: EventHandler<()>) -> Element {
    let services = use_services();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut password_confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let handle_ok = move |_| {
        let services = services.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            let registration = Registration {
                username: username(),
                email: email(),
                first_name: first_name(),
                last_name: last_name(),
                password: password(),
                password_confirm: password_confirm(),
            };
            match services.auth.register(&registration).await {
                Ok(_) => on_close.call(()),
                Err(err) => {
                    tracing::error!("registration failed: {err}");
                    busy.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        OkCancelDialog {
            title: "Sign up",
            busy: busy(),
            on_ok: handle_ok,
            on_close: move |_| on_close.call(()),

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            Input {
                placeholder: "Username",
                value: username(),
                oninput: move |evt: FormEvent| username.set(evt.value()),
            }
            Input {
                r#type: "email",
                placeholder: "E-mail",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            Input {
                placeholder: "First Name",
                value: first_name(),
                oninput: move |evt: FormEvent| first_name.set(evt.value()),
            }
            Input {
                placeholder: "Last Name",
                value: last_name(),
                oninput: move |evt: FormEvent| last_name.set(evt.value()),
            }
            Input {
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            Input {
                r#type: "password",
                placeholder: "Password Confirmation",
                value: password_confirm(),
                oninput: move |evt: FormEvent| password_confirm.set(evt.value()),
            }
        }
    }
}
