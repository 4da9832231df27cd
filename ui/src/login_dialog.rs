use dioxus::prelude::*;

use crate::components::Input;
use crate::dialog::OkCancelDialog;
use crate::session::{use_services, use_session, SessionState};

/// Sign-in dialog. A successful login replaces the whole session and closes
/// the dialog; a failure keeps it open with the error shown.
#[component]
pub fn LoginDialog(on_close: EventHandler<()>) -> Element {
    let services = use_services();
    let mut session = use_session();
    let mut login = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let handle_ok = move |_| {
        let services = services.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            match services
                .auth
                .get_auth_token_with_user_profile(&login(), &password())
                .await
            {
                Ok(auth) => {
                    session.set(SessionState::authenticated(auth));
                    on_close.call(());
                }
                Err(err) => {
                    tracing::error!("sign in failed: {err}");
                    busy.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        OkCancelDialog {
            title: "Sign in",
            busy: busy(),
            on_ok: handle_ok,
            on_close: move |_| on_close.call(()),

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            Input {
                placeholder: "Login",
                value: login(),
                oninput: move |evt: FormEvent| login.set(evt.value()),
            }
            Input {
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
        }
    }
}
