use dioxus::prelude::*;

use crate::components::{Input, Label};
use crate::dialog::OkCancelDialog;
use crate::session::{use_services, use_session};

/// Dialog for submitting a new link. Fires `on_added` once the backend
/// accepts, so the caller can re-fetch the list.
#[component]
pub fn AddLinkDialog(on_added: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let services = use_services();
    let session = use_session();
    let mut title = use_signal(String::new);
    let mut url = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let handle_ok = move |_| {
        let services = services.clone();
        spawn(async move {
            let Some(token) = session().token().map(String::from) else {
                return;
            };
            busy.set(true);
            error.set(None);
            match services.links.add(&title(), &url(), &token).await {
                Ok(_) => {
                    on_added.call(());
                    on_close.call(());
                }
                Err(err) => {
                    tracing::error!("adding link failed: {err}");
                    busy.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        OkCancelDialog {
            title: "Add link",
            busy: busy(),
            on_ok: handle_ok,
            on_close: move |_| on_close.call(()),

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "form-field",
                Label { html_for: "add-link-title", "Title" }
                Input {
                    id: "add-link-title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "add-link-url", "URL" }
                Input {
                    id: "add-link-url",
                    r#type: "url",
                    value: url(),
                    oninput: move |evt: FormEvent| url.set(evt.value()),
                }
            }
        }
    }
}
