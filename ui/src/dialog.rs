//! Modal dialog chrome shared by the form dialogs.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Dialog with a Cancel/OK action row. The body is a form, so Enter submits.
/// OK stays disabled while `busy` is set; a submission in flight cannot be
/// re-triggered.
#[component]
pub fn OkCancelDialog(
    title: String,
    #[props(default = false)] busy: bool,
    on_ok: EventHandler<()>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            form {
                class: "dialog-body",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_ok.call(());
                },
                h2 { class: "dialog-title", "{title}" }
                {children}
                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: busy,
                        "OK"
                    }
                }
            }
        }
    }
}

/// Acknowledgement dialog with a single OK action.
#[component]
pub fn OkDialog(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "dialog-body",
                h2 { class: "dialog-title", "{title}" }
                {children}
                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_close.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
