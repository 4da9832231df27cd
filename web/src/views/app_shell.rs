//! Application chrome: the app bar plus the app-level dialogs.

use dioxus::prelude::*;

use ui::{LoginDialog, Navbar, RegisterDialog};

use crate::Route;

/// Layout wrapping every route: the navbar, the sign-in and sign-up dialogs
/// behind their own visibility flags, and the routed view. Closing a dialog
/// unmounts it, which discards its draft.
#[component]
pub fn AppShell() -> Element {
    let mut show_login = use_signal(|| false);
    let mut show_register = use_signal(|| false);

    rsx! {
        Navbar {
            on_sign_in: move |_| show_login.set(true),
            on_sign_up: move |_| show_register.set(true),
        }

        if show_login() {
            LoginDialog {
                on_close: move |_| show_login.set(false),
            }
        }
        if show_register() {
            RegisterDialog {
                on_close: move |_| show_register.set(false),
            }
        }

        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}
