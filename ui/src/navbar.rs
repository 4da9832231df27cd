//! Top app bar with the sign-in/sign-up/sign-out menu.

use dioxus::prelude::*;

use crate::icons::FaEllipsisVertical;
use crate::session::{use_session, SessionState};
use crate::Icon;

const UI_CSS: Asset = asset!("/assets/ui.css");

/// The app bar. Anonymous visitors get an overflow menu with sign-up and
/// sign-in entries; a signed-in user gets their username as the menu button
/// and a sign-out entry. Signing out is local only, no backend call.
#[component]
pub fn Navbar(on_sign_in: EventHandler<()>, on_sign_up: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut menu_open = use_signal(|| false);

    let username = session().user().map(|user| user.username.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        header {
            class: "navbar",
            h1 { class: "navbar-title", "Shared links" }
            div {
                class: "navbar-menu",
                if let Some(username) = username {
                    button {
                        class: "navbar-menu-button",
                        onclick: move |_| menu_open.set(!menu_open()),
                        "{username}"
                    }
                    if menu_open() {
                        div {
                            class: "navbar-dropdown",
                            button {
                                class: "navbar-menu-item",
                                onclick: move |_| {
                                    menu_open.set(false);
                                    session.set(SessionState::anonymous());
                                },
                                "Sign out"
                            }
                        }
                    }
                } else {
                    button {
                        class: "navbar-menu-button",
                        onclick: move |_| menu_open.set(!menu_open()),
                        Icon { icon: FaEllipsisVertical, width: 16, height: 16 }
                    }
                    if menu_open() {
                        div {
                            class: "navbar-dropdown",
                            button {
                                class: "navbar-menu-item",
                                onclick: move |_| {
                                    menu_open.set(false);
                                    on_sign_up.call(());
                                },
                                "Sign up"
                            }
                            button {
                                class: "navbar-menu-item",
                                onclick: move |_| {
                                    menu_open.set(false);
                                    on_sign_in.call(());
                                },
                                "Sign in"
                            }
                        }
                    }
                }
            }
        }
    }
}
