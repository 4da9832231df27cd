//! Landing view for email-verification links.

use api::Verification;
use dioxus::prelude::*;

use ui::{use_services, OkDialog};

use crate::Route;

/// Posts the verification parameters from the query string to the backend as
/// soon as the view mounts. Acceptance leads back to the dashboard;
/// rejection shows a dismissable failure dialog.
#[component]
pub fn VerifyUser(user_id: String, timestamp: String, signature: String) -> Element {
    let services = use_services();
    let nav = use_navigator();
    let mut verified = use_signal(|| false);
    let mut failed = use_signal(|| false);

    let _verification = use_resource(move || {
        let services = services.clone();
        let verification = Verification {
            user_id: user_id.clone(),
            timestamp: timestamp.clone(),
            signature: signature.clone(),
        };
        async move {
            match services.auth.verify_user(&verification).await {
                Ok(_) => verified.set(true),
                Err(err) => {
                    tracing::error!("user verification failed: {err}");
                    failed.set(true);
                }
            }
        }
    });

    rsx! {
        div {
            class: "verify-user",

            if verified() {
                OkDialog {
                    title: "User verification",
                    on_close: move |_| {
                        nav.push(Route::Dashboard {});
                    },
                    "User Verification OK"
                }
            }
            if failed() {
                OkDialog {
                    title: "User verification",
                    on_close: move |_| failed.set(false),
                    "User Verification failed!"
                }
            }
        }
    }
}
