use dioxus::prelude::*;

use ui::SessionProvider;
use views::{AppShell, Dashboard, VerifyUser};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Dashboard {},
        #[route("/verify-user/?:user_id&:timestamp&:signature")]
        VerifyUser { user_id: String, timestamp: String, signature: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
