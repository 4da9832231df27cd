//! The link list, the landing view.

use api::Link;
use dioxus::prelude::*;

use ui::icons::FaPlus;
use ui::{use_services, use_session, AddLinkDialog, Icon, LinkTable, Services};

/// Replace the whole list from the backend. Every mutation is followed by a
/// call to this; there is no incremental update.
async fn reload_links(services: &Services, mut links: Signal<Vec<Link>>) {
    match services.links.list().await {
        Ok(list) => links.set(list),
        Err(err) => tracing::error!("loading links failed: {err}"),
    }
}

#[component]
pub fn Dashboard() -> Element {
    let services = use_services();
    let session = use_session();
    let mut links = use_signal(Vec::<Link>::new);
    let mut show_add_link = use_signal(|| false);

    let loader_services = services.clone();
    let _loader = use_resource(move || {
        let services = loader_services.clone();
        async move {
            reload_links(&services, links).await;
        }
    });

    let up_services = services.clone();
    let on_vote_up = move |link_id: i64| {
        let services = up_services.clone();
        spawn(async move {
            let Some(token) = session().token().map(String::from) else {
                return;
            };
            match services.links.vote_up(link_id, &token).await {
                Ok(_) => reload_links(&services, links).await,
                Err(err) => tracing::error!("vote up failed: {err}"),
            }
        });
    };

    let down_services = services.clone();
    let on_vote_down = move |link_id: i64| {
        let services = down_services.clone();
        spawn(async move {
            let Some(token) = session().token().map(String::from) else {
                return;
            };
            match services.links.vote_down(link_id, &token).await {
                Ok(_) => reload_links(&services, links).await,
                Err(err) => tracing::error!("vote down failed: {err}"),
            }
        });
    };

    let added_services = services.clone();
    let on_added = move |_| {
        let services = added_services.clone();
        spawn(async move {
            reload_links(&services, links).await;
        });
    };

    rsx! {
        div {
            class: "dashboard",

            LinkTable {
                links: links(),
                logged_in: session().is_logged_in(),
                on_vote_up: on_vote_up,
                on_vote_down: on_vote_down,
            }

            if show_add_link() {
                AddLinkDialog {
                    on_added: on_added,
                    on_close: move |_| show_add_link.set(false),
                }
            }

            if session().is_logged_in() {
                button {
                    class: "fab",
                    title: "Add link",
                    onclick: move |_| show_add_link.set(true),
                    Icon { icon: FaPlus, width: 18, height: 18 }
                }
            }
        }
    }
}
