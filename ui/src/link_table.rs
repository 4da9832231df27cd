//! Table of shared links with per-row vote actions.

use api::Link;
use dioxus::prelude::*;

use crate::icons::{FaMinus, FaPlus};
use crate::Icon;

/// The link listing. Vote actions render only for signed-in users; anonymous
/// visitors get a read-only table.
#[component]
pub fn LinkTable(
    links: Vec<Link>,
    logged_in: bool,
    on_vote_up: EventHandler<i64>,
    on_vote_down: EventHandler<i64>,
) -> Element {
    rsx! {
        table {
            class: "link-table",
            thead {
                tr {
                    th { "Title" }
                    th { "Reporter" }
                    th { "Vote Rank" }
                    th { "Actions" }
                }
            }
            tbody {
                for link in &links {
                    LinkRow {
                        key: "{link.id}",
                        link: link.clone(),
                        logged_in: logged_in,
                        on_vote_up: on_vote_up,
                        on_vote_down: on_vote_down,
                    }
                }
            }
        }
    }
}

#[component]
fn LinkRow(
    link: Link,
    logged_in: bool,
    on_vote_up: EventHandler<i64>,
    on_vote_down: EventHandler<i64>,
) -> Element {
    let link_id = link.id;
    let reporter = link.reporter_name().unwrap_or("—").to_string();

    rsx! {
        tr {
            td {
                a {
                    href: "{link.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{link.title}"
                }
            }
            td { "{reporter}" }
            td { "{link.vote_rank}" }
            td {
                if logged_in {
                    button {
                        class: "vote-button",
                        title: "Vote up",
                        onclick: move |_| on_vote_up.call(link_id),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                    }
                    button {
                        class: "vote-button",
                        title: "Vote down",
                        onclick: move |_| on_vote_down.call(link_id),
                        Icon { icon: FaMinus, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
