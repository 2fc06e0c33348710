//! Informational pages behind the secondary navigation entries.

use dioxus::prelude::*;

use crate::components::Navbar;
use crate::t;

#[component]
fn InfoPage(slug: &'static str, title: String, body: String) -> Element {
    rsx! {
        div { class: "info",
            div { class: "info__card",
                Navbar {}
                section { class: "page page-info page-info--{slug}",
                    h1 { "{title}" }
                    p { "{body}" }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        InfoPage { slug: "about", title: t!("page-about-title"), body: t!("page-about-body") }
    }
}

#[component]
pub fn Offer() -> Element {
    rsx! {
        InfoPage { slug: "offer", title: t!("page-offer-title"), body: t!("page-offer-body") }
    }
}

#[component]
pub fn Seat() -> Element {
    rsx! {
        InfoPage { slug: "seat", title: t!("page-seat-title"), body: t!("page-seat-body") }
    }
}

#[component]
pub fn Destination() -> Element {
    rsx! {
        InfoPage {
            slug: "destination",
            title: t!("page-destination-title"),
            body: t!("page-destination-body"),
        }
    }
}
