use dioxus::prelude::*;

use crate::components::{Navbar, SearchBar};
use crate::t;

const FRONTPAGE_IMAGE: Asset = asset!("/assets/images/frontpage.svg");

/// Full-bleed landing page: background image, dimming overlay, and a centered
/// glass card holding the navbar, hero copy and search bar.
#[component]
pub fn LandingPage(background: Option<String>) -> Element {
    let background = css_url(&background.unwrap_or_else(|| FRONTPAGE_IMAGE.to_string()));

    rsx! {
        div {
            class: "landing",
            style: "background-image: {background}",
            div { class: "landing__overlay" }

            div { class: "landing__content",
                div { class: "landing__card",
                    Navbar {}

                    div { class: "landing__body",
                        div { class: "landing__hero",
                            h1 { class: "landing__title", {t!("hero-title")} }
                            p { class: "landing__tagline", {t!("hero-tagline")} }
                        }
                        SearchBar {}
                    }
                }
            }
        }
    }
}

/// Quoted CSS `url()` value. Quotes and backslashes are escaped and control
/// characters become hex escapes, so the value cannot close the declaration.
fn css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len() + 7);
    out.push_str("url(\"");
    for c in url.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\{:x} ", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push_str("\")");
    out
}
