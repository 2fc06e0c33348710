use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder};
use ui::core::NavTarget;
use ui::views::{About, Destination, LandingPage, Offer, Seat};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    LandingPage {},
    #[route("/about")]
    About {},
    #[route("/offer")]
    Offer {},
    #[route("/seat")]
    Seat {},
    #[route("/destination")]
    Destination {},
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::LandingPage {},
            NavTarget::About => Route::About {},
            NavTarget::Offer => Route::Offer {},
            NavTarget::Seat => Route::Seat {},
            NavTarget::Destination => Route::Destination {},
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn nav_link(target: NavTarget, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "active",
        to: Route::from(target),
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: nav_link });

    // Global language code; the navbar's locale switcher writes to it and
    // keying the router on it remounts every view in the new language.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "Air link" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div { key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_target_maps_to_the_route_with_its_path() {
        for target in NavTarget::ALL {
            assert_eq!(Route::from(target).to_string(), target.path());
        }
    }
}
