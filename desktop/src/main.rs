#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
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

// Shared theme, embedded so packaged builds need no stylesheet on disk.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn init_logging() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    let resource_dir = resolve_resource_dir();
    dioxus::logger::tracing::info!(dir = %resource_dir.display(), "desktop resource directory");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Air link – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

fn nav_link(target: NavTarget, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "active",
        to: Route::from(target),
        "{label}"
    })
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: nav_link });

    // The navbar's locale switcher writes this; keying the router on it
    // remounts the routed views in the new language.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div { key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // `cargo run` / `dx serve` read straight from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
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
