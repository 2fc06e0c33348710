use crate::core::{NavTarget, BRAND_GLYPH, BRAND_NAME};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Lets a platform crate supply router-aware links without `ui` knowing its
/// `Route` enum.
///
/// The closure receives the target and its localized label and must return an
/// element (usually a `Link`) that already contains the label:
///
/// ```ignore
/// fn nav_link(target: NavTarget, label: &str) -> Element {
///     let to = match target {
///         NavTarget::Home => Route::LandingPage {},
///         NavTarget::About => Route::About {},
///         // ...
///     };
///     rsx!(Link { class: "navbar__link", to, "{label}" })
/// }
///
/// register_nav(NavBuilder { link: nav_link });
/// ```
///
/// Without a registered builder the navbar renders plain anchors whose `href`
/// is the target's path.
pub struct NavBuilder {
    pub link: fn(target: NavTarget, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Install the platform link builder. The first registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("nav builder already registered; keeping the first one");
    }
}

/// Localized label for a navigation entry.
pub fn nav_label(target: NavTarget) -> String {
    match target {
        NavTarget::Home => t!("nav-home"),
        NavTarget::About => t!("nav-about"),
        NavTarget::Offer => t!("nav-offer"),
        NavTarget::Seat => t!("nav-seat"),
        NavTarget::Destination => t!("nav-destination"),
    }
}

#[component]
pub fn Navbar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Platforms may provide a global language signal; reading it here
    // subscribes the navbar to language changes.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    tracing::debug!(lang = %lang_marker, "navbar render");

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let builder = NAV_BUILDER.get();
    let links = NavTarget::ALL.into_iter().map(move |target| {
        let label = nav_label(target);
        let path = target.path();
        let link = match builder {
            Some(b) => (b.link)(target, &label),
            None => rsx! {
                a { class: "navbar__link", href: path, "{label}" }
            },
        };
        rsx! {
            li { key: "{path}", class: "navbar__item", {link} }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    a { class: "navbar__brand-link", href: "/",
                        span { class: "navbar__brand-glyph", aria_hidden: "true", "{BRAND_GLYPH}" }
                        span { class: "navbar__brand-mark", "{BRAND_NAME}" }
                    }
                }

                nav { class: "navbar__links",
                    ul { class: "navbar__list", {links} }
                }

                div { class: "navbar__actions",
                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx! {
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }
                    // No handler: sign-up has no backing flow yet.
                    button { class: "navbar__cta", r#type: "button", {t!("nav-sign-up")} }
                }
            }
        }
    }
}
