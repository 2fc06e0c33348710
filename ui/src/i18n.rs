//! Localization for `airlink-ui`.
//!
//! Strings are Fluent messages embedded at compile time with `rust-embed` and
//! resolved through a single global `FluentLanguageLoader`. Component code
//! uses the crate-level `t!` macro, which forwards to `fl!` so message IDs are
//! checked against the fallback bundle during compilation.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/airlink_ui.ftl   (fallback)
//!   es-ES/airlink_ui.ftl
//!   fr-FR/airlink_ui.ftl
//! ```
//!
//! The OS locale list (desktop/mobile) or `navigator.languages` (web) picks the
//! initial language; `set_language` switches at runtime.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation lookup through the shared loader.
///
/// ```ignore
/// t!("nav-home")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback bundle lives at `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "airlink_ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the requested system languages. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "localization bundles loaded"),
            Err(err) => {
                tracing::warn!(%err, "failed selecting languages; continuing with fallback")
            }
        }
    });
}

/// Switch language at runtime. Tags that do not parse are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparsable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language the loader currently resolves messages in.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shipped_locales_are_embedded() {
        assert_eq!(available_languages(), vec!["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn fallback_bundle_resolves_nav_labels() {
        let fallback: LanguageIdentifier = FALLBACK_LANGUAGE.parse().unwrap();
        let loader = FluentLanguageLoader::new(DOMAIN, fallback.clone());
        i18n_embed::select(&loader, &Localizations, &[fallback]).unwrap();
        assert_eq!(loader.get("nav-destination"), "destination");
        assert_eq!(loader.get("nav-sign-up"), "Sign Up");
    }

    #[test]
    fn domain_matches_normalized_package_name() {
        // `fl!` resolves bundles as `<lang>/<package name with '_'>.ftl`.
        assert_eq!(DOMAIN, env!("CARGO_PKG_NAME").replace('-', "_"));
        for lang in available_languages() {
            let path = format!("{lang}/{DOMAIN}.ftl");
            assert!(Localizations::get(&path).is_some(), "missing bundle {path}");
        }
    }

    #[test]
    fn current_language_is_an_embedded_locale() {
        init();
        let current = current_language();
        assert!(
            available_languages().contains(&current),
            "current language {current} is not embedded"
        );
    }

    #[test]
    fn unparsable_tag_is_ignored() {
        init();
        let before = fl!(&*LOADER, "nav-home");
        assert!(set_language("not a tag!").is_ok());
        let after = fl!(&*LOADER, "nav-home");
        assert_eq!(before, after);
    }
}
