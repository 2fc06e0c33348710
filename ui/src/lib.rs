//! Shared UI crate for Air link. Components, views and localization live here;
//! the platform crates only add a `Route` enum and launch.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Brand, navigation list, locale switcher and sign-up (components/navbar.rs)
    pub mod navbar;
    pub use navbar::{nav_label, register_nav, NavBuilder, Navbar};

    // Origin/destination/date slots and the search trigger (components/search_bar.rs)
    pub mod search_bar;
    pub use search_bar::SearchBar;
}

/// Shared theme stylesheet. Desktop embeds the same file with `include_str!`.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
