//! Search criteria strip: four selection slots followed by the search trigger.

use crate::core::{SearchCriteria, SearchField, SlotGlyph};
use crate::t;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdMapPin, LdSearch};
use dioxus_free_icons::Icon;

fn slot_label(field: SearchField) -> String {
    match field {
        SearchField::Origin => t!("search-from"),
        SearchField::Destination => t!("search-to"),
        SearchField::Departure => t!("search-departure"),
        SearchField::Return => t!("search-return"),
    }
}

fn slot_placeholder(field: SearchField) -> String {
    match field.glyph() {
        SlotGlyph::Location => t!("search-pick-location"),
        SlotGlyph::Calendar => t!("search-pick-date"),
    }
}

#[component]
fn SlotIcon(glyph: SlotGlyph) -> Element {
    match glyph {
        SlotGlyph::Location => rsx! {
            Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 }
        },
        SlotGlyph::Calendar => rsx! {
            Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 }
        },
    }
}

#[component]
pub fn SearchBar(#[props(default)] criteria: SearchCriteria) -> Element {
    let slots = SearchField::ALL.into_iter().map(|field| {
        let key = field.key();
        let label = slot_label(field);
        let (value, filled) = match criteria.display_value(field) {
            Some(v) => (v, true),
            None => (slot_placeholder(field), false),
        };
        let value_class = if filled {
            "search-bar__value search-bar__value--filled"
        } else {
            "search-bar__value"
        };
        rsx! {
            li { key: "{key}", class: "search-bar__slot search-bar__slot--{key}",
                div { class: "search-bar__icon", SlotIcon { glyph: field.glyph() } }
                div { class: "search-bar__text",
                    span { class: "search-bar__label", "{label}" }
                    h6 { class: value_class, "{value}" }
                }
            }
        }
    });

    rsx! {
        nav { class: "search-bar",
            ul { class: "search-bar__slots",
                {slots}
                li { class: "search-bar__action",
                    button {
                        class: "search-bar__trigger",
                        r#type: "button",
                        aria_label: t!("search-submit"),
                        // Not wired to a search backend.
                        onclick: move |_| tracing::debug!("search trigger pressed"),
                        Icon::<LdSearch> { icon: LdSearch, width: 24, height: 24 }
                    }
                }
            }
        }
    }
}
