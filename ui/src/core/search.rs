//! Search criteria shown by the search bar.
//!
//! Nothing here validates or submits anything. The struct only carries what a
//! slot should display, and serializes with the field names a search backend
//! would expect.

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_date: Option<Date>,
    pub return_date: Option<Date>,
}

/// One selection slot of the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Origin,
    Destination,
    Departure,
    Return,
}

/// Icon drawn beside a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotGlyph {
    Location,
    Calendar,
}

impl SearchField {
    pub const ALL: [SearchField; 4] = [
        SearchField::Origin,
        SearchField::Destination,
        SearchField::Departure,
        SearchField::Return,
    ];

    pub const fn glyph(self) -> SlotGlyph {
        match self {
            SearchField::Origin | SearchField::Destination => SlotGlyph::Location,
            SearchField::Departure | SearchField::Return => SlotGlyph::Calendar,
        }
    }

    /// Stable identifier used for element ids and CSS modifiers.
    pub const fn key(self) -> &'static str {
        match self {
            SearchField::Origin => "from",
            SearchField::Destination => "to",
            SearchField::Departure => "departure",
            SearchField::Return => "return",
        }
    }
}

impl SearchCriteria {
    /// Display text for `field`, or `None` when the slot is still empty.
    pub fn display_value(&self, field: SearchField) -> Option<String> {
        match field {
            SearchField::Origin => non_blank(self.origin.as_deref()),
            SearchField::Destination => non_blank(self.destination.as_deref()),
            SearchField::Departure => self.departure_date.and_then(format_date),
            SearchField::Return => self.return_date.and_then(format_date),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn format_date(date: Date) -> Option<String> {
    date.format(format_description!("[year]-[month]-[day]")).ok()
}
