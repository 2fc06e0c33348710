//! Platform-agnostic data behind the views: the navigation table and search criteria.

pub mod nav;
pub mod search;

pub use nav::{nav_links, NavLink, NavTarget, BRAND_GLYPH, BRAND_NAME};
pub use search::{SearchCriteria, SearchField, SlotGlyph};
