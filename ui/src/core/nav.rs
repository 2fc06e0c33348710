//! Static navigation table.
//!
//! The site exposes five destinations in a fixed order. Platform crates map each
//! [`NavTarget`] onto their own `Route` enum; this module only knows the paths.

/// Text shown next to the brand glyph.
pub const BRAND_NAME: &str = "Air link";
pub const BRAND_GLYPH: &str = "✈️";

/// A label/route pair rendered as one navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    About,
    Offer,
    Seat,
    Destination,
}

impl NavTarget {
    /// Render order of the navigation list.
    pub const ALL: [NavTarget; 5] = [
        NavTarget::Home,
        NavTarget::About,
        NavTarget::Offer,
        NavTarget::Seat,
        NavTarget::Destination,
    ];

    pub const fn link(self) -> NavLink {
        match self {
            NavTarget::Home => NavLink { label: "home", route: "/" },
            NavTarget::About => NavLink { label: "about", route: "/about" },
            NavTarget::Offer => NavLink { label: "offer", route: "/offer" },
            NavTarget::Seat => NavLink { label: "seat", route: "/seat" },
            NavTarget::Destination => NavLink {
                label: "destination",
                route: "/destination",
            },
        }
    }

    pub const fn path(self) -> &'static str {
        self.link().route
    }

    /// Exact-match lookup; trailing slashes or query strings do not resolve.
    pub fn from_route(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|target| target.path() == path)
    }
}

/// The navigation entries in render order.
pub fn nav_links() -> impl Iterator<Item = NavLink> {
    NavTarget::ALL.into_iter().map(NavTarget::link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_are_in_fixed_order() {
        let labels: Vec<_> = nav_links().map(|l| l.label).collect();
        assert_eq!(labels, ["home", "about", "offer", "seat", "destination"]);
    }

    #[test]
    fn routes_match_declared_paths() {
        let routes: Vec<_> = nav_links().map(|l| l.route).collect();
        assert_eq!(routes, ["/", "/about", "/offer", "/seat", "/destination"]);
    }

    #[test]
    fn from_route_resolves_known_paths_only() {
        for target in NavTarget::ALL {
            assert_eq!(NavTarget::from_route(target.path()), Some(target));
        }
        assert_eq!(NavTarget::from_route("/about/"), None);
        assert_eq!(NavTarget::from_route("/booking"), None);
        assert_eq!(NavTarget::from_route(""), None);
    }
}
