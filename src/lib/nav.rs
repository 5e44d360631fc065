//! Navigation constants and helpers shared by the sidebar and routes.

/// A sidebar navigation entry. Icons are material symbol names.
pub struct NavLink {
    pub route: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SIDEBAR_LINKS: &[NavLink] = &[
    NavLink {
        route: "/",
        label: "Home",
        icon: "home",
    },
    NavLink {
        route: "/explore",
        label: "Explore",
        icon: "explore",
    },
    NavLink {
        route: "/all-users",
        label: "People",
        icon: "group",
    },
    NavLink {
        route: "/saved",
        label: "Saved",
        icon: "bookmark",
    },
    NavLink {
        route: "/create-post",
        label: "Create Post",
        icon: "add_box",
    },
];

/// An entry is active only when the current path equals its route exactly.
/// No prefix or wildcard matching: `/profile/7` does not light up `/profile`.
pub fn is_active(current_path: &str, route: &str) -> bool {
    current_path == route
}

/// Forces a full reload of the current route, dropping all client-held
/// state. Used after sign-out; a soft re-render is not enough there.
#[cfg(target_arch = "wasm32")]
pub fn hard_reload() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn hard_reload() {}

#[cfg(test)]
mod tests {
    use super::{SIDEBAR_LINKS, is_active};

    #[test]
    fn active_requires_exact_match() {
        assert!(is_active("/saved", "/saved"));
        assert!(is_active("/", "/"));
        assert!(!is_active("/profile/7", "/profile"));
        assert!(!is_active("/saved/", "/saved"));
        assert!(!is_active("/explore", "/"));
    }

    #[test]
    fn sidebar_links_have_distinct_routes() {
        for (index, link) in SIDEBAR_LINKS.iter().enumerate() {
            assert!(link.route.starts_with('/'));
            assert!(!link.label.is_empty());
            assert!(
                SIDEBAR_LINKS[index + 1..]
                    .iter()
                    .all(|other| other.route != link.route)
            );
        }
    }
}
