//! Route Table
//!
//! Paths served by the router and the sidebar entries pointing at them.

/// Views reachable by path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Inventory,
    Categories,
    ShoppingList,
    History,
    Households,
    HouseholdDetail(String),
    Settings,
    NotFound,
}

impl Page {
    /// Resolve a browser path the same way the router does
    pub fn resolve(path: &str) -> Page {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Page::Dashboard,
            ["inventory"] => Page::Inventory,
            ["categories"] => Page::Categories,
            ["shopping-list"] => Page::ShoppingList,
            ["history"] => Page::History,
            ["households"] => Page::Households,
            ["households", id] => Page::HouseholdDetail(id.to_string()),
            ["settings"] => Page::Settings,
            _ => Page::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

/// Sidebar order
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/", icon: "🏠" },
    NavItem { label: "Inventory", path: "/inventory", icon: "📦" },
    NavItem { label: "Categories", path: "/categories", icon: "🏷" },
    NavItem { label: "Shopping List", path: "/shopping-list", icon: "🛒" },
    NavItem { label: "History", path: "/history", icon: "🕘" },
    NavItem { label: "Households", path: "/households", icon: "👥" },
    NavItem { label: "Settings", path: "/settings", icon: "⚙" },
];

/// Whether a sidebar entry should be highlighted for `current`
pub fn is_active(item: &NavItem, current: &str) -> bool {
    if item.path == "/" {
        return current == "/" || current.is_empty();
    }
    current == item.path || current.starts_with(&format!("{}/", item.path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_route() {
        assert_eq!(Page::resolve("/"), Page::Dashboard);
        assert_eq!(Page::resolve(""), Page::Dashboard);
        assert_eq!(Page::resolve("/inventory"), Page::Inventory);
        assert_eq!(Page::resolve("/categories/"), Page::Categories);
        assert_eq!(Page::resolve("/shopping-list"), Page::ShoppingList);
        assert_eq!(Page::resolve("/history"), Page::History);
        assert_eq!(Page::resolve("/households"), Page::Households);
        assert_eq!(Page::resolve("/households/2"), Page::HouseholdDetail("2".into()));
        assert_eq!(Page::resolve("/settings"), Page::Settings);
        assert_eq!(Page::resolve("/households/2/extra"), Page::NotFound);
        assert_eq!(Page::resolve("/nope"), Page::NotFound);
    }

    #[test]
    fn every_nav_item_resolves_to_a_page() {
        for item in NAV_ITEMS {
            assert_ne!(Page::resolve(item.path), Page::NotFound, "{}", item.path);
        }
    }

    #[test]
    fn nested_paths_highlight_their_parent() {
        let households = NAV_ITEMS.iter().find(|i| i.path == "/households").unwrap();
        assert!(is_active(households, "/households/3"));
        let dashboard = &NAV_ITEMS[0];
        assert!(is_active(dashboard, "/"));
        assert!(!is_active(dashboard, "/inventory"));
    }
}
