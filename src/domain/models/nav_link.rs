use serde::Serialize;

/// A single navigation entry shown in both the desktop bar and the mobile panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub id: u32,
    pub name: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub const fn new(id: u32, name: &'static str, href: &'static str) -> Self {
        Self { id, name, href }
    }

    /// Exact path match. `/shop/item` does not activate `/shop`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }
}

/// Storefront links, fixed for the lifetime of the widget.
pub const DEFAULT_LINKS: [NavLink; 4] = [
    NavLink::new(1, "Home", "/"),
    NavLink::new(2, "Shop", "/shop"),
    NavLink::new(3, "About", "/about"),
    NavLink::new(4, "Contact", "/contact"),
];

pub fn default_links() -> Vec<NavLink> {
    DEFAULT_LINKS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_links_have_unique_ids_and_hrefs() {
        let links = default_links();
        let ids: HashSet<u32> = links.iter().map(|l| l.id).collect();
        let hrefs: HashSet<&str> = links.iter().map(|l| l.href).collect();

        assert_eq!(links.len(), 4);
        assert_eq!(ids.len(), 4);
        assert_eq!(hrefs.len(), 4);
    }

    #[test]
    fn test_is_active_requires_exact_match() {
        let shop = NavLink::new(2, "Shop", "/shop");

        assert!(shop.is_active("/shop"));
        assert!(!shop.is_active("/shop/item-1"));
        assert!(!shop.is_active("/"));
    }
}
