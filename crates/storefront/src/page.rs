//! Storefront pages.

/// The view currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Landing page with the welcome text.
    #[default]
    Home,

    /// Catalog grouped by category.
    Products,

    /// Cart contents and totals.
    Cart,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Products, Page::Cart];

    /// Parses a page name. Anything unknown falls back to [`Page::Home`].
    pub fn parse(name: &str) -> Page {
        match name.trim().to_ascii_lowercase().as_str() {
            "products" | "catalog" => Page::Products,
            "cart" => Page::Cart,
            _ => Page::Home,
        }
    }

    /// Returns the page name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Products => "products",
            Page::Cart => "cart",
        }
    }

    /// Returns true if the page shows the navigation header.
    pub fn shows_header(&self) -> bool {
        !matches!(self, Page::Home)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!(Page::parse("products"), Page::Products);
        assert_eq!(Page::parse(" Catalog "), Page::Products);
        assert_eq!(Page::parse("CART"), Page::Cart);
        assert_eq!(Page::parse("home"), Page::Home);
    }

    #[test]
    fn test_parse_unknown_falls_back_to_home() {
        assert_eq!(Page::parse("checkout"), Page::Home);
        assert_eq!(Page::parse(""), Page::Home);
    }

    #[test]
    fn test_header_hidden_on_home() {
        assert!(!Page::Home.shows_header());
        assert!(Page::Products.shows_header());
        assert!(Page::Cart.shows_header());
    }
}
