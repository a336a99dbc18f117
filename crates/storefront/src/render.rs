//! Plain-text rendering of the storefront pages.

use std::fmt::Write;

use cart::CartState;
use catalog::Catalog;

use crate::page::Page;

pub const STORE_NAME: &str = "Paradise Nursery";

const WELCOME: &str = "\
Welcome to Paradise Nursery, your home for exceptional indoor plants.
Since 1985 we have grown tropical plants, succulents and foliage plants
to turn your home into a green oasis.";

const EMPTY_CART: &str = "\
Your cart is empty.
Browse our plants and start your indoor garden (type `products`).";

/// Renders `page` with the current catalog and cart.
pub fn render(page: Page, catalog: &Catalog, cart: &CartState) -> String {
    let mut out = String::new();

    if page.shows_header() {
        header(&mut out, page, cart);
    }

    match page {
        Page::Home => home(&mut out),
        Page::Products => products(&mut out, catalog, cart),
        Page::Cart => cart_page(&mut out, cart),
    }

    out
}

fn header(out: &mut String, page: Page, cart: &CartState) {
    let nav: Vec<&str> = Page::ALL
        .iter()
        .filter(|p| **p != page)
        .map(Page::as_str)
        .collect();

    let _ = writeln!(
        out,
        "== {STORE_NAME} ==  cart: {}  |  go: {}",
        cart.total_items(),
        nav.join(" | ")
    );
    out.push('\n');
}

fn home(out: &mut String) {
    let _ = writeln!(out, "{STORE_NAME}\n");
    let _ = writeln!(out, "{WELCOME}\n");
    let _ = writeln!(out, "Type `products` to get started.");
}

fn products(out: &mut String, catalog: &Catalog, cart: &CartState) {
    let _ = writeln!(out, "Our indoor plant collection");

    for category in catalog.categories() {
        let _ = writeln!(out, "\n-- {} --", category.name);
        for product in &category.products {
            let status = if cart.is_in_cart(product.id) {
                "[added to cart]"
            } else {
                "[add <id>]"
            };
            let _ = writeln!(
                out,
                "  #{:<3} {:<24} {:>9}  {status}",
                product.id.get(),
                product.name,
                product.price.to_string()
            );
        }
    }
}

fn cart_page(out: &mut String, cart: &CartState) {
    let _ = writeln!(out, "Your shopping cart\n");

    if cart.is_empty() {
        let _ = writeln!(out, "{EMPTY_CART}");
        return;
    }

    let _ = writeln!(out, "Total plants: {}", cart.total_items());
    let _ = writeln!(out, "Total to pay: {}\n", cart.total_price());

    for item in cart.items() {
        let _ = writeln!(
            out,
            "  #{:<3} {:<24} {} each  x{:<3} subtotal {}",
            item.id().get(),
            item.product.name,
            item.price(),
            item.quantity,
            item.subtotal()
        );
    }

    let _ = writeln!(out, "\n[inc|dec|rm <id>]  [products]  [checkout]");
}

#[cfg(test)]
mod tests {
    use cart::{CartAction, CartStore};
    use common::ProductId;

    use super::*;

    fn store_with(ids: &[u32]) -> CartStore {
        let catalog = Catalog::nursery();
        let mut store = CartStore::new();
        for &id in ids {
            let product = catalog.product(ProductId::new(id)).unwrap().clone();
            store.dispatch(CartAction::AddToCart(product));
        }
        store
    }

    #[test]
    fn test_home_has_no_header() {
        let out = render(Page::Home, &Catalog::nursery(), &CartState::new());
        assert!(!out.contains("cart:"));
        assert!(out.contains("Welcome to Paradise Nursery"));
    }

    #[test]
    fn test_header_shows_count_and_other_pages() {
        let store = store_with(&[1, 1, 4]);
        let out = render(Page::Products, &Catalog::nursery(), store.state());
        let first = out.lines().next().unwrap();

        assert!(first.contains("cart: 3"), "{first}");
        assert!(first.contains("go: home | cart"), "{first}");
    }

    #[test]
    fn test_products_lists_categories_and_status() {
        let store = store_with(&[2]);
        let out = render(Page::Products, &Catalog::nursery(), store.state());

        assert!(out.contains("-- Plantas de Hojas Verdes --"));
        assert!(out.contains("-- Plantas Colgantes --"));

        let ficus = out.lines().find(|l| l.contains("Ficus Lyrata")).unwrap();
        assert!(ficus.contains("$52.50"));
        assert!(ficus.contains("[added to cart]"));

        let aloe = out.lines().find(|l| l.contains("Aloe Vera")).unwrap();
        assert!(aloe.contains("[add <id>]"));
    }

    #[test]
    fn test_empty_cart_page() {
        let out = render(Page::Cart, &Catalog::nursery(), &CartState::new());
        assert!(out.contains("Your cart is empty."));
        assert!(!out.contains("Total to pay"));
    }

    #[test]
    fn test_cart_page_totals_and_lines() {
        let store = store_with(&[3, 3, 5]);
        let out = render(Page::Cart, &Catalog::nursery(), store.state());

        assert!(out.contains("Total plants: 3"));
        assert!(out.contains("Total to pay: $66.00"));

        let echeveria = out.lines().find(|l| l.contains("Echeveria")).unwrap();
        assert!(echeveria.contains("$18.75 each"));
        assert!(echeveria.contains("x2"));
        assert!(echeveria.contains("subtotal $37.50"));
    }
}
