//! Built-in nursery listing.

use common::Money;

use crate::catalog::Category;
use crate::product::Product;

const IMAGE_PARAMS: &str = "?auto=format&fit=crop&w=400&q=80";

fn image(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}{IMAGE_PARAMS}")
}

fn plant(id: u32, name: &str, cents: i64, photo: &str) -> Product {
    Product::new(id, name, Money::from_cents(cents), image(photo))
}

pub(crate) fn categories() -> Vec<Category> {
    vec![
        Category::new(
            "Plantas de Hojas Verdes",
            vec![
                plant(1, "Monstera Deliciosa", 4599, "photo-1506905925346-21bda4d32df4"),
                plant(2, "Ficus Lyrata", 5250, "photo-1581595220892-b0739db3ba8c"),
            ],
        ),
        Category::new(
            "Plantas Suculentas",
            vec![
                plant(3, "Echeveria Elegans", 1875, "photo-1459411552884-841db9b3cc2a"),
                plant(4, "Aloe Vera", 2299, "photo-1509587584298-0f3b3a3a1797"),
            ],
        ),
        Category::new(
            "Plantas Colgantes",
            vec![
                plant(5, "Pothos Dorado", 2850, "photo-1632207691143-643e2a9a9361"),
                plant(6, "Hiedra Inglesa", 2499, "photo-1416879595882-3373a0480b5b"),
            ],
        ),
    ]
}
