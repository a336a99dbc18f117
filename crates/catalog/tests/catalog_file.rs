//! Integration tests for loading catalogs from disk.

use std::io::Write;
use std::path::PathBuf;

use catalog::{Catalog, CatalogError};
use common::{Money, ProductId};

/// Writes `contents` to a uniquely named file under the system temp dir.
fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "catalog-test-{}-{}.json",
        std::process::id(),
        name
    ));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn load_reads_categories_in_order() {
    let path = write_temp(
        "ordered",
        r#"{"categories": [
            {"name": "Ferns", "products": [
                {"id": 20, "name": "Boston Fern", "price_cents": 1999, "image": "img://20"}
            ]},
            {"name": "Palms", "products": [
                {"id": 21, "name": "Areca Palm", "price_cents": 3450, "image": "img://21"},
                {"id": 22, "name": "Kentia Palm", "price_cents": 6000, "image": "img://22"}
            ]}
        ]}"#,
    );

    let catalog = Catalog::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ferns", "Palms"]);
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.product(ProductId::new(21)).unwrap().price,
        Money::from_cents(3450)
    );
}

#[test]
fn load_rejects_duplicate_ids() {
    let path = write_temp(
        "duplicate",
        r#"{"categories": [
            {"name": "A", "products": [
                {"id": 1, "name": "One", "price_cents": 100, "image": ""},
                {"id": 1, "name": "Also One", "price_cents": 200, "image": ""}
            ]}
        ]}"#,
    );

    let result = Catalog::load(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(
        result,
        Err(CatalogError::DuplicateProductId { .. })
    ));
}

#[test]
fn load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("catalog-test-does-not-exist.json");
    let result = Catalog::load(&path);
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn nursery_round_trips_through_json() {
    let nursery = Catalog::nursery();
    let json = serde_json::to_string(&nursery).unwrap();
    let parsed = Catalog::from_json_str(&json).unwrap();
    assert_eq!(parsed, nursery);
}
