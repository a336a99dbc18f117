use cart::{CartAction, CartState, CartStore, Reducer, reduce};
use catalog::{Catalog, Product};
use common::{Money, ProductId};
use criterion::{Criterion, criterion_group, criterion_main};

fn filled_cart(lines: u32) -> CartState {
    let actions: Vec<CartAction> = (1..=lines)
        .map(|n| {
            CartAction::AddToCart(Product::new(
                n,
                format!("Plant {n}"),
                Money::from_cents(1000 + i64::from(n)),
                "",
            ))
        })
        .collect();
    CartState::new().reduce_all(&actions)
}

fn bench_add_new(c: &mut Criterion) {
    let state = filled_cart(20);
    let product = Product::new(999u32, "Bench Plant", Money::from_cents(1234), "");
    let action = CartAction::AddToCart(product);

    c.bench_function("cart/add_new_line", |b| {
        b.iter(|| reduce(&state, &action));
    });
}

fn bench_increment(c: &mut Criterion) {
    let state = filled_cart(20);
    let action = CartAction::IncrementItem(ProductId::new(10));

    c.bench_function("cart/increment", |b| {
        b.iter(|| reduce(&state, &action));
    });
}

fn bench_totals(c: &mut Criterion) {
    let state = filled_cart(50);

    c.bench_function("cart/totals", |b| {
        b.iter(|| (state.total_items(), state.total_price()));
    });
}

fn bench_nursery_session(c: &mut Criterion) {
    let catalog = Catalog::nursery();
    let actions: Vec<CartAction> = catalog
        .products()
        .cloned()
        .map(CartAction::AddToCart)
        .chain((1..=6).map(|n| CartAction::IncrementItem(ProductId::new(n))))
        .chain((1..=6).map(|n| CartAction::DecrementItem(ProductId::new(n))))
        .chain([CartAction::RemoveFromCart(ProductId::new(3))])
        .collect();

    c.bench_function("cart/nursery_session_replay", |b| {
        b.iter(|| CartStore::replay(actions.clone()));
    });
}

criterion_group!(
    benches,
    bench_add_new,
    bench_increment,
    bench_totals,
    bench_nursery_session
);
criterion_main!(benches);
