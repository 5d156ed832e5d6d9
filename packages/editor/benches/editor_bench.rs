use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lovelace_common::Messages;
use lovelace_editor::ops::{add_card, move_card, move_card_to_index, swap_view};
use lovelace_editor::{CardConfig, CardPath, ContainerPath, LovelaceConfig, Mutation};
use serde_json::{json, Value};

/// Dashboard with `views` views of 4 sections x 12 cards each
fn large_dashboard(views: usize) -> LovelaceConfig {
    let card = |i: usize| json!({ "type": "tile", "entity": format!("light.lamp_{i}") });
    let section = |s: usize| json!({ "type": "grid", "cards": (0..12).map(|i| card(s * 12 + i)).collect::<Vec<Value>>() });
    let view = |v: usize| {
        json!({
            "path": format!("view-{v}"),
            "cards": (0..6).map(card).collect::<Vec<Value>>(),
            "sections": (0..4).map(section).collect::<Vec<Value>>()
        })
    };

    LovelaceConfig::from_value(json!({ "views": (0..views).map(view).collect::<Vec<Value>>() })).unwrap()
}

fn add_card_to_section(c: &mut Criterion) {
    let config = large_dashboard(50);
    let path = ContainerPath::section(25, 2);

    c.bench_function("add_card_to_section", |b| {
        b.iter(|| add_card(black_box(&config), path, CardConfig::new("markdown")))
    });
}

fn reorder_cards(c: &mut Criterion) {
    let config = large_dashboard(50);

    c.bench_function("move_card_to_index", |b| {
        b.iter(|| move_card_to_index(black_box(&config), CardPath::in_section(10, 1, 0), 11))
    });

    c.bench_function("move_card_across_views", |b| {
        b.iter(|| {
            move_card(
                black_box(&config),
                CardPath::in_section(3, 0, 4),
                CardPath::in_section(40, 3, 0),
            )
        })
    });
}

fn view_operations(c: &mut Criterion) {
    let config = large_dashboard(50);

    c.bench_function("swap_view", |b| b.iter(|| swap_view(black_box(&config), 0, 49)));

    let messages = Messages::english();
    let mutation = Mutation::AddView {
        view: serde_json::from_value(json!({ "path": "new-view" })).unwrap(),
    };
    c.bench_function("add_view_with_path_check", |b| {
        b.iter(|| mutation.apply(black_box(&config), &messages))
    });
}

criterion_group!(benches, add_card_to_section, reorder_cards, view_operations);
criterion_main!(benches);
