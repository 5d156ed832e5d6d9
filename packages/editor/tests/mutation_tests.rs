//! Properties every edit operation must hold

use lovelace_common::Messages;
use lovelace_editor::ops::{
    add_card, add_section, add_view, delete_card, delete_section, insert_card, insert_section,
    move_card, move_card_to_container, move_card_to_index, replace_card, swap_view,
};
use lovelace_editor::path::find_cards;
use lovelace_editor::{
    CardConfig, CardPath, ContainerPath, LovelaceConfig, MutationError, SectionConfig,
    SectionPath, ViewConfig,
};
use serde_json::json;
use std::sync::Arc;

fn dashboard() -> LovelaceConfig {
    LovelaceConfig::from_value(json!({
        "views": [
            { "path": "kitchen", "cards": [{ "type": "A" }, { "type": "B" }, { "type": "C" }] },
            {
                "path": "living",
                "sections": [
                    { "type": "grid", "cards": [{ "type": "D" }] },
                    { "type": "grid", "cards": [{ "type": "E" }, { "type": "F" }] }
                ]
            },
            { "strategy": { "type": "original-states" } }
        ]
    }))
    .unwrap()
}

fn types(config: &LovelaceConfig, path: ContainerPath) -> Vec<String> {
    find_cards(config, path)
        .unwrap()
        .map(|cards| cards.iter().map(|c| c.card_type.clone()).collect())
        .unwrap_or_default()
}

fn len(config: &LovelaceConfig, path: ContainerPath) -> usize {
    types(config, path).len()
}

#[test]
fn test_edit_rebuilds_path_and_shares_siblings() {
    let config = dashboard();
    let edited = delete_card(&config, CardPath::in_section(1, 1, 0)).unwrap();

    // Rebuilt along the path
    assert!(!Arc::ptr_eq(&config.views, &edited.views));
    assert!(!Arc::ptr_eq(&config.views[1], &edited.views[1]));
    let before = config.views[1].sections.as_ref().unwrap();
    let after = edited.views[1].sections.as_ref().unwrap();
    assert!(!Arc::ptr_eq(before, after));
    assert!(!Arc::ptr_eq(&before[1], &after[1]));

    // Shared off the path
    assert!(Arc::ptr_eq(&config.views[0], &edited.views[0]));
    assert!(Arc::ptr_eq(&config.views[2], &edited.views[2]));
    assert!(Arc::ptr_eq(&before[0], &after[0]));

    // Surviving cards keep their allocation
    let old_f = &before[1].cards.as_ref().unwrap()[1];
    let new_f = &after[1].cards.as_ref().unwrap()[0];
    assert!(Arc::ptr_eq(old_f, new_f));
}

#[test]
fn test_input_never_changes() {
    let config = dashboard();
    let snapshot = config.clone();

    let added = add_card(&config, ContainerPath::view(0), CardConfig::new("X")).unwrap();
    let moved = move_card(&config, CardPath::in_view(0, 0), CardPath::in_section(1, 0, 0)).unwrap();
    let swapped = swap_view(&config, 0, 1).unwrap();
    let deleted = delete_section(&config, SectionPath::new(1, 0)).unwrap();

    assert_eq!(config, snapshot);

    // Views outside the edited path are the input's own allocations
    assert!(!Arc::ptr_eq(&added.views[0], &config.views[0]));
    assert!(Arc::ptr_eq(&added.views[1], &config.views[1]));
    assert!(Arc::ptr_eq(&added.views[2], &config.views[2]));

    assert!(Arc::ptr_eq(&moved.views[2], &config.views[2]));

    assert!(Arc::ptr_eq(&swapped.views[0], &config.views[1]));
    assert!(Arc::ptr_eq(&swapped.views[1], &config.views[0]));
    assert!(Arc::ptr_eq(&swapped.views[2], &config.views[2]));

    assert!(Arc::ptr_eq(&deleted.views[0], &config.views[0]));
    assert!(Arc::ptr_eq(&deleted.views[2], &config.views[2]));
    let old_sections = config.views[1].sections.as_ref().unwrap();
    let new_sections = deleted.views[1].sections.as_ref().unwrap();
    assert!(Arc::ptr_eq(&new_sections[0], &old_sections[1]));
}

#[test]
fn test_length_laws() {
    let config = dashboard();
    let view = ContainerPath::view(0);
    let base = len(&config, view);

    assert_eq!(len(&add_card(&config, view, CardConfig::new("X")).unwrap(), view), base + 1);
    assert_eq!(len(&delete_card(&config, view.card(1)).unwrap(), view), base - 1);
    assert_eq!(len(&insert_card(&config, view.card(1), CardConfig::new("X")).unwrap(), view), base + 1);
    assert_eq!(len(&replace_card(&config, view.card(1), CardConfig::new("X")).unwrap(), view), base);
    assert_eq!(len(&move_card_to_index(&config, view.card(0), 2).unwrap(), view), base);
    assert_eq!(len(&move_card(&config, view.card(0), view.card(2)).unwrap(), view), base);
}

#[test]
fn test_delete_then_insert_restores_sequence() {
    let config = dashboard();
    let path = CardPath::in_section(1, 1, 1);
    let card = Arc::clone(&find_cards(&config, path.container).unwrap().unwrap()[1]);

    let deleted = delete_card(&config, path).unwrap();
    let restored = insert_card(&deleted, path, card).unwrap();

    assert_eq!(types(&restored, path.container), types(&config, path.container));
    assert_eq!(restored, config);
}

#[test]
fn test_swap_is_an_involution() {
    let config = dashboard();
    for (i, j) in [(0, 1), (0, 2), (1, 2), (2, 2)] {
        let twice = swap_view(&swap_view(&config, i, j).unwrap(), i, j).unwrap();
        assert_eq!(twice, config);
    }
}

#[test]
fn test_duplicate_view_path_rejected() {
    let config = dashboard();
    let view: ViewConfig = serde_json::from_value(json!({ "path": "kitchen", "title": "Copy" })).unwrap();

    let err = add_view(&config, view, &Messages::english()).unwrap_err();
    assert!(matches!(err, MutationError::DuplicatePath(_)));
    assert_eq!(config.views.len(), 3);
}

#[test]
fn test_strategy_view_sections_are_frozen() {
    let config = dashboard();
    let strategy_view = Arc::clone(&config.views[2]);

    assert!(add_section(&config, 2, SectionConfig::default()).is_err());
    assert!(delete_section(&config, SectionPath::new(2, 0)).is_err());
    assert!(insert_section(&config, SectionPath::new(2, 0), SectionConfig::default()).is_err());
    assert!(Arc::ptr_eq(&config.views[2], &strategy_view));
}

#[test]
fn test_concrete_scenario() {
    let config = LovelaceConfig::from_value(json!({
        "views": [{ "cards": [{ "type": "A" }, { "type": "B" }, { "type": "C" }] }]
    }))
    .unwrap();

    let moved = move_card_to_index(&config, CardPath::in_view(0, 1), 0).unwrap();
    assert_eq!(types(&moved, ContainerPath::view(0)), ["B", "A", "C"]);

    let deleted = delete_card(&config, CardPath::in_view(0, 0)).unwrap();
    assert_eq!(types(&deleted, ContainerPath::view(0)), ["B", "C"]);

    let with_second_view = add_view(&config, ViewConfig::default(), &Messages::english()).unwrap();
    let relocated =
        move_card_to_container(&with_second_view, CardPath::in_view(0, 2), ContainerPath::view(1))
            .unwrap();
    assert_eq!(types(&relocated, ContainerPath::view(0)), ["A", "B"]);
    assert_eq!(types(&relocated, ContainerPath::view(1)), ["C"]);
}

#[test]
fn test_move_between_view_and_its_section() {
    // Same view, different containers: not an invalid move
    let config = dashboard();
    let from = CardPath::in_section(1, 1, 0);
    let edited = move_card_to_container(&config, from, ContainerPath::view(1)).unwrap();

    assert_eq!(types(&edited, ContainerPath::view(1)), ["E"]);
    assert_eq!(types(&edited, ContainerPath::section(1, 1)), ["F"]);
}

#[test]
fn test_same_section_move_rejected() {
    let err = move_card_to_container(
        &dashboard(),
        CardPath::in_section(1, 0, 0),
        ContainerPath::section(1, 0),
    )
    .unwrap_err();

    assert_eq!(
        err,
        MutationError::InvalidMove {
            from: CardPath::in_section(1, 0, 0),
            to: ContainerPath::section(1, 0),
        }
    );
}
