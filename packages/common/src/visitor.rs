use lovelace_schema::{CardConfig, CardPath, ContainerPath, LovelaceConfig, SectionConfig, ViewConfig};

/// Visitor pattern for traversing dashboard documents immutably
///
/// This trait provides default implementations that walk the entire tree
/// in document order: a view's own cards first, then its sections.
/// Override specific visit_* methods to perform custom actions on nodes.
pub trait Visitor: Sized {
    fn visit_config(&mut self, config: &LovelaceConfig) {
        walk_config(self, config);
    }

    fn visit_view(&mut self, index: usize, view: &ViewConfig) {
        walk_view(self, index, view);
    }

    fn visit_section(&mut self, path: ContainerPath, section: &SectionConfig) {
        walk_section(self, path, section);
    }

    fn visit_card(&mut self, _path: CardPath, _card: &CardConfig) {
        // Leaf node, no children to walk
    }
}

pub fn walk_config<V: Visitor>(visitor: &mut V, config: &LovelaceConfig) {
    for (index, view) in config.views.iter().enumerate() {
        visitor.visit_view(index, view);
    }
}

pub fn walk_view<V: Visitor>(visitor: &mut V, index: usize, view: &ViewConfig) {
    let container = ContainerPath::view(index);
    if let Some(cards) = &view.cards {
        for (card, config) in cards.iter().enumerate() {
            visitor.visit_card(container.card(card), config);
        }
    }

    if let Some(sections) = &view.sections {
        for (section, config) in sections.iter().enumerate() {
            visitor.visit_section(ContainerPath::section(index, section), config);
        }
    }
}

pub fn walk_section<V: Visitor>(visitor: &mut V, path: ContainerPath, section: &SectionConfig) {
    if let Some(cards) = &section.cards {
        for (card, config) in cards.iter().enumerate() {
            visitor.visit_card(path.card(card), config);
        }
    }
}
