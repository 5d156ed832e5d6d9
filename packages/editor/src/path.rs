//! # Path Addressing
//!
//! Resolves structural paths against a dashboard and rebuilds documents
//! with one node or card list replaced.
//!
//! Updates are copy-on-path: the root, the edited view and (if addressed)
//! the edited section are new values. Every other view, section and card is
//! the same `Arc` as in the input document.

use lovelace_schema::{
    is_strategy_section, is_strategy_view, CardConfig, ContainerPath, LovelaceConfig, NodeList,
    SectionConfig, ViewConfig,
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("View does not exist: {0}")]
    ViewNotFound(usize),

    #[error("Section does not exist: {section} in view {view}")]
    SectionNotFound { view: usize, section: usize },

    #[error("Can not find section in a strategy view: {0}")]
    SectionOfStrategyView(usize),

    #[error("Can not update cards in a strategy view: {0}")]
    CardsOfStrategyView(usize),

    #[error("Can not update cards in a strategy section: {section} in view {view}")]
    CardsOfStrategySection { view: usize, section: usize },

    #[error("Node kind does not match container path {0}")]
    ContainerMismatch(ContainerPath),
}

/// Node found at a container path
#[derive(Debug, Clone, PartialEq)]
pub enum Container {
    View(Arc<ViewConfig>),
    Section(Arc<SectionConfig>),
}

impl Container {
    /// Card list of the node, `None` when the node has none yet
    pub fn cards(&self) -> Option<&NodeList<CardConfig>> {
        match self {
            Container::View(view) => view.cards.as_ref(),
            Container::Section(section) => section.cards.as_ref(),
        }
    }
}

pub fn find_view(config: &LovelaceConfig, view: usize) -> Result<&Arc<ViewConfig>, PathError> {
    config.views.get(view).ok_or(PathError::ViewNotFound(view))
}

pub fn find_section(
    config: &LovelaceConfig,
    view: usize,
    section: usize,
) -> Result<&Arc<SectionConfig>, PathError> {
    let view_config = find_view(config, view)?;
    if is_strategy_view(view_config) {
        return Err(PathError::SectionOfStrategyView(view));
    }

    view_config
        .sections
        .as_ref()
        .and_then(|sections| sections.get(section))
        .ok_or(PathError::SectionNotFound { view, section })
}

pub fn find_container(config: &LovelaceConfig, path: ContainerPath) -> Result<Container, PathError> {
    match path.split() {
        (view, None) => Ok(Container::View(Arc::clone(find_view(config, view)?))),
        (view, Some(section)) => Ok(Container::Section(Arc::clone(find_section(
            config, view, section,
        )?))),
    }
}

/// Card list at `path`
///
/// `Ok(None)` means the container exists but has no card list; a missing
/// container is an error.
pub fn find_cards(
    config: &LovelaceConfig,
    path: ContainerPath,
) -> Result<Option<NodeList<CardConfig>>, PathError> {
    Ok(find_container(config, path)?.cards().cloned())
}

pub fn update_view(
    config: &LovelaceConfig,
    index: usize,
    view: Arc<ViewConfig>,
) -> Result<LovelaceConfig, PathError> {
    find_view(config, index)?;
    Ok(config.with_views(replace_at(&config.views, index, view)))
}

pub fn update_section(
    config: &LovelaceConfig,
    view: usize,
    section: usize,
    node: Arc<SectionConfig>,
) -> Result<LovelaceConfig, PathError> {
    find_section(config, view, section)?;
    let view_config = find_view(config, view)?;
    let sections = match &view_config.sections {
        Some(sections) => replace_at(sections, section, node),
        None => return Err(PathError::SectionNotFound { view, section }),
    };
    update_view(config, view, Arc::new(view_config.with_sections(sections)))
}

pub fn update_container(
    config: &LovelaceConfig,
    path: ContainerPath,
    node: Container,
) -> Result<LovelaceConfig, PathError> {
    match (path.split(), node) {
        ((view, None), Container::View(node)) => update_view(config, view, node),
        ((view, Some(section)), Container::Section(node)) => {
            update_section(config, view, section, node)
        }
        _ => Err(PathError::ContainerMismatch(path)),
    }
}

/// New document whose card list at `path` is `cards`
pub fn update_cards(
    config: &LovelaceConfig,
    path: ContainerPath,
    cards: NodeList<CardConfig>,
) -> Result<LovelaceConfig, PathError> {
    match path.split() {
        (view, None) => {
            let view_config = find_view(config, view)?;
            if is_strategy_view(view_config) {
                return Err(PathError::CardsOfStrategyView(view));
            }
            update_view(config, view, Arc::new(view_config.with_cards(cards)))
        }
        (view, Some(section)) => {
            let section_config = find_section(config, view, section)?;
            if is_strategy_section(section_config) {
                return Err(PathError::CardsOfStrategySection { view, section });
            }
            update_section(config, view, section, Arc::new(section_config.with_cards(cards)))
        }
    }
}

/// Copy of `list` with the element at `index` swapped for `node`.
/// Caller checks `index` is in range.
pub(crate) fn replace_at<T>(list: &NodeList<T>, index: usize, node: Arc<T>) -> NodeList<T> {
    list.iter()
        .enumerate()
        .map(|(i, existing)| {
            if i == index {
                Arc::clone(&node)
            } else {
                Arc::clone(existing)
            }
        })
        .collect()
}
