//! View operations.

use crate::mutations::MutationError;
use crate::path::replace_at;
use lovelace_common::{Localize, ERROR_SAME_URL};
use lovelace_schema::{LovelaceConfig, NodeList, ViewConfig};
use std::sync::Arc;
use tracing::warn;

fn check_index(config: &LovelaceConfig, index: usize) -> Result<(), MutationError> {
    let len = config.views.len();
    if index < len {
        Ok(())
    } else {
        Err(MutationError::ViewIndexOutOfRange { index, len })
    }
}

/// Reject `view` if its path is already used by another view.
///
/// Views without a path (or with an empty one) never collide. `skip` is the
/// index of the view being replaced, which may keep its own path.
fn ensure_unique_path(
    config: &LovelaceConfig,
    view: &ViewConfig,
    skip: Option<usize>,
    localize: &dyn Localize,
) -> Result<(), MutationError> {
    let Some(path) = view.url_path() else {
        return Ok(());
    };

    let taken = config
        .views
        .iter()
        .enumerate()
        .any(|(index, other)| Some(index) != skip && other.path.as_deref() == Some(path));

    if taken {
        warn!(path, "View path already in use");
        return Err(MutationError::DuplicatePath(localize.localize(ERROR_SAME_URL)));
    }
    Ok(())
}

pub fn add_view(
    config: &LovelaceConfig,
    view: impl Into<Arc<ViewConfig>>,
    localize: &dyn Localize,
) -> Result<LovelaceConfig, MutationError> {
    let view: Arc<ViewConfig> = view.into();
    ensure_unique_path(config, &view, None, localize)?;

    let views: NodeList<ViewConfig> = config
        .views
        .iter()
        .cloned()
        .chain(std::iter::once(view))
        .collect();
    Ok(config.with_views(views))
}

pub fn replace_view(
    config: &LovelaceConfig,
    index: usize,
    view: impl Into<Arc<ViewConfig>>,
    localize: &dyn Localize,
) -> Result<LovelaceConfig, MutationError> {
    check_index(config, index)?;
    let view: Arc<ViewConfig> = view.into();
    ensure_unique_path(config, &view, Some(index), localize)?;

    Ok(config.with_views(replace_at(&config.views, index, view)))
}

/// Exchange two views. Swapping a view with itself yields an equal document.
pub fn swap_view(
    config: &LovelaceConfig,
    first: usize,
    second: usize,
) -> Result<LovelaceConfig, MutationError> {
    check_index(config, first)?;
    check_index(config, second)?;

    let mut views = config.views.to_vec();
    views.swap(first, second);
    Ok(config.with_views(views.into()))
}

pub fn delete_view(config: &LovelaceConfig, index: usize) -> Result<LovelaceConfig, MutationError> {
    check_index(config, index)?;

    let views: NodeList<ViewConfig> = config
        .views
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, view)| Arc::clone(view))
        .collect();
    Ok(config.with_views(views))
}
