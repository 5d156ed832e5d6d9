//! Section operations.
//!
//! Strategy views generate their own sections, so every operation here
//! rejects them before touching the document.

use crate::mutations::{MutationError, SectionEdit};
use crate::path::{find_section, find_view, update_view};
use lovelace_schema::{is_strategy_view, LovelaceConfig, SectionConfig, SectionPath, ViewConfig};
use std::sync::Arc;
use tracing::debug;

/// Editable view at `view`
fn content_view(
    config: &LovelaceConfig,
    view: usize,
    edit: SectionEdit,
) -> Result<&Arc<ViewConfig>, MutationError> {
    let view_config = find_view(config, view)?;
    if is_strategy_view(view_config) {
        return Err(MutationError::UnsupportedOnStrategy { view, edit });
    }
    Ok(view_config)
}

fn sections_of(view: &ViewConfig) -> Vec<Arc<SectionConfig>> {
    view.sections
        .as_ref()
        .map(|sections| sections.to_vec())
        .unwrap_or_default()
}

pub fn add_section(
    config: &LovelaceConfig,
    view: usize,
    section: impl Into<Arc<SectionConfig>>,
) -> Result<LovelaceConfig, MutationError> {
    let view_config = content_view(config, view, SectionEdit::Add)?;

    let mut sections = sections_of(view_config);
    sections.push(section.into());

    let updated = view_config.with_sections(sections.into());
    Ok(update_view(config, view, Arc::new(updated))?)
}

pub fn delete_section(
    config: &LovelaceConfig,
    path: SectionPath,
) -> Result<LovelaceConfig, MutationError> {
    let view_config = content_view(config, path.view, SectionEdit::Delete)?;

    let mut sections = sections_of(view_config);
    if path.section >= sections.len() {
        return Err(MutationError::SectionIndexOutOfRange {
            view: path.view,
            section: path.section,
            len: sections.len(),
        });
    }
    sections.remove(path.section);

    let updated = view_config.with_sections(sections.into());
    Ok(update_view(config, path.view, Arc::new(updated))?)
}

/// Insert before `path.section`.
///
/// Same absent-list rule as card insertion: with no section list the new
/// section becomes the only one. An index past the end appends.
pub fn insert_section(
    config: &LovelaceConfig,
    path: SectionPath,
    section: impl Into<Arc<SectionConfig>>,
) -> Result<LovelaceConfig, MutationError> {
    let view_config = content_view(config, path.view, SectionEdit::Insert)?;
    let section: Arc<SectionConfig> = section.into();

    let sections = match &view_config.sections {
        Some(existing) => {
            let mut sections = existing.to_vec();
            sections.insert(path.section.min(sections.len()), section);
            sections
        }
        None => vec![section],
    };

    let updated = view_config.with_sections(sections.into());
    Ok(update_view(config, path.view, Arc::new(updated))?)
}

/// Delete at `from`, then insert at `to`.
///
/// Within one view, `to.section` indexes the list after removal.
pub fn move_section(
    config: &LovelaceConfig,
    from: SectionPath,
    to: SectionPath,
) -> Result<LovelaceConfig, MutationError> {
    let section = Arc::clone(find_section(config, from.view, from.section)?);
    debug!(from = %from, to = %to, "Moving section");

    let config = delete_section(config, from)?;
    insert_section(&config, to, section)
}
