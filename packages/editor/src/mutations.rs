//! # Dashboard Mutations
//!
//! Serializable description of every structural edit, dispatched to the
//! functions in [`crate::ops`].
//!
//! ## Semantics
//!
//! - Every mutation takes a whole document and returns a new one; the input
//!   is never modified.
//! - A failed mutation returns an error and no document. Composite moves
//!   build an intermediate document internally, but callers only ever see
//!   the final result.
//! - Absent card or section lists behave as empty when appending or
//!   inserting; reading or removing past the end is an error.

use crate::ops::{cards, sections, views};
use crate::path::PathError;
use lovelace_common::Localize;
use lovelace_schema::{
    CardConfig, CardPath, ContainerPath, LovelaceConfig, SectionConfig, SectionPath, ViewConfig,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Structural edits to a dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// Append a card to a view or section
    AddCard { path: ContainerPath, card: CardConfig },

    /// Append several cards, keeping their order
    AddCards {
        path: ContainerPath,
        cards: Vec<CardConfig>,
    },

    ReplaceCard { path: CardPath, card: CardConfig },

    DeleteCard { path: CardPath },

    /// Insert a card before the addressed index
    InsertCard { path: CardPath, card: CardConfig },

    /// Reorder a card inside its own container
    MoveCardToIndex { path: CardPath, index: usize },

    /// Move a card to the end of another container
    MoveCardToContainer { from: CardPath, to: ContainerPath },

    /// Move a card to an exact position, possibly in another container
    MoveCard { from: CardPath, to: CardPath },

    AddView { view: ViewConfig },

    ReplaceView { index: usize, view: ViewConfig },

    SwapView { first: usize, second: usize },

    DeleteView { index: usize },

    AddSection { view: usize, section: SectionConfig },

    DeleteSection { path: SectionPath },

    InsertSection {
        path: SectionPath,
        section: SectionConfig,
    },

    MoveSection { from: SectionPath, to: SectionPath },
}

/// Section edits refused on strategy views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEdit {
    Add,
    Delete,
    Insert,
}

impl fmt::Display for SectionEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SectionEdit::Add => "Adding",
            SectionEdit::Delete => "Deleting",
            SectionEdit::Insert => "Inserting",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error(transparent)]
    Path(#[from] PathError),

    /// Localized message for the editing UI
    #[error("{0}")]
    DuplicatePath(String),

    #[error("{edit} sections in a strategy is not supported.")]
    UnsupportedOnStrategy { view: usize, edit: SectionEdit },

    #[error("You cannot move a card to the view or section it is in.")]
    InvalidMove { from: CardPath, to: ContainerPath },

    #[error("Card {card} does not exist in {container}: it holds {len} cards")]
    CardIndexOutOfRange {
        container: ContainerPath,
        card: usize,
        len: usize,
    },

    #[error("View {index} does not exist: dashboard holds {len} views")]
    ViewIndexOutOfRange { index: usize, len: usize },

    #[error("Section {section} does not exist in view {view}: it holds {len} sections")]
    SectionIndexOutOfRange {
        view: usize,
        section: usize,
        len: usize,
    },
}

impl MutationError {
    /// Errors meant to be shown to the person editing the dashboard.
    ///
    /// Everything else means the caller produced a path that does not fit
    /// the document.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            MutationError::DuplicatePath(_) | MutationError::UnsupportedOnStrategy { .. }
        )
    }
}

impl Mutation {
    /// Apply mutation to a document, returning the edited copy
    pub fn apply(
        &self,
        config: &LovelaceConfig,
        localize: &dyn Localize,
    ) -> Result<LovelaceConfig, MutationError> {
        debug!(op = self.name(), "Applying mutation");

        let result = match self {
            Mutation::AddCard { path, card } => cards::add_card(config, *path, card.clone()),
            Mutation::AddCards { path, cards: new_cards } => {
                cards::add_cards(config, *path, new_cards.iter().cloned())
            }
            Mutation::ReplaceCard { path, card } => {
                cards::replace_card(config, *path, card.clone())
            }
            Mutation::DeleteCard { path } => cards::delete_card(config, *path),
            Mutation::InsertCard { path, card } => cards::insert_card(config, *path, card.clone()),
            Mutation::MoveCardToIndex { path, index } => {
                cards::move_card_to_index(config, *path, *index)
            }
            Mutation::MoveCardToContainer { from, to } => {
                cards::move_card_to_container(config, *from, *to)
            }
            Mutation::MoveCard { from, to } => cards::move_card(config, *from, *to),

            Mutation::AddView { view } => views::add_view(config, view.clone(), localize),
            Mutation::ReplaceView { index, view } => {
                views::replace_view(config, *index, view.clone(), localize)
            }
            Mutation::SwapView { first, second } => views::swap_view(config, *first, *second),
            Mutation::DeleteView { index } => views::delete_view(config, *index),

            Mutation::AddSection { view, section } => {
                sections::add_section(config, *view, section.clone())
            }
            Mutation::DeleteSection { path } => sections::delete_section(config, *path),
            Mutation::InsertSection { path, section } => {
                sections::insert_section(config, *path, section.clone())
            }
            Mutation::MoveSection { from, to } => sections::move_section(config, *from, *to),
        };

        if let Err(err) = &result {
            warn!(op = self.name(), error = %err, "Mutation rejected");
        }
        result
    }

    /// Operation name, as used in the serialized `op` tag
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddCard { .. } => "add_card",
            Mutation::AddCards { .. } => "add_cards",
            Mutation::ReplaceCard { .. } => "replace_card",
            Mutation::DeleteCard { .. } => "delete_card",
            Mutation::InsertCard { .. } => "insert_card",
            Mutation::MoveCardToIndex { .. } => "move_card_to_index",
            Mutation::MoveCardToContainer { .. } => "move_card_to_container",
            Mutation::MoveCard { .. } => "move_card",
            Mutation::AddView { .. } => "add_view",
            Mutation::ReplaceView { .. } => "replace_view",
            Mutation::SwapView { .. } => "swap_view",
            Mutation::DeleteView { .. } => "delete_view",
            Mutation::AddSection { .. } => "add_section",
            Mutation::DeleteSection { .. } => "delete_section",
            Mutation::InsertSection { .. } => "insert_section",
            Mutation::MoveSection { .. } => "move_section",
        }
    }
}
