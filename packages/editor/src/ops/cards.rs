//! Card operations.
//!
//! Card lists that are absent are treated as empty when appending or
//! inserting. Operations that read an existing card fail with
//! [`MutationError::CardIndexOutOfRange`] when the index is past the end.

use crate::mutations::MutationError;
use crate::path::{find_cards, update_cards};
use lovelace_schema::{CardConfig, CardPath, ContainerPath, LovelaceConfig};
use std::sync::Arc;
use tracing::debug;

/// Owned copy of the card pointers at `path` (empty when absent)
fn cards_at(
    config: &LovelaceConfig,
    path: ContainerPath,
) -> Result<Vec<Arc<CardConfig>>, MutationError> {
    Ok(find_cards(config, path)?
        .map(|cards| cards.to_vec())
        .unwrap_or_default())
}

fn check_index(path: CardPath, len: usize) -> Result<(), MutationError> {
    if path.card < len {
        Ok(())
    } else {
        Err(MutationError::CardIndexOutOfRange {
            container: path.container,
            card: path.card,
            len,
        })
    }
}

/// Card currently stored at `path`
pub fn find_card(config: &LovelaceConfig, path: CardPath) -> Result<Arc<CardConfig>, MutationError> {
    let (container, index) = path.split();
    let cards = cards_at(config, container)?;
    check_index(path, cards.len())?;
    Ok(Arc::clone(&cards[index]))
}

pub fn add_card(
    config: &LovelaceConfig,
    path: ContainerPath,
    card: impl Into<Arc<CardConfig>>,
) -> Result<LovelaceConfig, MutationError> {
    let card: Arc<CardConfig> = card.into();
    add_cards(config, path, std::iter::once(card))
}

/// Append several cards in order with a single rebuild
pub fn add_cards<I>(
    config: &LovelaceConfig,
    path: ContainerPath,
    cards: I,
) -> Result<LovelaceConfig, MutationError>
where
    I: IntoIterator,
    I::Item: Into<Arc<CardConfig>>,
{
    let mut new_cards = cards_at(config, path)?;
    new_cards.extend(cards.into_iter().map(Into::into));
    Ok(update_cards(config, path, new_cards.into())?)
}

pub fn replace_card(
    config: &LovelaceConfig,
    path: CardPath,
    card: impl Into<Arc<CardConfig>>,
) -> Result<LovelaceConfig, MutationError> {
    let (container, index) = path.split();
    let mut cards = cards_at(config, container)?;
    check_index(path, cards.len())?;

    cards[index] = card.into();
    Ok(update_cards(config, container, cards.into())?)
}

pub fn delete_card(config: &LovelaceConfig, path: CardPath) -> Result<LovelaceConfig, MutationError> {
    let (container, index) = path.split();
    let mut cards = cards_at(config, container)?;
    check_index(path, cards.len())?;

    cards.remove(index);
    Ok(update_cards(config, container, cards.into())?)
}

/// Insert before `path.card`.
///
/// An index past the end appends. When the container has no card list yet
/// the result is a list holding only `card`, whatever the index.
pub fn insert_card(
    config: &LovelaceConfig,
    path: CardPath,
    card: impl Into<Arc<CardConfig>>,
) -> Result<LovelaceConfig, MutationError> {
    let (container, index) = path.split();
    let card: Arc<CardConfig> = card.into();
    let cards = match find_cards(config, container)? {
        Some(existing) => {
            let mut cards = existing.to_vec();
            cards.insert(index.min(cards.len()), card);
            cards
        }
        None => vec![card],
    };

    Ok(update_cards(config, container, cards.into())?)
}

/// Move a card to `index` within its own container.
///
/// The target is clamped to `len - 1` of the list *before* the card is
/// removed, so any target at or past the last slot lands on the last slot.
pub fn move_card_to_index(
    config: &LovelaceConfig,
    path: CardPath,
    index: usize,
) -> Result<LovelaceConfig, MutationError> {
    let (container, old_index) = path.split();
    let mut cards = cards_at(config, container)?;
    check_index(path, cards.len())?;

    let new_index = index.min(cards.len() - 1);
    debug!(container = %container, from = old_index, to = new_index, "Moving card within container");

    let card = cards.remove(old_index);
    cards.insert(new_index, card);
    Ok(update_cards(config, container, cards.into())?)
}

/// Move a card to the end of a different container.
///
/// Containers are compared by (view, section) index pair.
pub fn move_card_to_container(
    config: &LovelaceConfig,
    from: CardPath,
    to: ContainerPath,
) -> Result<LovelaceConfig, MutationError> {
    if from.container == to {
        return Err(MutationError::InvalidMove { from, to });
    }

    let card = find_card(config, from)?;
    debug!(from = %from, to = %to, "Moving card to container");

    // Append first: the containers differ, so the delete cannot shift `to`
    let config = add_card(config, to, card)?;
    delete_card(&config, from)
}

/// Move a card to a full card path, possibly in another container.
///
/// The card is deleted before it is inserted, so when both paths share a
/// container and `to` comes after `from`, `to.card` indexes the shortened
/// list. An index past the end of that list appends.
pub fn move_card(
    config: &LovelaceConfig,
    from: CardPath,
    to: CardPath,
) -> Result<LovelaceConfig, MutationError> {
    let card = find_card(config, from)?;
    debug!(from = %from, to = %to, "Moving card");

    let config = delete_card(config, from)?;
    insert_card(&config, to, card)
}
