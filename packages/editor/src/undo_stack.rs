//! # Undo/Redo Stack
//!
//! Tracks mutation history and enables undo/redo operations.
//!
//! ## Design
//!
//! - Each batch records the document it was applied to
//! - Undo hands back that document and moves the batch to the redo stack
//! - Redo reapplies the original mutations to the current document
//! - New mutations clear the redo stack
//! - Supports batched operations (group multiple mutations as one undo step)
//!
//! Documents share unchanged subtrees, so keeping one snapshot per undo
//! level costs roughly the size of the edited path, not the whole dashboard.
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! let messages = Messages::english();
//!
//! // Apply mutation with undo support
//! let mutation = Mutation::DeleteView { index: 0 };
//! let edited = stack.apply(&mutation, &config, &messages)?;
//!
//! // Undo
//! let restored = stack.undo().unwrap();
//!
//! // Redo
//! let edited_again = stack.redo(&restored, &messages)?;
//! ```

use crate::{Mutation, MutationError};
use lovelace_common::Localize;
use lovelace_schema::LovelaceConfig;

/// A group of mutations that should be undone/redone together
#[derive(Debug, Clone)]
pub struct MutationBatch {
    /// The mutations in this batch (in application order)
    pub mutations: Vec<Mutation>,

    /// Document before the first mutation of the batch
    pub before: LovelaceConfig,

    /// Optional description of this batch
    pub description: Option<String>,
}

impl MutationBatch {
    /// Create an empty batch starting from `before`
    pub fn new(before: LovelaceConfig) -> Self {
        Self {
            mutations: Vec::new(),
            before,
            description: None,
        }
    }

    /// Create a single-mutation batch
    pub fn single(mutation: Mutation, before: LovelaceConfig) -> Self {
        Self {
            mutations: vec![mutation],
            before,
            description: None,
        }
    }

    /// Add a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Undo/redo stack for dashboard editing
#[derive(Debug)]
pub struct UndoStack {
    /// Stack of applied mutations (most recent last)
    undo_stack: Vec<MutationBatch>,

    /// Stack of undone mutations (most recent last)
    redo_stack: Vec<MutationBatch>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<MutationBatch>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Apply a mutation and record it for undo
    ///
    /// Nothing is recorded when the mutation fails.
    pub fn apply(
        &mut self,
        mutation: &Mutation,
        config: &LovelaceConfig,
        localize: &dyn Localize,
    ) -> Result<LovelaceConfig, MutationError> {
        let edited = mutation.apply(config, localize)?;

        if let Some(batch) = &mut self.current_batch {
            batch.mutations.push(mutation.clone());
        } else {
            let batch = MutationBatch::single(mutation.clone(), config.clone());
            self.push_batch(batch);
        }

        Ok(edited)
    }

    /// Start a batch of mutations (will be undone/redone together)
    pub fn begin_batch(&mut self, config: &LovelaceConfig) {
        self.current_batch = Some(MutationBatch::new(config.clone()));
    }

    /// End the current batch and push to undo stack
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if !batch.mutations.is_empty() {
                self.push_batch(batch);
            }
        }
    }

    /// Drop the current batch without recording it
    ///
    /// Returns the document the batch started from.
    pub fn abort_batch(&mut self) -> Option<LovelaceConfig> {
        self.current_batch.take().map(|batch| batch.before)
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    /// Push a batch to the undo stack
    fn push_batch(&mut self, batch: MutationBatch) {
        self.undo_stack.push(batch);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // Clear redo stack (new action invalidates future)
        self.redo_stack.clear();
    }

    /// Undo the most recent mutation/batch
    ///
    /// Returns the document as it was before the batch, or `None` when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> Option<LovelaceConfig> {
        let batch = self.undo_stack.pop()?;
        let before = batch.before.clone();
        self.redo_stack.push(batch);
        Some(before)
    }

    /// Redo the most recently undone mutation/batch on top of `config`
    ///
    /// If a mutation no longer applies, the batch stays on the redo stack
    /// and the error is returned.
    pub fn redo(
        &mut self,
        config: &LovelaceConfig,
        localize: &dyn Localize,
    ) -> Result<Option<LovelaceConfig>, MutationError> {
        let Some(mut batch) = self.redo_stack.pop() else {
            return Ok(None); // Nothing to redo
        };

        let mut edited = config.clone();
        for mutation in &batch.mutations {
            match mutation.apply(&edited, localize) {
                Ok(next) => edited = next,
                Err(err) => {
                    self.redo_stack.push(batch);
                    return Err(err);
                }
            }
        }

        // Move back to undo stack
        batch.before = config.clone();
        self.undo_stack.push(batch);

        Ok(Some(edited))
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lovelace_common::Messages;
    use lovelace_schema::{CardConfig, CardPath, ContainerPath};
    use serde_json::json;

    fn dashboard() -> LovelaceConfig {
        LovelaceConfig::from_value(json!({
            "views": [{ "path": "home", "cards": [{ "type": "A" }, { "type": "B" }] }]
        }))
        .unwrap()
    }

    fn card_types(config: &LovelaceConfig) -> Vec<String> {
        config.views[0]
            .cards
            .as_ref()
            .map(|cards| cards.iter().map(|c| c.card_type.clone()).collect())
            .unwrap_or_default()
    }

    fn add(card_type: &str) -> Mutation {
        Mutation::AddCard {
            path: ContainerPath::view(0),
            card: CardConfig::new(card_type),
        }
    }

    #[test]
    fn test_undo_stack_creation() {
        let stack = UndoStack::new();
        assert_eq!(stack.undo_levels(), 0);
        assert_eq!(stack.redo_levels(), 0);
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_apply_undo_redo() {
        let messages = Messages::english();
        let mut stack = UndoStack::new();
        let original = dashboard();

        let edited = stack.apply(&add("C"), &original, &messages).unwrap();
        assert_eq!(card_types(&edited), ["A", "B", "C"]);
        assert_eq!(stack.undo_levels(), 1);

        // Undo
        let undone = stack.undo().unwrap();
        assert_eq!(undone, original);
        assert_eq!(stack.undo_levels(), 0);
        assert_eq!(stack.redo_levels(), 1);

        // Redo
        let redone = stack.redo(&undone, &messages).unwrap().unwrap();
        assert_eq!(redone, edited);
        assert_eq!(stack.undo_levels(), 1);
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_failed_mutation_is_not_recorded() {
        let mut stack = UndoStack::new();
        let mutation = Mutation::DeleteCard {
            path: CardPath::in_view(0, 5),
        };

        assert!(stack.apply(&mutation, &dashboard(), &Messages::english()).is_err());
        assert!(!stack.can_undo());
    }

    #[test]
    fn test_batched_mutations() {
        let messages = Messages::english();
        let mut stack = UndoStack::new();
        let original = dashboard();

        // Start batch
        stack.begin_batch(&original);
        stack.set_batch_description("Add two cards");

        let step = stack.apply(&add("C"), &original, &messages).unwrap();
        let edited = stack.apply(&add("D"), &step, &messages).unwrap();

        // End batch
        stack.end_batch();

        assert_eq!(stack.undo_levels(), 1);
        assert_eq!(stack.undo_description(), Some("Add two cards"));

        // Undo should revert both
        let undone = stack.undo().unwrap();
        assert_eq!(undone, original);

        let redone = stack.redo(&undone, &messages).unwrap().unwrap();
        assert_eq!(redone, edited);
    }

    #[test]
    fn test_abort_batch_returns_start() {
        let messages = Messages::english();
        let mut stack = UndoStack::new();
        let original = dashboard();

        stack.begin_batch(&original);
        let _ = stack.apply(&add("C"), &original, &messages).unwrap();

        assert_eq!(stack.abort_batch(), Some(original));
        assert!(!stack.can_undo());
    }

    #[test]
    fn test_new_mutation_clears_redo() {
        let messages = Messages::english();
        let mut stack = UndoStack::new();

        let edited = stack.apply(&add("C"), &dashboard(), &messages).unwrap();
        let undone = stack.undo().unwrap();
        assert_eq!(stack.redo_levels(), 1);
        assert_ne!(undone, edited);

        // New mutation clears redo
        stack.apply(&add("D"), &undone, &messages).unwrap();
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_redo_that_no_longer_applies_stays_queued() {
        let messages = Messages::english();
        let mut stack = UndoStack::new();

        let view = serde_json::from_value(json!({ "path": "office" })).unwrap();
        let _ = stack.apply(&Mutation::AddView { view }, &dashboard(), &messages).unwrap();
        stack.undo().unwrap();

        // Someone else claimed the path in the meantime
        let conflicting = LovelaceConfig::from_value(json!({
            "views": [{ "path": "office" }]
        }))
        .unwrap();

        let err = stack.redo(&conflicting, &messages).unwrap_err();
        assert!(matches!(err, MutationError::DuplicatePath(_)));
        assert_eq!(stack.redo_levels(), 1);
    }

    #[test]
    fn test_max_levels_enforced() {
        let messages = Messages::english();
        let mut stack = UndoStack::with_max_levels(2);
        let mut config = dashboard();

        for i in 0..3 {
            config = stack.apply(&add(&format!("card-{}", i)), &config, &messages).unwrap();
        }

        // Should only keep 2 (max levels)
        assert_eq!(stack.undo_levels(), 2);
    }
}
