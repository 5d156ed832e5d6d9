//! # Dashboard Handle
//!
//! Editing state for one dashboard document.
//!
//! A Dashboard can be:
//! - **Memory-backed**: created from JSON text or an existing config
//! - **File-backed**: loaded from disk and saved back in place
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Parse → Edit → Save
//!   ↓      ↓       ↓      ↓
//! File  Config Mutations File
//! ```
//!
//! Every successful edit replaces the held config wholesale and bumps the
//! version. A failed edit leaves config, version and history untouched.

use crate::{EditorError, Mutation, UndoStack};
use lovelace_common::{read_dashboard, write_dashboard, Localize};
use lovelace_schema::LovelaceConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Editable dashboard document
#[derive(Debug)]
pub struct Dashboard {
    /// Backing file (if any)
    path: Option<PathBuf>,

    /// Current version number (increments on each applied edit)
    pub version: u64,

    config: LovelaceConfig,
    history: UndoStack,
    dirty: bool,
}

impl Dashboard {
    /// Wrap an existing config (memory-backed)
    pub fn new(config: LovelaceConfig) -> Self {
        Self {
            path: None,
            version: 0,
            config,
            history: UndoStack::new(),
            dirty: false,
        }
    }

    /// Parse a dashboard from JSON text (memory-backed)
    pub fn from_json(source: &str) -> Result<Self, EditorError> {
        Ok(Self::new(LovelaceConfig::from_json(source)?))
    }

    /// Load a dashboard from disk (file-backed)
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, EditorError> {
        let path = path.into();
        let config = read_dashboard(&path)?;
        info!(path = %path.display(), views = config.views.len(), "Loaded dashboard");

        Ok(Self {
            path: Some(path),
            ..Self::new(config)
        })
    }

    /// Bound the number of undo levels (0 = unlimited)
    pub fn with_history_limit(mut self, max_levels: usize) -> Self {
        self.history = UndoStack::with_max_levels(max_levels);
        self
    }

    pub fn config(&self) -> &LovelaceConfig {
        &self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Apply a single mutation
    pub fn apply(
        &mut self,
        mutation: &Mutation,
        localize: &dyn Localize,
    ) -> Result<u64, EditorError> {
        let edited = self.history.apply(mutation, &self.config, localize)?;
        Ok(self.commit(edited))
    }

    /// Apply mutations as one atomic, single-undo-step edit
    ///
    /// If any mutation fails, none of them take effect.
    pub fn apply_all(
        &mut self,
        mutations: &[Mutation],
        localize: &dyn Localize,
    ) -> Result<u64, EditorError> {
        self.history.begin_batch(&self.config);

        let mut edited = self.config.clone();
        for (index, mutation) in mutations.iter().enumerate() {
            match self.history.apply(mutation, &edited, localize) {
                Ok(next) => edited = next,
                Err(err) => {
                    warn!(index, op = mutation.name(), "Batch aborted");
                    self.history.abort_batch();
                    return Err(err.into());
                }
            }
        }

        self.history.end_batch();
        if mutations.is_empty() {
            return Ok(self.version);
        }
        Ok(self.commit(edited))
    }

    /// Revert the last edit; returns false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.commit(previous);
                true
            }
            None => false,
        }
    }

    /// Reapply the last undone edit; returns false when there is nothing to redo
    pub fn redo(&mut self, localize: &dyn Localize) -> Result<bool, EditorError> {
        match self.history.redo(&self.config, localize)? {
            Some(next) => {
                self.commit(next);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn commit(&mut self, config: LovelaceConfig) -> u64 {
        self.config = config;
        self.version += 1;
        self.dirty = true;
        debug!(version = self.version, "Dashboard updated");
        self.version
    }

    /// Check if dashboard has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save dashboard to disk (if file-backed)
    pub fn save(&mut self, pretty: bool) -> Result<(), EditorError> {
        let path = self.path.as_ref().ok_or(EditorError::NotFileBacked)?;
        write_dashboard(path, &self.config, pretty)?;
        info!(path = %path.display(), version = self.version, "Saved dashboard");
        self.dirty = false;
        Ok(())
    }

    /// Serialize current config
    pub fn to_json(&self, pretty: bool) -> Result<String, EditorError> {
        Ok(self.config.to_json(pretty)?)
    }
}
