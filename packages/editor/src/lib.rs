//! # Lovelace Editor
//!
//! Structural editing engine for dashboard layout documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: JSON → LovelaceConfig               │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor                                      │
//! │  - path: resolve / copy-on-path rebuild     │
//! │  - ops: card, view and section edits        │
//! │  - Mutation: serializable edit descriptions │
//! │  - UndoStack / Dashboard: editing state     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ caller: persist or re-render new document   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Documents are values**: every edit returns a new document
//! 2. **Structural sharing**: only the root-to-edit path is rebuilt
//! 3. **Atomic edits**: an error means nothing changed
//! 4. **Addresses are indices**: paths are resolved against the document
//!    passed in, never cached
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lovelace_common::Messages;
//! use lovelace_editor::ops;
//! use lovelace_schema::{CardConfig, CardPath, ContainerPath, LovelaceConfig};
//!
//! let config = LovelaceConfig::from_json(source)?;
//!
//! let config = ops::add_card(&config, ContainerPath::view(0), CardConfig::new("tile"))?;
//! let config = ops::move_card_to_index(&config, CardPath::in_view(0, 2), 0)?;
//! ```

mod document;
mod errors;
mod mutations;
pub mod ops;
pub mod path;
mod undo_stack;

pub use document::Dashboard;
pub use errors::EditorError;
pub use mutations::{Mutation, MutationError, SectionEdit};
pub use path::{Container, PathError};
pub use undo_stack::{MutationBatch, UndoStack};

// Re-export schema types for convenience
pub use lovelace_schema::{
    CardConfig, CardPath, ContainerPath, LovelaceConfig, SectionConfig, SectionPath, ViewConfig,
};
