//! # Lovelace Schema
//!
//! Data model for dashboard layout documents.
//!
//! A dashboard is a list of views. A view either holds its own content
//! (cards and/or sections of cards) or delegates to a strategy that
//! generates content at render time.
//!
//! ```text
//! LovelaceConfig
//!   └── views: [ViewConfig]
//!         ├── cards:    [CardConfig]
//!         └── sections: [SectionConfig]
//!                         └── cards: [CardConfig]
//! ```
//!
//! Every list is an `Arc<[Arc<T>]>` so that edited documents can share all
//! untouched subtrees with the document they were derived from.

pub mod ast;
pub mod error;
pub mod path;

pub use ast::{
    is_strategy_section, is_strategy_view, node_list, CardConfig, LovelaceConfig, NodeList,
    SectionConfig, ViewConfig,
};
pub use error::{SchemaError, SchemaResult};
pub use path::{CardPath, ContainerPath, SectionPath};
