//! Error types for the editor

use lovelace_common::CommonError;
use lovelace_schema::SchemaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("{0}")]
    Common(#[from] CommonError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Dashboard is not file-backed")]
    NotFileBacked,
}
