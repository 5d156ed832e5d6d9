use thiserror::Error;

pub type SchemaResult<T> = Result<T, SchemaError>;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid dashboard JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dashboard root must be an object, found {found}")]
    NotAnObject { found: String },
}

impl SchemaError {
    pub fn not_an_object(found: impl Into<String>) -> Self {
        Self::NotAnObject {
            found: found.into(),
        }
    }
}
