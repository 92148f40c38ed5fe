use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// A required widget content field is absent, null, or empty.
    #[error("{widget} widget must have `content.{field}` field")]
    MissingField {
        widget: &'static str,
        field: &'static str,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid widget type: {0}")]
    InvalidWidgetType(String),

    /// A stored key lacks the prefix its item type requires.
    #[error("Malformed key '{key}': expected prefix '{expected}'")]
    MalformedKey { expected: &'static str, key: String },

    /// A stored item cannot be narrowed into its domain type.
    #[error("Malformed item: {0}")]
    MalformedItem(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
