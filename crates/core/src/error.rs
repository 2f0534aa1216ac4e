use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Malformed {entity} {id}: {field} is missing")]
    MissingField {
        entity: &'static str,
        id: DbId,
        field: &'static str,
    },

    #[error("Validation failed: {0}")]
    Validation(String),
}
