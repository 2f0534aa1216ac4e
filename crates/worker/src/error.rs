/// Errors that end a run before any election is reconciled.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("Error connecting to the database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to load elections: {0}")]
    Fetch(#[source] sqlx::Error),
}
