use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Hashing or parsing a stored password hash failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A blocking task such as password hashing panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),

    /// Failure to serialize a data export to JSON.
    #[error("Failed to serialize export: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The login rate limiter was configured with a zero period or burst size.
    #[error("Invalid rate limiter configuration")]
    RateLimitConfig,

    /// An entity was written but could not be read back.
    #[error("{entity} {id} missing after write")]
    MissingAfterWrite {
        /// Entity name
        entity: &'static str,
        /// Primary key that was written
        id: i32,
    },
}
