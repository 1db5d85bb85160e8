use thiserror::Error;

/// Errors surfaced by the connection lifecycle and by driver backends.
///
/// Every message embeds the originating low-level cause so callers can log
/// a single line and still see what the driver reported.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The driver identifier could not be resolved against the registry.
    #[error("Driver Load Error: {0}")]
    DriverLoad(String),
    /// Opening a physical connection failed (authentication, network,
    /// malformed connection URL).
    #[error("Connection Failed: {0}")]
    ConnectionFailed(String),
    /// The validation query could not be executed against the connection.
    #[error("Health Check Error: {0}")]
    HealthCheck(String),
    /// Releasing the physical connection failed. The client is defunct
    /// regardless of this outcome.
    #[error("Close Error: {0}")]
    Close(String),
    /// A statement failed outside the lifecycle paths.
    #[error("Execution Error: {0}")]
    Execution(String),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for ClientError {
    fn from(e: rusqlite::Error) -> Self {
        ClientError::Execution(e.to_string())
    }
}
