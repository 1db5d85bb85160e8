use async_trait::async_trait;

use crate::driver::Driver;
use crate::driver::connection::Connection;
use crate::driver::sqlite::connection::SqliteConnection;
use crate::error::{ClientError, Result};
use crate::params::ConnectionParams;

pub const SQLITE_DRIVER_NAME: &str = "sqlite";

enum SqliteTarget {
    Memory,
    Path(String),
}

/// Driver for sqlite data sources.
///
/// Stateless: every `open` call parses the connection URL and produces a
/// fresh handle. Accepted URL shapes are `sqlite://<path>`,
/// `sqlite:<path>`, a bare path, and `:memory:` for an in-memory database.
#[derive(Debug, Default)]
pub struct SqliteDriver;

impl SqliteDriver {
    pub fn new() -> Self {
        Self
    }

    fn parse_target(url: &str) -> Result<SqliteTarget> {
        let trimmed = url.trim();
        let stripped = trimmed
            .strip_prefix("sqlite://")
            .or_else(|| trimmed.strip_prefix("sqlite:"))
            .unwrap_or(trimmed)
            .trim();

        if stripped.is_empty() {
            return Err(ClientError::ConnectionFailed(format!(
                "blank sqlite connection url: '{}'",
                url
            )));
        }

        if stripped == ":memory:" {
            return Ok(SqliteTarget::Memory);
        }

        Ok(SqliteTarget::Path(stripped.to_string()))
    }
}

#[async_trait]
impl Driver for SqliteDriver {
    fn name(&self) -> &str {
        SQLITE_DRIVER_NAME
    }

    async fn open(&self, params: &ConnectionParams) -> Result<Box<dyn Connection>> {
        let target = Self::parse_target(&params.url)?;

        let conn = tokio::task::spawn_blocking(move || match &target {
            SqliteTarget::Memory => rusqlite::Connection::open_in_memory(),
            SqliteTarget::Path(p) => rusqlite::Connection::open(p),
        })
        .await
        .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?
        .map_err(|e| {
            ClientError::ConnectionFailed(format!("unable to open sqlite database: {}", e))
        })?;

        Ok(Box::new(SqliteConnection::new(conn)))
    }
}
