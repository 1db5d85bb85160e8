use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity applied when the caller leaves `user` blank. Many data sources
/// are administered under this conventional account.
pub const COMMON_USER: &str = "root";

/// Probe applied when the caller leaves `validation_query` blank.
pub const COMMON_VALIDATION_QUERY: &str = "select 1";

/// Connection material for a single data source.
///
/// The surrounding system transports these as JSON documents, so the struct
/// round-trips through serde with camelCase keys; fields absent from the
/// document deserialize as empty strings and are subject to normalization
/// during client construction.
///
/// `driver`, `url`, `password` and `database` are opaque pass-through
/// fields: the client never rewrites them. `user` and `validation_query`
/// are replaced by driver defaults when blank, always on a copy; the
/// struct a caller holds is never mutated behind its back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectionParams {
    /// Identity used to authenticate. Never blank once a client has been
    /// constructed from these params.
    pub user: String,
    pub password: String,
    /// Driver identifier, resolved against a [`DriverRegistry`].
    ///
    /// [`DriverRegistry`]: crate::registry::DriverRegistry
    pub driver: String,
    /// Connection URL in whatever shape the resolved driver expects.
    pub url: String,
    pub database: String,
    /// Statement executed to prove the connection is alive and
    /// authenticated. Never blank once a client has been constructed.
    pub validation_query: String,
}

impl ConnectionParams {
    /// Creates params for the given driver identifier and connection URL.
    /// The remaining fields start blank and can be filled by chaining.
    pub fn new(driver: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn validation_query(mut self, validation_query: impl Into<String>) -> Self {
        self.validation_query = validation_query.into();
        self
    }

    /// Returns a copy with blank identity fields replaced by the given
    /// defaults. Blank means empty or whitespace-only. Non-blank fields
    /// pass through untouched, so applying this twice is a no-op.
    pub fn normalized(mut self, default_user: &str, default_validation_query: &str) -> Self {
        if self.validation_query.trim().is_empty() {
            self.validation_query = default_validation_query.to_string();
        }
        if self.user.trim().is_empty() {
            self.user = default_user.to_string();
        }
        self
    }
}

/// Kind of database a client is pointed at.
///
/// Advisory: driver resolution goes through [`ConnectionParams::driver`],
/// the kind is carried for diagnostics and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    Mysql,
    Postgresql,
    Sqlite,
    Oracle,
    Sqlserver,
    Clickhouse,
    Hive,
}

impl DbType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DbType::Mysql => "mysql",
            DbType::Postgresql => "postgresql",
            DbType::Sqlite => "sqlite",
            DbType::Oracle => "oracle",
            DbType::Sqlserver => "sqlserver",
            DbType::Clickhouse => "clickhouse",
            DbType::Hive => "hive",
        }
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
