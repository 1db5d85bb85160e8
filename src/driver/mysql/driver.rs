use async_trait::async_trait;
use mysql_async::{Conn, Opts, OptsBuilder};

use crate::driver::Driver;
use crate::driver::connection::Connection;
use crate::driver::mysql::connection::MysqlConnection;
use crate::error::{ClientError, Result};
use crate::params::ConnectionParams;

pub const MYSQL_DRIVER_NAME: &str = "mysql";

/// Driver for mysql data sources.
///
/// Stateless: every `open` parses the connection URL, overlays the
/// credentials and database name from the params, and establishes exactly
/// one `Conn`. There is no pool behind it.
#[derive(Debug, Default)]
pub struct MysqlDriver;

impl MysqlDriver {
    pub fn new() -> Self {
        Self
    }

    fn build_opts(params: &ConnectionParams) -> Result<OptsBuilder> {
        let opts = Opts::from_url(&params.url).map_err(|e| {
            ClientError::ConnectionFailed(format!(
                "invalid mysql connection url '{}': {}",
                params.url, e
            ))
        })?;

        let mut builder = OptsBuilder::from_opts(opts);
        if !params.user.is_empty() {
            builder = builder.user(Some(params.user.clone()));
        }
        if !params.password.is_empty() {
            builder = builder.pass(Some(params.password.clone()));
        }
        if !params.database.is_empty() {
            builder = builder.db_name(Some(params.database.clone()));
        }
        Ok(builder)
    }
}

#[async_trait]
impl Driver for MysqlDriver {
    fn name(&self) -> &str {
        MYSQL_DRIVER_NAME
    }

    async fn open(&self, params: &ConnectionParams) -> Result<Box<dyn Connection>> {
        let opts = Self::build_opts(params)?;
        let conn = Conn::new(opts)
            .await
            .map_err(|e| ClientError::ConnectionFailed(format!("mysql connect failed: {}", e)))?;
        Ok(Box::new(MysqlConnection::new(conn)))
    }
}
