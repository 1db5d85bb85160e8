use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::driver::Driver;
use crate::driver::connection::Connection;
use crate::error::Result;
use crate::params::{ConnectionParams, DbType};
use crate::registry::{DRIVERS, DriverRegistry};

/// A client owning one live connection to a data source.
///
/// Construction resolves the driver named in the parameters, lets it
/// pre-initialize and normalize the parameters, opens the connection, and
/// proves the connection usable with a health check. A client that failed
/// any of these steps is never handed out.
///
/// The client keeps the connection for its whole lifetime; [`connection`]
/// transparently reopens it if the backend dropped it in the meantime.
/// [`close`] consumes the client, so a closed client cannot be reused.
///
/// [`connection`]: DataSourceClient::connection
/// [`close`]: DataSourceClient::close
pub struct DataSourceClient {
    driver: Arc<dyn Driver>,
    params: ConnectionParams,
    db_type: DbType,
    connection: Box<dyn Connection>,
}

impl DataSourceClient {
    /// Creates a client using the global [`DRIVERS`] registry.
    ///
    /// # Arguments
    /// * `params` - Connection parameters; blank user and validation query
    ///   are filled with the driver's defaults.
    /// * `db_type` - The kind of database behind the connection.
    ///
    /// # Errors
    /// Returns [`ClientError::DriverLoad`] if `params.driver` names no
    /// registered driver, [`ClientError::ConnectionFailed`] if the connection
    /// cannot be opened, and [`ClientError::HealthCheck`] if the freshly
    /// opened connection fails its validation query.
    ///
    /// [`ClientError::DriverLoad`]: crate::error::ClientError::DriverLoad
    /// [`ClientError::ConnectionFailed`]: crate::error::ClientError::ConnectionFailed
    /// [`ClientError::HealthCheck`]: crate::error::ClientError::HealthCheck
    pub async fn new(params: ConnectionParams, db_type: DbType) -> Result<Self> {
        Self::with_registry(&DRIVERS, params, db_type).await
    }

    /// Creates a client resolving the driver from `registry` instead of the
    /// global one.
    pub async fn with_registry(
        registry: &DriverRegistry,
        params: ConnectionParams,
        db_type: DbType,
    ) -> Result<Self> {
        let driver = registry.resolve(&params.driver)?;
        driver.pre_init();
        let params = driver.normalize(params);

        let mut connection = driver.open(&params).await?;
        check_conn(driver.as_ref(), connection.as_mut(), &params.validation_query).await?;
        debug!(
            "data source client ready: driver=`{}`, db_type={}, database=`{}`",
            driver.name(),
            db_type,
            params.database
        );

        Ok(Self {
            driver,
            params,
            db_type,
            connection,
        })
    }

    /// Runs the validation query against the held connection.
    ///
    /// Safe to call any number of times; the connection stays usable either way.
    ///
    /// # Returns
    /// How long the round trip took.
    ///
    /// # Errors
    /// Returns [`ClientError::HealthCheck`](crate::error::ClientError::HealthCheck)
    /// if the validation query fails.
    pub async fn check_client(&mut self) -> Result<Duration> {
        check_conn(
            self.driver.as_ref(),
            self.connection.as_mut(),
            &self.params.validation_query,
        )
        .await
    }

    /// Returns the held connection, reopening it first if the backend
    /// dropped it.
    ///
    /// # Errors
    /// Returns [`ClientError::ConnectionFailed`](crate::error::ClientError::ConnectionFailed)
    /// if a replacement connection cannot be opened. The client stays usable
    /// and a later call may succeed.
    pub async fn connection(&mut self) -> Result<&mut dyn Connection> {
        if self.connection.is_closed() {
            info!(
                "connection for database `{}` is closed, reopening",
                self.params.database
            );
            self.connection = self.driver.open(&self.params).await?;
        }
        Ok(self.connection.as_mut())
    }

    /// Closes the held connection and consumes the client.
    ///
    /// # Errors
    /// Returns [`ClientError::Close`](crate::error::ClientError::Close) if the
    /// backend reports a failure while releasing the connection. The client is
    /// gone either way.
    pub async fn close(mut self) -> Result<()> {
        info!(
            "closing connection for database `{}`",
            self.params.database
        );
        self.connection.close().await
    }

    /// The parameters the connection was opened with, after normalization.
    pub fn params(&self) -> &ConnectionParams {
        &self.params
    }

    pub fn db_type(&self) -> DbType {
        self.db_type
    }

    pub fn driver_name(&self) -> &str {
        self.driver.name()
    }
}

async fn check_conn(
    driver: &dyn Driver,
    conn: &mut dyn Connection,
    validation_query: &str,
) -> Result<Duration> {
    let start = Instant::now();
    let result = driver.health_check(conn, validation_query).await;
    let elapsed = start.elapsed();

    match &result {
        Ok(()) => debug!(
            "Health check: query=`{}`, elapsed={}ms",
            validation_query,
            elapsed.as_millis()
        ),
        Err(e) => debug!(
            "Health check: query=`{}`, elapsed={}ms, error={:?}",
            validation_query,
            elapsed.as_millis(),
            e
        ),
    }

    result.map(|_| elapsed)
}
