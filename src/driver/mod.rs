pub mod connection;
pub mod value;

#[cfg(feature = "mysql")]
pub mod mysql;
#[cfg(feature = "sqlite")]
pub mod sqlite;

use crate::driver::connection::Connection;
use crate::error::{ClientError, Result};
use crate::params::{COMMON_USER, COMMON_VALIDATION_QUERY, ConnectionParams};
use async_trait::async_trait;
use log::debug;

/// `Driver` defines the capability set a data source kind supplies to the
/// connection lifecycle.
///
/// A driver is responsible for:
/// - Providing its registry name
/// - Normalizing connection params (filling in its default identity and
///   validation query)
/// - Opening physical connections
/// - Proving a connection alive via the validation query
///
/// The lifecycle itself (the order in which these capabilities run) is
/// fixed by [`DataSourceClient`]; a driver only customizes the steps, never
/// the sequence.
///
/// [`DataSourceClient`]: crate::client::DataSourceClient
#[async_trait]
pub trait Driver: Send + Sync {
    /// Returns the name of the driver, used as its registry key.
    ///
    /// Example: "sqlite", "mysql"
    fn name(&self) -> &str;

    /// Hook that runs before any other lifecycle step.
    ///
    /// Implementations must not mutate params or open resources here; the
    /// hook exists for side effects such as logging.
    fn pre_init(&self) {
        debug!("pre-init for driver `{}`", self.name());
    }

    /// Identity substituted for a blank `user`.
    fn default_user(&self) -> &str {
        COMMON_USER
    }

    /// Probe substituted for a blank `validation_query`.
    fn default_validation_query(&self) -> &str {
        COMMON_VALIDATION_QUERY
    }

    /// Returns a copy of `params` with blank fields replaced by this
    /// driver's defaults. Infallible; non-blank fields pass through.
    fn normalize(&self, params: ConnectionParams) -> ConnectionParams {
        params.normalized(self.default_user(), self.default_validation_query())
    }

    /// Creates and returns exactly one new physical connection.
    ///
    /// # Returns
    /// - `Ok(Box<dyn Connection>)` if the connection is successfully
    ///   established
    /// - `Err(ClientError::ConnectionFailed)` on authentication, network or
    ///   URL failures
    async fn open(&self, params: &ConnectionParams) -> Result<Box<dyn Connection>>;

    /// Runs `validation_query` against `conn` to prove it usable.
    ///
    /// # Returns
    /// - `Ok(())` if the query executed
    /// - `Err(ClientError::HealthCheck)` carrying the execution failure
    ///   otherwise
    async fn health_check(&self, conn: &mut dyn Connection, validation_query: &str) -> Result<()> {
        conn.query(validation_query)
            .await
            .map(|_| ())
            .map_err(|e| ClientError::HealthCheck(e.to_string()))
    }
}
