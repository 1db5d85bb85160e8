use crate::driver::value::Value;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// An abstract physical database connection: the handle a
/// [`DataSourceClient`] owns, health-checks and hands out.
///
/// [`DataSourceClient`]: crate::client::DataSourceClient
#[async_trait]
pub trait Connection: Send {
    /// Execute a statement and return the result set.
    ///
    /// # Arguments
    /// * `sql` - The statement to execute, arriving whole (no bind
    ///   parameters at this layer)
    ///
    /// # Returns
    /// A vector of hash maps where each hash map represents a row with
    /// column names as keys
    async fn query(&mut self, sql: &str) -> Result<Vec<HashMap<String, Value>>>;

    /// Reports whether this handle has been closed.
    ///
    /// This is a local state query, never a round trip, so a handle can
    /// report open while the far side is already gone. The client's
    /// reconnect path relies on exactly this cheap check.
    fn is_closed(&self) -> bool;

    /// Releases the underlying physical connection.
    ///
    /// The handle reports closed afterwards even when the release itself
    /// failed.
    ///
    /// # Returns
    /// - `Ok(())` if the release succeeds
    /// - `Err(ClientError::Close)` if an error occurs during the release
    async fn close(&mut self) -> Result<()>;
}
