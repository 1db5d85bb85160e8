use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::driver::connection::Connection;
use crate::driver::sqlite::value_codec::from_sqlite_value;
use crate::driver::value::Value;
use crate::error::{ClientError, Result};

/// One sqlite handle, bridged onto the blocking pool.
///
/// The handle sits behind `Arc<Mutex<Option<..>>>` so the blocking closures
/// can own a reference to it; `close` takes it out of the `Option`, which
/// is what makes the release happen exactly once.
pub struct SqliteConnection {
    conn: Arc<Mutex<Option<rusqlite::Connection>>>,
    closed: bool,
}

impl SqliteConnection {
    pub fn new(conn: rusqlite::Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(Some(conn))),
            closed: false,
        }
    }
}

#[async_trait]
impl Connection for SqliteConnection {
    async fn query(&mut self, sql: &str) -> Result<Vec<HashMap<String, Value>>> {
        let sql = sql.to_string();
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let guard = conn.blocking_lock();
            let conn = guard
                .as_ref()
                .ok_or_else(|| ClientError::Execution("connection is closed".to_string()))?;

            let mut stmt = conn.prepare(&sql)?;
            let column_count = stmt.column_count();
            let column_names = (0..column_count)
                .map(|i| {
                    stmt.column_name(i)
                        .map(|s| s.to_string())
                        .unwrap_or_else(|_| i.to_string())
                })
                .collect::<Vec<_>>();

            let mut rows = stmt.query([])?;
            let mut out = Vec::new();

            while let Some(row) = rows.next()? {
                let mut map = HashMap::with_capacity(column_count);
                for (i, name) in column_names.iter().enumerate() {
                    let v = row.get_ref(i)?;
                    map.insert(name.clone(), from_sqlite_value(v));
                }
                out.push(map);
            }

            Ok::<_, ClientError>(out)
        })
        .await
        .map_err(|e| ClientError::Execution(e.to_string()))?
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    async fn close(&mut self) -> Result<()> {
        // Marked closed up front: the handle is done for even when the
        // release below reports a failure.
        self.closed = true;
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.blocking_lock();
            match guard.take() {
                Some(c) => c.close().map_err(|(_, e)| ClientError::Close(e.to_string())),
                None => Ok(()),
            }
        })
        .await
        .map_err(|e| ClientError::Close(e.to_string()))?
    }
}
