use async_trait::async_trait;
use mysql_async::prelude::Queryable;
use mysql_async::{Conn, Row as MyRow};
use std::collections::HashMap;

use crate::driver::connection::Connection;
use crate::driver::mysql::value_codec::from_mysql_value;
use crate::driver::value::Value;
use crate::error::{ClientError, Result};

/// One mysql handle. `close` hands the `Conn` back to the server with a
/// clean disconnect, so the handle lives in an `Option`.
pub struct MysqlConnection {
    conn: Option<Conn>,
    closed: bool,
}

impl MysqlConnection {
    pub fn new(conn: Conn) -> Self {
        Self {
            conn: Some(conn),
            closed: false,
        }
    }

    // Consume row to avoid cloning values; column metadata comes via Arc.
    fn map_row(row: MyRow) -> HashMap<String, Value> {
        let columns = row.columns();
        let values = row.unwrap();

        let mut out_row = HashMap::with_capacity(values.len());
        for (v, col) in values.into_iter().zip(columns.iter()) {
            out_row.insert(col.name_str().to_string(), from_mysql_value(v));
        }
        out_row
    }
}

#[async_trait]
impl Connection for MysqlConnection {
    async fn query(&mut self, sql: &str) -> Result<Vec<HashMap<String, Value>>> {
        let conn = self
            .conn
            .as_mut()
            .ok_or_else(|| ClientError::Execution("connection is closed".to_string()))?;

        let rows: Vec<MyRow> = conn
            .query(sql)
            .await
            .map_err(|e| ClientError::Execution(e.to_string()))?;
        Ok(rows.into_iter().map(Self::map_row).collect())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    async fn close(&mut self) -> Result<()> {
        self.closed = true;
        match self.conn.take() {
            Some(c) => c
                .disconnect()
                .await
                .map_err(|e| ClientError::Close(e.to_string())),
            None => Ok(()),
        }
    }
}
