//! SQLite connection implementation

use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::{Connection as RusqliteConnection, OpenFlags, params_from_iter};
use std::sync::Arc;

use sqlbind_core::{Connection, QueryResult, Result, Row, ScalarType, SqlbindError, Value};

/// SQLite connection wrapper
pub struct SqliteConnection {
    conn: Arc<Mutex<RusqliteConnection>>,
}

impl SqliteConnection {
    /// Open a SQLite database at `path`, or in memory for `":memory:"`.
    pub fn open(path: &str) -> Result<Self> {
        tracing::info!(path = %path, "opening SQLite database");

        let conn = if path == ":memory:" {
            RusqliteConnection::open_in_memory().map_err(|e| {
                SqlbindError::Connection(format!("Failed to open in-memory database: {}", e))
            })?
        } else {
            let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX;

            RusqliteConnection::open_with_flags(path, flags).map_err(|e| {
                SqlbindError::Connection(format!(
                    "Failed to open SQLite database at '{}': {}",
                    path, e
                ))
            })?
        };

        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| SqlbindError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        tracing::info!(path = %path, "SQLite database connection established");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

#[async_trait]
impl Connection for SqliteConnection {
    fn driver_name(&self) -> &str {
        "sqlite"
    }

    #[tracing::instrument(skip(self, sql, values, types), fields(sql_preview = %sql.chars().take(100).collect::<String>()))]
    async fn query(&self, sql: &str, values: &[Value], types: &[ScalarType]) -> Result<QueryResult> {
        let start_time = std::time::Instant::now();

        let conn = self.conn.lock();
        let params = bind_params(values, types);

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| SqlbindError::Query(format!("Failed to prepare query: {}", e)))?;

        let column_names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        let mut query_rows = stmt
            .query(params_from_iter(params.iter()))
            .map_err(|e| SqlbindError::Query(format!("Failed to execute query: {}", e)))?;

        while let Some(row) = query_rows
            .next()
            .map_err(|e| SqlbindError::Query(format!("Failed to fetch row: {}", e)))?
        {
            let mut row_values = Vec::with_capacity(column_names.len());
            for i in 0..column_names.len() {
                row_values.push(read_value(row, i)?);
            }
            rows.push(Row::new(column_names.clone(), row_values));
        }

        let execution_time_ms = start_time.elapsed().as_millis() as u64;
        tracing::debug!(
            row_count = rows.len(),
            execution_time_ms = execution_time_ms,
            "query executed successfully"
        );
        Ok(QueryResult {
            id: uuid::Uuid::new_v4(),
            columns: column_names,
            rows,
            affected_rows: 0,
            execution_time_ms,
        })
    }

    #[tracing::instrument(skip(self, sql, values, types), fields(sql_preview = %sql.chars().take(100).collect::<String>()))]
    async fn execute(&self, sql: &str, values: &[Value], types: &[ScalarType]) -> Result<u64> {
        let conn = self.conn.lock();
        let params = bind_params(values, types);

        let rows_affected = conn
            .execute(sql, params_from_iter(params.iter()))
            .map_err(|e| SqlbindError::Query(format!("Failed to execute statement: {}", e)))?;

        tracing::debug!(affected_rows = rows_affected, "statement executed");
        Ok(rows_affected as u64)
    }

    async fn close(&self) -> Result<()> {
        tracing::info!("closing SQLite connection");
        Ok(())
    }

    fn is_closed(&self) -> bool {
        false
    }
}

/// Convert value/type pairs to rusqlite storage classes.
///
/// Missing type entries are treated as [`ScalarType::Unspecified`].
fn bind_params(values: &[Value], types: &[ScalarType]) -> Vec<rusqlite::types::Value> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let ty = types.get(i).copied().unwrap_or(ScalarType::Unspecified);
            bind_param(value, ty)
        })
        .collect()
}

/// Convert one value to its rusqlite storage class, honoring the slot's
/// declared kind the way loosely-typed drivers do: an `Integer` slot coerces
/// numeric strings, a `Text` slot stringifies numbers, a `Boolean` slot
/// binds 0/1, and `Unspecified` binds the value's natural class.
fn bind_param(value: &Value, ty: ScalarType) -> rusqlite::types::Value {
    use rusqlite::types::Value as Sql;

    match ty {
        ScalarType::Integer => match value.as_i64() {
            Some(i) => Sql::Integer(i),
            None => natural_param(value),
        },
        ScalarType::Float => match value.as_f64() {
            Some(f) => Sql::Real(f),
            None => natural_param(value),
        },
        ScalarType::Boolean => match value.as_bool() {
            Some(b) => Sql::Integer(if b { 1 } else { 0 }),
            None => natural_param(value),
        },
        ScalarType::Text => match value {
            Value::Null => Sql::Null,
            Value::Bytes(b) => Sql::Blob(b.clone()),
            other => Sql::Text(other.to_string()),
        },
        ScalarType::Binary => match value {
            Value::Bytes(b) => Sql::Blob(b.clone()),
            Value::String(s) => Sql::Blob(s.clone().into_bytes()),
            other => natural_param(other),
        },
        ScalarType::Unspecified => natural_param(value),
    }
}

fn natural_param(value: &Value) -> rusqlite::types::Value {
    use rusqlite::types::Value as Sql;

    match value {
        Value::Null => Sql::Null,
        Value::Bool(b) => Sql::Integer(if *b { 1 } else { 0 }),
        Value::Int64(i) => Sql::Integer(*i),
        Value::Float64(f) => Sql::Real(*f),
        Value::String(s) => Sql::Text(s.clone()),
        Value::Bytes(b) => Sql::Blob(b.clone()),
        Value::Json(j) => Sql::Text(j.to_string()),
        // Arrays are expanded before they ever reach a driver.
        Value::Array(_) => Sql::Null,
    }
}

/// Convert a rusqlite row value to our Value type
fn read_value(row: &rusqlite::Row, idx: usize) -> Result<Value> {
    use rusqlite::types::ValueRef;

    let value_ref = row
        .get_ref(idx)
        .map_err(|e| SqlbindError::Query(e.to_string()))?;

    let value = match value_ref {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Int64(i),
        ValueRef::Real(f) => Value::Float64(f),
        ValueRef::Text(s) => Value::String(String::from_utf8_lossy(s).to_string()),
        ValueRef::Blob(b) => Value::Bytes(b.to_vec()),
    };

    Ok(value)
}
