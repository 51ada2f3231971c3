//! Query execution engine
//!
//! Thin orchestration over a [`Connection`]: rewrite the named placeholders
//! into the connection's positional convention, then delegate. A rewrite
//! failure is terminal - the statement is never sent.

use std::collections::HashMap;
use std::sync::Arc;

use sqlbind_core::{Connection, NoColonEscape, ParamType, QueryResult, Value};

use crate::error::EngineResult;
use crate::parameters::expand_named_with;

/// Query execution engine
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine
    pub fn new() -> Self {
        Self
    }

    /// Execute a query with named parameters and return its rows.
    #[tracing::instrument(skip(self, conn, sql, params, types), fields(sql_preview = %sql.chars().take(100).collect::<String>()))]
    pub async fn execute_query(
        &self,
        conn: &Arc<dyn Connection>,
        sql: &str,
        params: &HashMap<String, Value>,
        types: &HashMap<String, ParamType>,
    ) -> EngineResult<QueryResult> {
        let expansion =
            expand_named_with(sql, params, types, conn.placeholder_style(), &NoColonEscape)?;
        tracing::debug!(slots = expansion.values.len(), "rewrote named placeholders");

        let result = conn
            .query(&expansion.sql, &expansion.values, &expansion.types)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "query execution failed");
                e
            })?;
        tracing::info!(
            rows = result.rows.len(),
            execution_time_ms = result.execution_time_ms,
            "query executed successfully"
        );
        Ok(result)
    }

    /// Execute a data-modifying statement with named parameters, returning
    /// the number of affected rows.
    #[tracing::instrument(skip(self, conn, sql, params, types), fields(sql_preview = %sql.chars().take(100).collect::<String>()))]
    pub async fn execute_statement(
        &self,
        conn: &Arc<dyn Connection>,
        sql: &str,
        params: &HashMap<String, Value>,
        types: &HashMap<String, ParamType>,
    ) -> EngineResult<u64> {
        let expansion =
            expand_named_with(sql, params, types, conn.placeholder_style(), &NoColonEscape)?;
        tracing::debug!(slots = expansion.values.len(), "rewrote named placeholders");

        let affected_rows = conn
            .execute(&expansion.sql, &expansion.values, &expansion.types)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "statement execution failed");
                e
            })?;
        tracing::info!(affected_rows, "statement executed successfully");
        Ok(affected_rows)
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
