//! Execution collaborator trait
//!
//! The rewriter itself never talks to a database. A [`Connection`] accepts a
//! statement already rewritten into its positional convention together with
//! the index-aligned values and type kinds, binds them, executes, and
//! returns rows. Case normalization of column names is the caller's job.

use crate::{PlaceholderStyle, QueryResult, Result, ScalarType, Value};
use async_trait::async_trait;

/// A database connection accepting positional statements.
///
/// `values` and `types` are index-aligned to the positional placeholders in
/// `sql`; `types` may be shorter than `values`, in which case the missing
/// slots are treated as [`ScalarType::Unspecified`].
#[async_trait]
pub trait Connection: Send + Sync {
    /// Get the driver name (e.g., "sqlite", "postgresql", "mysql")
    fn driver_name(&self) -> &str;

    /// The positional placeholder convention this driver expects.
    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::QuestionMark
    }

    /// Quote a string so it can be embedded in SQL text as a literal.
    ///
    /// This is the hook tests and callers use to assemble driver-correct
    /// input SQL (e.g. the pattern of a `LIKE ... ESCAPE` clause); it plays
    /// no part in the rewrite algorithm itself.
    fn quote_string_literal(&self, literal: &str) -> String {
        crate::quote_string_literal(literal)
    }

    /// Execute a query that returns rows (SELECT)
    async fn query(&self, sql: &str, values: &[Value], types: &[ScalarType]) -> Result<QueryResult>;

    /// Execute a statement that modifies data (INSERT/UPDATE/DELETE),
    /// returning the number of affected rows.
    async fn execute(&self, sql: &str, values: &[Value], types: &[ScalarType]) -> Result<u64>;

    /// Close the connection
    async fn close(&self) -> Result<()>;

    /// Check if the connection is closed
    fn is_closed(&self) -> bool;
}
