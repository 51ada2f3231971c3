//! SQL named-parameter scanning and expansion
//!
//! This module locates named placeholders (`:name`) in SQL text and rewrites
//! them into the driver's positional convention. A parameter bound to an
//! array value expands into one positional marker per element, joined by
//! commas at the exact point it appears; every other occurrence is
//! re-indexed accordingly.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use sqlbind_core::{ParamType, ScalarType, Value};
//! use sqlbind_query::parameters::expand_named;
//!
//! let mut params = HashMap::new();
//! params.insert(
//!     "ids".to_string(),
//!     Value::Array(vec![Value::Int64(1), Value::Int64(2), Value::Int64(3)]),
//! );
//! let mut types = HashMap::new();
//! types.insert("ids".to_string(), ParamType::Array(ScalarType::Integer));
//!
//! let expansion =
//!     expand_named("SELECT * FROM users WHERE id IN (:ids)", &params, &types).unwrap();
//! assert_eq!(expansion.sql, "SELECT * FROM users WHERE id IN (?, ?, ?)");
//! assert_eq!(expansion.values.len(), 3);
//! ```

mod expander;
mod scanner;

pub use expander::{Expansion, expand_named, expand_named_with, expand_placeholders};
pub use scanner::{Placeholder, scan_placeholders, scan_placeholders_with};

use thiserror::Error;

/// Errors that can occur while rewriting named placeholders.
///
/// All of them are terminal for the rewrite call: either a complete
/// [`Expansion`] is produced or nothing is, and the statement never reaches
/// the database.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// A colon that is neither a placeholder, a `::` pair, nor a driver
    /// escape sequence.
    #[error("malformed placeholder at byte offset {0}")]
    MalformedPlaceholder(usize),

    /// A placeholder's name has no entry in the bindings map.
    #[error("missing parameter: {0}")]
    MissingParameter(String),

    /// An array-valued binding with zero elements; the expansion would
    /// produce invalid SQL such as `IN ()`.
    #[error("array parameter is empty: {0}")]
    EmptyArrayParameter(String),
}

/// Result type for placeholder rewriting operations.
pub type ExpandResult<T> = Result<T, ExpandError>;
