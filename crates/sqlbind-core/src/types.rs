//! Core value and type-kind definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A database value, scalar or array-shaped.
///
/// `Array` is the shape that drives array-parameter expansion: a binding
/// whose value is an `Array` expands into one positional placeholder per
/// element. Every other variant is a scalar and occupies exactly one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// NULL value
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit floating point
    Float64(f64),
    /// UTF-8 string
    String(String),
    /// Binary data
    Bytes(Vec<u8>),
    /// JSON value
    Json(serde_json::Value),
    /// Ordered sequence of scalars (an array-valued parameter)
    Array(Vec<Value>),
}

impl Value {
    /// Check if the value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            Value::String(s) => s.parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            Value::String(s) => s.parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The elements of an array-shaped value
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{}", v),
            Value::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Value::Json(v) => write!(f, "{}", v),
            Value::Array(v) => write!(f, "[{} items]", v.len()),
        }
    }
}

/// The kind attached to one positional slot of a rewritten statement.
///
/// `Unspecified` leaves the choice of storage class to the execution
/// collaborator, which infers it from the runtime value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarType {
    /// No declared kind; the driver infers from the value
    #[default]
    Unspecified,
    /// Boolean
    Boolean,
    /// Signed integer
    Integer,
    /// Floating point
    Float,
    /// Character data
    Text,
    /// Binary data
    Binary,
}

/// A caller-supplied type hint for a named parameter.
///
/// The hint decides the kind tagged onto each expanded slot; it never
/// decides the expansion arity, which is driven by the bound value's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamType {
    /// The parameter binds a single value of the given kind
    Scalar(ScalarType),
    /// The parameter binds an ordered sequence whose elements have the given kind
    Array(ScalarType),
}

impl ParamType {
    /// The kind each expanded positional slot receives.
    pub fn element_type(&self) -> ScalarType {
        match self {
            ParamType::Scalar(t) | ParamType::Array(t) => *t,
        }
    }

    /// Returns true if this hint declares an array parameter.
    pub fn is_array(&self) -> bool {
        matches!(self, ParamType::Array(_))
    }
}

/// A row from a query result
#[derive(Debug, Clone)]
pub struct Row {
    /// Column values
    pub values: Vec<Value>,
    /// Column names (shared reference)
    columns: Vec<String>,
}

impl Row {
    /// Create a new row
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        Self { values, columns }
    }

    /// Get a value by column index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Get a value by column name
    pub fn get_by_name(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Convert to a HashMap
    pub fn to_map(&self) -> HashMap<String, Value> {
        self.columns
            .iter()
            .zip(self.values.iter())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Query result
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// Unique query ID
    pub id: Uuid,
    /// Column names, in select order
    pub columns: Vec<String>,
    /// Result rows
    pub rows: Vec<Row>,
    /// Rows affected (for DML statements)
    pub affected_rows: u64,
    /// Execution time in milliseconds
    pub execution_time_ms: u64,
}

impl QueryResult {
    /// Create a new empty query result
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            columns: Vec::new(),
            rows: Vec::new(),
            affected_rows: 0,
            execution_time_ms: 0,
        }
    }

    /// Check if the result has rows
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Int64(42).as_i64(), Some(42));
        assert_eq!(Value::String("42".into()).as_i64(), Some(42));
        assert_eq!(Value::String("x".into()).as_i64(), None);
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(
            Value::Array(vec![Value::Int64(1)]).as_array().map(<[Value]>::len),
            Some(1)
        );
    }

    #[test]
    fn test_param_type_element() {
        assert_eq!(
            ParamType::Array(ScalarType::Integer).element_type(),
            ScalarType::Integer
        );
        assert_eq!(
            ParamType::Scalar(ScalarType::Text).element_type(),
            ScalarType::Text
        );
        assert!(ParamType::Array(ScalarType::Text).is_array());
        assert!(!ParamType::Scalar(ScalarType::Text).is_array());
    }

    #[test]
    fn test_row_lookup() {
        let row = Row::new(
            vec!["id".to_string(), "name".to_string()],
            vec![Value::Int64(1), Value::String("a".to_string())],
        );
        assert_eq!(row.get(0), Some(&Value::Int64(1)));
        assert_eq!(row.get_by_name("name"), Some(&Value::String("a".to_string())));
        assert_eq!(row.get_by_name("missing"), None);
        assert_eq!(row.to_map().len(), 2);
    }
}
