//! sqlbind core - shared abstractions for SQL parameter rewriting
//!
//! This crate provides the fundamental types that the other sqlbind crates
//! depend on. It defines:
//!
//! - `Value` - a database value, scalar or array-shaped
//! - `ScalarType` / `ParamType` - type kinds attached to bound parameters
//! - `PlaceholderStyle` / `ColonEscape` - driver dialect hooks for rewriting
//! - `Connection` - trait for execution collaborators
//! - Common result types like `Row` and `QueryResult`

mod connection;
mod dialect;
mod error;
mod types;

pub use connection::*;
pub use dialect::*;
pub use error::*;
pub use types::*;
