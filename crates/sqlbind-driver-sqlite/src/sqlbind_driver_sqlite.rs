//! SQLite execution collaborator for sqlbind
//!
//! Implements [`sqlbind_core::Connection`] on top of rusqlite so rewritten
//! statements can be bound and executed against a real database.

mod connection;

pub use connection::SqliteConnection;
