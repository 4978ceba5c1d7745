//! SQLite store implementation

use std::path::Path;
use rusqlite::Connection;
use crate::Result;
use super::schema;
use super::session::Session;

/// Explicitly owned connection to the inventory database.
///
/// Open once at process start, hand out one [`Session`] per command, and
/// [`Store::close`] at process end.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        tracing::info!("Opened inventory store at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        // Product rows may outlive their brand.
        self.conn.pragma_update(None, "foreign_keys", false)?;
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Begin a unit of work against this store
    pub fn session(&self) -> Session<'_> {
        Session::new(&self.conn)
    }

    /// Run `f` inside a fresh session; the session is released whether
    /// `f` succeeds or fails.
    pub fn with_session<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&Session<'_>) -> std::result::Result<T, E>,
    {
        let session = self.session();
        let result = f(&session);
        session.close();
        result
    }

    /// Close the underlying connection, surfacing any error from SQLite
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }
}
