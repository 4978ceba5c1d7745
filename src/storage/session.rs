//! Unit-of-work handle and the generic entity operations

use std::cell::Cell;
use rusqlite::{Connection, OptionalExtension, Params, params_from_iter};
use rusqlite::types::Value;
use crate::Result;
use crate::model::Entity;

/// Scoped handle over the store used for one command's reads and writes.
///
/// Each write is committed as it happens; closing (or dropping) the session
/// only releases the handle.
pub struct Session<'a> {
    conn: &'a Connection,
    writes: Cell<usize>,
}

impl<'a> Session<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        tracing::debug!("Session opened");
        Self {
            conn,
            writes: Cell::new(0),
        }
    }

    /// Release the session
    pub fn close(self) {}

    /// Number of writes performed through this session
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Insert or update `entity`, returning it with its identity populated
    pub fn save<E: Entity>(&self, mut entity: E) -> Result<E> {
        let columns = E::COLUMNS.join(", ");

        if entity.is_persisted() {
            let placeholders = (1..=E::COLUMNS.len() + 1)
                .map(|i| format!("?{}", i))
                .collect::<Vec<_>>()
                .join(", ");
            let assignments = E::COLUMNS
                .iter()
                .map(|col| format!("{} = excluded.{}", col, col))
                .collect::<Vec<_>>()
                .join(", ");
            let sql = format!(
                "INSERT INTO {} (id, {}) VALUES ({}) ON CONFLICT(id) DO UPDATE SET {}",
                E::TABLE, columns, placeholders, assignments
            );

            let mut values = vec![Value::Integer(entity.id())];
            values.extend(entity.values());
            self.conn.execute(&sql, params_from_iter(values))?;
            tracing::debug!("Updated {} row {}", E::TABLE, entity.id());
        } else {
            let placeholders = (1..=E::COLUMNS.len())
                .map(|i| format!("?{}", i))
                .collect::<Vec<_>>()
                .join(", ");
            let sql = format!(
                "INSERT INTO {} ({}) VALUES ({})",
                E::TABLE, columns, placeholders
            );

            self.conn.execute(&sql, params_from_iter(entity.values()))?;
            entity.set_id(self.conn.last_insert_rowid());
            tracing::debug!("Inserted {} row {}", E::TABLE, entity.id());
        }

        self.writes.set(self.writes.get() + 1);
        Ok(entity)
    }

    /// Permanently remove `entity`'s row. Never-saved entities are ignored.
    pub fn delete<E: Entity>(&self, entity: E) -> Result<()> {
        if !entity.is_persisted() {
            tracing::debug!("Skipping delete of unsaved {} entity", E::TABLE);
            return Ok(());
        }

        let sql = format!("DELETE FROM {} WHERE id = ?1", E::TABLE);
        let removed = self.conn.execute(&sql, [entity.id()])?;
        tracing::debug!("Deleted {} row {} ({} affected)", E::TABLE, entity.id(), removed);

        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    /// Every row of `E`'s table, ordered by id
    pub fn get_all<E: Entity>(&self) -> Result<Vec<E>> {
        self.select_where("1 = 1", [])
    }

    /// The entity with the given id, or `None` when no row matches
    pub fn find_by_id<E: Entity>(&self, id: i64) -> Result<Option<E>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            E::select_list(None),
            E::TABLE
        );
        self.conn
            .query_row(&sql, [id], |row| E::from_row(row))
            .optional()
            .map_err(Into::into)
    }

    /// Rows of `E` matching a SQL `WHERE` clause, ordered by id
    pub(crate) fn select_where<E: Entity, P: Params>(&self, clause: &str, params: P) -> Result<Vec<E>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} ORDER BY id",
            E::select_list(None),
            E::TABLE,
            clause
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params, |row| E::from_row(row))?
            .collect::<rusqlite::Result<Vec<E>>>()?;
        Ok(rows)
    }

    /// Raw connection for entity-specific join queries
    pub(crate) fn connection(&self) -> &Connection {
        self.conn
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        tracing::debug!("Session closed after {} write(s)", self.writes.get());
    }
}
