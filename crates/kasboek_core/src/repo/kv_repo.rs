//! Key-value repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist one opaque payload per store name.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` replaces the whole payload; there are no partial writes.
//! - Payload contents are never logged.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for store persistence and payload decoding.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Persisted payload could not be decoded into records.
    InvalidData {
        store_name: String,
        message: String,
    },
    /// Records could not be encoded into a payload.
    Encode {
        store_name: String,
        message: String,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData {
                store_name,
                message,
            } => write!(f, "invalid persisted data in store `{store_name}`: {message}"),
            Self::Encode {
                store_name,
                message,
            } => write!(f, "failed to encode store `{store_name}`: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData { .. } | Self::Encode { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage for named payloads.
pub trait KeyValueRepository {
    /// Returns the payload stored under `store_name`, if any.
    fn load(&self, store_name: &str) -> RepoResult<Option<String>>;
    /// Creates or replaces the payload stored under `store_name`.
    fn save(&self, store_name: &str, payload: &str) -> RepoResult<()>;
    /// Lists store names with a payload, sorted ascending.
    fn store_names(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed key-value repository over the `kv_store` table.
pub struct SqliteKeyValueRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueRepository for SqliteKeyValueRepository<'_> {
    fn load(&self, store_name: &str) -> RepoResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM kv_store WHERE store_name = ?1;",
                [store_name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn save(&self, store_name: &str, payload: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (store_name, payload, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(store_name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![store_name, payload],
        )?;
        Ok(())
    }

    fn store_names(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT store_name FROM kv_store ORDER BY store_name ASC;")?;
        let mut rows = stmt.query([])?;
        let mut names = Vec::new();

        while let Some(row) = rows.next()? {
            names.push(row.get("store_name")?);
        }

        Ok(names)
    }
}
