//! Application context: one explicitly constructed owner of shared resources.
//!
//! # Responsibility
//! - Initialize logging and open the database once per application run.
//! - Hand out entity stores bound to the shared connection.
//! - Tear the connection down explicitly on close.
//!
//! # Invariants
//! - A store is only handed out when its record type matches the entity shape.

use crate::config::{AppConfig, ConfigError};
use crate::db::{open_db, open_db_in_memory, DbError};
use crate::logging::init_logging;
use crate::model::record::{Record, RecordShape};
use crate::model::schema::EntityKind;
use crate::repo::kv_repo::{RepoError, SqliteKeyValueRepository};
use crate::service::record_store::RecordStore;
use log::info;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store type handed out by [`AppContext::store`].
pub type SqliteRecordStore<'conn, T> = RecordStore<T, SqliteKeyValueRepository<'conn>>;

#[derive(Debug)]
pub enum ContextError {
    Config(ConfigError),
    Logging(String),
    Db(DbError),
    Repo(RepoError),
    ShapeMismatch {
        kind: EntityKind,
        expected: RecordShape,
        requested: RecordShape,
    },
}

impl Display for ContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Logging(message) => write!(f, "logging init failed: {message}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::ShapeMismatch {
                kind,
                expected,
                requested,
            } => write!(
                f,
                "entity `{}` stores {expected:?} records, not {requested:?}",
                kind.as_str()
            ),
        }
    }
}

impl Error for ContextError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Logging(_) | Self::ShapeMismatch { .. } => None,
        }
    }
}

impl From<ConfigError> for ContextError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<DbError> for ContextError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for ContextError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Owner of the configuration and database connection.
pub struct AppContext {
    config: AppConfig,
    conn: Connection,
}

impl AppContext {
    /// Validates `config`, starts file logging when a log dir is set, and
    /// opens the database file.
    pub fn open(config: AppConfig) -> Result<Self, ContextError> {
        let config = config.validate()?;
        if let Some(log_dir) = &config.log_dir {
            init_logging(&config.log_level, log_dir).map_err(ContextError::Logging)?;
        }

        let conn = open_db(&config.db_path)?;
        info!("event=context_open module=context status=ok mode=file");
        Ok(Self { config, conn })
    }

    /// Context over a throwaway in-memory database; logging is left untouched.
    pub fn in_memory() -> Result<Self, ContextError> {
        let conn = open_db_in_memory()?;
        info!("event=context_open module=context status=ok mode=memory");
        Ok(Self {
            config: AppConfig::default(),
            conn,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Loads the store for `kind` with record type `T`.
    ///
    /// # Errors
    /// - `ShapeMismatch` when `T` is not the record type of `kind`.
    /// - `Repo` when the persisted payload cannot be loaded.
    pub fn store<T>(&self, kind: EntityKind) -> Result<SqliteRecordStore<'_, T>, ContextError>
    where
        T: Record + Serialize + DeserializeOwned,
    {
        let schema = kind.schema();
        if schema.shape != T::SHAPE {
            return Err(ContextError::ShapeMismatch {
                kind,
                expected: schema.shape,
                requested: T::SHAPE,
            });
        }

        let repo = SqliteKeyValueRepository::new(&self.conn);
        Ok(RecordStore::open(repo, schema.store_name)?)
    }

    /// Closes the database connection.
    pub fn close(self) -> Result<(), ContextError> {
        self.conn
            .close()
            .map_err(|(_, err)| ContextError::Db(DbError::Sqlite(err)))?;
        info!("event=context_close module=context status=ok");
        Ok(())
    }
}
