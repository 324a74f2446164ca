//! Connection pool and schema bootstrap for the plant table.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, PoolError, PooledConnection};
use thiserror::Error;
use tracing::{debug, info};

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Location of a private, per-process database that lives as long as its
/// connection does.
pub const IN_MEMORY: &str = ":memory:";

const CREATE_PLANTS: &str = "
    CREATE TABLE IF NOT EXISTS plants (
        id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
        name TEXT NOT NULL,
        image TEXT NOT NULL,
        price DOUBLE NOT NULL
    );
";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to build connection pool for `{url}`: {source}")]
    Pool {
        url: String,
        #[source]
        source: PoolError,
    },

    #[error("failed to check out a connection: {0}")]
    Checkout(#[from] PoolError),

    #[error("failed to create schema: {0}")]
    Schema(#[from] diesel::result::Error),
}

/// Per-connection setup run by the pool whenever it opens a connection.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

/// Handle to the plant database.
///
/// Constructed once at startup and handed to the endpoint layer; cloning is
/// cheap and shares the same pool.
#[derive(Clone)]
pub struct Store {
    pool: DbPool,
}

impl Store {
    /// Opens the database at `database_url` and makes sure the `plants`
    /// table exists.
    ///
    /// An in-memory database is pinned to a single connection that never
    /// expires, otherwise each pooled connection would see its own empty
    /// database.
    pub fn open(database_url: &str) -> Result<Self, StoreError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let options = ConnectionOptions {
            busy_timeout: Duration::from_secs(5),
        };

        let builder = r2d2::Pool::builder().connection_customizer(Box::new(options));
        let builder = if database_url == IN_MEMORY {
            builder.max_size(1).idle_timeout(None).max_lifetime(None)
        } else {
            builder
        };

        let pool = builder.build(manager).map_err(|source| StoreError::Pool {
            url: database_url.to_owned(),
            source,
        })?;

        let mut conn = pool.get()?;
        conn.batch_execute(CREATE_PLANTS)?;
        debug!(database_url, "plants table ready");

        info!(database_url, max_size = pool.max_size(), "store opened");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Checks out a pooled connection.
    pub fn get(&self) -> Result<DbConn, PoolError> {
        self.pool.get()
    }

    /// Releases the pool. Connections still checked out close when their
    /// guards drop.
    pub fn close(self) {
        let state = self.pool.state();
        info!(
            connections = state.connections,
            idle = state.idle_connections,
            "closing store"
        );
        drop(self.pool);
    }
}
