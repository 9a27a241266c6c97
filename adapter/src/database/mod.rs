use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool, Postgres, Transaction,
};

pub mod model;
pub mod update;

fn make_pg_connect_options(cfg: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.username)
        .password(&cfg.password)
        .database(&cfg.database)
}

#[derive(Clone)]
pub struct ConnectionPool(PgPool);

impl ConnectionPool {
    pub fn new(pool: PgPool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &PgPool {
        &self.0
    }

    pub async fn begin(&self) -> AppResult<Transaction<'_, Postgres>> {
        self.0.begin().await.map_err(AppError::TransactionError)
    }
}

/// Builds the pool without opening a connection; the first query connects.
pub fn connect_database_with(cfg: &DatabaseConfig) -> ConnectionPool {
    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_lazy_with(make_pg_connect_options(cfg));
    ConnectionPool(pool)
}

pub async fn migrate(pool: &ConnectionPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool.inner_ref()).await?;
    Ok(())
}

/// Maps a unique-constraint violation to `Conflict`, anything else to `SpecificOperationError`.
pub(crate) fn map_write_error(e: sqlx::Error, conflict: &str) -> AppError {
    let unique_violation = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());
    if unique_violation {
        AppError::Conflict(conflict.to_string())
    } else {
        AppError::SpecificOperationError(e)
    }
}
