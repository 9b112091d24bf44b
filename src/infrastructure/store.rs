// src/infrastructure/store.rs
use crate::domain::errors::{DomainError, DomainResult};
use sqlx::{PgPool, Postgres, Transaction, postgres::PgPoolOptions};

/// A caller-supplied unit of work binding several repository operations to
/// one atomic transaction.
pub type StoreTransaction = Transaction<'static, Postgres>;

/// Handle to the entity store for a single operation: the shared pool, or a
/// transaction the operation joins.
pub enum StoreHandle<'a> {
    Pool(&'a PgPool),
    Transaction(&'a mut StoreTransaction),
}

/// Shared access point every repository uses to reach its backing table.
/// Resolves handles only; connections are owned and recycled by the pool.
#[derive(Clone, Default)]
pub struct DataSource {
    pool: Option<PgPool>,
}

impl DataSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    pub async fn connect(database_url: &str) -> DomainResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(16)
            .connect(database_url)
            .await
            .map_err(|err| {
                DomainError::configuration(format!("cannot reach the entity store: {err}"))
            })?;
        Ok(Self::new(pool))
    }

    /// Resolve the handle an operation runs against. With a transaction the
    /// operation joins that unit of work; without one it runs on the pool.
    pub fn resolve<'a>(
        &'a self,
        tx: Option<&'a mut StoreTransaction>,
    ) -> DomainResult<StoreHandle<'a>> {
        match tx {
            Some(tx) => Ok(StoreHandle::Transaction(tx)),
            None => Ok(StoreHandle::Pool(self.pool()?)),
        }
    }

    /// Open a transaction for callers that span several operations.
    pub async fn begin(&self) -> DomainResult<StoreTransaction> {
        self.pool()?.begin().await.map_err(DomainError::storage)
    }

    /// Bring the schema up to date. Runs once at startup.
    pub async fn run_migrations(&self) -> DomainResult<()> {
        sqlx::migrate!("./migrations")
            .run(self.pool()?)
            .await
            .map_err(DomainError::storage)
    }

    fn pool(&self) -> DomainResult<&PgPool> {
        self.pool
            .as_ref()
            .ok_or_else(|| DomainError::configuration("data source has no connection pool"))
    }
}
