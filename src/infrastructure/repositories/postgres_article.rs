// src/infrastructure/repositories/postgres_article.rs
use crate::domain::article::{
    Article, ArticleId, ArticleName, ArticleRepository, ArticleUpdate, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::store::{DataSource, StoreHandle, StoreTransaction};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Postgres, QueryBuilder, postgres::PgExecutor};

/// Store failures propagate with their cause attached; the repository never
/// interprets or retries them.
fn map_sqlx(err: sqlx::Error) -> DomainError {
    DomainError::storage(err)
}

#[derive(Clone)]
pub struct PostgresArticleRepository {
    source: DataSource,
}

impl PostgresArticleRepository {
    pub fn new(source: DataSource) -> Self {
        Self { source }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: ArticleId::from(row.id),
            name: ArticleName::new(row.name),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

impl PostgresArticleRepository {
    /// Like [`ArticleRepository::list`], joining the supplied transaction
    /// when one is given.
    pub async fn list_with(&self, tx: Option<&mut StoreTransaction>) -> DomainResult<Vec<Article>> {
        match self.source.resolve(tx)? {
            StoreHandle::Pool(pool) => Self::list_on(pool).await,
            StoreHandle::Transaction(tx) => Self::list_on(&mut **tx).await,
        }
    }

    pub async fn find_by_id_with(
        &self,
        id: ArticleId,
        tx: Option<&mut StoreTransaction>,
    ) -> DomainResult<Option<Article>> {
        match self.source.resolve(tx)? {
            StoreHandle::Pool(pool) => Self::find_by_id_on(pool, id).await,
            StoreHandle::Transaction(tx) => Self::find_by_id_on(&mut **tx, id).await,
        }
    }

    pub async fn insert_with(
        &self,
        article: NewArticle,
        tx: Option<&mut StoreTransaction>,
    ) -> DomainResult<Article> {
        match self.source.resolve(tx)? {
            StoreHandle::Pool(pool) => Self::insert_on(pool, article).await,
            StoreHandle::Transaction(tx) => Self::insert_on(&mut **tx, article).await,
        }
    }

    pub async fn update_with(
        &self,
        update: ArticleUpdate,
        tx: Option<&mut StoreTransaction>,
    ) -> DomainResult<u64> {
        match self.source.resolve(tx)? {
            StoreHandle::Pool(pool) => Self::update_on(pool, update).await,
            StoreHandle::Transaction(tx) => Self::update_on(&mut **tx, update).await,
        }
    }

    pub async fn delete_with(
        &self,
        id: ArticleId,
        tx: Option<&mut StoreTransaction>,
    ) -> DomainResult<u64> {
        match self.source.resolve(tx)? {
            StoreHandle::Pool(pool) => Self::delete_on(pool, id).await,
            StoreHandle::Transaction(tx) => Self::delete_on(&mut **tx, id).await,
        }
    }

    // No ORDER BY: listing order is whatever the store's scan order is.
    async fn list_on<'e>(executor: impl PgExecutor<'e>) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, name, created_at, updated_at, deleted_at FROM articles",
        )
        .fetch_all(executor)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn find_by_id_on<'e>(
        executor: impl PgExecutor<'e>,
        id: ArticleId,
    ) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, name, created_at, updated_at, deleted_at FROM articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(executor)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Article::from))
    }

    async fn insert_on<'e>(
        executor: impl PgExecutor<'e>,
        article: NewArticle,
    ) -> DomainResult<Article> {
        let NewArticle {
            name,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (name, created_at, updated_at)
             VALUES ($1, $2, $3)
             RETURNING id, name, created_at, updated_at, deleted_at",
        )
        .bind(name.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(executor)
        .await
        .map_err(map_sqlx)?;

        Ok(Article::from(row))
    }

    async fn update_on<'e>(
        executor: impl PgExecutor<'e>,
        update: ArticleUpdate,
    ) -> DomainResult<u64> {
        let ArticleUpdate {
            id,
            name,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(String::from(name));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));

        let result = builder
            .build()
            .execute(executor)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn delete_on<'e>(executor: impl PgExecutor<'e>, id: ArticleId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(executor)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn list(&self) -> DomainResult<Vec<Article>> {
        self.list_with(None).await
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.find_by_id_with(id, None).await
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.insert_with(article, None).await
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<u64> {
        self.update_with(update, None).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<u64> {
        self.delete_with(id, None).await
    }
}
