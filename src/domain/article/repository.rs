use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// The only component permitted to issue persistence operations for
/// article records.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Every stored record, in whatever order the store returns them.
    async fn list(&self) -> DomainResult<Vec<Article>>;
    /// `None` when no record matches the id; never an error.
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Persists the record and returns it with its generated identity.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Applies the partial field set; returns the affected-row count.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<u64>;
    /// Removes the record; the affected-row count lets callers tell
    /// not-found (0) from deleted (1).
    async fn delete(&self, id: ArticleId) -> DomainResult<u64>;
}
