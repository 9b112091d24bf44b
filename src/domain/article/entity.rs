// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub name: ArticleName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present in the schema for future soft-delete support. No code path
    /// reads or writes it; deletion is a hard removal.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Fields persisted for a brand-new article. Identity is assigned by the
/// store; both timestamps carry the same instant.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub name: ArticleName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial field set applied to one stored record. `updated_at` is always
/// refreshed; everything else only when set.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub name: Option<ArticleName>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: ArticleName) -> Self {
        self.name = Some(name);
        self
    }
}
