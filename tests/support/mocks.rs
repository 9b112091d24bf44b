// tests/support/mocks.rs
use async_trait::async_trait;
use blog_api::application::ports::time::Clock;
use blog_api::domain::article::{Article, ArticleId, ArticleRepository, ArticleUpdate, NewArticle};
use blog_api::domain::errors::DomainResult;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

/// Fixed base timestamp for deterministic assertions.
pub static BASE_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

/// Clock that starts at [`BASE_NOW`] and only moves when told to.
#[derive(Default)]
pub struct ManualClock {
    offset_secs: AtomicI64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_secs(&self, secs: i64) {
        self.offset_secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *BASE_NOW + Duration::seconds(self.offset_secs.load(Ordering::SeqCst))
    }
}

/// Hash-map backed repository standing in for the Postgres one.
pub struct InMemoryArticleRepository {
    articles: Mutex<HashMap<i64, Article>>,
    next_id: AtomicI64,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            articles: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn list(&self) -> DomainResult<Vec<Article>> {
        let map = self.articles.lock().unwrap();
        Ok(map.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let map = self.articles.lock().unwrap();
        Ok(map.get(&i64::from(id)).cloned())
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Article {
            id: ArticleId::from(id),
            name: article.name,
            created_at: article.created_at,
            updated_at: article.updated_at,
            deleted_at: None,
        };
        let mut map = self.articles.lock().unwrap();
        map.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<u64> {
        let mut map = self.articles.lock().unwrap();
        match map.get_mut(&i64::from(update.id)) {
            Some(article) => {
                if let Some(name) = update.name {
                    article.name = name;
                }
                article.updated_at = update.updated_at;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<u64> {
        let mut map = self.articles.lock().unwrap();
        Ok(u64::from(map.remove(&i64::from(id)).is_some()))
    }
}
