// src/application/services/articles.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::article::{ArticleId, ArticleName, ArticleRepository, ArticleUpdate, NewArticle},
};

/// Input for the create operation. Only `name` is settable today.
#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub name: String,
}

/// Partial field set for the update operation.
#[derive(Debug, Clone)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub name: Option<String>,
}

/// Orchestration seam between transport and persistence. Pass-through
/// today; business rules belong here when they appear.
pub struct ArticleService {
    repo: Arc<dyn ArticleRepository>,
    clock: Arc<dyn Clock>,
}

impl ArticleService {
    pub fn new(repo: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Absent is `Ok(None)`, never an error; the caller decides what a
    /// missing record means.
    pub async fn get_article_by_id(&self, id: i64) -> ApplicationResult<Option<ArticleDto>> {
        let article = self.repo.find_by_id(ArticleId::from(id)).await?;
        Ok(article.map(Into::into))
    }

    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let now = self.clock.now();
        let new_article = NewArticle {
            name: ArticleName::new(command.name),
            created_at: now,
            updated_at: now,
        };
        let created = self.repo.insert(new_article).await?;
        Ok(created.into())
    }

    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<()> {
        let mut update = ArticleUpdate::new(ArticleId::from(command.id), self.clock.now());
        if let Some(name) = command.name {
            update = update.with_name(ArticleName::new(name));
        }

        let affected = self.repo.update(update).await?;
        if affected == 0 {
            return Err(ApplicationError::not_found("article not found"));
        }
        Ok(())
    }

    pub async fn delete_article_by_id(&self, id: i64) -> ApplicationResult<()> {
        let affected = self.repo.delete(ArticleId::from(id)).await?;
        if affected == 0 {
            return Err(ApplicationError::not_found("article not found"));
        }
        Ok(())
    }
}
