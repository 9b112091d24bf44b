// src/application/services/mod.rs
pub mod articles;

pub use articles::{ArticleService, CreateArticleCommand, UpdateArticleCommand};

use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::article::ArticleRepository};

/// The application services, constructed once by the composition root and
/// shared behind an `Arc`.
pub struct ApplicationServices {
    pub articles: Arc<ArticleService>,
}

impl ApplicationServices {
    pub fn new(article_repo: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        let articles = Arc::new(ArticleService::new(article_repo, clock));
        Self { articles }
    }
}
