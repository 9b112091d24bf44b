// tests/support/helpers.rs
use std::sync::Arc;

use blog_api::application::{ports::time::Clock, services::ApplicationServices};
use blog_api::domain::article::ArticleRepository;
use blog_api::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{InMemoryArticleRepository, ManualClock};

/// Full router backed by the in-memory repository; no database required.
pub fn make_test_router() -> axum::Router {
    let repo: Arc<dyn ArticleRepository> = Arc::new(InMemoryArticleRepository::new());
    let clock: Arc<dyn Clock> = Arc::new(ManualClock::new());
    let services = Arc::new(ApplicationServices::new(repo, clock));
    build_router(HttpState { services })
}
