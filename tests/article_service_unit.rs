use std::sync::Arc;

mod support;

use blog_api::application::error::ApplicationError;
use blog_api::application::services::{ArticleService, CreateArticleCommand, UpdateArticleCommand};
use blog_api::domain::article::{ArticleId, ArticleRepository};

use support::mocks::{InMemoryArticleRepository, ManualClock};

fn make_service() -> (
    ArticleService,
    Arc<InMemoryArticleRepository>,
    Arc<ManualClock>,
) {
    let repo = Arc::new(InMemoryArticleRepository::new());
    let clock = Arc::new(ManualClock::new());
    let service = ArticleService::new(
        Arc::clone(&repo) as Arc<dyn ArticleRepository>,
        Arc::clone(&clock) as Arc<dyn blog_api::application::ports::time::Clock>,
    );
    (service, repo, clock)
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let (service, _repo, _clock) = make_service();

    let created = service
        .create_article(CreateArticleCommand {
            name: "Hello".into(),
        })
        .await
        .unwrap();

    assert!(created.id >= 1);
    assert_eq!(created.name, "Hello");
    assert_eq!(created.created_at, created.updated_at);
    assert!(created.deleted_at.is_none());

    let fetched = service
        .get_article_by_id(created.id)
        .await
        .unwrap()
        .expect("created article should be readable");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.updated_at, created.updated_at);
}

#[tokio::test]
async fn list_contains_every_created_article() {
    let (service, _repo, _clock) = make_service();

    let mut expected_ids = Vec::new();
    for name in ["first", "second", "third"] {
        let created = service
            .create_article(CreateArticleCommand { name: name.into() })
            .await
            .unwrap();
        expected_ids.push(created.id);
    }

    let listed = service.list_articles().await.unwrap();
    assert!(listed.len() >= expected_ids.len());

    let listed_ids: Vec<i64> = listed.iter().map(|article| article.id).collect();
    for id in expected_ids {
        assert!(listed_ids.contains(&id), "listing should contain id {id}");
    }
}

#[tokio::test]
async fn get_on_unknown_id_is_absent_not_an_error() {
    let (service, _repo, _clock) = make_service();

    let result = service.get_article_by_id(9_999_999).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn update_changes_name_and_advances_updated_at() {
    let (service, _repo, clock) = make_service();

    let created = service
        .create_article(CreateArticleCommand {
            name: "before".into(),
        })
        .await
        .unwrap();

    clock.advance_secs(10);

    service
        .update_article(UpdateArticleCommand {
            id: created.id,
            name: Some("X".into()),
        })
        .await
        .unwrap();

    let fetched = service
        .get_article_by_id(created.id)
        .await
        .unwrap()
        .expect("updated article should be readable");

    assert_eq!(fetched.name, "X");
    assert!(fetched.updated_at > created.updated_at);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn update_on_unknown_id_reports_not_found() {
    let (service, _repo, _clock) = make_service();

    let err = service
        .update_article(UpdateArticleCommand {
            id: 42,
            name: Some("X".into()),
        })
        .await
        .err()
        .expect("update of a missing record should fail");

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn delete_on_unknown_id_reports_not_found() {
    let (service, repo, _clock) = make_service();

    // The repository reports zero affected rows rather than an error.
    let affected = repo.delete(ArticleId::from(42)).await.unwrap();
    assert_eq!(affected, 0);

    let err = service
        .delete_article_by_id(42)
        .await
        .err()
        .expect("delete of a missing record should fail");

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn delete_then_get_is_absent() {
    let (service, _repo, _clock) = make_service();

    let created = service
        .create_article(CreateArticleCommand {
            name: "ephemeral".into(),
        })
        .await
        .unwrap();

    service.delete_article_by_id(created.id).await.unwrap();

    let result = service.get_article_by_id(created.id).await.unwrap();
    assert!(result.is_none());
}
