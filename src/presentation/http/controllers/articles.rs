// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::ArticleDto,
    services::{CreateArticleCommand, UpdateArticleCommand},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields a caller may supply when creating an article. Unknown fields are
/// rejected at the boundary.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateArticleRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateArticleRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Listing envelope. The capitalised `Articles` key is part of the
/// published API surface.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleListResponse {
    pub success: bool,
    #[serde(rename = "Articles")]
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleResponse {
    pub success: bool,
    pub article: Option<ArticleDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleCreatedResponse {
    pub success: bool,
    pub response: ArticleDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MutationResponse {
    pub success: bool,
}

#[utoipa::path(
    get,
    path = "/blog",
    responses(
        (status = 200, description = "All stored articles.", body = ArticleListResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleListResponse>> {
    let articles = state.services.articles.list_articles().await.into_http()?;

    Ok(Json(ArticleListResponse {
        success: true,
        articles,
    }))
}

#[utoipa::path(
    get,
    path = "/blog/{id}",
    params(("id" = i64, Path, description = "Article identifier.")),
    responses(
        (status = 200, description = "The matching article, or null when none exists.", body = ArticleResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .articles
        .get_article_by_id(id)
        .await
        .into_http()?;

    Ok(Json(ArticleResponse {
        success: true,
        article,
    }))
}

#[utoipa::path(
    post,
    path = "/blog",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "The persisted article including generated fields.", body = ArticleCreatedResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleCreatedResponse>> {
    let command = CreateArticleCommand { name: payload.name };

    let created = state
        .services
        .articles
        .create_article(command)
        .await
        .into_http()?;

    Ok(Json(ArticleCreatedResponse {
        success: true,
        response: created,
    }))
}

#[utoipa::path(
    patch,
    path = "/blog/{id}",
    params(("id" = i64, Path, description = "Article identifier.")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Update applied.", body = MutationResponse),
        (status = 404, description = "No article with the given id.")
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<MutationResponse>> {
    let command = UpdateArticleCommand {
        id,
        name: payload.name,
    };

    state
        .services
        .articles
        .update_article(command)
        .await
        .into_http()?;

    Ok(Json(MutationResponse { success: true }))
}

#[utoipa::path(
    delete,
    path = "/blog/{id}",
    params(("id" = i64, Path, description = "Article identifier.")),
    responses(
        (status = 200, description = "Record removed.", body = MutationResponse),
        (status = 404, description = "No article with the given id.")
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<MutationResponse>> {
    state
        .services
        .articles
        .delete_article_by_id(id)
        .await
        .into_http()?;

    Ok(Json(MutationResponse { success: true }))
}
