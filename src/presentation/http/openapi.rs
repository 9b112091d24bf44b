// src/presentation/http/openapi.rs
use crate::application::dto::ArticleDto;
use crate::presentation::http::controllers::articles;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::routes::health,
        articles::list_articles,
        articles::get_article,
        articles::create_article,
        articles::update_article,
        articles::delete_article,
    ),
    components(schemas(
        StatusResponse,
        ArticleDto,
        articles::CreateArticleRequest,
        articles::UpdateArticleRequest,
        articles::ArticleListResponse,
        articles::ArticleResponse,
        articles::ArticleCreatedResponse,
        articles::MutationResponse,
    )),
    tags(
        (name = "Articles", description = "Blog article CRUD operations."),
        (name = "System", description = "Service health.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> axum::Router {
    axum::Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}
