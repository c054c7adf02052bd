// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::{GetAllArticlesQuery, GetArticleQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ArticlePathId, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{StatusCode, header},
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Missing fields default to empty so they surface as validation failures.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateArticleRequest {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created; body is the new id.", body = Uuid,
            headers(("Location" = String, description = "URL of the new article"))),
        (status = 400, description = "Validation failed.", body = crate::application::error::Failure),
        (status = 500, description = "Store failure.", body = crate::application::error::Failure)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<(StatusCode, [(header::HeaderName, String); 1], Json<Uuid>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        tags: payload.tags,
    };

    let id: Uuid = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?
        .into();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/articles/{id}"))],
        Json(id),
    ))
}

#[utoipa::path(
    get,
    path = "/api/articles",
    responses(
        (status = 200, description = "Every stored article, unordered.", body = [ArticleDto]),
        (status = 500, description = "Store failure.", body = crate::application::error::Failure)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .get_all_articles(GetAllArticlesQuery)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = crate::application::error::Failure)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ArticlePathId(id): ArticlePathId,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/articles",
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated."),
        (status = 400, description = "Validation failed.", body = crate::application::error::Failure),
        (status = 404, description = "No article with this id.", body = crate::application::error::Failure)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<StatusCode> {
    let command = UpdateArticleCommand {
        id: payload.id,
        title: payload.title,
        content: payload.content,
        tags: payload.tags,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()?;

    Ok(StatusCode::OK)
}

/// Every failure answers 404; the `code` still names the cause.
#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted."),
        (status = 404, description = "No article with this id, or the delete failed. The code tells which.", body = crate::application::error::Failure)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ArticlePathId(id): ArticlePathId,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()
        .map_err(|err| err.with_status(StatusCode::NOT_FOUND))?;

    Ok(StatusCode::OK)
}
