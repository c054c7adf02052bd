// src/presentation/http/openapi.rs
use crate::application::{dto::ArticleDto, error::Failure};
use crate::presentation::http::controllers::articles::{CreateArticleRequest, UpdateArticleRequest};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            Failure,
            ArticleDto,
            CreateArticleRequest,
            UpdateArticleRequest
        )
    ),
    tags(
        (name = "Articles", description = "Article CRUD endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    servers((url = "/", description = "Same origin as the docs")),
    info(
        title = "Vertical Articles API",
        description = "Create, read, update and delete articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, backed by `/openapi.json`.
pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
