// src/presentation/http/extractors.rs
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::error::HttpError;

/// JSON body whose rejections are reported as `{code, message}`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected request body");
                Err(HttpError::invalid_body(rejection.body_text()))
            }
        }
    }
}

/// `{id}` path segment parsed as a UUID. Anything else is treated as an
/// unknown route target and answered with 404.
#[derive(Debug, Clone, Copy)]
pub struct ArticlePathId(pub Uuid);

impl<S> FromRequestParts<S> for ArticlePathId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::invalid_id(rejection.body_text()))?;

        Uuid::parse_str(&raw)
            .map(Self)
            .map_err(|_| HttpError::invalid_id(format!("'{raw}' is not a valid article id.")))
    }
}
