use crate::application::{
    ApplicationResult,
    error::{ApplicationError, Failure},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Transport-side failure: a status code plus the `{code, message}` body.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    failure: Failure,
}

pub const INVALID_BODY_CODE: &str = "Request.InvalidBody";
pub const INVALID_ID_CODE: &str = "Request.InvalidId";

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = match &err {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.into_failure())
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            Failure::new(INVALID_BODY_CODE, message),
        )
    }

    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, Failure::new(INVALID_ID_CODE, message))
    }

    /// Keeps the failure body but answers with `status`.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    fn new(status: StatusCode, failure: Failure) -> Self {
        Self { status, failure }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn failure(&self) -> &Failure {
        &self.failure
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.failure)).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
