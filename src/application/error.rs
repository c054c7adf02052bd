// src/application/error.rs
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

/// Outcome of every article handler. The error side always carries exactly
/// one [`Failure`].
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Store details are logged, not echoed to callers.
pub const STORAGE_FAILURE_MESSAGE: &str = "The article store could not complete the request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateArticle,
    GetArticle,
    GetAllArticles,
    UpdateArticle,
    DeleteArticle,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateArticle => "CreateArticle",
            Self::GetArticle => "GetArticle",
            Self::GetAllArticles => "GetAllArticles",
            Self::UpdateArticle => "UpdateArticle",
            Self::DeleteArticle => "DeleteArticle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Validation,
    NotFound,
    Storage,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "Validation",
            Self::NotFound => "NotFound",
            Self::Storage => "Storage",
        }
    }
}

/// Error payload returned to callers: a stable `code` plus a readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Failure {
    #[schema(example = "DeleteArticle.NotFound")]
    pub code: String,
    pub message: String,
}

impl Failure {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn for_operation(operation: Operation, reason: Reason, message: impl Into<String>) -> Self {
        Self::new(
            format!("{}.{}", operation.as_str(), reason.as_str()),
            message,
        )
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(Failure),

    #[error("resource not found: {0}")]
    NotFound(Failure),

    #[error("storage failure: {0}")]
    Storage(Failure),
}

impl ApplicationError {
    pub fn validation(operation: Operation, msg: impl Into<String>) -> Self {
        Self::Validation(Failure::for_operation(operation, Reason::Validation, msg))
    }

    pub fn not_found(operation: Operation, msg: impl Into<String>) -> Self {
        Self::NotFound(Failure::for_operation(operation, Reason::NotFound, msg))
    }

    pub fn storage(operation: Operation, msg: impl Into<String>) -> Self {
        Self::Storage(Failure::for_operation(operation, Reason::Storage, msg))
    }

    pub fn article_not_found(operation: Operation, id: impl fmt::Display) -> Self {
        Self::not_found(operation, format!("Article with Id {id} not found."))
    }

    /// Converts a domain or store error into the operation's failure.
    /// `Validation` and `NotFound` keep their kind; conflicts and persistence
    /// errors are storage faults.
    pub fn from_domain(operation: Operation, err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::validation(operation, msg),
            DomainError::NotFound(msg) => Self::not_found(operation, msg),
            DomainError::Conflict(msg) | DomainError::Persistence(msg) => {
                tracing::error!(operation = operation.as_str(), error = %msg, "article store failure");
                Self::storage(operation, STORAGE_FAILURE_MESSAGE)
            }
        }
    }

    pub fn failure(&self) -> &Failure {
        match self {
            Self::Validation(failure) | Self::NotFound(failure) | Self::Storage(failure) => failure,
        }
    }

    pub fn into_failure(self) -> Failure {
        match self {
            Self::Validation(failure) | Self::NotFound(failure) | Self::Storage(failure) => failure,
        }
    }

    pub fn code(&self) -> &str {
        &self.failure().code
    }

    pub fn message(&self) -> &str {
        &self.failure().message
    }

    pub fn reason(&self) -> Reason {
        match self {
            Self::Validation(_) => Reason::Validation,
            Self::NotFound(_) => Reason::NotFound,
            Self::Storage(_) => Reason::Storage,
        }
    }
}

/// Lifts store results into the handler's result, tagging failures with the
/// operation that observed them.
pub trait DomainResultExt<T> {
    fn for_operation(self, operation: Operation) -> ApplicationResult<T>;
}

impl<T> DomainResultExt<T> for Result<T, DomainError> {
    fn for_operation(self, operation: Operation) -> ApplicationResult<T> {
        self.map_err(|err| ApplicationError::from_domain(operation, err))
    }
}
