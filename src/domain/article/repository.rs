use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Persists a new article. A duplicate id is reported as `Conflict`.
    async fn insert(&self, article: &Article) -> DomainResult<()>;
    /// Overwrites the stored record with the same id; `NotFound` if it is gone.
    async fn update(&self, article: &Article) -> DomainResult<()>;
    /// Hard delete; `NotFound` if no record matched.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Full scan. Ordering is up to the implementation.
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
}
