use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult, DomainResultExt, Operation},
    },
    domain::article::ArticleId,
};
use uuid::Uuid;

const OPERATION: Operation = Operation::GetArticle;

#[derive(Debug, Clone, Copy)]
pub struct GetArticleQuery {
    pub id: Uuid,
}

impl ArticleQueryService {
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        // No article ever carries the nil id, so it is simply absent.
        let Ok(id) = ArticleId::new(query.id) else {
            return Err(ApplicationError::article_not_found(OPERATION, query.id));
        };

        let article = self
            .read_repo
            .find_by_id(id)
            .await
            .for_operation(OPERATION)?
            .ok_or_else(|| {
                tracing::debug!(article_id = %id, "article not found");
                ApplicationError::article_not_found(OPERATION, id)
            })?;

        Ok(article.into())
    }
}
