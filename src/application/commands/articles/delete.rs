// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult, DomainResultExt, Operation},
        validation::{Violation, ensure_valid, id_not_empty},
    },
    domain::article::ArticleId,
};
use uuid::Uuid;

const OPERATION: Operation = Operation::DeleteArticle;

#[derive(Debug, Clone, Copy)]
pub struct DeleteArticleCommand {
    pub id: Uuid,
}

impl DeleteArticleCommand {
    pub fn validate(&self) -> Vec<Violation> {
        id_not_empty(self.id).into_iter().collect()
    }
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        ensure_valid(OPERATION, command.validate())?;
        let id = ArticleId::new(command.id).for_operation(OPERATION)?;

        if self
            .read_repo
            .find_by_id(id)
            .await
            .for_operation(OPERATION)?
            .is_none()
        {
            tracing::debug!(article_id = %id, "delete target missing");
            return Err(ApplicationError::article_not_found(OPERATION, id));
        }

        self.write_repo.delete(id).await.for_operation(OPERATION)?;

        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
