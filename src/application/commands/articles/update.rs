// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult, DomainResultExt, Operation},
        validation::{Violation, ensure_valid, id_not_empty, not_empty},
    },
    domain::article::{ArticleContent, ArticleId, ArticleTags, ArticleTitle},
};
use uuid::Uuid;

const OPERATION: Operation = Operation::UpdateArticle;

#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl UpdateArticleCommand {
    pub fn validate(&self) -> Vec<Violation> {
        [
            id_not_empty(self.id),
            not_empty("Title", &self.title),
            not_empty("Content", &self.content),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl ArticleCommandService {
    /// Overwrites title, content and tags of an existing article. No write is
    /// issued when the stored values already match. Concurrent updates are
    /// last-writer-wins.
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<()> {
        ensure_valid(OPERATION, command.validate())?;

        let UpdateArticleCommand {
            id,
            title,
            content,
            tags,
        } = command;
        let id = ArticleId::new(id).for_operation(OPERATION)?;

        let mut article = self
            .read_repo
            .find_by_id(id)
            .await
            .for_operation(OPERATION)?
            .ok_or_else(|| {
                tracing::debug!(article_id = %id, "update target missing");
                ApplicationError::article_not_found(OPERATION, id)
            })?;

        let changed = article.revise(
            ArticleTitle::new(title).for_operation(OPERATION)?,
            ArticleContent::new(content).for_operation(OPERATION)?,
            ArticleTags::new(tags),
        );

        if !changed {
            tracing::debug!(article_id = %id, "article unchanged, skipping write");
            return Ok(());
        }

        self.write_repo
            .update(&article)
            .await
            .for_operation(OPERATION)?;

        tracing::info!(article_id = %id, "article updated");
        Ok(())
    }
}
