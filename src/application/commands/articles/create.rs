// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        error::{ApplicationResult, DomainResultExt, Operation},
        validation::{Violation, ensure_valid, not_empty},
    },
    domain::article::{Article, ArticleContent, ArticleId, ArticleTags, ArticleTitle},
};

const OPERATION: Operation = Operation::CreateArticle;

#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }

    pub fn validate(&self) -> Vec<Violation> {
        [
            not_empty("Title", &self.title),
            not_empty("Content", &self.content),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    tags: Vec<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            tags: self.tags,
        })
    }
}

impl ArticleCommandService {
    /// Validates the input, assigns a fresh id and creation time, and stores
    /// the article. Returns the new id.
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleId> {
        ensure_valid(OPERATION, command.validate())?;

        let CreateArticleCommand {
            title,
            content,
            tags,
        } = command;

        let article = Article::new(
            ArticleId::new(self.ids.generate()).for_operation(OPERATION)?,
            ArticleTitle::new(title).for_operation(OPERATION)?,
            ArticleContent::new(content).for_operation(OPERATION)?,
            ArticleTags::new(tags),
            self.clock.now(),
        );

        self.write_repo
            .insert(&article)
            .await
            .for_operation(OPERATION)?;

        tracing::info!(article_id = %article.id, "article created");
        Ok(article.id)
    }
}
