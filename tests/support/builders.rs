// tests/support/builders.rs
use uuid::Uuid;
use vertical_articles::domain::article::{
    Article, ArticleContent, ArticleId, ArticleTags, ArticleTitle,
};

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: Uuid,
    title: String,
    content: String,
    tags: Vec<String>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "Test Article".into(),
            content: "Test content".into(),
            tags: Vec::new(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Article {
        Article::new(
            ArticleId::new(self.id).expect("builder id must not be nil"),
            ArticleTitle::new(self.title).expect("builder title must not be empty"),
            ArticleContent::new(self.content).expect("builder content must not be empty"),
            ArticleTags::new(self.tags),
            fixed_now(),
        )
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
