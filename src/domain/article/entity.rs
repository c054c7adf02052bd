// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTags, ArticleTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub tags: ArticleTags,
    pub created_on_utc: DateTime<Utc>,
    /// Reserved for a publish workflow; nothing sets it yet.
    pub published_on_utc: Option<DateTime<Utc>>,
}

impl Article {
    pub fn new(
        id: ArticleId,
        title: ArticleTitle,
        content: ArticleContent,
        tags: ArticleTags,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            tags,
            created_on_utc: now,
            published_on_utc: None,
        }
    }

    /// Overwrites the editable fields and reports whether anything differed.
    /// `id` and `created_on_utc` never change.
    pub fn revise(&mut self, title: ArticleTitle, content: ArticleContent, tags: ArticleTags) -> bool {
        let changed = self.title != title || self.content != content || self.tags != tags;
        self.title = title;
        self.content = content;
        self.tags = tags;
        changed
    }
}
