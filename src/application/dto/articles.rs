use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

/// Response-shaped view of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(with = "serde_time")]
    pub created_on_utc: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub published_on_utc: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            tags: article.tags.into_inner(),
            created_on_utc: article.created_on_utc,
            published_on_utc: article.published_on_utc,
        }
    }
}
