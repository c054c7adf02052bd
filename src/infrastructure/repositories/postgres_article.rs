// src/infrastructure/repositories/postgres_article.rs
use super::{map_sqlx, tag_codec};
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle,
    ArticleWriteRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    content: String,
    tags: String,
    created_on_utc: DateTime<Utc>,
    published_on_utc: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        // A row that breaks an invariant is a storage fault, not bad input.
        let row_id = row.id;
        let corrupt =
            move |err: DomainError| DomainError::persistence(format!("corrupt article row {row_id}: {err}"));
        Ok(Article {
            id: ArticleId::new(row.id).map_err(corrupt)?,
            title: ArticleTitle::new(row.title).map_err(corrupt)?,
            content: ArticleContent::new(row.content).map_err(corrupt)?,
            tags: tag_codec::decode(&row.tags)?,
            created_on_utc: row.created_on_utc,
            published_on_utc: row.published_on_utc,
        })
    }
}

fn missing(id: ArticleId) -> DomainError {
    DomainError::NotFound(format!("Article with Id {id} not found."))
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: &Article) -> DomainResult<()> {
        let tags = tag_codec::encode(&article.tags)?;

        sqlx::query(
            "INSERT INTO articles (id, title, content, tags, created_on_utc, published_on_utc)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(article.id.as_uuid())
        .bind(article.title.as_str())
        .bind(article.content.as_str())
        .bind(tags)
        .bind(article.created_on_utc)
        .bind(article.published_on_utc)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn update(&self, article: &Article) -> DomainResult<()> {
        let tags = tag_codec::encode(&article.tags)?;

        let result = sqlx::query(
            "UPDATE articles SET title = $1, content = $2, tags = $3 WHERE id = $4",
        )
        .bind(article.title.as_str())
        .bind(article.content.as_str())
        .bind(tags)
        .bind(article.id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(missing(article.id));
        }
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(missing(id));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content, tags, created_on_utc, published_on_utc
             FROM articles WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content, tags, created_on_utc, published_on_utc FROM articles",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}
