// tests/support/mocks/article_repos.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;
use vertical_articles::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository,
};
use vertical_articles::domain::errors::{DomainError, DomainResult};

/* -------------------------------- InMemoryArticleStore -------------------------------- */

/// 読み書き両方を実装するインメモリ記事ストア
#[derive(Default)]
pub struct InMemoryArticleStore {
    inner: Mutex<HashMap<Uuid, Article>>,
    writes: AtomicUsize,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let store = Self::new();
        {
            let mut map = store.inner.lock().unwrap();
            for article in articles {
                map.insert(article.id.as_uuid(), article);
            }
        }
        store
    }

    /// Number of insert, update and delete calls that reached the store.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn get(&self, id: Uuid) -> Option<Article> {
        self.inner.lock().unwrap().get(&id).cloned()
    }

    fn missing(id: ArticleId) -> DomainError {
        DomainError::NotFound(format!("Article with Id {id} not found."))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: &Article) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut map = self.inner.lock().unwrap();
        let key = article.id.as_uuid();
        if map.contains_key(&key) {
            return Err(DomainError::Conflict("article id already exists".into()));
        }
        map.insert(key, article.clone());
        Ok(())
    }

    async fn update(&self, article: &Article) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut map = self.inner.lock().unwrap();
        match map.get_mut(&article.id.as_uuid()) {
            Some(slot) => {
                *slot = article.clone();
                Ok(())
            }
            None => Err(Self::missing(article.id)),
        }
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut map = self.inner.lock().unwrap();
        map.remove(&id.as_uuid())
            .map(|_| ())
            .ok_or_else(|| Self::missing(id))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.lock().unwrap().get(&id.as_uuid()).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.inner.lock().unwrap().values().cloned().collect())
    }
}

/* -------------------------------- FailingArticleStore -------------------------------- */

/// 全操作が永続化エラーになるストア
pub struct FailingArticleStore;

fn outage() -> DomainError {
    DomainError::persistence("connection refused")
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleStore {
    async fn insert(&self, _article: &Article) -> DomainResult<()> {
        Err(outage())
    }

    async fn update(&self, _article: &Article) -> DomainResult<()> {
        Err(outage())
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(outage())
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleStore {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(outage())
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        Err(outage())
    }
}
