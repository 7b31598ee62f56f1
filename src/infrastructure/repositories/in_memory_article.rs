use crate::domain::article::{Article, ArticleId, ArticleRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// Process-local article store. Contents are lost on shutdown.
pub struct InMemoryArticleRepository {
    articles: RwLock<HashMap<ArticleId, Article>>,
    next_id: AtomicI64,
}

impl Default for InMemoryArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryArticleRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            articles: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn allocate_id(&self) -> DomainResult<ArticleId> {
        let raw = self.next_id.fetch_add(1, Ordering::Relaxed);
        ArticleId::new(raw).map_err(|_| DomainError::Persistence("article id sequence exhausted".into()))
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn save(&self, article: Article) -> DomainResult<Article> {
        if let Some(id) = article.id() {
            let mut map = self.articles.write().await;
            let slot = map
                .get_mut(&id)
                .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
            *slot = article.clone();
            return Ok(article);
        }

        let stored = article.with_id(self.allocate_id()?);
        let id = stored.id().ok_or_else(|| DomainError::Persistence("id not assigned".into()))?;
        self.articles.write().await.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        Ok(self.articles.write().await.remove(&id).is_some())
    }
}
