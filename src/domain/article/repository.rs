use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Stores the article. An article without an id gets a fresh one;
    /// an article with an id replaces the stored entry.
    async fn save(&self, article: Article) -> DomainResult<Article>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Returns `false` when nothing was stored under `id`.
    async fn delete(&self, id: ArticleId) -> DomainResult<bool>;
}
