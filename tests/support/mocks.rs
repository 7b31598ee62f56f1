// tests/support/mocks.rs
use async_trait::async_trait;

use article_board::domain::article::{Article, ArticleId, ArticleRepository};
use article_board::domain::errors::{DomainError, DomainResult};

/// 常に永続化エラーを返す記事リポジトリ
pub struct FailingArticleRepo;

#[async_trait]
impl ArticleRepository for FailingArticleRepo {
    async fn save(&self, _article: Article) -> DomainResult<Article> {
        Err(DomainError::Persistence("storage offline".into()))
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("storage offline".into()))
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<bool> {
        Err(DomainError::Persistence("storage offline".into()))
    }
}
