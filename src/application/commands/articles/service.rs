// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApiException, ApplicationResult},
    domain::article::{Article, ArticleId, ArticleRepository},
};

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
}

impl ArticleCommandService {
    pub fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }

    pub(super) async fn load(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiException::not_found("article not found"))
    }
}
