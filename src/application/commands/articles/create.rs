// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::article::{ReqPost, Res},
        error::ApplicationResult,
    },
    domain::article::Article,
};

pub struct CreateArticleCommand {
    pub request: ReqPost,
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<Res> {
        let article = Article::of(command.request);
        let created = self.repo.save(article).await?;
        tracing::debug!(id = ?created.id(), "article created");
        Ok(created.into())
    }
}
