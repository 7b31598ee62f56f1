use super::ArticleCommandService;
use crate::{
    application::error::{ApiException, ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Removes the article and returns its id.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<i64> {
        let id = ArticleId::new(command.id)?;
        if !self.repo.delete(id).await? {
            return Err(ApiException::not_found("article not found"));
        }
        tracing::debug!(%id, "article deleted");
        Ok(id.into())
    }
}
