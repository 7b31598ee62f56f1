use super::ArticleCommandService;
use crate::{
    application::{
        dto::article::{ReqPut, Res},
        error::ApplicationResult,
    },
    domain::article::ArticleId,
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub request: ReqPut,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<Res> {
        let id = ArticleId::new(command.id)?;
        let mut article = self.load(id).await?;

        let ReqPut { title, content } = command.request;
        article.update(title, content);

        let updated = self.repo.save(article).await?;
        Ok(updated.into())
    }
}
