use super::ArticleQueryService;
use crate::{
    application::{
        dto::article::Res,
        error::{ApiException, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(&self, query: GetArticleByIdQuery) -> ApplicationResult<Res> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiException::not_found("article not found"))?;
        Ok(article.into())
    }
}
