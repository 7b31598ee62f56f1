use crate::domain::article::Article;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReqPost {
    pub title: String,
    pub content: String,
}

/// Update payload. Both fields replace the stored values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReqPut {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Res {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
}

impl From<Article> for Res {
    fn from(article: Article) -> Self {
        Self {
            id: article.id().map(Into::into),
            title: article.title().to_owned(),
            content: article.content().to_owned(),
        }
    }
}
