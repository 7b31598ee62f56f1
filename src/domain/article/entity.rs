// src/domain/article/entity.rs
use crate::application::dto::article::ReqPost;
use crate::domain::article::value_objects::ArticleId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: Option<ArticleId>,
    title: String,
    content: String,
}

impl Article {
    /// Builds an unsaved article from a creation request.
    #[must_use]
    pub fn of(request: ReqPost) -> Self {
        let ReqPost { title, content } = request;
        Self {
            id: None,
            title,
            content,
        }
    }

    /// Overwrites both fields. Empty strings are accepted.
    pub fn update(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
    }

    pub(crate) fn with_id(mut self, id: ArticleId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub const fn id(&self) -> Option<ArticleId> {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
