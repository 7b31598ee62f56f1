use std::sync::Arc;

mod support;

use article_board::application::ApiException;
use article_board::application::commands::articles::{
    ArticleCommandService, CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand,
};
use article_board::application::dto::ResponseCode;
use article_board::application::dto::article::{ReqPost, ReqPut};
use article_board::application::queries::articles::{ArticleQueryService, GetArticleByIdQuery};
use article_board::infrastructure::repositories::InMemoryArticleRepository;

fn services() -> (ArticleCommandService, ArticleQueryService) {
    let repo = Arc::new(InMemoryArticleRepository::new());
    (
        ArticleCommandService::new(repo.clone()),
        ArticleQueryService::new(repo),
    )
}

fn post(title: &str, content: &str) -> CreateArticleCommand {
    CreateArticleCommand {
        request: ReqPost {
            title: title.into(),
            content: content.into(),
        },
    }
}

#[tokio::test]
async fn create_assigns_id_and_keeps_fields() {
    let (commands, queries) = services();
    let created = commands.create_article(post("title", "content")).await.unwrap();
    let id = created.id.expect("id assigned");

    let fetched = queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_twice_is_same_as_once() {
    let (commands, _) = services();
    let id = commands.create_article(post("a", "b")).await.unwrap().id.unwrap();

    let put = || UpdateArticleCommand {
        id,
        request: ReqPut {
            title: "c".into(),
            content: "d".into(),
        },
    };
    let once = commands.update_article(put()).await.unwrap();
    let twice = commands.update_article(put()).await.unwrap();
    assert_eq!(once, twice);
    assert_eq!(twice.title, "c");
    assert_eq!(twice.content, "d");
}

#[tokio::test]
async fn update_unknown_article_raises_not_found() {
    let (commands, _) = services();
    let err = commands
        .update_article(UpdateArticleCommand {
            id: 5,
            request: ReqPut {
                title: "t".into(),
                content: "c".into(),
            },
        })
        .await
        .unwrap_err();
    assert_eq!(err, ApiException::not_found("article not found"));
}

#[tokio::test]
async fn delete_returns_id_then_not_found() {
    let (commands, _) = services();
    let id = commands.create_article(post("t", "c")).await.unwrap().id.unwrap();

    assert_eq!(commands.delete_article(DeleteArticleCommand { id }).await.unwrap(), id);
    let err = commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .unwrap_err();
    assert_eq!(err.code(), ResponseCode::NOT_FOUND);
}

#[tokio::test]
async fn storage_failures_surface_as_internal_error() {
    let commands = ArticleCommandService::new(Arc::new(support::FailingArticleRepo));
    let err = commands.create_article(post("t", "c")).await.unwrap_err();
    assert_eq!(err.code(), ResponseCode::INTERNAL_ERROR);
    assert_eq!(err.message(), "storage offline");
}
