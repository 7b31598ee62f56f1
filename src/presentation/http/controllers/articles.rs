// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{
        Response,
        article::{ReqPost, ReqPut, Res},
    },
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::HttpResult;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = ReqPost,
    responses(
        (status = 200, description = "Created article, or an error envelope.", body = Response<Res>)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ReqPost>,
) -> HttpResult<Json<Response<Res>>> {
    let created = state
        .services
        .article_commands
        .create_article(CreateArticleCommand { request: payload })
        .await?;

    Ok(Json(Response::ok(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article, or an error envelope.", body = Response<Res>)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Response<Res>>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await?;

    Ok(Json(Response::ok(article)))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ReqPut,
    responses(
        (status = 200, description = "Updated article, or an error envelope.", body = Response<Res>)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReqPut>,
) -> HttpResult<Json<Response<Res>>> {
    let updated = state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            request: payload,
        })
        .await?;

    Ok(Json(Response::ok(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Id of the deleted article, or an error envelope.", body = Response<i64>)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Response<i64>>> {
    let deleted = state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await?;

    Ok(Json(Response::ok(deleted)))
}
