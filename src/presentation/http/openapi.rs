// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::application::dto::ResponseCode,
            crate::application::dto::article::ReqPost,
            crate::application::dto::article::ReqPut,
            crate::application::dto::article::Res
        )
    ),
    tags(
        (name = "Articles", description = "Article endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Article Board API",
        description = "Article API answering with a {code, data} envelope",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}
