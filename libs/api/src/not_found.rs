use axum::http::StatusCode;
use axum::response::Html;

use crate::render;

pub(super) async fn get_404() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(render::error_page(StatusCode::NOT_FOUND)),
    )
}
