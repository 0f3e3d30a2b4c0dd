use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::error;

use crate::render;

/// Failures a handler can surface to the client. Everything renders as a
/// page; store errors never leak raw.
pub enum PageError {
    NotFound,
    Internal,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = match self {
            PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Html(render::error_page(status))).into_response()
    }
}

pub type PageResponse<T> = Result<T, PageError>;

pub trait IntoPageResponse<T> {
    fn into_page_response(self) -> PageResponse<T>;
}

impl<T> IntoPageResponse<T> for anyhow::Result<T> {
    fn into_page_response(self) -> PageResponse<T> {
        self.map_err(|e| {
            error!("{:?}", e);
            PageError::Internal
        })
    }
}

/// Post/redirect/get with a flash notice carried in the query string.
pub fn flash_redirect(path: &str, notice: &str) -> Response {
    let target = format!("{}?notice={}", path, urlencoding::encode(notice));
    Redirect::to(&target).into_response()
}
