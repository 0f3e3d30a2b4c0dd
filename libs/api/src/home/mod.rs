use axum::extract::{Query, State};
use axum::response::Html;
use repository::Repository;

pub mod request;

use crate::render;
use crate::response::{IntoPageResponse, PageResponse};

use self::request::HomeParams;

const RECENT_LIMIT: u64 = 10;

pub async fn index(
    State(repo): State<Repository>,
    Query(params): Query<HomeParams>,
) -> PageResponse<Html<String>> {
    let venues = repo
        .venue
        .find_recent(RECENT_LIMIT)
        .await
        .into_page_response()?;
    let artists = repo
        .artist
        .find_recent(RECENT_LIMIT)
        .await
        .into_page_response()?;

    Ok(Html(render::home_page(
        &venues,
        &artists,
        params.notice.as_deref(),
    )))
}
