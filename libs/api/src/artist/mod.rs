use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use axum_extra::extract::Form as MultiForm;
use chrono::Utc;
use repository::Repository;
use tracing::error;

use entity::prelude::*;

pub mod request;
pub mod response;

use crate::render;
use crate::response::{
    flash_redirect, IntoPageResponse, PageError, PageResponse,
};

use self::request::{NoticeParams, SearchParams};
use self::response::{search_results, ArtistPage};

pub async fn list_artists(
    State(repo): State<Repository>,
) -> PageResponse<Html<String>> {
    let artists = repo.artist.find_all().await.into_page_response()?;

    Ok(Html(render::artist_list_page(&artists)))
}

pub async fn search_artists(
    State(repo): State<Repository>,
    Form(params): Form<SearchParams>,
) -> PageResponse<Html<String>> {
    let artists = repo
        .artist
        .search_by_name(&params.search_term)
        .await
        .into_page_response()?;

    let results = search_results(&artists);

    Ok(Html(render::artist_search_page(&params.search_term, &results)))
}

pub async fn show_artist(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
    Query(params): Query<NoticeParams>,
) -> PageResponse<Html<String>> {
    let artist = repo.artist.find_by_id(id).await.into_page_response()?;

    let Some(artist) = artist else {
        return Err(PageError::NotFound);
    };

    let shows = repo.show.find_for_artist(id).await.into_page_response()?;
    let page = ArtistPage::build(artist, shows, Utc::now().naive_utc());

    Ok(Html(render::artist_detail_page(
        &page,
        params.notice.as_deref(),
    )))
}

pub async fn new_artist_form() -> Html<String> {
    Html(render::artist_form_page(
        "List a new artist",
        "/artists/create",
        &ArtistForm::default(),
        &[],
    ))
}

pub async fn create_artist(
    State(repo): State<Repository>,
    MultiForm(form): MultiForm<ArtistForm>,
) -> Response {
    let name = form.name.clone();

    let draft = match form.clone().validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render::artist_form_page(
                    "List a new artist",
                    "/artists/create",
                    &form,
                    &errors,
                )),
            )
                .into_response();
        }
    };

    match repo.artist.create(draft).await {
        Ok(_) => flash_redirect(
            "/",
            &format!("Artist {} was successfully listed!", name),
        ),
        Err(e) => {
            error!("{:?}", e);
            flash_redirect(
                "/",
                &format!(
                    "An error occurred. Artist {} could not be listed.",
                    name
                ),
            )
        }
    }
}

pub async fn edit_artist_form(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> PageResponse<Html<String>> {
    let artist = repo.artist.find_by_id(id).await.into_page_response()?;

    let Some(artist) = artist else {
        return Err(PageError::NotFound);
    };

    Ok(Html(render::artist_form_page(
        "Edit artist",
        &format!("/artists/{}/edit", id),
        &ArtistForm::from(artist),
        &[],
    )))
}

pub async fn update_artist(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
    MultiForm(form): MultiForm<ArtistForm>,
) -> Response {
    let name = form.name.clone();
    let action = format!("/artists/{}/edit", id);

    let draft = match form.clone().validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render::artist_form_page(
                    "Edit artist",
                    &action,
                    &form,
                    &errors,
                )),
            )
                .into_response();
        }
    };

    match repo.artist.update(id, draft).await {
        Ok(Some(_)) => flash_redirect(
            &format!("/artists/{}", id),
            &format!("Artist {} was successfully edited!", name),
        ),
        Ok(None) => PageError::NotFound.into_response(),
        Err(e) => {
            error!("{:?}", e);
            flash_redirect(
                &format!("/artists/{}", id),
                &format!("Artist {} could not be edited!", name),
            )
        }
    }
}
