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
use self::response::{group_by_location, search_results, VenuePage};

pub async fn list_venues(
    State(repo): State<Repository>,
) -> PageResponse<Html<String>> {
    let venues = repo.venue.find_all().await.into_page_response()?;
    let counts = repo
        .show
        .upcoming_counts_by_venue(Utc::now().naive_utc())
        .await
        .into_page_response()?;

    let groups = group_by_location(&venues, &counts);

    Ok(Html(render::venue_groups_page(&groups)))
}

pub async fn search_venues(
    State(repo): State<Repository>,
    Form(params): Form<SearchParams>,
) -> PageResponse<Html<String>> {
    let venues = repo
        .venue
        .search_by_name(&params.search_term)
        .await
        .into_page_response()?;

    let results = search_results(&venues);

    Ok(Html(render::venue_search_page(&params.search_term, &results)))
}

pub async fn show_venue(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
    Query(params): Query<NoticeParams>,
) -> PageResponse<Html<String>> {
    let venue = repo.venue.find_by_id(id).await.into_page_response()?;

    let Some(venue) = venue else {
        return Err(PageError::NotFound);
    };

    let shows = repo.show.find_for_venue(id).await.into_page_response()?;
    let page = VenuePage::build(venue, shows, Utc::now().naive_utc());

    Ok(Html(render::venue_detail_page(&page, params.notice.as_deref())))
}

pub async fn new_venue_form() -> Html<String> {
    Html(render::venue_form_page(
        "List a new venue",
        "/venues/create",
        &VenueForm::default(),
        &[],
    ))
}

pub async fn create_venue(
    State(repo): State<Repository>,
    MultiForm(form): MultiForm<VenueForm>,
) -> Response {
    let name = form.name.clone();

    let draft = match form.clone().validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render::venue_form_page(
                    "List a new venue",
                    "/venues/create",
                    &form,
                    &errors,
                )),
            )
                .into_response();
        }
    };

    match repo.venue.create(draft).await {
        Ok(_) => flash_redirect(
            "/",
            &format!("Venue {} was successfully listed!", name),
        ),
        Err(e) => {
            error!("{:?}", e);
            flash_redirect(
                "/",
                &format!(
                    "An error occurred. Venue {} could not be listed.",
                    name
                ),
            )
        }
    }
}

pub async fn edit_venue_form(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> PageResponse<Html<String>> {
    let venue = repo.venue.find_by_id(id).await.into_page_response()?;

    let Some(venue) = venue else {
        return Err(PageError::NotFound);
    };

    Ok(Html(render::venue_form_page(
        "Edit venue",
        &format!("/venues/{}/edit", id),
        &VenueForm::from(venue),
        &[],
    )))
}

pub async fn update_venue(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
    MultiForm(form): MultiForm<VenueForm>,
) -> Response {
    let name = form.name.clone();
    let action = format!("/venues/{}/edit", id);

    let draft = match form.clone().validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render::venue_form_page(
                    "Edit venue",
                    &action,
                    &form,
                    &errors,
                )),
            )
                .into_response();
        }
    };

    match repo.venue.update(id, draft).await {
        Ok(Some(_)) => flash_redirect(
            &format!("/venues/{}", id),
            &format!("Venue {} was successfully edited!", name),
        ),
        Ok(None) => PageError::NotFound.into_response(),
        Err(e) => {
            error!("{:?}", e);
            flash_redirect(
                &format!("/venues/{}", id),
                &format!("Venue {} could not be edited!", name),
            )
        }
    }
}

pub async fn delete_venue(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> Response {
    match repo.venue.delete(id).await {
        Ok(true) => flash_redirect("/", "Venue was successfully deleted!"),
        Ok(false) => PageError::NotFound.into_response(),
        Err(e) => {
            error!("{:?}", e);
            flash_redirect(
                "/",
                "An error occurred. Venue could not be deleted.",
            )
        }
    }
}
