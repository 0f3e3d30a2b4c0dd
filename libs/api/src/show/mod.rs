use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use repository::Repository;
use tracing::error;

use entity::prelude::*;

pub mod response;

use crate::render;
use crate::response::{flash_redirect, IntoPageResponse, PageResponse};

use self::response::show_listings;

pub async fn list_shows(
    State(repo): State<Repository>,
) -> PageResponse<Html<String>> {
    let shows = repo.show.find_all().await.into_page_response()?;
    let listings = show_listings(shows);

    Ok(Html(render::shows_page(&listings)))
}

pub async fn new_show_form() -> Html<String> {
    Html(render::show_form_page(&ShowForm::default(), &[]))
}

pub async fn create_show(
    State(repo): State<Repository>,
    Form(form): Form<ShowForm>,
) -> Response {
    let new_show = match form.clone().validate() {
        Ok(new_show) => new_show,
        Err(errors) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render::show_form_page(&form, &errors)),
            )
                .into_response();
        }
    };

    match repo.show.create(new_show).await {
        Ok(_) => flash_redirect("/", "Show was successfully listed!"),
        Err(e) => {
            error!("{:?}", e);
            flash_redirect("/", "An error occurred. Show could not be listed.")
        }
    }
}
