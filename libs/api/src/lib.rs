use axum::{routing::get, routing::post, Router};
use repository::Repository;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod artist;
pub mod healthz;
pub mod home;
pub mod not_found;
mod render;
mod response;
pub mod show;
pub mod venue;

pub async fn serve(repository: Repository) -> anyhow::Result<Router> {
    info!(task = "start page serving");

    // venues
    let venue_router = Router::new()
        .route("/", get(venue::list_venues))
        .route("/search", post(venue::search_venues))
        .route(
            "/create",
            get(venue::new_venue_form).post(venue::create_venue),
        )
        .route("/:id", get(venue::show_venue).delete(venue::delete_venue))
        .route(
            "/:id/edit",
            get(venue::edit_venue_form).post(venue::update_venue),
        )
        .with_state(repository.clone());

    // artists
    let artist_router = Router::new()
        .route("/", get(artist::list_artists))
        .route("/search", post(artist::search_artists))
        .route(
            "/create",
            get(artist::new_artist_form).post(artist::create_artist),
        )
        .route("/:id", get(artist::show_artist))
        .route(
            "/:id/edit",
            get(artist::edit_artist_form).post(artist::update_artist),
        )
        .with_state(repository.clone());

    // shows
    let show_router = Router::new()
        .route("/", get(show::list_shows))
        .route("/create", get(show::new_show_form).post(show::create_show))
        .with_state(repository.clone());

    let router = Router::new()
        .route("/", get(home::index))
        .route("/healthz", get(healthz::get_health))
        .nest("/venues", venue_router)
        .nest("/artists", artist_router)
        .nest("/shows", show_router)
        .fallback(not_found::get_404)
        .layer(TraceLayer::new_for_http())
        .with_state(repository);

    Ok(router)
}
