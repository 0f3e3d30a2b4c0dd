use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use entity::prelude::*;
use http_body_util::BodyExt;
use repository::{init_repository, Repository};
use tempfile::TempDir;
use tower::ServiceExt;

async fn test_app() -> (TempDir, Router, Repository) {
    let dir = tempfile::tempdir().unwrap();
    let url =
        format!("sqlite://{}/encore.db?mode=rwc", dir.path().display());
    let repo = init_repository(&url).await.unwrap();
    let app = api::serve(repo.clone()).await.unwrap();
    (dir, app, repo)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const VENUE_FORM: &str = "name=The+Fillmore&city=San+Francisco&state=CA\
&address=1805+Geary+Blvd&genres=Jazz&genres=Rock+n+Roll\
&image_link=https%3A%2F%2Fexample.com%2Ffillmore.jpg";

const ARTIST_FORM: &str = "name=Daft+Punk&city=Paris&state=TX\
&genres=Electronic&image_link=https%3A%2F%2Fexample.com%2Fdp.jpg";

fn artist_draft(name: &str) -> ArtistDraft {
    ArtistDraft {
        name: name.to_string(),
        city: "Paris".to_string(),
        state: "TX".to_string(),
        genres: vec!["Electronic".to_string()],
        phone: None,
        image_link: "https://example.com/artist.jpg".to_string(),
        facebook_link: None,
        website_link: None,
        seeking_venue: false,
        seeking_description: String::new(),
    }
}

fn venue_draft(name: &str, city: &str, state: &str) -> VenueDraft {
    VenueDraft {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: None,
        genres: vec!["Jazz".to_string()],
        phone: None,
        image_link: "https://example.com/venue.jpg".to_string(),
        facebook_link: None,
        website_link: None,
        seeking_talent: false,
        seeking_description: String::new(),
    }
}

#[tokio::test]
async fn home_page_serves_html() {
    let (_dir, app, _repo) = test_app().await;

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.contains("text/html"));
    assert!(body_string(response).await.contains("Recently listed venues"));
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (_dir, app, _repo) = test_app().await;

    let response = app.oneshot(get("/healthz")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_routes_render_the_404_page() {
    let (_dir, app, _repo) = test_app().await;

    let response = app.oneshot(get("/backstage")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("404"));
}

#[tokio::test]
async fn unknown_venue_renders_the_404_page() {
    let (_dir, app, _repo) = test_app().await;

    let response = app.oneshot(get("/venues/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("404"));
}

#[tokio::test]
async fn venue_create_form_round_trips_to_detail_page() {
    let (_dir, app, repo) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/venues/create", VENUE_FORM))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.starts_with("/?notice="));

    let venues = repo.venue.find_all().await.unwrap();
    assert_eq!(venues.len(), 1);

    let response = app
        .oneshot(get(&format!("/venues/{}", venues[0].id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("The Fillmore"));
    assert!(body.contains("Jazz, Rock n Roll"));
}

#[tokio::test]
async fn invalid_venue_form_is_rejected_without_writing() {
    let (_dir, app, repo) = test_app().await;

    // no image_link and no genres
    let response = app
        .oneshot(post_form(
            "/venues/create",
            "name=The+Fillmore&city=San+Francisco&state=CA",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(response).await;
    assert!(body.contains("image_link"));
    assert!(body.contains("genres"));

    assert!(repo.venue.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn venue_detail_partitions_past_and_upcoming_shows() {
    let (_dir, app, repo) = test_app().await;

    let venue_id = repo
        .venue
        .create(venue_draft("The Fillmore", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist_id =
        repo.artist.create(artist_draft("Daft Punk")).await.unwrap();
    repo.show
        .create(NewShow {
            artist_id,
            venue_id,
            start_time: Utc::now().naive_utc() - Duration::days(1),
        })
        .await
        .unwrap();

    let response = app
        .oneshot(get(&format!("/venues/{}", venue_id)))
        .await
        .unwrap();

    let body = body_string(response).await;
    assert!(body.contains("1 past show(s)"));
    assert!(body.contains("0 upcoming show(s)"));
    assert!(body.contains("Daft Punk"));
}

#[tokio::test]
async fn venue_search_matches_case_insensitively() {
    let (_dir, app, repo) = test_app().await;

    for name in ["The Bar", "BARN", "Crossroads"] {
        repo.venue
            .create(venue_draft(name, "Austin", "TX"))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(post_form("/venues/search", "search_term=bar"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("2 result(s)"));
    assert!(body.contains("The Bar"));
    assert!(body.contains("BARN"));
    assert!(!body.contains("Crossroads"));
}

#[tokio::test]
async fn venue_listing_groups_consecutive_locations_only() {
    let (_dir, app, repo) = test_app().await;

    repo.venue
        .create(venue_draft("The Fillmore", "San Francisco", "CA"))
        .await
        .unwrap();
    repo.venue
        .create(venue_draft("Brooklyn Bowl", "New York", "NY"))
        .await
        .unwrap();
    repo.venue
        .create(venue_draft("The Chapel", "San Francisco", "CA"))
        .await
        .unwrap();

    let response = app.oneshot(get("/venues")).await.unwrap();

    let body = body_string(response).await;
    // the interrupted (city, state) run shows up as two separate headings
    assert_eq!(body.matches("San Francisco, CA").count(), 2);
    assert_eq!(body.matches("New York, NY").count(), 1);
}

#[tokio::test]
async fn editing_a_venue_overwrites_its_fields() {
    let (_dir, app, repo) = test_app().await;

    let venue_id = repo
        .venue
        .create(venue_draft("The Fillmore", "San Francisco", "CA"))
        .await
        .unwrap();

    let form = "name=The+Fillmore+West&city=San+Francisco&state=CA\
&genres=Blues&image_link=https%3A%2F%2Fexample.com%2Fnew.jpg";
    let response = app
        .oneshot(post_form(&format!("/venues/{}/edit", venue_id), form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let venue = repo.venue.find_by_id(venue_id).await.unwrap().unwrap();
    assert_eq!(venue.name, "The Fillmore West");
    assert_eq!(venue.genres, vec!["Blues"]);
}

#[tokio::test]
async fn editing_an_artist_overwrites_its_fields() {
    let (_dir, app, repo) = test_app().await;

    let artist_id =
        repo.artist.create(artist_draft("Daft Punk")).await.unwrap();

    let form = "name=Daft+Punk+Live&city=Paris&state=TX\
&genres=House&image_link=https%3A%2F%2Fexample.com%2Fnew.jpg";
    let response = app
        .oneshot(post_form(&format!("/artists/{}/edit", artist_id), form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let artist = repo.artist.find_by_id(artist_id).await.unwrap().unwrap();
    assert_eq!(artist.name, "Daft Punk Live");
    assert_eq!(artist.genres, vec!["House"]);
}

#[tokio::test]
async fn deleting_a_venue_over_http_cascades_to_shows() {
    let (_dir, app, repo) = test_app().await;

    let venue_id = repo
        .venue
        .create(venue_draft("The Fillmore", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist_id =
        repo.artist.create(artist_draft("Daft Punk")).await.unwrap();
    repo.show
        .create(NewShow {
            artist_id,
            venue_id,
            start_time: Utc::now().naive_utc() + Duration::days(3),
        })
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/venues/{}", venue_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(repo.venue.find_by_id(venue_id).await.unwrap().is_none());
    assert_eq!(repo.show.count_all().await.unwrap(), 0);
}

#[tokio::test]
async fn artist_routes_mirror_the_venue_set() {
    let (_dir, app, repo) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/artists/create", ARTIST_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let artists = repo.artist.find_all().await.unwrap();
    assert_eq!(artists.len(), 1);

    let response = app
        .clone()
        .oneshot(get(&format!("/artists/{}", artists[0].id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Daft Punk"));

    let response = app
        .oneshot(post_form("/artists/search", "search_term=daft"))
        .await
        .unwrap();
    assert!(body_string(response).await.contains("1 result(s)"));
}

#[tokio::test]
async fn show_listing_names_both_sides() {
    let (_dir, app, repo) = test_app().await;

    let venue_id = repo
        .venue
        .create(venue_draft("The Fillmore", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist_id =
        repo.artist.create(artist_draft("Daft Punk")).await.unwrap();
    repo.show
        .create(NewShow {
            artist_id,
            venue_id,
            start_time: Utc::now().naive_utc() + Duration::days(3),
        })
        .await
        .unwrap();

    let response = app.oneshot(get("/shows")).await.unwrap();

    let body = body_string(response).await;
    assert!(body.contains("Daft Punk"));
    assert!(body.contains("The Fillmore"));
}

#[tokio::test]
async fn show_with_dangling_references_reports_a_flash_error() {
    let (_dir, app, repo) = test_app().await;

    let response = app
        .oneshot(post_form(
            "/shows/create",
            "artist_id=77&venue_id=88&start_time=2026-09-01T20%3A00",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.contains("could%20not%20be%20listed"));

    assert_eq!(repo.show.count_all().await.unwrap(), 0);
}

#[tokio::test]
async fn malformed_show_form_is_rejected_with_422() {
    let (_dir, app, _repo) = test_app().await;

    let response = app
        .oneshot(post_form(
            "/shows/create",
            "artist_id=abc&venue_id=1&start_time=whenever",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(response).await;
    assert!(body.contains("artist_id"));
    assert!(body.contains("start_time"));
}
