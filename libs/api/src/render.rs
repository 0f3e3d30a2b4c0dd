//! Server-rendered pages. Small enough that plain `format!` templates
//! beat pulling in a template engine; everything user-supplied goes
//! through [`escape`].

use axum::http::StatusCode;
use entity::prelude::*;

use crate::artist::response::{
    ArtistPage, SearchResults as ArtistSearchResults,
};
use crate::show::response::ShowListing;
use crate::venue::response::{
    CityGroup, SearchResults as VenueSearchResults, VenuePage,
};

pub const GENRES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub(crate) fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} | Encore</title>
<style>
body {{ font-family: sans-serif; margin: 2em auto; max-width: 48em; padding: 0 1em; }}
nav a {{ margin-right: 1em; }}
.notice {{ background: #e8f4e8; border: 1px solid #9c9; padding: 0.5em 1em; }}
.errors {{ color: #a00; }}
label {{ display: block; margin-top: 0.75em; }}
</style>
</head>
<body>
<nav>
<a href="/">Encore</a>
<a href="/venues">Venues</a>
<a href="/artists">Artists</a>
<a href="/shows">Shows</a>
</nav>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

fn notice_banner(notice: Option<&str>) -> String {
    match notice {
        Some(notice) => {
            format!("<p class=\"notice\">{}</p>\n", escape(notice))
        }
        None => String::new(),
    }
}

pub fn home_page(
    venues: &[VenueEntity],
    artists: &[ArtistEntity],
    notice: Option<&str>,
) -> String {
    let mut body = notice_banner(notice);

    body.push_str("<h1>Encore</h1>\n<h2>Recently listed venues</h2>\n<ul>\n");
    for venue in venues {
        body.push_str(&format!(
            "<li><a href=\"/venues/{}\">{}</a></li>\n",
            venue.id,
            escape(&venue.name)
        ));
    }
    body.push_str("</ul>\n<h2>Recently listed artists</h2>\n<ul>\n");
    for artist in artists {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a></li>\n",
            artist.id,
            escape(&artist.name)
        ));
    }
    body.push_str("</ul>\n");
    body.push_str(
        "<p><a href=\"/venues/create\">List a venue</a> | \
         <a href=\"/artists/create\">List an artist</a> | \
         <a href=\"/shows/create\">List a show</a></p>\n",
    );

    layout("Home", &body)
}

fn search_box(action: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <input type=\"search\" name=\"search_term\" placeholder=\"Find by name\">\n\
         <button type=\"submit\">Search</button>\n</form>\n"
    )
}

pub fn venue_groups_page(groups: &[CityGroup]) -> String {
    let mut body = String::from("<h1>Venues</h1>\n");
    body.push_str(&search_box("/venues/search"));

    for group in groups {
        body.push_str(&format!(
            "<h2>{}, {}</h2>\n<ul>\n",
            escape(&group.city),
            escape(&group.state)
        ));
        for venue in &group.venues {
            body.push_str(&format!(
                "<li><a href=\"/venues/{}\">{}</a> \
                 ({} upcoming)</li>\n",
                venue.id,
                escape(&venue.name),
                venue.num_upcoming_shows
            ));
        }
        body.push_str("</ul>\n");
    }

    layout("Venues", &body)
}

pub fn venue_search_page(
    term: &str,
    results: &VenueSearchResults,
) -> String {
    let mut body = format!(
        "<h1>{} result(s) for \"{}\"</h1>\n<ul>\n",
        results.count,
        escape(term)
    );
    for venue in &results.data {
        body.push_str(&format!(
            "<li><a href=\"/venues/{}\">{}</a> ({} upcoming)</li>\n",
            venue.id,
            escape(&venue.name),
            venue.num_upcoming_shows
        ));
    }
    body.push_str("</ul>\n");
    body.push_str(&search_box("/venues/search"));

    layout("Search venues", &body)
}

pub fn venue_detail_page(page: &VenuePage, notice: Option<&str>) -> String {
    let venue = &page.venue;
    let mut body = notice_banner(notice);
    body += &format!(
        "<h1>{name}</h1>\n\
         <img src=\"{image}\" alt=\"{name}\" width=\"240\">\n\
         <p>{genres}</p>\n\
         <p>{city}, {state}{address}</p>\n",
        name = escape(&venue.name),
        image = escape(&venue.image_link),
        genres = escape(&venue.genres.join(", ")),
        city = escape(&venue.city),
        state = escape(&venue.state),
        address = venue
            .address
            .as_deref()
            .map(|a| format!(" &mdash; {}", escape(a)))
            .unwrap_or_default(),
    );

    if let Some(phone) = venue.phone.as_deref() {
        body.push_str(&format!("<p>{}</p>\n", escape(phone)));
    }
    if let Some(website) = venue.website_link.as_deref() {
        let website = escape(website);
        body.push_str(&format!("<p><a href=\"{website}\">{website}</a></p>\n"));
    }
    if let Some(facebook) = venue.facebook_link.as_deref() {
        let facebook = escape(facebook);
        body.push_str(&format!(
            "<p><a href=\"{facebook}\">{facebook}</a></p>\n"
        ));
    }
    if venue.seeking_talent {
        body.push_str(&format!(
            "<p><strong>Seeking talent:</strong> {}</p>\n",
            escape(&venue.seeking_description)
        ));
    }

    body.push_str(&format!(
        "<h2>{} upcoming show(s)</h2>\n<ul>\n",
        page.upcoming_shows_count
    ));
    for slot in &page.upcoming_shows {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> at {}</li>\n",
            slot.artist_id,
            escape(&slot.artist_name),
            slot.start_time
        ));
    }
    body.push_str(&format!(
        "</ul>\n<h2>{} past show(s)</h2>\n<ul>\n",
        page.past_shows_count
    ));
    for slot in &page.past_shows {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> at {}</li>\n",
            slot.artist_id,
            escape(&slot.artist_name),
            slot.start_time
        ));
    }
    body.push_str("</ul>\n");

    body.push_str(&format!(
        "<p><a href=\"/venues/{id}/edit\">Edit</a></p>\n\
         <button onclick=\"fetch('/venues/{id}', {{method: 'DELETE'}})\
.then(r => window.location = r.url)\">Delete venue</button>\n",
        id = venue.id
    ));

    layout(&venue.name, &body)
}

fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut list = String::from("<ul class=\"errors\">\n");
    for error in errors {
        list.push_str(&format!("<li>{}</li>\n", escape(&error.to_string())));
    }
    list.push_str("</ul>\n");
    list
}

fn text_field(label: &str, name: &str, value: &str) -> String {
    format!(
        "<label>{label}\
         <input type=\"text\" name=\"{name}\" value=\"{value}\"></label>\n",
        label = escape(label),
        name = name,
        value = escape(value),
    )
}

fn genre_select(selected: &[String]) -> String {
    let mut select = String::from(
        "<label>Genres<select name=\"genres\" multiple size=\"6\">\n",
    );
    for genre in GENRES {
        let marker = if selected.iter().any(|s| s == genre) {
            " selected"
        } else {
            ""
        };
        select.push_str(&format!(
            "<option value=\"{genre}\"{marker}>{genre}</option>\n",
            genre = escape(genre),
            marker = marker,
        ));
    }
    select.push_str("</select></label>\n");
    select
}

fn seeking_checkbox(label: &str, name: &str, checked: bool) -> String {
    format!(
        "<label>{label}\
         <input type=\"checkbox\" name=\"{name}\" value=\"y\"{checked}>\
         </label>\n",
        label = escape(label),
        name = name,
        checked = if checked { " checked" } else { "" },
    )
}

pub fn venue_form_page(
    title: &str,
    action: &str,
    form: &VenueForm,
    errors: &[FieldError],
) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(title));
    body.push_str(&error_list(errors));
    body.push_str(&format!("<form method=\"post\" action=\"{action}\">\n"));
    body.push_str(&text_field("Name", "name", &form.name));
    body.push_str(&text_field("City", "city", &form.city));
    body.push_str(&text_field("State", "state", &form.state));
    body.push_str(&text_field("Address", "address", &form.address));
    body.push_str(&text_field("Phone", "phone", &form.phone));
    body.push_str(&genre_select(&form.genres));
    body.push_str(&text_field("Image link", "image_link", &form.image_link));
    body.push_str(&text_field(
        "Facebook link",
        "facebook_link",
        &form.facebook_link,
    ));
    body.push_str(&text_field(
        "Website link",
        "website_link",
        &form.website_link,
    ));
    body.push_str(&seeking_checkbox(
        "Seeking talent",
        "seeking_talent",
        form.seeking_talent.is_some(),
    ));
    body.push_str(&format!(
        "<label>Seeking description\
         <textarea name=\"seeking_description\">{}</textarea></label>\n",
        escape(&form.seeking_description)
    ));
    body.push_str("<button type=\"submit\">Save</button>\n</form>\n");

    layout(title, &body)
}

pub fn artist_list_page(artists: &[ArtistEntity]) -> String {
    let mut body = String::from("<h1>Artists</h1>\n");
    body.push_str(&search_box("/artists/search"));
    body.push_str("<ul>\n");
    for artist in artists {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a></li>\n",
            artist.id,
            escape(&artist.name)
        ));
    }
    body.push_str("</ul>\n");

    layout("Artists", &body)
}

pub fn artist_search_page(
    term: &str,
    results: &ArtistSearchResults,
) -> String {
    let mut body = format!(
        "<h1>{} result(s) for \"{}\"</h1>\n<ul>\n",
        results.count,
        escape(term)
    );
    for artist in &results.data {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> ({} upcoming)</li>\n",
            artist.id,
            escape(&artist.name),
            artist.num_upcoming_shows
        ));
    }
    body.push_str("</ul>\n");
    body.push_str(&search_box("/artists/search"));

    layout("Search artists", &body)
}

pub fn artist_detail_page(page: &ArtistPage, notice: Option<&str>) -> String {
    let artist = &page.artist;
    let mut body = notice_banner(notice);
    body += &format!(
        "<h1>{name}</h1>\n\
         <img src=\"{image}\" alt=\"{name}\" width=\"240\">\n\
         <p>{genres}</p>\n\
         <p>{city}, {state}</p>\n",
        name = escape(&artist.name),
        image = escape(&artist.image_link),
        genres = escape(&artist.genres.join(", ")),
        city = escape(&artist.city),
        state = escape(&artist.state),
    );

    if let Some(phone) = artist.phone.as_deref() {
        body.push_str(&format!("<p>{}</p>\n", escape(phone)));
    }
    if let Some(website) = artist.website_link.as_deref() {
        let website = escape(website);
        body.push_str(&format!("<p><a href=\"{website}\">{website}</a></p>\n"));
    }
    if let Some(facebook) = artist.facebook_link.as_deref() {
        let facebook = escape(facebook);
        body.push_str(&format!(
            "<p><a href=\"{facebook}\">{facebook}</a></p>\n"
        ));
    }
    if artist.seeking_venue {
        body.push_str(&format!(
            "<p><strong>Seeking venues:</strong> {}</p>\n",
            escape(&artist.seeking_description)
        ));
    }

    body.push_str(&format!(
        "<h2>{} upcoming show(s)</h2>\n<ul>\n",
        page.upcoming_shows_count
    ));
    for slot in &page.upcoming_shows {
        body.push_str(&format!(
            "<li><a href=\"/venues/{}\">{}</a> at {}</li>\n",
            slot.venue_id,
            escape(&slot.venue_name),
            slot.start_time
        ));
    }
    body.push_str(&format!(
        "</ul>\n<h2>{} past show(s)</h2>\n<ul>\n",
        page.past_shows_count
    ));
    for slot in &page.past_shows {
        body.push_str(&format!(
            "<li><a href=\"/venues/{}\">{}</a> at {}</li>\n",
            slot.venue_id,
            escape(&slot.venue_name),
            slot.start_time
        ));
    }
    body.push_str("</ul>\n");

    body.push_str(&format!(
        "<p><a href=\"/artists/{}/edit\">Edit</a></p>\n",
        artist.id
    ));

    layout(&artist.name, &body)
}

pub fn artist_form_page(
    title: &str,
    action: &str,
    form: &ArtistForm,
    errors: &[FieldError],
) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(title));
    body.push_str(&error_list(errors));
    body.push_str(&format!("<form method=\"post\" action=\"{action}\">\n"));
    body.push_str(&text_field("Name", "name", &form.name));
    body.push_str(&text_field("City", "city", &form.city));
    body.push_str(&text_field("State", "state", &form.state));
    body.push_str(&text_field("Phone", "phone", &form.phone));
    body.push_str(&genre_select(&form.genres));
    body.push_str(&text_field("Image link", "image_link", &form.image_link));
    body.push_str(&text_field(
        "Facebook link",
        "facebook_link",
        &form.facebook_link,
    ));
    body.push_str(&text_field(
        "Website link",
        "website_link",
        &form.website_link,
    ));
    body.push_str(&seeking_checkbox(
        "Seeking venues",
        "seeking_venue",
        form.seeking_venue.is_some(),
    ));
    body.push_str(&format!(
        "<label>Seeking description\
         <textarea name=\"seeking_description\">{}</textarea></label>\n",
        escape(&form.seeking_description)
    ));
    body.push_str("<button type=\"submit\">Save</button>\n</form>\n");

    layout(title, &body)
}

pub fn shows_page(shows: &[ShowListing]) -> String {
    let mut body = String::from("<h1>Shows</h1>\n<ul>\n");
    for show in shows {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> at \
             <a href=\"/venues/{}\">{}</a> on {}</li>\n",
            show.artist_id,
            escape(&show.artist_name),
            show.venue_id,
            escape(&show.venue_name),
            show.start_time
        ));
    }
    body.push_str("</ul>\n");
    body.push_str("<p><a href=\"/shows/create\">List a show</a></p>\n");

    layout("Shows", &body)
}

pub fn show_form_page(form: &ShowForm, errors: &[FieldError]) -> String {
    let mut body = String::from("<h1>List a new show</h1>\n");
    body.push_str(&error_list(errors));
    body.push_str("<form method=\"post\" action=\"/shows/create\">\n");
    body.push_str(&text_field("Artist id", "artist_id", &form.artist_id));
    body.push_str(&text_field("Venue id", "venue_id", &form.venue_id));
    body.push_str(&format!(
        "<label>Start time\
         <input type=\"datetime-local\" name=\"start_time\" value=\"{}\">\
         </label>\n",
        escape(&form.start_time)
    ));
    body.push_str("<button type=\"submit\">Save</button>\n</form>\n");

    layout("List a new show", &body)
}

pub fn error_page(status: StatusCode) -> String {
    let (title, message) = match status {
        StatusCode::UNAUTHORIZED => {
            ("401 Unauthorized", "You need to sign in to do that.")
        }
        StatusCode::FORBIDDEN => {
            ("403 Forbidden", "You are not allowed to do that.")
        }
        StatusCode::NOT_FOUND => {
            ("404 Not found", "That page does not exist.")
        }
        StatusCode::METHOD_NOT_ALLOWED => (
            "405 Method not allowed",
            "That method is not supported here.",
        ),
        StatusCode::CONFLICT => {
            ("409 Conflict", "That resource already exists.")
        }
        StatusCode::UNPROCESSABLE_ENTITY => (
            "422 Unprocessable",
            "The submitted form could not be processed.",
        ),
        _ => (
            "500 Server error",
            "Something went wrong on our end. Please try again.",
        ),
    };

    let body = format!(
        "<h1>{title}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back home</a></p>\n"
    );

    layout(title, &body)
}
