use chrono::NaiveDateTime;
use entity::prelude::*;

/// ISO-like display string used wherever a start time is shown.
pub fn display_start_time(start_time: NaiveDateTime) -> String {
    start_time.format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

pub fn show_listings(
    shows: Vec<(ShowEntity, ArtistEntity, VenueEntity)>,
) -> Vec<ShowListing> {
    shows
        .into_iter()
        .map(|(show, artist, venue)| ShowListing {
            venue_id: venue.id,
            venue_name: venue.name,
            artist_id: artist.id,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: display_start_time(show.start_time),
        })
        .collect()
}
