use chrono::NaiveDateTime;
use entity::prelude::*;

use crate::show::response::display_start_time;

pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

pub struct SearchResults {
    pub count: usize,
    pub data: Vec<ArtistSummary>,
}

/// Same simplification as the venue search: upcoming counts are reported
/// as zero.
pub fn search_results(artists: &[ArtistEntity]) -> SearchResults {
    SearchResults {
        count: artists.len(),
        data: artists
            .iter()
            .map(|a| ArtistSummary {
                id: a.id,
                name: a.name.clone(),
                num_upcoming_shows: 0,
            })
            .collect(),
    }
}

/// One booked show as seen from the artist side.
pub struct VenueSlot {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}

pub struct ArtistPage {
    pub artist: ArtistEntity,
    pub past_shows: Vec<VenueSlot>,
    pub upcoming_shows: Vec<VenueSlot>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistPage {
    pub fn build(
        artist: ArtistEntity,
        shows: Vec<(ShowEntity, VenueEntity)>,
        now: NaiveDateTime,
    ) -> Self {
        let mut past = vec![];
        let mut upcoming = vec![];

        for (show, venue) in shows {
            let slot = VenueSlot {
                venue_id: venue.id,
                venue_name: venue.name,
                venue_image_link: venue.image_link,
                start_time: display_start_time(show.start_time),
            };
            if show.start_time > now {
                upcoming.push(slot);
            } else {
                past.push(slot);
            }
        }

        Self {
            past_shows_count: past.len(),
            upcoming_shows_count: upcoming.len(),
            artist,
            past_shows: past,
            upcoming_shows: upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn artist_page_counts_match_partition_lengths() {
        let now = Utc::now().naive_utc();
        let venue = VenueEntity {
            id: 4,
            name: "The Fillmore".to_string(),
            ..Default::default()
        };
        let show_at = |at| ShowEntity {
            id: 1,
            artist_id: 2,
            venue_id: 4,
            start_time: at,
        };

        let shows = vec![
            (show_at(now - Duration::days(3)), venue.clone()),
            (show_at(now + Duration::days(3)), venue.clone()),
            (show_at(now + Duration::weeks(1)), venue),
        ];

        let artist = ArtistEntity {
            id: 2,
            name: "Daft Punk".to_string(),
            ..Default::default()
        };
        let page = ArtistPage::build(artist, shows, now);

        assert_eq!(page.past_shows_count, page.past_shows.len());
        assert_eq!(page.upcoming_shows_count, page.upcoming_shows.len());
        assert_eq!(page.past_shows_count + page.upcoming_shows_count, 3);
        assert_eq!(page.past_shows[0].venue_name, "The Fillmore");
    }
}
