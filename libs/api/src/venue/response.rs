use std::collections::HashMap;

use chrono::NaiveDateTime;
use entity::prelude::*;

use crate::show::response::display_start_time;

pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Single pass over the store iteration order: a venue joins the previous
/// group only when it shares that group's (city, state); a repeated pair
/// after an intervening different pair starts a new group.
pub fn group_by_location(
    venues: &[VenueEntity],
    upcoming: &HashMap<i32, i64>,
) -> Vec<CityGroup> {
    let mut groups: Vec<CityGroup> = vec![];

    for venue in venues {
        let summary = VenueSummary {
            id: venue.id,
            name: venue.name.clone(),
            num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
        };

        match groups.last_mut() {
            Some(last)
                if last.city == venue.city && last.state == venue.state =>
            {
                last.venues.push(summary)
            }
            _ => groups.push(CityGroup {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: vec![summary],
            }),
        }
    }

    groups
}

pub struct SearchResults {
    pub count: usize,
    pub data: Vec<VenueSummary>,
}

/// Search rows report zero upcoming shows regardless of bookings; kept
/// that way deliberately.
pub fn search_results(venues: &[VenueEntity]) -> SearchResults {
    SearchResults {
        count: venues.len(),
        data: venues
            .iter()
            .map(|v| VenueSummary {
                id: v.id,
                name: v.name.clone(),
                num_upcoming_shows: 0,
            })
            .collect(),
    }
}

/// One booked show as seen from the venue side.
pub struct ArtistSlot {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

pub struct VenuePage {
    pub venue: VenueEntity,
    pub past_shows: Vec<ArtistSlot>,
    pub upcoming_shows: Vec<ArtistSlot>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenuePage {
    pub fn build(
        venue: VenueEntity,
        shows: Vec<(ShowEntity, ArtistEntity)>,
        now: NaiveDateTime,
    ) -> Self {
        let mut past = vec![];
        let mut upcoming = vec![];

        for (show, artist) in shows {
            let slot = ArtistSlot {
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: display_start_time(show.start_time),
            };
            // Upcoming means strictly after now, matching the per-venue
            // upcoming counts on the grouped listing.
            if show.start_time > now {
                upcoming.push(slot);
            } else {
                past.push(slot);
            }
        }

        Self {
            past_shows_count: past.len(),
            upcoming_shows_count: upcoming.len(),
            venue,
            past_shows: past,
            upcoming_shows: upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn venue(id: i32, name: &str, city: &str, state: &str) -> VenueEntity {
        VenueEntity {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn grouping_merges_only_consecutive_rows() {
        let venues = vec![
            venue(1, "The Fillmore", "San Francisco", "CA"),
            venue(2, "The Chapel", "San Francisco", "CA"),
            venue(3, "Brooklyn Bowl", "New York", "NY"),
            venue(4, "Great American", "San Francisco", "CA"),
        ];

        let groups = group_by_location(&venues, &HashMap::new());

        // (SF, CA) appears twice: rows 1-2 merge, row 4 starts over
        // because row 3 broke the run.
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].venues.len(), 2);
        assert_eq!(groups[1].city, "New York");
        assert_eq!(groups[2].venues.len(), 1);
        assert_eq!(groups[2].venues[0].id, 4);
    }

    #[test]
    fn grouping_attaches_upcoming_counts() {
        let venues = vec![venue(1, "The Fillmore", "San Francisco", "CA")];
        let counts = HashMap::from([(1, 3)]);

        let groups = group_by_location(&venues, &counts);

        assert_eq!(groups[0].venues[0].num_upcoming_shows, 3);
    }

    #[test]
    fn search_results_always_report_zero_upcoming_shows() {
        let venues = vec![venue(1, "The Fillmore", "San Francisco", "CA")];

        let results = search_results(&venues);

        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].num_upcoming_shows, 0);
    }

    #[test]
    fn show_starting_exactly_now_is_not_upcoming() {
        let now = Utc::now().naive_utc();
        let artist = ArtistEntity {
            id: 9,
            name: "Daft Punk".to_string(),
            ..Default::default()
        };
        let shows = vec![(
            ShowEntity {
                id: 1,
                artist_id: 9,
                venue_id: 1,
                start_time: now,
            },
            artist,
        )];

        let page = VenuePage::build(
            venue(1, "The Fillmore", "San Francisco", "CA"),
            shows,
            now,
        );

        // matches the strictly-after convention of the listing counts
        assert_eq!(page.past_shows_count, 1);
        assert_eq!(page.upcoming_shows_count, 0);
    }

    #[test]
    fn venue_page_partitions_shows_around_now() {
        let now = Utc::now().naive_utc();
        let artist = ArtistEntity {
            id: 9,
            name: "Daft Punk".to_string(),
            ..Default::default()
        };
        let show_at = |at| ShowEntity {
            id: 1,
            artist_id: 9,
            venue_id: 1,
            start_time: at,
        };

        let shows = vec![
            (show_at(now - Duration::days(1)), artist.clone()),
            (show_at(now - Duration::weeks(4)), artist.clone()),
            (show_at(now + Duration::days(2)), artist),
        ];

        let page = VenuePage::build(
            venue(1, "The Fillmore", "San Francisco", "CA"),
            shows,
            now,
        );

        assert_eq!(page.past_shows_count, 2);
        assert_eq!(page.upcoming_shows_count, 1);
        assert_eq!(
            page.past_shows_count + page.upcoming_shows_count,
            page.past_shows.len() + page.upcoming_shows.len()
        );
        assert_eq!(page.upcoming_shows[0].artist_name, "Daft Punk");
    }
}
