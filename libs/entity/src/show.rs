use chrono::NaiveDateTime;

/// A show is a pure join row: one artist playing one venue at one time.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Show {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}
