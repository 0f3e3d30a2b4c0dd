use std::collections::HashMap;

use chrono::NaiveDateTime;
use sea_orm::{
    entity::*, ActiveValue, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct ShowRepository {
    db: DatabaseConnection,
}

impl ShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<show::Model> for ShowEntity {
    fn from(value: show::Model) -> Self {
        Self {
            id: value.id,
            artist_id: value.artist_id,
            venue_id: value.venue_id,
            start_time: value.start_time,
        }
    }
}

impl ShowRepository {
    /// Every show with both counterparts, ordered by (venue_id, start_time).
    pub async fn find_all(
        &self,
    ) -> anyhow::Result<Vec<(ShowEntity, ArtistEntity, VenueEntity)>> {
        let shows = Show::find()
            .order_by_asc(show::Column::VenueId)
            .order_by_asc(show::Column::StartTime)
            .all(&self.db)
            .await?;

        let artist_ids: Vec<_> = shows.iter().map(|s| s.artist_id).collect();
        let venue_ids: Vec<_> = shows.iter().map(|s| s.venue_id).collect();

        let artists: HashMap<_, _> = Artist::find()
            .filter(artist::Column::Id.is_in(artist_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();
        let venues: HashMap<_, _> = Venue::find()
            .filter(venue::Column::Id.is_in(venue_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();

        let mut results = vec![];
        for show in shows {
            let (Some(artist), Some(venue)) =
                (artists.get(&show.artist_id), venues.get(&show.venue_id))
            else {
                continue;
            };
            results.push((
                ShowEntity::from(show),
                ArtistEntity::from(artist.clone()),
                VenueEntity::from(venue.clone()),
            ));
        }

        Ok(results)
    }

    /// Shows booked at one venue, each with the performing artist.
    pub async fn find_for_venue(
        &self,
        venue_id: i32,
    ) -> anyhow::Result<Vec<(ShowEntity, ArtistEntity)>> {
        let shows = Show::find()
            .filter(show::Column::VenueId.eq(venue_id))
            .order_by_asc(show::Column::StartTime)
            .all(&self.db)
            .await?;

        let artist_ids: Vec<_> = shows.iter().map(|s| s.artist_id).collect();
        let artists: HashMap<_, _> = Artist::find()
            .filter(artist::Column::Id.is_in(artist_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        Ok(shows
            .into_iter()
            .filter_map(|show| {
                let artist = artists.get(&show.artist_id)?.clone();
                Some((ShowEntity::from(show), ArtistEntity::from(artist)))
            })
            .collect())
    }

    /// Shows played by one artist, each with the hosting venue.
    pub async fn find_for_artist(
        &self,
        artist_id: i32,
    ) -> anyhow::Result<Vec<(ShowEntity, VenueEntity)>> {
        let shows = Show::find()
            .filter(show::Column::ArtistId.eq(artist_id))
            .order_by_asc(show::Column::StartTime)
            .all(&self.db)
            .await?;

        let venue_ids: Vec<_> = shows.iter().map(|s| s.venue_id).collect();
        let venues: HashMap<_, _> = Venue::find()
            .filter(venue::Column::Id.is_in(venue_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();

        Ok(shows
            .into_iter()
            .filter_map(|show| {
                let venue = venues.get(&show.venue_id)?.clone();
                Some((ShowEntity::from(show), VenueEntity::from(venue)))
            })
            .collect())
    }

    /// Per-venue count of shows starting strictly after `now`.
    pub async fn upcoming_counts_by_venue(
        &self,
        now: NaiveDateTime,
    ) -> anyhow::Result<HashMap<i32, i64>> {
        let upcoming = Show::find()
            .filter(show::Column::StartTime.gt(now))
            .all(&self.db)
            .await?;

        let mut counts = HashMap::new();
        for show in upcoming {
            *counts.entry(show.venue_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Inserts a show. A dangling artist or venue id violates a foreign
    /// key; the transaction aborts and nothing is written.
    pub async fn create(&self, new: NewShow) -> anyhow::Result<i32> {
        let txn = self.db.begin().await?;

        let model = show::ActiveModel {
            id: ActiveValue::NotSet,
            artist_id: ActiveValue::Set(new.artist_id),
            venue_id: ActiveValue::Set(new.venue_id),
            start_time: ActiveValue::Set(new.start_time),
        };

        let inserted = Show::insert(model).exec(&txn).await?;
        txn.commit().await?;

        Ok(inserted.last_insert_id)
    }

    pub async fn count_all(&self) -> anyhow::Result<u64> {
        use sea_orm::PaginatorTrait;

        Ok(Show::find().count(&self.db).await?)
    }
}
