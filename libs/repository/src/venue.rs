use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    entity::*, ActiveValue, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::active_models::{prelude::*, *};
use crate::{decode_genres, encode_genres};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct VenueRepository {
    db: DatabaseConnection,
}

impl VenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<venue::Model> for VenueEntity {
    fn from(value: venue::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            city: value.city,
            state: value.state,
            address: value.address,
            genres: decode_genres(&value.genres),
            phone: value.phone,
            image_link: value.image_link,
            facebook_link: value.facebook_link,
            website_link: value.website_link,
            seeking_talent: value.seeking_talent,
            seeking_description: value.seeking_description,
            created_at: value.created_at,
        }
    }
}

// Edits overwrite every mutable column at once, never a partial patch.
fn apply_draft(model: &mut venue::ActiveModel, draft: VenueDraft) {
    model.name = ActiveValue::Set(draft.name);
    model.city = ActiveValue::Set(draft.city);
    model.state = ActiveValue::Set(draft.state);
    model.address = ActiveValue::Set(draft.address);
    model.genres = ActiveValue::Set(encode_genres(&draft.genres));
    model.phone = ActiveValue::Set(draft.phone);
    model.image_link = ActiveValue::Set(draft.image_link);
    model.facebook_link = ActiveValue::Set(draft.facebook_link);
    model.website_link = ActiveValue::Set(draft.website_link);
    model.seeking_talent = ActiveValue::Set(draft.seeking_talent);
    model.seeking_description = ActiveValue::Set(draft.seeking_description);
}

impl VenueRepository {
    /// All venues in primary key order, the store iteration order the
    /// location grouping on `/venues` depends on.
    pub async fn find_all(&self) -> anyhow::Result<Vec<VenueEntity>> {
        let venues = Venue::find()
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await?;

        Ok(venues.into_iter().map(VenueEntity::from).collect())
    }

    pub async fn find_recent(
        &self,
        limit: u64,
    ) -> anyhow::Result<Vec<VenueEntity>> {
        let venues = Venue::find()
            .order_by_desc(venue::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(venues.into_iter().map(VenueEntity::from).collect())
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<VenueEntity>> {
        let venue = Venue::find_by_id(id).one(&self.db).await?;

        Ok(venue.map(VenueEntity::from))
    }

    /// Case-insensitive substring match on the name column. Lowercasing
    /// both sides keeps the behavior identical on SQLite and Postgres.
    pub async fn search_by_name(
        &self,
        term: &str,
    ) -> anyhow::Result<Vec<VenueEntity>> {
        let pattern = format!("%{}%", term.to_lowercase());
        let venues = Venue::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(venue::Column::Name)))
                    .like(pattern),
            )
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await?;

        Ok(venues.into_iter().map(VenueEntity::from).collect())
    }

    pub async fn create(&self, draft: VenueDraft) -> anyhow::Result<i32> {
        let txn = self.db.begin().await?;

        let mut model = venue::ActiveModel {
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        apply_draft(&mut model, draft);

        let inserted = Venue::insert(model).exec(&txn).await?;
        txn.commit().await?;

        Ok(inserted.last_insert_id)
    }

    pub async fn update(
        &self,
        id: i32,
        draft: VenueDraft,
    ) -> anyhow::Result<Option<VenueEntity>> {
        let txn = self.db.begin().await?;

        let Some(existing) = Venue::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        apply_draft(&mut model, draft);

        let updated = model.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(updated.into()))
    }

    /// Deletes the venue row; its shows go with it through the cascading
    /// foreign key. Returns false when no row had that id.
    pub async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let txn = self.db.begin().await?;

        let result = Venue::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
