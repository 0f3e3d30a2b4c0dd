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
pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<artist::Model> for ArtistEntity {
    fn from(value: artist::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            city: value.city,
            state: value.state,
            genres: decode_genres(&value.genres),
            phone: value.phone,
            image_link: value.image_link,
            facebook_link: value.facebook_link,
            website_link: value.website_link,
            seeking_venue: value.seeking_venue,
            seeking_description: value.seeking_description,
            created_at: value.created_at,
        }
    }
}

fn apply_draft(model: &mut artist::ActiveModel, draft: ArtistDraft) {
    model.name = ActiveValue::Set(draft.name);
    model.city = ActiveValue::Set(draft.city);
    model.state = ActiveValue::Set(draft.state);
    model.genres = ActiveValue::Set(encode_genres(&draft.genres));
    model.phone = ActiveValue::Set(draft.phone);
    model.image_link = ActiveValue::Set(draft.image_link);
    model.facebook_link = ActiveValue::Set(draft.facebook_link);
    model.website_link = ActiveValue::Set(draft.website_link);
    model.seeking_venue = ActiveValue::Set(draft.seeking_venue);
    model.seeking_description = ActiveValue::Set(draft.seeking_description);
}

impl ArtistRepository {
    pub async fn find_all(&self) -> anyhow::Result<Vec<ArtistEntity>> {
        let artists = Artist::find()
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?;

        Ok(artists.into_iter().map(ArtistEntity::from).collect())
    }

    pub async fn find_recent(
        &self,
        limit: u64,
    ) -> anyhow::Result<Vec<ArtistEntity>> {
        let artists = Artist::find()
            .order_by_desc(artist::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(artists.into_iter().map(ArtistEntity::from).collect())
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<ArtistEntity>> {
        let artist = Artist::find_by_id(id).one(&self.db).await?;

        Ok(artist.map(ArtistEntity::from))
    }

    pub async fn search_by_name(
        &self,
        term: &str,
    ) -> anyhow::Result<Vec<ArtistEntity>> {
        let pattern = format!("%{}%", term.to_lowercase());
        let artists = Artist::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(artist::Column::Name)))
                    .like(pattern),
            )
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?;

        Ok(artists.into_iter().map(ArtistEntity::from).collect())
    }

    pub async fn create(&self, draft: ArtistDraft) -> anyhow::Result<i32> {
        let txn = self.db.begin().await?;

        let mut model = artist::ActiveModel {
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        apply_draft(&mut model, draft);

        let inserted = Artist::insert(model).exec(&txn).await?;
        txn.commit().await?;

        Ok(inserted.last_insert_id)
    }

    pub async fn update(
        &self,
        id: i32,
        draft: ArtistDraft,
    ) -> anyhow::Result<Option<ArtistEntity>> {
        let txn = self.db.begin().await?;

        let Some(existing) = Artist::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        apply_draft(&mut model, draft);

        let updated = model.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(updated.into()))
    }
}
