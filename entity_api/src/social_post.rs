use super::error::{EntityApiErrorKind, Error};
use crate::social_post::Entity;
use chrono::Utc;
use entity::social_posts::*;
use entity::Id;
use sea_orm::{entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder};

pub async fn create(db: &DatabaseConnection, post_model: Model) -> Result<Model, Error> {
    let now = Utc::now();

    let post_active_model: ActiveModel = ActiveModel {
        social_account_id: Set(post_model.social_account_id),
        caption: Set(post_model.caption),
        permalink: Set(post_model.permalink),
        posted_at: Set(post_model.posted_at),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(post_active_model.insert(db).await?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let post_model = Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })?;
    post_model.delete(db).await?;
    Ok(())
}

/// Newest posts first, mirroring a profile feed.
pub async fn find_by_account(db: &DatabaseConnection, account_id: Id) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::SocialAccountId.eq(account_id))
        .order_by_desc(Column::PostedAt)
        .all(db)
        .await?)
}
