use super::error::{EntityApiErrorKind, Error};
use crate::social_review::Entity;
use chrono::Utc;
use entity::social_reviews::*;
use entity::Id;
use sea_orm::{entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder};

pub async fn create(db: &DatabaseConnection, review_model: Model) -> Result<Model, Error> {
    let now = Utc::now();

    let review_active_model: ActiveModel = ActiveModel {
        tenant_id: Set(review_model.tenant_id),
        author: Set(review_model.author),
        rating: Set(review_model.rating),
        body: Set(review_model.body),
        reviewed_at: Set(review_model.reviewed_at),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(review_active_model.insert(db).await?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let review_model = Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })?;
    review_model.delete(db).await?;
    Ok(())
}

/// Newest reviews first.
pub async fn find_by_tenant(db: &DatabaseConnection, tenant_id: Id) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::TenantId.eq(tenant_id))
        .order_by_desc(Column::ReviewedAt)
        .all(db)
        .await?)
}
