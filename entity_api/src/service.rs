use super::error::{EntityApiErrorKind, Error};
use crate::service::Entity;
use chrono::Utc;
use entity::services::*;
use entity::Id;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, ActiveValue::Unchanged, DatabaseConnection, QueryOrder,
    TryIntoModel,
};

pub async fn create(db: &DatabaseConnection, service_model: Model) -> Result<Model, Error> {
    let now = Utc::now();

    let service_active_model: ActiveModel = ActiveModel {
        tenant_id: Set(service_model.tenant_id),
        name: Set(service_model.name),
        description: Set(service_model.description),
        duration_minutes: Set(service_model.duration_minutes),
        price_cents: Set(service_model.price_cents),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(service_active_model.insert(db).await?)
}

pub async fn update(db: &DatabaseConnection, id: Id, model: Model) -> Result<Model, Error> {
    let service = find_by_id(db, id).await?;

    let active_model: ActiveModel = ActiveModel {
        id: Unchanged(service.id),
        tenant_id: Unchanged(service.tenant_id),
        name: Set(model.name),
        description: Set(model.description),
        duration_minutes: Set(model.duration_minutes),
        price_cents: Set(model.price_cents),
        created_at: Unchanged(service.created_at),
        updated_at: Set(Utc::now().into()),
    };
    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let service_model = find_by_id(db, id).await?;
    service_model.delete(db).await?;
    Ok(())
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })
}

pub async fn find_by_tenant(db: &DatabaseConnection, tenant_id: Id) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::TenantId.eq(tenant_id))
        .order_by_asc(Column::Name)
        .all(db)
        .await?)
}
