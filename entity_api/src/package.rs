use super::error::{EntityApiErrorKind, Error};
use crate::package::Entity;
use chrono::Utc;
use entity::packages::*;
use entity::Id;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, ActiveValue::Unchanged, DatabaseConnection, QueryOrder,
    TryIntoModel,
};

pub async fn create(db: &DatabaseConnection, package_model: Model) -> Result<Model, Error> {
    let now = Utc::now();

    let package_active_model: ActiveModel = ActiveModel {
        tenant_id: Set(package_model.tenant_id),
        name: Set(package_model.name),
        description: Set(package_model.description),
        session_count: Set(package_model.session_count),
        price_cents: Set(package_model.price_cents),
        valid_for_days: Set(package_model.valid_for_days),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(package_active_model.insert(db).await?)
}

pub async fn update(db: &DatabaseConnection, id: Id, model: Model) -> Result<Model, Error> {
    let package = find_by_id(db, id).await?;

    let active_model: ActiveModel = ActiveModel {
        id: Unchanged(package.id),
        tenant_id: Unchanged(package.tenant_id),
        name: Set(model.name),
        description: Set(model.description),
        session_count: Set(model.session_count),
        price_cents: Set(model.price_cents),
        valid_for_days: Set(model.valid_for_days),
        created_at: Unchanged(package.created_at),
        updated_at: Set(Utc::now().into()),
    };
    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let package_model = find_by_id(db, id).await?;
    package_model.delete(db).await?;
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
